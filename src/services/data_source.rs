//! Data Source
//!
//! Fetches the member list from the remote endpoint. One GET, JSON array of
//! members, no auth and no retries: a failure is returned to the caller,
//! which logs it and shows the error state.

use std::future::Future;
use std::time::Duration;

use snafu::ResultExt;

use crate::domain::config::SourceConfig;
use crate::domain::user::UserRecord;
use crate::error::{FetchSnafu, JsonSnafu, Result, StatusSnafu};

/// Anything that can produce the full member list
pub trait UserSource: Send + Sync + 'static {
    fn fetch_users(&self) -> impl Future<Output = Result<Vec<UserRecord>>> + Send;
}

/// HTTP source for the member list
#[derive(Clone, Debug)]
pub struct HttpUserSource {
    client: reqwest::Client,
    url: String,
}

impl HttpUserSource {
    /// Create a source from configuration
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().context(FetchSnafu {
            url: config.url.clone(),
        })?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl UserSource for HttpUserSource {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>> {
        tracing::debug!(url = %self.url, "Fetching member list");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .context(FetchSnafu { url: self.url.clone() })?;

        let status = response.status();
        if !status.is_success() {
            return StatusSnafu {
                url: self.url.clone(),
                status: status.as_u16(),
            }
            .fail();
        }

        let body = response
            .bytes()
            .await
            .context(FetchSnafu { url: self.url.clone() })?;
        let users: Vec<UserRecord> = serde_json::from_slice(&body).context(JsonSnafu)?;

        tracing::info!(url = %self.url, count = users.len(), "Fetched member list");
        Ok(users)
    }
}

/// Fixed list, for tests and offline runs
#[derive(Clone, Debug, Default)]
pub struct StaticUserSource {
    users: Vec<UserRecord>,
}

impl StaticUserSource {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self { users }
    }
}

impl UserSource for StaticUserSource {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>> {
        Ok(self.users.clone())
    }
}
