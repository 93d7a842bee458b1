//! User Service
//!
//! Owns the data source and the event sender. Every operation runs in the
//! background runtime and reports its outcome as `AppEvent`s.

use std::path::PathBuf;
use std::sync::Arc;

use flume::{Receiver, Sender};

use crate::domain::config::AppConfig;
use crate::error::Result;
use crate::eventing::AppEvent;
use crate::export::ExportArtifact;
use crate::services::data_source::{HttpUserSource, UserSource};
use crate::services::runtime::spawn_named_in_tokio;

/// Background operations for the member table
pub struct UserService<S: UserSource> {
    source: Arc<S>,
    event_tx: Sender<AppEvent>,
}

impl<S: UserSource> Clone for UserService<S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            event_tx: self.event_tx.clone(),
        }
    }
}

impl UserService<HttpUserSource> {
    /// Build the HTTP-backed service and its event channel
    pub fn from_config(config: &AppConfig) -> Result<(Self, Receiver<AppEvent>)> {
        let source = HttpUserSource::new(&config.source)?;
        let (tx, rx) = flume::unbounded();
        Ok((Self::new(source, tx), rx))
    }
}

impl<S: UserSource> UserService<S> {
    pub fn new(source: S, event_tx: Sender<AppEvent>) -> Self {
        Self {
            source: Arc::new(source),
            event_tx,
        }
    }

    /// Fetch the member list in the background
    ///
    /// Sends `UsersLoaded` or `UsersLoadFailed`, each followed by a log event.
    pub fn load_users(&self) {
        let source = self.source.clone();
        let tx = self.event_tx.clone();

        spawn_named_in_tokio("fetch-users", async move {
            match source.fetch_users().await {
                Ok(users) => {
                    let count = users.len();
                    tx.send(AppEvent::UsersLoaded { users }).ok();
                    tx.send(AppEvent::info(format!("Loaded {count} members"))).ok();
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to load members");
                    let message = e.to_string();
                    tx.send(AppEvent::UsersLoadFailed {
                        message: message.clone(),
                    })
                    .ok();
                    tx.send(AppEvent::error(format!("Failed to load members: {message}")))
                        .ok();
                }
            }
        });
    }

    /// Write an export in the background
    ///
    /// Sends `ExportFinished` or `ExportFailed`.
    pub fn export(&self, artifact: ExportArtifact, dir: PathBuf) {
        let tx = self.event_tx.clone();

        spawn_named_in_tokio("write-export", async move {
            let written =
                tokio::task::spawn_blocking(move || artifact.write_to(&dir)).await;

            match written {
                Ok(Ok(path)) => {
                    tx.send(AppEvent::ExportFinished { path }).ok();
                }
                Ok(Err(e)) => {
                    tracing::error!(error = %e, "Export failed");
                    tx.send(AppEvent::ExportFailed {
                        message: e.to_string(),
                    })
                    .ok();
                }
                Err(e) => {
                    tracing::error!(error = %e, "Export task panicked");
                    tx.send(AppEvent::ExportFailed {
                        message: e.to_string(),
                    })
                    .ok();
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::domain::user::UserRecord;
    use crate::services::data_source::StaticUserSource;

    fn recv(rx: &Receiver<AppEvent>) -> AppEvent {
        rx.recv_timeout(Duration::from_secs(2)).expect("event")
    }

    #[test]
    fn test_load_users_sends_loaded_then_log() {
        let users = vec![UserRecord::new("1", "Aaron Miles", "aaron@mailinator.com", "member")];
        let (tx, rx) = flume::unbounded();
        let service = UserService::new(StaticUserSource::new(users.clone()), tx);

        service.load_users();

        match recv(&rx) {
            AppEvent::UsersLoaded { users: loaded } => assert_eq!(loaded, users),
            other => panic!("unexpected event: {other:?}"),
        }
        assert!(matches!(recv(&rx), AppEvent::Log { .. }));
    }

    #[test]
    fn test_export_reports_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (tx, rx) = flume::unbounded();
        let service = UserService::new(StaticUserSource::default(), tx);
        let artifact = ExportArtifact::from_users("UserTable", &[]).expect("encode");

        service.export(artifact, dir.path().to_path_buf());

        match recv(&rx) {
            AppEvent::ExportFinished { path } => {
                assert_eq!(path, dir.path().join("UserTable.csv"));
                assert!(path.exists());
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
