//! Tokio Runtime Bridge
//!
//! The UI runs on its own executor, while reqwest needs tokio. Background
//! work (fetching members, writing exports) is spawned here and reports back
//! over the event channel.
//!
//! ```text
//! UI action
//!     │
//!     ▼
//! spawn_named_in_tokio("fetch-users", async { ... })
//!     │
//!     ▼
//! AppEvent ──flume──► UI event pump
//! ```

use std::future::Future;
use std::sync::OnceLock;

use tokio::runtime::Runtime;

static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

fn get_runtime() -> &'static Runtime {
    TOKIO_RUNTIME.get_or_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("dashboard-io")
            .enable_all()
            .build()
            .expect("Failed to create tokio runtime")
    })
}

/// Spawn a detached task with a name (for debugging)
pub fn spawn_named_in_tokio<F>(name: &'static str, future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    tracing::debug!("Spawning tokio task: {}", name);
    get_runtime().spawn(async move {
        future.await;
        tracing::debug!("Tokio task completed: {}", name);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_named_in_tokio() {
        let (tx, rx) = flume::bounded(1);

        spawn_named_in_tokio("test", async move {
            tx.send(42).ok();
        });

        let value = rx
            .recv_timeout(std::time::Duration::from_secs(2))
            .expect("task should run");
        assert_eq!(value, 42);
    }
}
