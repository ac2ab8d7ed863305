//! BackgroundPool: the fixed-size I/O pool behind `RoomSync::spawn_*`.
//!
//! A UI host usually owns its own main thread and does not run inside a tokio
//! runtime.  `BackgroundPool` builds a dedicated multi-threaded runtime whose
//! worker threads carry every background unit of work (one request plus the
//! resulting state publication).  `RoomSync` only ever sees the pool's
//! [`Handle`].
//!
//! Dropping the pool (or calling [`BackgroundPool::shutdown`]) stops the
//! worker threads; units still in flight are abandoned without publishing.

use std::io;

use tokio::runtime::{Builder, Handle, Runtime};
use tracing::info;

/// Name given to every worker thread, visible in logs and debuggers.
pub const WORKER_THREAD_NAME: &str = "automacorp-io";

/// Owns the background runtime.
#[derive(Debug)]
pub struct BackgroundPool {
    runtime: Runtime,
}

impl BackgroundPool {
    /// Starts a pool with `worker_threads` workers (at least one).
    ///
    /// # Errors
    ///
    /// Returns the I/O error from the OS if the threads cannot be spawned.
    pub fn new(worker_threads: usize) -> io::Result<Self> {
        let workers = worker_threads.max(1);
        let runtime = Builder::new_multi_thread()
            .worker_threads(workers)
            .thread_name(WORKER_THREAD_NAME)
            .enable_all()
            .build()?;
        info!(workers, "background pool started");
        Ok(Self { runtime })
    }

    /// A handle for spawning onto the pool; cheap to clone.
    pub fn handle(&self) -> Handle {
        self.runtime.handle().clone()
    }

    /// Stops the pool without waiting for in-flight units.
    pub fn shutdown(self) {
        self.runtime.shutdown_background();
        info!("background pool stopped");
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawned_work_runs_on_pool_threads() {
        // Arrange
        let pool = BackgroundPool::new(2).unwrap();

        // Act
        let handle = pool
            .handle()
            .spawn(async { std::thread::current().name().map(str::to_string) });
        let name = tokio_test::block_on(handle).unwrap();

        // Assert
        assert_eq!(name.as_deref(), Some(WORKER_THREAD_NAME));
        pool.shutdown();
    }

    #[test]
    fn test_zero_workers_is_clamped_to_one() {
        let pool = BackgroundPool::new(0).unwrap();
        let answer = tokio_test::block_on(pool.handle().spawn(async { 6 * 7 })).unwrap();
        assert_eq!(answer, 42);
    }
}
