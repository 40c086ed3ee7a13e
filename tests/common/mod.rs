//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`] which owns a temporary media directory and can
//! start the real Axum router on a random port for HTTP-level testing.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use media_embed::config::Config;
use media_embed::server::{create_router, AppContext};
use tempfile::TempDir;

/// Test harness wrapping a temporary media directory.
pub struct TestHarness {
    media_dir: TempDir,
}

#[allow(dead_code)]
impl TestHarness {
    /// Create a new harness with an empty media directory.
    pub fn new() -> Self {
        Self {
            media_dir: TempDir::new().expect("failed to create media dir"),
        }
    }

    /// Path of the media directory.
    pub fn media_path(&self) -> &Path {
        self.media_dir.path()
    }

    /// Write a fixture file into the media directory.
    pub fn write_file(&self, name: &str, bytes: &[u8]) {
        std::fs::write(self.media_dir.path().join(name), bytes)
            .expect("failed to write fixture file");
    }

    /// Start an Axum server on a random port and return the harness together
    /// with the bound socket address.
    pub async fn with_server() -> (Self, SocketAddr) {
        let harness = Self::new();

        let ctx = AppContext {
            config: Arc::new(Config::default()),
            media_dir: harness.media_dir.path().to_path_buf(),
        };
        let app = create_router(ctx);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind random port");
        let addr = listener.local_addr().expect("failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        (harness, addr)
    }
}
