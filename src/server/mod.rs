//! Flat-file HTTP store.
//!
//! `GET /api/tasks` returns the whole list; `POST`/`PUT /api/tasks` replace
//! it wholesale. There is no partial update, no merge and no auth: last
//! write wins.

pub mod error;
pub mod health;
pub mod router;
pub mod shutdown;

use std::future::IntoFuture;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::server::router::{build_router, AppState};
use crate::server::shutdown::ShutdownManager;
use crate::store::FlatFileStore;

pub use error::ServerError;

pub struct TaskServer {
    pub addr: SocketAddr,
    /// The bound listener, kept alive until run() takes it.
    listener: Option<TcpListener>,
    state: AppState,
    shutdown: Arc<ShutdownManager>,
}

impl TaskServer {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 0)), // Determined at bind time
            listener: None,
            state: AppState::new(FlatFileStore::new(config.data_file.clone())),
            shutdown: Arc::new(ShutdownManager::new()),
        }
    }

    /// Bind the listener. Port 0 picks a free port; the actual address is
    /// returned and stored in `addr`.
    pub async fn bind(&mut self, bind_addr: &str) -> io::Result<SocketAddr> {
        let addr: SocketAddr = bind_addr.parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid bind address '{}': {}", bind_addr, e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        let actual_addr = listener.local_addr()?;
        self.addr = actual_addr;
        self.listener = Some(listener);
        tracing::info!("Task store bound to {}", actual_addr);
        Ok(actual_addr)
    }

    pub fn handle(&self) -> ServerHandle {
        ServerHandle {
            shutdown: self.shutdown.clone(),
        }
    }

    /// Serve until shutdown is signaled.
    ///
    /// Consumes self to take ownership of the pre-bound listener; call
    /// bind() first.
    pub async fn run(self) -> io::Result<()> {
        let listener = self.listener.ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotConnected, "bind() must be called before run()")
        })?;

        tracing::info!("Starting task store on {}", self.addr);

        let app = build_router(self.state);
        let shutdown = self.shutdown.clone();
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                if let Err(e) = shutdown.wait_for_shutdown().await {
                    tracing::warn!(error = %e, "Signal handler failed, shutting down");
                }
            })
            .into_future()
            .await?;

        tracing::info!("Task store stopped");
        Ok(())
    }
}

#[derive(Clone)]
pub struct ServerHandle {
    shutdown: Arc<ShutdownManager>,
}

impl ServerHandle {
    pub fn shutdown(&self) {
        self.shutdown.signal_shutdown();
    }
}
