//! HTTP server lifecycle: bind, serve, graceful shutdown.

use std::fmt;
use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use super::handler::router;
use super::state::AppState;

#[derive(Debug)]
pub enum ServerError {
    Bind { addr: String, source: io::Error },
    Io(io::Error),
    Join(tokio::task::JoinError),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::Bind { addr, source } => write!(f, "failed to bind {}: {}", addr, source),
            ServerError::Io(err) => write!(f, "server error: {}", err),
            ServerError::Join(err) => write!(f, "server task failed: {}", err),
        }
    }
}

impl std::error::Error for ServerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServerError::Bind { source, .. } => Some(source),
            ServerError::Io(err) => Some(err),
            ServerError::Join(err) => Some(err),
        }
    }
}

/// Handle to a server started with [`start_server`].
pub struct RunningServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<io::Result<()>>,
}

impl RunningServer {
    /// The address actually bound (port 0 resolves here).
    pub fn bound_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Stop accepting, let in-flight requests finish, wait for the task.
    pub async fn shutdown(mut self) -> Result<(), ServerError> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        finish(self.task.await)
    }

    /// Serve until `stop` resolves or the server exits on its own.
    pub async fn run_until<F>(mut self, stop: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()>,
    {
        tokio::select! {
            result = &mut self.task => finish(result),
            _ = stop => {
                tracing::info!(addr = %self.addr, "shutting down");
                self.shutdown().await
            }
        }
    }
}

fn finish(result: Result<io::Result<()>, tokio::task::JoinError>) -> Result<(), ServerError> {
    match result {
        Ok(Ok(())) => Ok(()),
        Ok(Err(err)) => Err(ServerError::Io(err)),
        Err(err) => Err(ServerError::Join(err)),
    }
}

pub async fn start_server(state: Arc<AppState>) -> Result<RunningServer, ServerError> {
    let bind = state.settings.bind_address();
    let listener = TcpListener::bind(bind.as_str())
        .await
        .map_err(|source| ServerError::Bind {
            addr: bind.clone(),
            source,
        })?;
    let addr = listener.local_addr().map_err(ServerError::Io)?;

    let files = state.catalog.len();
    let app = router(state);
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let task = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            })
            .await
    });

    tracing::info!(addr = %addr, files, "zview listening");

    Ok(RunningServer {
        addr,
        shutdown: Some(shutdown_tx),
        task,
    })
}
