//! HTTP listener lifecycle: start, wait for a signal, drain, stop.

use std::future::Future;
use std::io;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::task::JoinError;

use super::{ServerState, Shutdown};
use crate::errors::{AppError, AppResult};

/// Drives one HTTP listener through its lifecycle.
///
/// Tests and embedders can observe transitions with
/// [`Lifecycle::subscribe_state`] and stop the server without an OS signal via
/// [`Lifecycle::shutdown_handle`].
pub struct Lifecycle {
    grace_period: Duration,
    shutdown: Shutdown,
    state: watch::Sender<ServerState>,
}

impl Lifecycle {
    /// Create a lifecycle that allows `grace_period` for draining on shutdown.
    pub fn new(grace_period: Duration) -> Self {
        let (state, _) = watch::channel(ServerState::Stopped);
        Self {
            grace_period,
            shutdown: Shutdown::new(),
            state,
        }
    }

    /// Current state
    pub fn state(&self) -> ServerState {
        *self.state.borrow()
    }

    /// Receive every state transition
    pub fn subscribe_state(&self) -> watch::Receiver<ServerState> {
        self.state.subscribe()
    }

    /// Handle that requests shutdown exactly like a termination signal would
    pub fn shutdown_handle(&self) -> Shutdown {
        self.shutdown.clone()
    }

    /// Bind the listener address. A failure leaves the lifecycle stopped.
    pub async fn bind(&self, addr: &str) -> AppResult<TcpListener> {
        self.transition(ServerState::Starting);

        TcpListener::bind(addr).await.map_err(|source| {
            self.transition(ServerState::Stopped);
            AppError::Bind {
                addr: addr.to_string(),
                source,
            }
        })
    }

    /// Serve `app` on `listener` until `signal` completes or shutdown is
    /// requested through a handle, then drain within the grace period.
    ///
    /// Returns once the server has stopped. Connections arriving after the
    /// shutdown request are not accepted.
    pub async fn run<F>(&self, listener: TcpListener, app: Router, signal: F) -> AppResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.transition(ServerState::Starting);

        let addr = listener.local_addr().map_err(|e| {
            self.transition(ServerState::Stopped);
            AppError::internal(format!("Failed to read listener address: {}", e))
        })?;

        let mut drain = self.shutdown.subscribe();
        let mut server = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = drain.wait_for(|fired| *fired).await;
                })
                .await
        });

        self.transition(ServerState::Running);
        tracing::info!(address = %addr, "Server running on http://{}", addr);

        let shutdown = self.shutdown.clone();
        let waiter = tokio::spawn(async move {
            signal.await;
            if shutdown.trigger() {
                tracing::info!("Shutting down server");
            }
        });

        tokio::select! {
            joined = &mut server => {
                waiter.abort();
                self.transition(ServerState::Stopped);
                if self.shutdown.is_triggered() {
                    return server_outcome(joined);
                }
                return Err(server_outcome(joined).err().unwrap_or_else(|| {
                    AppError::internal("HTTP server exited before shutdown was requested")
                }));
            }
            _ = self.shutdown.triggered() => {}
        }

        self.transition(ServerState::Stopping);

        let result = match tokio::time::timeout(self.grace_period, &mut server).await {
            Ok(joined) => server_outcome(joined),
            Err(_) => {
                server.abort();
                tracing::error!(
                    grace_period = ?self.grace_period,
                    "Timeout shutting down HTTP server"
                );
                Err(AppError::ShutdownTimeout(self.grace_period))
            }
        };

        waiter.abort();
        self.transition(ServerState::Stopped);
        tracing::info!("Server shutdown complete");

        result
    }

    fn transition(&self, next: ServerState) {
        let previous = self.state.send_replace(next);
        if previous != next {
            tracing::debug!(from = %previous, to = %next, "Server state changed");
        }
    }
}

fn server_outcome(joined: Result<io::Result<()>, JoinError>) -> AppResult<()> {
    match joined {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(AppError::internal(format!("HTTP server error: {}", e))),
        Err(e) => Err(AppError::internal(format!("HTTP server task failed: {}", e))),
    }
}
