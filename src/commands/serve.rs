//! Serve command - Starts the HTTP server and runs it until a termination signal.

use std::sync::Arc;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::{Config, SHUTDOWN_GRACE_PERIOD};
use crate::errors::AppResult;
use crate::infra::Registry;
use crate::lifecycle::{shutdown_signal, Lifecycle};

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    // The registry lives for the whole command and is handed to handlers
    // through the application state.
    let registry = Arc::new(Registry::new());
    let app = create_router(AppState::from_registry(registry.clone()));

    let lifecycle = Lifecycle::new(SHUTDOWN_GRACE_PERIOD);
    let listener = lifecycle.bind(&args.addr(&config)).await?;

    let result = lifecycle.run(listener, app, shutdown_signal()).await;

    registry.shutdown();

    result
}
