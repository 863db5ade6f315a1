//! HTTP server initialization.
//!
//! Wires the database and the optional coach provider into the axum router
//! and serves it until ctrl-c.

use std::sync::{Arc, Mutex};

use anyhow::Result;

use crate::api::{self, AppState};
use crate::coach;
use crate::config::TendConfig;
use crate::db;

/// Shared setup: open the database and build the coach provider.
fn setup_state(config: &TendConfig) -> Result<AppState> {
    let db_path = config.resolved_db_path();
    let conn = db::open_database(&db_path)?;
    tracing::info!(db = %db_path.display(), "database ready");

    let coach = coach::create_provider(&config.coach)?.map(Arc::from);

    Ok(AppState {
        db: Arc::new(Mutex::new(conn)),
        coach,
    })
}

/// Start the REST server and block until shutdown.
pub async fn serve(config: TendConfig) -> Result<()> {
    let bind_addr = format!("{}:{}", config.server.host, config.server.port);

    let state = setup_state(&config)?;
    let router = api::build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "listening at http://{bind_addr}");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("failed to listen for ctrl-c");
            tracing::info!("shutting down");
        })
        .await?;

    Ok(())
}
