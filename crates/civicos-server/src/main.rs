use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use civicos_server::brevo::BrevoMailer;
use civicos_server::mail::Mailer;
use civicos_server::{db, router, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("failed to load configuration")?;

    let conn = db::connect(&config.database_url, config.db_max_connections)
        .await
        .context("failed to connect to database")?;
    if config.run_migrations {
        db::migrate(&conn).await.context("failed to run migrations")?;
    }

    let mailer: Option<Arc<dyn Mailer>> = match &config.brevo {
        Some(brevo) => Some(Arc::new(
            BrevoMailer::new(brevo).context("failed to build Brevo client")?,
        )),
        None => {
            tracing::warn!("BREVO_API_KEY or BREVO_SENDER_EMAIL unset; issue emails disabled");
            None
        }
    };

    let bind_addr = config.bind_addr;
    let state = AppState::new(conn.clone(), config, mailer);

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(%bind_addr, "civicos server listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    conn.close().await.context("failed to close database pool")?;
    tracing::info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
