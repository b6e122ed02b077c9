use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod handlers {
    pub mod contact_dtos;
    pub mod contact_handlers;
}
mod routes;

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = Config::from_env()?;

    // Held for the lifetime of the process so buffered events are flushed on exit.
    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                environment: Some(config.environment.clone().into()),
                ..Default::default()
            },
        ))
    });

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    if !config.frontend_dir.join("index.html").exists() {
        tracing::warn!(
            "No index.html in {}; build the frontend with `trunk build` to serve the site",
            config.frontend_dir.display()
        );
    }

    let app = routes::app(&config);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(
        "Portfolio backend ({}) listening on {}",
        config.environment,
        listener.local_addr()?
    );
    if config.is_development() && config.allowed_origin.is_none() {
        tracing::info!("CORS allows any origin");
    }

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
