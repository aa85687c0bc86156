use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use zoominfo_mock_api::config::Config;
use zoominfo_mock_api::handlers::AppState;
use zoominfo_mock_api::router::build_router;
use zoominfo_mock_api::store::RecordStore;

/// Main entry point for the application.
///
/// Initializes logging, loads configuration and the record catalog, then
/// serves the API until the process is stopped.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zoominfo_mock_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let store = match config.catalog_dir {
        Some(ref dir) => RecordStore::from_dir(dir)?,
        None => RecordStore::builtin()?,
    };
    tracing::info!(
        "Catalog loaded: {} companies, {} contacts",
        store.companies().len(),
        store.contacts().len()
    );

    let port = config.port;
    let app = build_router(AppState::new(store, config));

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("ZoomInfo Mock API listening on {}", addr);
    for route in [
        "POST   /authenticate",
        "POST   /search/company",
        "POST   /search/contact",
        "POST   /enrich/company",
        "POST   /enrich/contact",
        "POST   /search/company/bulk",
        "GET    /search/company/bulk/:jobId",
        "GET    /lookup/search/company",
        "GET    /lookup/search/contact",
        "GET    /lookup/enrich/company",
        "GET    /lookup/enrich/contact",
        "GET    /user/usage",
    ] {
        tracing::debug!("  {}", route);
    }

    axum::serve(listener, app).await?;

    Ok(())
}
