use chrono::Utc;
use std::net::SocketAddr;

use estate_demo::catalog::{Catalog, CatalogParams};
use estate_demo::config::AppConfig;
use estate_demo::session::{FileStorage, SessionContext};
use estate_demo::{router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let config = AppConfig::load()?;
    log::info!(
        "Loaded config: host={} port={} storage={} owners={} max_listings_per_owner={}",
        config.host,
        config.port,
        config.storage_path.display(),
        config.owners,
        config.max_listings_per_owner
    );

    // Unseeded on purpose: the demo catalog is reshuffled on every start.
    let params = CatalogParams {
        owners: config.owners,
        max_listings_per_owner: config.max_listings_per_owner,
        anchor: Utc::now().date_naive(),
    };
    let catalog = Catalog::generate(&mut rand::thread_rng(), &params);
    log::info!(
        "Generated catalog: {} owners, {} listings, {} P2P orders, {} news items",
        catalog.owners.len(),
        catalog.listings.len(),
        catalog.orders.len(),
        catalog.news.len()
    );

    let storage = FileStorage::open(&config.storage_path)?;
    let session = SessionContext::load(Box::new(storage));
    log::info!("Restored session role: {:?}", session.role());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    log::info!("Starting server on {}", addr);

    let app = router(AppState::new(catalog, session, &config.jwt_secret));
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app.into_make_service()).await?;

    Ok(())
}
