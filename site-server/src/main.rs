use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod routes;

use config::SiteSettings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = SiteSettings::load()?;
    let addr = settings.socket_addr()?;

    if !settings.dist_dir.join("index.html").exists() {
        warn!(
            "No index.html in {}; build the frontend with `trunk build --release` first",
            settings.dist_dir.display()
        );
    }

    let app = routes::build_router(&settings);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Serving {} at http://{}{}/", settings.dist_dir.display(), addr, settings.base_path);

    axum::serve(listener, app).await?;

    Ok(())
}
