#![allow(non_snake_case)]

use tracing_subscriber::EnvFilter;

use plannerApp::cli;
use plannerApp::clients::store_client::HttpUserStore;
use plannerApp::config::AppConfig;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("plannerApp=info")),
        )
        .init();

    let config = AppConfig::load();
    let store = HttpUserStore::new(config.store_url());
    cli::cli(&store).await;
}
