use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use axum::http::HeaderValue;
use clap::Parser;
use tracing::info;

use item_catalog::{http, init_tracing, Catalog, CatalogConfig, JsonFileStore};

/// Serve the item catalog over HTTP.
#[derive(Debug, Parser)]
#[command(name = "item-catalog", version, about)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to bind, e.g. 127.0.0.1:3001.
    #[arg(short, long)]
    bind: Option<String>,

    /// Path of the JSON item document.
    #[arg(short, long)]
    data: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = CatalogConfig::load(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.bind_addr = bind;
    }
    if let Some(data) = cli.data {
        config.data_path = data;
    }

    init_tracing(&config.log_filter);
    info!(
        bind_addr = %config.bind_addr,
        data_path = %config.data_path.display(),
        cors_origin = %config.cors_origin,
        "starting item catalog"
    );

    let allowed_origin = HeaderValue::from_str(&config.cors_origin)
        .with_context(|| format!("invalid CORS origin {:?}", config.cors_origin))?;

    let catalog = Arc::new(Catalog::new(JsonFileStore::new(&config.data_path)));
    http::serve(catalog, &config.bind_addr, allowed_origin)
        .await
        .with_context(|| format!("serving on {}", config.bind_addr))
}
