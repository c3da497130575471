use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use geobook_db_sqlite::{run_embedded_database_migrations, Connections};

use crate::{config, gateways};

#[derive(Debug, Parser)]
#[command(name = "geobook", version, about = "Address book with resilient geocoding")]
struct Args {
    /// Path to the configuration file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// URL to the database.
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,
}

pub async fn run() -> Result<()> {
    let args = Args::parse();
    let cfg = config::Config::try_load_from_file_or_default(args.config.as_deref())?;

    let db_url = args.db_url.unwrap_or(cfg.db.conn_sqlite);
    info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        db_url, cfg.db.conn_pool_size
    );
    let connections = Connections::init(&db_url, cfg.db.conn_pool_size.into())?;
    run_embedded_database_migrations(connections.exclusive()?)?;

    let retry = cfg.geocoding.retry;
    info!(
        "Geocoding requests are retried up to {} times (base delay {:?}, capped at {:?})",
        retry.max_attempts, retry.base_delay, retry.max_delay
    );
    let geo_gw = gateways::geocoding_gateway(&cfg.geocoding);

    geobook_webserver::web::run(connections, Box::new(geo_gw), retry).await;
    Ok(())
}
