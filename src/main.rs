mod cli;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use matrixto_clients::Catalog;
use matrixto_clients::model::config::AppConfig;

fn main() -> Result<()> {
    let args = Cli::parse();

    let config = match args.config.as_deref() {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    // Initialize logging to file (never stdout)
    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "matrixto-clients.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    tracing::info!("matrixto-clients starting");

    let catalog = Catalog::builtin();

    match args.command {
        Command::List => {
            print!("{}", cli::render_list(catalog));
        }
        Command::Open(open) => {
            let link = open.safe_link();
            let filter = open.apply(config.client_filter());
            let clients = catalog.visible(&link, &filter);
            tracing::info!(
                "{} link {}: {} of {} clients offered",
                link.kind,
                link.identifier,
                clients.len(),
                catalog.len()
            );
            print!("{}", cli::render_open(&clients, &link, &filter));
        }
    }

    Ok(())
}
