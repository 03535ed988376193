use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use orgdir::{ui, util, App, Config, Database, OrganizationStore, SqliteSlot};

#[derive(Parser, Debug)]
#[command(name = "orgdir")]
#[command(about = "Terminal directory of organizations", long_about = None)]
struct Cli {
    /// Directory for the database, logs and config (default: ~/.orgdir)
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Path to config.toml (default: <data-dir>/config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    util::init_data_dir(cli.data_dir);

    // Log to file (~/.orgdir/logs/orgdir.log); the TUI owns the terminal
    fs::create_dir_all(util::logs_dir())?;
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .init();

    let config_file = cli.config.unwrap_or_else(util::config_path);
    let config = Config::load(&config_file);

    let database = Database::open_default().context("Failed to open database")?;
    let store = OrganizationStore::open(SqliteSlot::from_database(&database))
        .context("Failed to load organization records")?;
    tracing::info!(records = store.len(), "Directory loaded");

    ui::install_panic_hook();

    let mut app = App::new(config, store);
    app.run().await
}
