use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use sharebin::commands::serve::{self, AppState};
use sharebin::config::{Config, StorageKind};
use sharebin::db::Database;
use sharebin::store::{AnyBackend, MemoryBackend, PasteStore};

#[derive(Parser)]
#[command(version, about = "Share text snippets via short codes")]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server.
    Serve,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // try to load .env, ignoring any errors
    _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    let backend = match config.storage.kind {
        StorageKind::Database => {
            let url = &config
                .storage
                .database
                .as_ref()
                .context("storage.database must be set when storage.kind is 'database'")?
                .url;
            let database = Database::connect(url)
                .await
                .context("failed to connect to database")?;
            database.migrate().await.context("failed to apply schema")?;
            AnyBackend::from(database)
        }
        StorageKind::Memory => AnyBackend::from(MemoryBackend::new()),
    };

    let store = PasteStore::new(backend);

    match cli.command {
        Command::Serve => serve::run(AppState { config, store }).await,
    }
}
