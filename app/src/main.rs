#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use clap::{Parser, Subcommand};
use command::{
    CatalogStrategy, ClearInput, ClearStrategy, CollectionStrategy, CommandStrategy, InfoStrategy,
    InitStrategy, RemoveInput, RemoveStrategy, ScanInput, ScanStrategy, StatsStrategy,
    VersionStrategy,
};
use nova_config::Config;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "nova")]
#[command(about = "Nova card collection companion", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recognize a scanned card and add it to the collection
    Scan {
        /// Decoded QR payload
        #[arg(required_unless_present = "marker")]
        payload: Option<String>,

        /// Card id resolved by the AR marker tracker
        #[arg(short, long, conflicts_with = "payload")]
        marker: Option<String>,
    },
    /// List collected cards
    Collection,
    /// Show collection statistics
    Stats,
    /// List every card in the catalog
    Catalog,
    /// Remove one card from the collection
    Remove {
        /// Card id, e.g. NOVA_003
        id: String,
    },
    /// Delete the entire collection
    Clear {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
    /// Initialize configuration
    Init,
    /// Show configuration information
    Info,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = Config::load().map_or_else(|_| "info".to_string(), |c| c.log_level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Scan { payload, marker } => {
            ScanStrategy
                .execute(ScanInput { payload, marker })
                .await?;
        }
        Commands::Collection => CollectionStrategy.execute(()).await?,
        Commands::Stats => StatsStrategy.execute(()).await?,
        Commands::Catalog => CatalogStrategy.execute(()).await?,
        Commands::Remove { id } => RemoveStrategy.execute(RemoveInput { id }).await?,
        Commands::Clear { yes } => ClearStrategy.execute(ClearInput { yes }).await?,
        Commands::Init => InitStrategy.execute(()).await?,
        Commands::Info => InfoStrategy.execute(()).await?,
        Commands::Version => VersionStrategy.execute(()).await?,
    }

    Ok(())
}
