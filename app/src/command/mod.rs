//! Static strategy pattern for CLI commands.
//!
//! Each subcommand is a separate strategy type with its own input, dispatched
//! statically from `main`.

use nova_config::Config;
use nova_core::{CollectedCard, color_for_element, color_for_rarity};
use nova_store::{CollectionStore, FileStorage};
use tracing::info;

mod catalog;
mod clear;
mod collection;
mod info;
mod init;
mod remove;
mod scan;
mod stats;
mod version;

pub use catalog::CatalogStrategy;
pub use clear::{ClearInput, ClearStrategy};
pub use collection::CollectionStrategy;
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use remove::{RemoveInput, RemoveStrategy};
pub use scan::{ScanInput, ScanStrategy};
pub use stats::StatsStrategy;
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// # Example
/// ```rust,ignore
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = MyInput;
///
///     async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
///         // Command logic here
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Open the file-backed collection store described by `config`.
async fn open_store(config: &Config) -> anyhow::Result<CollectionStore<FileStorage>> {
    let data_dir = config.storage.resolve_data_dir()?;
    info!("Collection data directory: {}", data_dir.display());

    let storage = FileStorage::open(data_dir).await?;
    Ok(CollectionStore::with_key(
        storage,
        config.storage.collection_key.clone(),
    ))
}

/// One line per collected card, as shown in the collection grid.
fn card_line(record: &CollectedCard) -> String {
    let card = &record.card;
    format!(
        "{} {} [{} {} / {} {}] ATK: {} | DEF: {} | HP: {} | Dipindai: {}x",
        card.id,
        card.name,
        card.rarity,
        color_for_rarity(card.rarity),
        card.element,
        color_for_element(card.element),
        card.attack,
        card.defense,
        card.health,
        record.scan_count,
    )
}
