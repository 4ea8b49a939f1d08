use nova_config::Config;
use tracing::warn;

/// Input parameters for the Clear command strategy.
#[derive(Debug, Clone, Copy)]
pub struct ClearInput {
    /// Confirmation flag; nothing is deleted without it
    pub yes: bool,
}

/// Strategy for deleting the entire collection.
#[derive(Debug, Clone, Copy)]
pub struct ClearStrategy;

impl super::CommandStrategy for ClearStrategy {
    type Input = ClearInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        if !input.yes {
            println!("This deletes every collected card. Re-run with --yes to confirm.");
            return Ok(());
        }

        let config = Config::load()?;
        let store = super::open_store(&config).await?;
        warn!("Clearing collection {}", store.key());
        store.clear().await?;
        println!("Collection cleared");

        Ok(())
    }
}
