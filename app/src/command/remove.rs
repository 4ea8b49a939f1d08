use nova_config::Config;

/// Input parameters for the Remove command strategy.
#[derive(Debug, Clone)]
pub struct RemoveInput {
    pub id: String,
}

/// Strategy for deleting one card from the collection.
///
/// Removing a card that was never collected is not an error.
#[derive(Debug, Clone, Copy)]
pub struct RemoveStrategy;

impl super::CommandStrategy for RemoveStrategy {
    type Input = RemoveInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let store = super::open_store(&config).await?;

        if store.contains(&input.id).await? {
            store.remove(&input.id).await?;
            println!("Removed {} from the collection", input.id);
        } else {
            println!("{} is not in the collection", input.id);
        }

        Ok(())
    }
}
