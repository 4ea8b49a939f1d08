use nova_config::Config;
use nova_core::Catalog;
use tracing::info;

/// Strategy for displaying the effective configuration.
///
/// Prints the config file location, storage settings, and whether the stored
/// collection can be read.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config_path = Config::config_path()?;
        let config = Config::load()?;

        println!("=== nova Configuration ===\n");

        println!("Config File:");
        if config_path.exists() {
            println!("  Path: {}", config_path.display());
        } else {
            println!("  Path: {} (not created, using defaults)", config_path.display());
        }
        println!("  Log Level: {}", config.log_level);
        println!();

        println!("Storage:");
        println!(
            "  Data Dir: {}",
            config.storage.resolve_data_dir()?.display()
        );
        println!("  Collection Key: {}", config.storage.collection_key);

        info!("Checking stored collection");
        let store = super::open_store(&config).await?;
        match store.load_all().await {
            Ok(records) => println!("  Status: OK ({} cards)", records.len()),
            Err(e) if e.is_corrupt() => {
                println!("  Status: Corrupt");
                println!("  Error: {e}");
                println!("  Run 'nova clear --yes' to start a new collection");
            }
            Err(e) => {
                println!("  Status: Unavailable");
                println!("  Error: {e}");
            }
        }
        println!();

        println!("Catalog:");
        println!("  Cards: {}", Catalog::nova().len());

        Ok(())
    }
}
