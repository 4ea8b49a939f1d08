use nova_config::Config;
use nova_core::{Catalog, Element, Rarity};

/// Strategy for showing aggregate collection statistics.
#[derive(Debug, Clone, Copy)]
pub struct StatsStrategy;

impl super::CommandStrategy for StatsStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let store = super::open_store(&config).await?;
        let stats = store.compute_stats().await?;
        let catalog = Catalog::nova();

        println!("=== Nova Collection Stats ===\n");
        println!("Kartu Terkumpul: {} / {}", stats.total_cards, catalog.len());
        println!("Total Scan: {}", stats.total_scans);
        println!("Completion: {:.0}%", stats.completion(catalog.len()) * 100.0);
        println!();

        println!("By Rarity:");
        for rarity in Rarity::ALL {
            println!("  {:<10} {}", rarity.as_str(), stats.rarity(rarity));
        }
        println!();

        println!("By Element:");
        for element in Element::ALL {
            println!("  {:<10} {}", element.as_str(), stats.element(element));
        }

        Ok(())
    }
}
