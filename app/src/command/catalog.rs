use nova_core::{Catalog, color_for_element, color_for_rarity};

/// Strategy for printing the built-in card catalog with QR payloads.
#[derive(Debug, Clone, Copy)]
pub struct CatalogStrategy;

impl super::CommandStrategy for CatalogStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let catalog = Catalog::nova();

        println!("=== Nova Card Catalog ({} cards) ===\n", catalog.len());
        for card in catalog.iter() {
            println!("{} {}", card.id, card.name);
            println!(
                "  {} {} / {} {}",
                card.rarity,
                color_for_rarity(card.rarity),
                card.element,
                color_for_element(card.element)
            );
            println!(
                "  ATK: {} | DEF: {} | HP: {}",
                card.attack, card.defense, card.health
            );
            if let Some(token) = &card.recognition_token {
                println!("  QR: {token}");
            }
            println!("  {}", card.description);
            println!();
        }

        Ok(())
    }
}
