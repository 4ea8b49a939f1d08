use nova_config::Config;
use nova_core::{Catalog, ScanEvent};
use nova_store::{ScanOutcome, Scanner};

/// Input parameters for the Scan command strategy.
#[derive(Debug, Clone)]
pub struct ScanInput {
    /// Decoded QR payload
    pub payload: Option<String>,
    /// Card id already resolved by the AR marker tracker
    pub marker: Option<String>,
}

impl ScanInput {
    fn into_event(self) -> anyhow::Result<ScanEvent> {
        match (self.payload, self.marker) {
            (Some(payload), None) => Ok(ScanEvent::Qr(payload)),
            (None, Some(marker)) => Ok(ScanEvent::Marker(marker)),
            _ => anyhow::bail!("Provide either a QR payload or --marker <ID>"),
        }
    }
}

/// Strategy for recognizing a scanned card and adding it to the collection.
///
/// An unrecognized code is reported with a retry prompt and exits cleanly.
#[derive(Debug, Clone, Copy)]
pub struct ScanStrategy;

impl super::CommandStrategy for ScanStrategy {
    type Input = ScanInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let event = input.into_event()?;
        let config = Config::load()?;
        let store = super::open_store(&config).await?;
        let scanner = Scanner::new(Catalog::nova(), store);

        match scanner.scan(&event).await? {
            ScanOutcome::Collected {
                record,
                method,
                is_new,
            } => {
                let card = &record.card;
                if is_new {
                    println!("Kartu Baru Ditemukan! 🎉");
                } else {
                    println!("Kartu Ditemukan! ✨");
                }
                println!("Nama: {}", card.name);
                println!("Rarity: {}", card.rarity);
                println!("Element: {}", card.element);
                println!(
                    "ATK: {} | DEF: {} | HP: {}",
                    card.attack, card.defense, card.health
                );
                println!();
                println!("{}", card.description);
                println!();
                println!("Dipindai lewat: {method}");
                if is_new {
                    println!("Kartu telah ditambahkan ke koleksi!");
                } else {
                    println!("Scan ke-{}", record.scan_count);
                }
            }
            ScanOutcome::NotRecognized(error) => {
                println!("{}", error.user_message());
                println!("Coba lagi.");
            }
        }

        Ok(())
    }
}
