use nova_config::Config;

/// Strategy for listing the collected cards in display order.
#[derive(Debug, Clone, Copy)]
pub struct CollectionStrategy;

impl super::CommandStrategy for CollectionStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let store = super::open_store(&config).await?;
        let records = store.load_all().await?;

        println!("=== Koleksi Seri Nova ===\n");
        if records.is_empty() {
            println!("Belum ada kartu yang dikumpulkan");
            println!("Scan kartu Nova untuk mulai mengumpulkan!");
            return Ok(());
        }

        for record in &records {
            println!("{}", super::card_line(record));
            println!(
                "    collected at {}",
                record.collected_at.format("%Y-%m-%d %H:%M:%S UTC")
            );
        }

        Ok(())
    }
}
