use nova_config::Config;

/// Strategy for initializing the configuration.
///
/// This strategy creates the default configuration file at `~/nova/config.json`.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let path = Config::create_config()?;

        println!("✅ Created config file at: {}", path.display());
        println!();
        println!("🔧 Configuration options:");
        println!("   - storage.data_dir: where the collection file is kept (default ~/nova/data)");
        println!("   - storage.collection_key: name of the collection blob");
        println!("   - log_level: tracing filter, overridden by RUST_LOG");
        println!();
        Ok(())
    }
}
