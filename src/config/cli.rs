use crate::config::{AppConfig, TomlConfig};
use crate::core::ProductId;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "rocket-cart")]
#[command(about = "Manage the RocketShoes shopping cart from the terminal")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Base URL of the storefront API (default http://localhost:3333)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Directory holding the persisted cart (default ./.rocketshoes)
    #[arg(long)]
    pub storage_dir: Option<String>,

    /// Storage key of the cart slot (default @RocketShoes:cart)
    #[arg(long)]
    pub cart_key: Option<String>,

    /// Request timeout in seconds (default 10)
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the cart
    Show,
    /// Add one unit of a product
    Add { product_id: ProductId },
    /// Drop a product from the cart
    Remove { product_id: ProductId },
    /// Set the quantity of a product already in the cart
    Update {
        product_id: ProductId,
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
}

impl CliConfig {
    /// Defaults, then the TOML file (if any), then flags given on the command line.
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = AppConfig::default();

        if let Some(path) = &self.config {
            config = config.merge_toml(&TomlConfig::from_file(path)?);
        }

        if let Some(api_url) = &self.api_url {
            config.api_base_url = api_url.clone();
        }
        if let Some(storage_dir) = &self.storage_dir {
            config.storage_dir = storage_dir.clone();
        }
        if let Some(cart_key) = &self.cart_key {
            config.cart_key = cart_key.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            config.timeout_seconds = timeout;
        }
        if self.verbose {
            config.log_level = Some("debug".to_string());
        }

        Ok(config)
    }
}
