pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{ChannelNotifier, ConsoleNotifier, HttpCatalog, LocalStorage, MemoryStorage};
pub use config::{AppConfig, TomlConfig};
pub use crate::core::{
    Cart, CartStore, LineItem, Notice, Notification, Outcome, Product, ProductId, StockRecord,
    UpdateProductAmount, CART_STORAGE_KEY,
};
pub use utils::error::{CartError, Result};
