pub mod cart_store;

pub use crate::domain::model::{Cart, LineItem, Product, ProductId, StockRecord, UpdateProductAmount};
pub use crate::domain::notice::{Notice, Notification};
pub use crate::domain::ports::{CatalogApi, ConfigProvider, Notifier, Storage};
pub use crate::utils::error::Result;
pub use cart_store::{CartStore, Outcome, CART_STORAGE_KEY};
