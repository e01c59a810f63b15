use crate::domain::model::{Product, ProductId, StockRecord};
use crate::domain::notice::Notification;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// String-keyed persistence slot holding serialized blobs.
pub trait Storage: Send + Sync {
    /// `Ok(None)` when nothing has been written under `key` yet.
    fn read_item(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>>> + Send;
    fn write_item(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Remote product and stock lookups.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn product(&self, product_id: ProductId) -> Result<Product>;
    async fn stock(&self, product_id: ProductId) -> Result<StockRecord>;
}

/// Fire-and-forget channel for user-facing messages.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn storage_dir(&self) -> &str;
    fn cart_key(&self) -> &str;
    fn request_timeout(&self) -> Duration;
}
