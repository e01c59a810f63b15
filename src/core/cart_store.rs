use crate::domain::model::{Cart, LineItem, ProductId, UpdateProductAmount};
use crate::domain::notice::{Notice, Notification};
use crate::domain::ports::{CatalogApi, Notifier, Storage};
use crate::utils::error::{CartError, Result};
use crate::utils::validation::Validate;
use tokio::sync::{watch, Mutex};

/// Slot the cart is persisted under unless configured otherwise.
pub const CART_STORAGE_KEY: &str = "@RocketShoes:cart";

/// What a successful operation did to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A new cart was committed to storage and memory.
    Updated,
    /// The call was a no-op; nothing was written.
    Unchanged,
}

/// Owns the cart and keeps the persisted slot in step with it.
///
/// Each operation reports failures twice: through the [`Notifier`] with one
/// of the fixed [`Notice`] messages, and through its returned `Result`.
/// Operations do not exclude each other. When two overlap, whichever commits
/// last wins, in memory and in storage alike.
pub struct CartStore<C: CatalogApi, S: Storage, N: Notifier> {
    catalog: C,
    storage: S,
    notifier: N,
    key: String,
    state: watch::Sender<Cart>,
    commit_guard: Mutex<()>,
}

impl<C: CatalogApi, S: Storage, N: Notifier> CartStore<C, S, N> {
    pub async fn load(catalog: C, storage: S, notifier: N) -> Result<Self> {
        Self::load_with_key(catalog, storage, notifier, CART_STORAGE_KEY).await
    }

    /// Builds the store, hydrating it from `key` when the slot holds a usable cart.
    pub async fn load_with_key(
        catalog: C,
        storage: S,
        notifier: N,
        key: impl Into<String>,
    ) -> Result<Self> {
        let key = key.into();
        let initial = hydrate(&storage, &key).await?;
        let (state, _) = watch::channel(initial);

        Ok(Self {
            catalog,
            storage,
            notifier,
            key,
            state,
            commit_guard: Mutex::new(()),
        })
    }

    /// Snapshot of the current cart.
    pub fn cart(&self) -> Cart {
        self.state.borrow().clone()
    }

    /// Receiver that observes every committed cart.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.state.subscribe()
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub async fn add_product(&self, product_id: ProductId) -> Result<Outcome> {
        let result = self.try_add_product(product_id).await;
        self.report("add_product", product_id, &result, Notice::AddFailed);
        result
    }

    pub async fn remove_product(&self, product_id: ProductId) -> Result<Outcome> {
        let result = self.try_remove_product(product_id).await;
        self.report("remove_product", product_id, &result, Notice::RemoveFailed);
        result
    }

    pub async fn update_product_amount(&self, request: UpdateProductAmount) -> Result<Outcome> {
        let result = self.try_update_product_amount(request).await;
        self.report(
            "update_product_amount",
            request.product_id,
            &result,
            Notice::UpdateFailed,
        );
        result
    }

    async fn try_add_product(&self, product_id: ProductId) -> Result<Outcome> {
        tracing::debug!("Looking up product {} and its stock", product_id);
        let (product, stock) = tokio::try_join!(
            self.catalog.product(product_id),
            self.catalog.stock(product_id)
        )?;

        let cart = self.cart();
        let requested = cart
            .find(product_id)
            .map_or(1, |item| item.amount.saturating_add(1));

        if i64::from(requested) > stock.amount {
            return Err(CartError::OutOfStock {
                product_id,
                requested: i64::from(requested),
                available: stock.amount,
            });
        }

        let next = if cart.contains(product_id) {
            cart.with_amount(product_id, requested)
        } else {
            cart.with_item(LineItem::from_product(product, 1))
        };

        self.commit(next).await?;
        tracing::info!("Product {} now at amount {}", product_id, requested);
        Ok(Outcome::Updated)
    }

    async fn try_remove_product(&self, product_id: ProductId) -> Result<Outcome> {
        let cart = self.cart();
        if !cart.contains(product_id) {
            return Err(CartError::ProductNotInCart { product_id });
        }

        self.commit(cart.without(product_id)).await?;
        tracing::info!("Product {} removed from cart", product_id);
        Ok(Outcome::Updated)
    }

    async fn try_update_product_amount(&self, request: UpdateProductAmount) -> Result<Outcome> {
        let UpdateProductAmount { product_id, amount } = request;

        if amount < 1 {
            tracing::debug!("Ignoring amount {} for product {}", amount, product_id);
            return Ok(Outcome::Unchanged);
        }

        tracing::debug!("Looking up stock for product {}", product_id);
        let stock = self.catalog.stock(product_id).await?;

        let out_of_stock = || CartError::OutOfStock {
            product_id,
            requested: amount,
            available: stock.amount,
        };
        if amount > stock.amount {
            return Err(out_of_stock());
        }
        let amount = u32::try_from(amount).map_err(|_| out_of_stock())?;

        let cart = self.cart();
        if !cart.contains(product_id) {
            tracing::debug!("Product {} not in cart, nothing to update", product_id);
            return Ok(Outcome::Unchanged);
        }

        self.commit(cart.with_amount(product_id, amount)).await?;
        tracing::info!("Product {} set to amount {}", product_id, amount);
        Ok(Outcome::Updated)
    }

    /// Persists `next`, then publishes it. Memory is only touched once the write succeeded.
    async fn commit(&self, next: Cart) -> Result<()> {
        let raw = next.to_json()?;

        let _guard = self.commit_guard.lock().await;
        self.storage.write_item(&self.key, &raw).await?;
        tracing::debug!("Persisted {} cart items under {}", next.len(), self.key);
        self.state.send_replace(next);
        Ok(())
    }

    fn report(
        &self,
        operation: &str,
        product_id: ProductId,
        result: &Result<Outcome>,
        fallback: Notice,
    ) {
        if let Err(err) = result {
            let notice = if err.is_out_of_stock() {
                Notice::OutOfStock
            } else {
                fallback
            };
            tracing::warn!("{} failed for product {}: {}", operation, product_id, err);
            self.notifier.notify(Notification::error(notice));
        }
    }
}

async fn hydrate<S: Storage>(storage: &S, key: &str) -> Result<Cart> {
    let Some(raw) = storage.read_item(key).await? else {
        tracing::debug!("No cart stored under {}, starting empty", key);
        return Ok(Cart::new());
    };

    let parsed = Cart::from_json(&raw).and_then(|cart| cart.validate().map(|_| cart));
    match parsed {
        Ok(cart) => {
            tracing::debug!("Restored {} cart items from {}", cart.len(), key);
            Ok(cart)
        }
        Err(e) => {
            tracing::warn!("Discarding unreadable cart stored under {}: {}", key, e);
            Ok(Cart::new())
        }
    }
}
