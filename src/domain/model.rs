use crate::utils::error::{CartError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

pub type ProductId = u64;

/// A catalog record as served by `GET products/{id}`.
///
/// Only `id` is interpreted; everything else (title, price, image, ...) is
/// carried through to the cart untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Product {
    pub fn title(&self) -> Option<&str> {
        self.attributes.get("title").and_then(Value::as_str)
    }

    pub fn price(&self) -> Option<f64> {
        self.attributes.get("price").and_then(Value::as_f64)
    }
}

/// A product in the cart together with the requested quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: ProductId,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
    pub amount: u32,
}

impl LineItem {
    pub fn from_product(product: Product, amount: u32) -> Self {
        let Product { id, mut attributes } = product;
        // 商品資料不應帶入庫存數量
        attributes.remove("amount");
        Self {
            id,
            attributes,
            amount,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.attributes.get("title").and_then(Value::as_str)
    }

    pub fn price(&self) -> Option<f64> {
        self.attributes.get("price").and_then(Value::as_f64)
    }

    pub fn line_total(&self) -> Option<f64> {
        self.price().map(|price| price * f64::from(self.amount))
    }
}

/// Ordered line items; insertion order is display order.
///
/// Every mutation produces a new `Cart` instead of editing in place, so a
/// snapshot handed out earlier never changes under its holder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LineItem> {
        self.items.iter()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, product_id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.find(product_id).is_some()
    }

    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.amount)).sum()
    }

    /// Sum of `price * amount`; items without a numeric price count as zero.
    pub fn subtotal(&self) -> f64 {
        self.items.iter().filter_map(LineItem::line_total).sum()
    }

    /// Copy of the cart with the amount of `product_id` replaced. Unknown ids leave it as is.
    pub fn with_amount(&self, product_id: ProductId, amount: u32) -> Cart {
        self.items
            .iter()
            .map(|item| {
                if item.id == product_id {
                    LineItem {
                        amount,
                        ..item.clone()
                    }
                } else {
                    item.clone()
                }
            })
            .collect()
    }

    pub fn with_item(&self, item: LineItem) -> Cart {
        let mut items = self.items.clone();
        items.push(item);
        Cart { items }
    }

    pub fn without(&self, product_id: ProductId) -> Cart {
        self.items
            .iter()
            .filter(|item| item.id != product_id)
            .cloned()
            .collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Cart> {
        Ok(serde_json::from_str(raw)?)
    }
}

impl FromIterator<LineItem> for Cart {
    fn from_iter<I: IntoIterator<Item = LineItem>>(iter: I) -> Self {
        Cart {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a LineItem;
    type IntoIter = std::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Validate for Cart {
    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.items.len());
        for item in &self.items {
            if item.amount < 1 {
                return Err(CartError::InvalidCart {
                    message: format!("product {} has amount {}", item.id, item.amount),
                });
            }
            if !seen.insert(item.id) {
                return Err(CartError::InvalidCart {
                    message: format!("product {} appears more than once", item.id),
                });
            }
        }
        Ok(())
    }
}

/// Availability as served by `GET stock/{id}`.
///
/// `amount` goes negative when the backend has oversold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRecord {
    #[serde(default)]
    pub id: ProductId,
    pub amount: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    pub amount: i64,
}
