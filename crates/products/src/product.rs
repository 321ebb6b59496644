use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ecommerce_core::{AggregateId, Entity, Money, ValueObject};

/// Product identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub AggregateId);

impl ProductId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Product category; drives tax calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Standard,
    Food,
    Drug,
}

/// Catalog product.
///
/// Identity is the [`ProductId`]: two products with the same id are the same
/// product regardless of their other attributes. Availability is live state
/// owned by the catalog, so it sits behind an atomic flag and is visible
/// through every shared handle (`Arc<Product>`).
#[derive(Debug)]
pub struct Product {
    id: ProductId,
    price: Money,
    name: String,
    product_type: ProductType,
    available: AtomicBool,
}

impl Product {
    /// Create an available product.
    pub fn new(id: ProductId, price: Money, name: impl Into<String>, product_type: ProductType) -> Self {
        Self {
            id,
            price,
            name: name.into(),
            product_type,
            available: AtomicBool::new(true),
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn product_type(&self) -> ProductType {
        self.product_type
    }

    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::Acquire)
    }

    /// Withdraw the product from sale. Existing reservations keep their lines
    /// but the product is reported as unavailable in new offers.
    pub fn mark_as_removed(&self) {
        self.available.store(false, Ordering::Release);
        tracing::debug!(product_id = %self.id, "product marked as removed");
    }

    /// Freeze the product's current data.
    pub fn snapshot(&self) -> ProductSnapshot {
        self.snapshot_at(Utc::now())
    }

    pub fn snapshot_at(&self, snapshot_date: DateTime<Utc>) -> ProductSnapshot {
        ProductSnapshot {
            product_id: self.id,
            price: self.price,
            name: self.name.clone(),
            product_type: self.product_type,
            snapshot_date,
        }
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Immutable copy of a product's data taken at `snapshot_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub product_id: ProductId,
    pub price: Money,
    pub name: String,
    pub product_type: ProductType,
    pub snapshot_date: DateTime<Utc>,
}

impl ValueObject for ProductSnapshot {}
