use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ecommerce_core::{AggregateId, AggregateRoot, ClientData, DomainError, DomainResult, Money, ensure};
use ecommerce_products::{Product, ProductId};

use crate::discount::DiscountPolicy;
use crate::offer::{Offer, OfferItem};

/// Reservation identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(pub AggregateId);

impl ReservationId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ReservationId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Reservation status lifecycle: `Opened` → `Closed` (terminal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Opened,
    Closed,
}

/// Reservation line: a catalog product and how many of it.
#[derive(Debug, Clone)]
pub struct ReservationItem {
    product: Arc<Product>,
    quantity: u32,
}

impl ReservationItem {
    fn new(product: Arc<Product>, quantity: u32) -> Self {
        Self { product, quantity }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    fn change_quantity_by(&mut self, delta: u32) -> DomainResult<()> {
        self.quantity = self
            .quantity
            .checked_add(delta)
            .ok_or_else(|| DomainError::validation("quantity overflow"))?;
        Ok(())
    }

    fn cost(&self) -> DomainResult<Money> {
        self.product.price().multiply_by(self.quantity)
    }
}

/// Read model of one reserved line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservedProduct {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub total_cost: Money,
}

/// Aggregate root: Reservation.
#[derive(Debug, Clone)]
pub struct Reservation {
    id: ReservationId,
    status: ReservationStatus,
    client_data: ClientData,
    create_date: DateTime<Utc>,
    items: Vec<ReservationItem>,
}

impl Reservation {
    /// Open a new, empty reservation for a client.
    pub fn open(id: ReservationId, client_data: ClientData, create_date: DateTime<Utc>) -> Self {
        Self {
            id,
            status: ReservationStatus::Opened,
            client_data,
            create_date,
            items: Vec::new(),
        }
    }

    pub fn id_typed(&self) -> ReservationId {
        self.id
    }

    pub fn status(&self) -> ReservationStatus {
        self.status
    }

    pub fn client_data(&self) -> &ClientData {
        &self.client_data
    }

    pub fn create_date(&self) -> DateTime<Utc> {
        self.create_date
    }

    pub fn items(&self) -> &[ReservationItem] {
        &self.items
    }

    pub fn is_closed(&self) -> bool {
        self.status == ReservationStatus::Closed
    }

    /// Reserve `quantity` more of `product`.
    ///
    /// A product already on the reservation gets its line increased; a new one
    /// is appended as the last line.
    pub fn add(&mut self, product: Arc<Product>, quantity: u32) -> DomainResult<()> {
        ensure(!self.is_closed(), DomainError::invariant("reservation already closed"))?;
        ensure(
            product.is_available(),
            DomainError::invariant("product is no longer available"),
        )?;
        ensure(quantity > 0, DomainError::validation("quantity must be positive"))?;

        let product_id = product.id_typed();
        match self.items.iter_mut().find(|item| *item.product == *product) {
            Some(item) => {
                item.change_quantity_by(quantity)?;
                tracing::debug!(
                    reservation_id = %self.id,
                    %product_id,
                    quantity = item.quantity,
                    "reservation line increased"
                );
            }
            None => {
                self.items.push(ReservationItem::new(product, quantity));
                tracing::debug!(reservation_id = %self.id, %product_id, quantity, "reservation line added");
            }
        }
        Ok(())
    }

    pub fn close(&mut self) -> DomainResult<()> {
        ensure(
            !self.is_closed(),
            DomainError::invariant("reservation is already closed"),
        )?;
        self.status = ReservationStatus::Closed;
        tracing::debug!(reservation_id = %self.id, "reservation closed");
        Ok(())
    }

    pub fn contains(&self, product: &Product) -> bool {
        self.items.iter().any(|item| *item.product == *product)
    }

    /// Price the reservation against current product availability.
    ///
    /// Available lines get a discount from `policy` (one call per line) and go
    /// to the offer's available items; lines whose product has since been
    /// withdrawn go to the unavailable items without a discount. Line order is
    /// kept in both lists. An error from `policy` aborts the whole calculation.
    pub fn calculate_offer(&self, policy: &dyn DiscountPolicy) -> DomainResult<Offer> {
        let mut available_items = Vec::new();
        let mut unavailable_items = Vec::new();

        for item in &self.items {
            let product = item.product();
            if product.is_available() {
                let discount = policy.apply_discount(product, item.quantity, &product.price())?;
                available_items.push(OfferItem::new(product.snapshot(), item.quantity, Some(discount)));
            } else {
                unavailable_items.push(OfferItem::new(product.snapshot(), item.quantity, None));
            }
        }

        Ok(Offer::new(available_items, unavailable_items))
    }

    pub fn reserved_products(&self) -> DomainResult<Vec<ReservedProduct>> {
        self.items
            .iter()
            .map(|item| {
                Ok(ReservedProduct {
                    product_id: item.product.id_typed(),
                    name: item.product.name().to_string(),
                    quantity: item.quantity,
                    total_cost: item.cost()?,
                })
            })
            .collect()
    }
}

impl AggregateRoot for Reservation {
    type Id = ReservationId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
