//! Offer: the priced, read-only result of a reservation.

use serde::{Deserialize, Serialize};

use ecommerce_core::{DomainResult, Money};
use ecommerce_products::ProductSnapshot;

use crate::discount::Discount;

/// One priced line of an offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferItem {
    product: ProductSnapshot,
    quantity: u32,
    discount: Option<Discount>,
}

impl OfferItem {
    pub fn new(product: ProductSnapshot, quantity: u32, discount: Option<Discount>) -> Self {
        Self {
            product,
            quantity,
            discount,
        }
    }

    pub fn product(&self) -> &ProductSnapshot {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn discount(&self) -> Option<&Discount> {
        self.discount.as_ref()
    }

    /// Snapshot price × quantity, less the discount if there is one.
    pub fn total_cost(&self) -> DomainResult<Money> {
        let gross = self.product.price.multiply_by(self.quantity)?;
        match &self.discount {
            Some(discount) => gross.subtract(&discount.amount),
            None => Ok(gross),
        }
    }

    /// Same product and quantity, with total costs no further apart than `delta`.
    pub fn same_as(&self, other: &OfferItem, delta: &Money) -> DomainResult<bool> {
        if self.product.product_id != other.product.product_id || self.quantity != other.quantity {
            return Ok(false);
        }

        let (ours, theirs) = (self.total_cost()?, other.total_cost()?);
        let difference = if ours.greater_than(&theirs)? {
            ours.subtract(&theirs)?
        } else {
            theirs.subtract(&ours)?
        };
        difference.less_or_equal(delta)
    }
}

/// Offer split by current product availability, in reservation line order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Offer {
    available_items: Vec<OfferItem>,
    unavailable_items: Vec<OfferItem>,
}

impl Offer {
    pub fn new(available_items: Vec<OfferItem>, unavailable_items: Vec<OfferItem>) -> Self {
        Self {
            available_items,
            unavailable_items,
        }
    }

    pub fn available_items(&self) -> &[OfferItem] {
        &self.available_items
    }

    pub fn unavailable_items(&self) -> &[OfferItem] {
        &self.unavailable_items
    }

    /// Compare with an offer the client saw earlier.
    ///
    /// Both offers must have the same number of available and unavailable
    /// lines and every available line must have a matching line (see
    /// [`OfferItem::same_as`]) in `seen`.
    pub fn same_as(&self, seen: &Offer, delta: &Money) -> DomainResult<bool> {
        if self.available_items.len() != seen.available_items.len()
            || self.unavailable_items.len() != seen.unavailable_items.len()
        {
            return Ok(false);
        }

        for item in &self.available_items {
            let mut matched = false;
            for candidate in &seen.available_items {
                if item.same_as(candidate, delta)? {
                    matched = true;
                    break;
                }
            }
            if !matched {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
