//! Invoice requests: what should be billed, before tax.

use serde::{Deserialize, Serialize};

use ecommerce_core::{ClientData, Money};
use ecommerce_products::ProductSnapshot;

/// One line to bill. `total_cost` is the net amount for the whole line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestItem {
    pub product: ProductSnapshot,
    pub quantity: u32,
    pub total_cost: Money,
}

impl RequestItem {
    pub fn new(product: ProductSnapshot, quantity: u32, total_cost: Money) -> Self {
        Self {
            product,
            quantity,
            total_cost,
        }
    }
}

/// Lines to bill for one client, in the order they were added.
///
/// Unlike a reservation, a request never merges lines: adding the same item
/// twice bills it twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRequest {
    client_data: ClientData,
    items: Vec<RequestItem>,
}

impl InvoiceRequest {
    pub fn new(client_data: ClientData) -> Self {
        Self {
            client_data,
            items: Vec::new(),
        }
    }

    pub fn add(&mut self, item: RequestItem) {
        self.items.push(item);
    }

    pub fn client_data(&self) -> &ClientData {
        &self.client_data
    }

    pub fn items(&self) -> &[RequestItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
