//! Command handlers: load aggregates, call the domain, save.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use ecommerce_products::ProductId;
use ecommerce_sales::ReservationId;

use crate::config::SalesConfig;
use crate::error::AppResult;
use crate::ports::{
    ClientRepository, ProductRepository, ReservationRepository, SuggestionService, SystemContext,
};

/// Command: add a product to a reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddProductCommand {
    pub order_id: ReservationId,
    pub product_id: ProductId,
    pub quantity: u32,
}

pub struct AddProductCommandHandler {
    reservations: Arc<dyn ReservationRepository + Send + Sync>,
    products: Arc<dyn ProductRepository + Send + Sync>,
    clients: Arc<dyn ClientRepository + Send + Sync>,
    suggestions: Arc<dyn SuggestionService + Send + Sync>,
    system_context: Arc<dyn SystemContext + Send + Sync>,
    config: SalesConfig,
}

impl AddProductCommandHandler {
    pub fn new(
        reservations: Arc<dyn ReservationRepository + Send + Sync>,
        products: Arc<dyn ProductRepository + Send + Sync>,
        clients: Arc<dyn ClientRepository + Send + Sync>,
        suggestions: Arc<dyn SuggestionService + Send + Sync>,
        system_context: Arc<dyn SystemContext + Send + Sync>,
        config: SalesConfig,
    ) -> Self {
        Self {
            reservations,
            products,
            clients,
            suggestions,
            system_context,
            config,
        }
    }

    /// Add the product to the reservation and save it.
    ///
    /// When the product is no longer available (and suggestions are enabled)
    /// an equivalent suggested for the current client is added instead.
    pub fn handle(&self, command: &AddProductCommand) -> AppResult<()> {
        let mut reservation = self.reservations.load(command.order_id)?;
        let mut product = self.products.load(command.product_id)?;

        if !product.is_available() && self.config.suggest_equivalents {
            let user = self.system_context.system_user();
            let client = self.clients.load(user.client_id)?;
            let suggested = self.suggestions.suggest_equivalent(&product, &client)?;
            tracing::info!(
                reservation_id = %command.order_id,
                requested = %command.product_id,
                suggested = %suggested.id_typed(),
                "product unavailable, adding suggested equivalent"
            );
            product = suggested;
        }

        reservation.add(product, command.quantity)?;
        self.reservations.save(&reservation)?;
        Ok(())
    }
}
