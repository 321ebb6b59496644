//! Ports the application layer depends on.

use std::sync::Arc;

use ecommerce_core::{ClientData, ClientId, Entity, UserId};
use ecommerce_products::{Product, ProductId};
use ecommerce_sales::{Reservation, ReservationId};

use crate::error::AppResult;

/// Customer known to the sales context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    id: ClientId,
    name: String,
}

impl Client {
    pub fn new(id: ClientId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id_typed(&self) -> ClientId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn snapshot(&self) -> ClientData {
        ClientData::new(self.id, self.name.clone())
    }
}

impl Entity for Client {
    type Id = ClientId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// The user on whose behalf a command runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemUser {
    pub user_id: UserId,
    pub client_id: ClientId,
}

pub trait SystemContext {
    fn system_user(&self) -> SystemUser;
}

pub trait ReservationRepository {
    fn load(&self, id: ReservationId) -> AppResult<Reservation>;
    fn save(&self, reservation: &Reservation) -> AppResult<()>;
}

pub trait ProductRepository {
    fn load(&self, id: ProductId) -> AppResult<Arc<Product>>;
}

pub trait ClientRepository {
    fn load(&self, id: ClientId) -> AppResult<Client>;
}

/// Finds a replacement for a product that is no longer available.
pub trait SuggestionService {
    fn suggest_equivalent(&self, product: &Product, client: &Client) -> AppResult<Arc<Product>>;
}
