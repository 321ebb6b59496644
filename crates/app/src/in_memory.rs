//! In-memory adapters for the application ports.
//!
//! Intended for tests/dev. Not optimized for performance.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use ecommerce_core::{AggregateRoot, ClientId, Entity};
use ecommerce_products::{Product, ProductId};
use ecommerce_sales::{Reservation, ReservationId};

use crate::error::{AppError, AppResult};
use crate::ports::{
    Client, ClientRepository, ProductRepository, ReservationRepository, SystemContext, SystemUser,
};

fn poisoned() -> AppError {
    AppError::Storage("lock poisoned".to_string())
}

/// Reservations stored by value; `load` hands out a copy.
#[derive(Debug, Default)]
pub struct InMemoryReservationRepository {
    reservations: RwLock<HashMap<ReservationId, Reservation>>,
}

impl InMemoryReservationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReservationRepository for InMemoryReservationRepository {
    fn load(&self, id: ReservationId) -> AppResult<Reservation> {
        let reservations = self.reservations.read().map_err(|_| poisoned())?;
        reservations
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::not_found("reservation", id))
    }

    fn save(&self, reservation: &Reservation) -> AppResult<()> {
        let mut reservations = self.reservations.write().map_err(|_| poisoned())?;
        reservations.insert(*reservation.id(), reservation.clone());
        Ok(())
    }
}

/// Catalog of shared products.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<HashMap<ProductId, Arc<Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, product: Arc<Product>) -> AppResult<()> {
        let mut products = self.products.write().map_err(|_| poisoned())?;
        products.insert(product.id_typed(), product);
        Ok(())
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn load(&self, id: ProductId) -> AppResult<Arc<Product>> {
        let products = self.products.read().map_err(|_| poisoned())?;
        products
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::not_found("product", id))
    }
}

#[derive(Debug, Default)]
pub struct InMemoryClientRepository {
    clients: RwLock<HashMap<ClientId, Client>>,
}

impl InMemoryClientRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, client: Client) -> AppResult<()> {
        let mut clients = self.clients.write().map_err(|_| poisoned())?;
        clients.insert(*client.id(), client);
        Ok(())
    }
}

impl ClientRepository for InMemoryClientRepository {
    fn load(&self, id: ClientId) -> AppResult<Client> {
        let clients = self.clients.read().map_err(|_| poisoned())?;
        clients
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::not_found("client", id))
    }
}

/// System context that always reports the same user.
#[derive(Debug, Clone, Copy)]
pub struct FixedSystemContext(pub SystemUser);

impl SystemContext for FixedSystemContext {
    fn system_user(&self) -> SystemUser {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use ecommerce_core::{AggregateId, ClientData, Money};
    use ecommerce_products::ProductType;

    #[test]
    fn reservation_round_trips_through_repository() {
        let repo = InMemoryReservationRepository::new();
        let id = ReservationId::new(AggregateId::new());
        let client = ClientData::new(ClientId::new(AggregateId::new()), "Test");
        let mut reservation = Reservation::open(id, client, Utc::now());
        reservation.close().unwrap();

        repo.save(&reservation).unwrap();
        let loaded = repo.load(id).unwrap();

        assert!(loaded.is_closed());
        assert_eq!(loaded.id_typed(), id);
    }

    #[test]
    fn missing_entries_are_not_found() {
        let err = InMemoryReservationRepository::new()
            .load(ReservationId::new(AggregateId::new()))
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { kind: "reservation", .. }));

        let err = InMemoryClientRepository::new()
            .load(ClientId::new(AggregateId::new()))
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { kind: "client", .. }));
    }

    #[test]
    fn product_repository_shares_the_same_instance() {
        let repo = InMemoryProductRepository::new();
        let product = Arc::new(Product::new(
            ProductId::new(AggregateId::new()),
            Money::from_minor(100),
            "Test Product",
            ProductType::Standard,
        ));
        repo.insert(Arc::clone(&product)).unwrap();

        product.mark_as_removed();

        assert!(!repo.load(product.id_typed()).unwrap().is_available());
    }
}
