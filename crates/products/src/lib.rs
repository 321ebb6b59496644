//! Products catalog module.
//!
//! Catalog products are shared, externally managed entities: reservations hold
//! a reference to them and read their availability when pricing an offer.
//! Offers and invoices carry a [`ProductSnapshot`] instead.

pub mod product;

pub use product::{Product, ProductId, ProductSnapshot, ProductType};
