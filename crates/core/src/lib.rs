//! `ecommerce-core`: shared kernel for the sales and invoicing domains.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod aggregate;
pub mod client;
pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use aggregate::{AggregateRoot, ensure};
pub use client::{ClientData, ClientId};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{AggregateId, UserId};
pub use money::{Currency, Money};
pub use value_object::ValueObject;
