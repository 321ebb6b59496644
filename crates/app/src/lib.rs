//! `ecommerce-app`: application layer around the sales and invoicing domains.
//!
//! Holds the ports the command handlers depend on (repositories, suggestion
//! service, system context), in-memory adapters for tests/dev, and the
//! configuration read from the environment.

pub mod config;
pub mod error;
pub mod handler;
pub mod in_memory;
pub mod ports;

pub use config::SalesConfig;
pub use error::{AppError, AppResult};
pub use handler::{AddProductCommand, AddProductCommandHandler};
pub use in_memory::{
    FixedSystemContext, InMemoryClientRepository, InMemoryProductRepository,
    InMemoryReservationRepository,
};
pub use ports::{
    Client, ClientRepository, ProductRepository, ReservationRepository, SuggestionService,
    SystemContext, SystemUser,
};
