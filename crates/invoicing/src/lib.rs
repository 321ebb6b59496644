//! Invoicing domain module.
//!
//! Turns an [`InvoiceRequest`] into an issued [`Invoice`]: the [`BookKeeper`]
//! asks a caller-supplied [`TaxPolicy`] for the tax of every requested line.
//! Pure domain logic (no IO, no HTTP, no storage).

pub mod book_keeper;
pub mod invoice;
pub mod request;
pub mod tax;

pub use book_keeper::BookKeeper;
pub use invoice::{DefaultInvoiceFactory, Invoice, InvoiceFactory, InvoiceId, InvoiceItem};
pub use request::{InvoiceRequest, RequestItem};
pub use tax::{StandardTaxPolicy, Tax, TaxPolicy};
