//! Invoice issuance.

use crate::invoice::{Invoice, InvoiceFactory, InvoiceItem};
use crate::request::InvoiceRequest;
use crate::tax::TaxPolicy;

use ecommerce_core::DomainResult;

/// Stateless domain service that issues invoices.
#[derive(Debug, Clone)]
pub struct BookKeeper<F> {
    invoice_factory: F,
}

impl<F: InvoiceFactory> BookKeeper<F> {
    pub fn new(invoice_factory: F) -> Self {
        Self { invoice_factory }
    }

    /// Issue an invoice for `request`.
    ///
    /// The invoice has one line per request line, in request order, and
    /// `tax_policy` is consulted exactly once per line. Errors from the factory
    /// or the policy abort issuance and are returned unchanged.
    pub fn issuance(
        &self,
        request: &InvoiceRequest,
        tax_policy: &dyn TaxPolicy,
    ) -> DomainResult<Invoice> {
        let mut invoice = self.invoice_factory.create(request.client_data())?;

        for item in request.items() {
            let tax = tax_policy.calculate_tax(item.product.product_type, &item.total_cost)?;
            invoice.add_item(InvoiceItem::new(
                item.product.clone(),
                item.quantity,
                item.total_cost,
                tax,
            ));
        }

        tracing::debug!(
            invoice_id = %invoice.id_typed(),
            client_id = %request.client_data().client_id,
            items = invoice.items().len(),
            "invoice issued"
        );
        Ok(invoice)
    }
}
