use serde::{Deserialize, Serialize};

use ecommerce_core::{
    AggregateId, AggregateRoot, ClientData, Currency, DomainResult, Money,
};
use ecommerce_products::ProductSnapshot;

use crate::tax::Tax;

/// Invoice identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(pub AggregateId);

impl InvoiceId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Issued invoice line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub product: ProductSnapshot,
    pub quantity: u32,
    pub net: Money,
    pub tax: Tax,
}

impl InvoiceItem {
    pub fn new(product: ProductSnapshot, quantity: u32, net: Money, tax: Tax) -> Self {
        Self {
            product,
            quantity,
            net,
            tax,
        }
    }

    /// Net plus tax. Fails if the tax was computed in another currency.
    pub fn gross(&self) -> DomainResult<Money> {
        self.net.add(&self.tax.amount)
    }
}

/// Aggregate root: Invoice.
///
/// Lines are appended only while the invoice is being issued; callers get a
/// read-only view afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    id: InvoiceId,
    client_data: ClientData,
    items: Vec<InvoiceItem>,
}

impl Invoice {
    /// Create an empty invoice.
    pub fn new(id: InvoiceId, client_data: ClientData) -> Self {
        Self {
            id,
            client_data,
            items: Vec::new(),
        }
    }

    pub fn id_typed(&self) -> InvoiceId {
        self.id
    }

    pub fn client_data(&self) -> &ClientData {
        &self.client_data
    }

    pub fn items(&self) -> &[InvoiceItem] {
        &self.items
    }

    pub(crate) fn add_item(&mut self, item: InvoiceItem) {
        self.items.push(item);
    }

    /// Sum of net amounts (zero in the default currency when empty).
    pub fn net_total(&self) -> DomainResult<Money> {
        self.sum(|item| Ok(item.net))
    }

    /// Sum of gross amounts (zero in the default currency when empty).
    pub fn gross_total(&self) -> DomainResult<Money> {
        self.sum(InvoiceItem::gross)
    }

    fn sum(&self, amount: impl Fn(&InvoiceItem) -> DomainResult<Money>) -> DomainResult<Money> {
        let mut items = self.items.iter();
        let Some(first) = items.next() else {
            return Ok(Money::zero(Currency::default()));
        };
        items.try_fold(amount(first)?, |acc, item| acc.add(&amount(item)?))
    }
}

impl AggregateRoot for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Creates the empty invoice a book keeper fills in.
pub trait InvoiceFactory {
    fn create(&self, client_data: &ClientData) -> DomainResult<Invoice>;
}

/// Factory that assigns a fresh identifier to every invoice.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultInvoiceFactory;

impl InvoiceFactory for DefaultInvoiceFactory {
    fn create(&self, client_data: &ClientData) -> DomainResult<Invoice> {
        Ok(Invoice::new(InvoiceId::new(AggregateId::new()), client_data.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use ecommerce_core::{ClientId, DomainError};
    use ecommerce_products::{ProductId, ProductType};

    fn client() -> ClientData {
        ClientData::new(ClientId::new(AggregateId::new()), "Test")
    }

    fn item(net: Money, tax: Money) -> InvoiceItem {
        let product = ProductSnapshot {
            product_id: ProductId::new(AggregateId::new()),
            price: net,
            name: "Test".to_string(),
            product_type: ProductType::Standard,
            snapshot_date: Utc::now(),
        };
        InvoiceItem::new(product, 1, net, Tax::new(tax, "Tax"))
    }

    #[test]
    fn gross_is_net_plus_tax() {
        let line = item(Money::from_minor(1000), Money::from_minor(230));
        assert_eq!(line.gross().unwrap(), Money::from_minor(1230));
    }

    #[test]
    fn gross_rejects_tax_in_other_currency() {
        let line = item(Money::from_minor(1000), Money::new(230, Currency::USD));
        assert!(matches!(
            line.gross().unwrap_err(),
            DomainError::CurrencyMismatch { .. }
        ));
    }

    #[test]
    fn totals_sum_all_lines() {
        let mut invoice = Invoice::new(InvoiceId::new(AggregateId::new()), client());
        invoice.add_item(item(Money::from_minor(1000), Money::from_minor(230)));
        invoice.add_item(item(Money::from_minor(500), Money::from_minor(35)));

        assert_eq!(invoice.net_total().unwrap(), Money::from_minor(1500));
        assert_eq!(invoice.gross_total().unwrap(), Money::from_minor(1765));
    }

    #[test]
    fn totals_of_empty_invoice_are_zero() {
        let invoice = Invoice::new(InvoiceId::new(AggregateId::new()), client());
        assert!(invoice.net_total().unwrap().is_zero());
        assert!(invoice.gross_total().unwrap().is_zero());
    }

    #[test]
    fn totals_keep_currency_of_lines() {
        let mut invoice = Invoice::new(InvoiceId::new(AggregateId::new()), client());
        invoice.add_item(item(Money::new(100, Currency::USD), Money::new(10, Currency::USD)));
        assert_eq!(invoice.gross_total().unwrap(), Money::new(110, Currency::USD));
    }

    #[test]
    fn default_factory_creates_empty_invoice_for_client() {
        let client = client();
        let invoice = DefaultInvoiceFactory.create(&client).unwrap();
        assert_eq!(invoice.client_data(), &client);
        assert!(invoice.items().is_empty());
    }
}
