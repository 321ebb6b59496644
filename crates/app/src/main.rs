use std::sync::Arc;

use chrono::Utc;

use ecommerce_app::{
    AddProductCommand, AddProductCommandHandler, Client, FixedSystemContext,
    InMemoryClientRepository, InMemoryProductRepository, InMemoryReservationRepository,
    ReservationRepository, SalesConfig, SuggestionService, SystemUser,
};
use ecommerce_core::{AggregateId, ClientId, Money, UserId};
use ecommerce_invoicing::{
    BookKeeper, DefaultInvoiceFactory, InvoiceRequest, RequestItem, StandardTaxPolicy,
};
use ecommerce_products::{Product, ProductId, ProductType};
use ecommerce_sales::{PercentageDiscount, Reservation, ReservationId};

/// Suggests a fixed house-brand product for anything unavailable.
struct HouseBrandSuggestions(Arc<Product>);

impl SuggestionService for HouseBrandSuggestions {
    fn suggest_equivalent(
        &self,
        _product: &Product,
        _client: &Client,
    ) -> ecommerce_app::AppResult<Arc<Product>> {
        Ok(Arc::clone(&self.0))
    }
}

fn main() -> anyhow::Result<()> {
    let config = SalesConfig::from_env()?;
    ecommerce_observability::tracing::init(config.log_format);

    let price = |minor| Money::new(minor, config.currency);
    let new_product = |minor, name: &str, product_type| {
        Arc::new(Product::new(
            ProductId::new(AggregateId::new()),
            price(minor),
            name,
            product_type,
        ))
    };

    let coffee = new_product(1_299, "Coffee beans", ProductType::Food);
    let aspirin = new_product(549, "Aspirin", ProductType::Drug);
    let mug = new_product(1_999, "Mug", ProductType::Standard);
    let house_mug = new_product(999, "House mug", ProductType::Standard);

    let products = Arc::new(InMemoryProductRepository::new());
    for product in [&coffee, &aspirin, &mug, &house_mug] {
        products.insert(Arc::clone(product))?;
    }

    let client = Client::new(ClientId::new(AggregateId::new()), "Demo client");
    let client_id = client.id_typed();
    let reservation_id = ReservationId::new(AggregateId::new());
    let reservations = Arc::new(InMemoryReservationRepository::new());
    reservations.save(&Reservation::open(reservation_id, client.snapshot(), Utc::now()))?;

    let clients = Arc::new(InMemoryClientRepository::new());
    clients.insert(client.clone())?;

    let handler = AddProductCommandHandler::new(
        reservations.clone(),
        products,
        clients,
        Arc::new(HouseBrandSuggestions(Arc::clone(&house_mug))),
        Arc::new(FixedSystemContext(SystemUser {
            user_id: UserId::new(),
            client_id,
        })),
        config,
    );

    mug.mark_as_removed();
    for (product, quantity) in [(&coffee, 2), (&aspirin, 1), (&mug, 1), (&coffee, 1)] {
        handler.handle(&AddProductCommand {
            order_id: reservation_id,
            product_id: product.id_typed(),
            quantity,
        })?;
    }

    let mut reservation = reservations.load(reservation_id)?;
    aspirin.mark_as_removed();

    let offer = reservation.calculate_offer(&PercentageDiscount::new(10)?)?;
    let offer_json = serde_json::to_string(&offer)?;
    tracing::info!(
        available = offer.available_items().len(),
        unavailable = offer.unavailable_items().len(),
        offer = %offer_json,
        "offer calculated"
    );

    reservation.close()?;
    reservations.save(&reservation)?;

    let mut request = InvoiceRequest::new(client.snapshot());
    for item in offer.available_items() {
        request.add(RequestItem::new(
            item.product().clone(),
            item.quantity(),
            item.total_cost()?,
        ));
    }

    let invoice = BookKeeper::new(DefaultInvoiceFactory)
        .issuance(&request, &StandardTaxPolicy::default())?;
    let (net, gross) = (invoice.net_total()?, invoice.gross_total()?);
    tracing::info!(invoice_id = %invoice.id_typed(), %net, %gross, "invoice issued");

    Ok(())
}
