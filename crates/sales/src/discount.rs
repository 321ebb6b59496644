//! Discounts and the policy port that produces them.

use serde::{Deserialize, Serialize};

use ecommerce_core::{DomainError, DomainResult, Money, ValueObject};
use ecommerce_products::Product;

/// A reduction applied to an offer line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discount {
    pub amount: Money,
    pub cause: String,
}

impl Discount {
    pub fn new(amount: Money, cause: impl Into<String>) -> Self {
        Self {
            amount,
            cause: cause.into(),
        }
    }
}

impl ValueObject for Discount {}

/// Decides the discount for one available reservation line.
///
/// Called once per available line with the line's product, quantity and the
/// product's current unit price. The returned discount is used as-is.
pub trait DiscountPolicy {
    fn apply_discount(&self, product: &Product, quantity: u32, unit_price: &Money)
    -> DomainResult<Discount>;
}

/// Policy that never reduces the price.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDiscount;

impl DiscountPolicy for NoDiscount {
    fn apply_discount(
        &self,
        _product: &Product,
        _quantity: u32,
        unit_price: &Money,
    ) -> DomainResult<Discount> {
        Ok(Discount::new(Money::zero(unit_price.currency()), "no discount"))
    }
}

/// Fixed percentage off the line total, rounded down to the smallest unit.
#[derive(Debug, Clone, Copy)]
pub struct PercentageDiscount {
    percent: u8,
}

impl PercentageDiscount {
    pub fn new(percent: u8) -> DomainResult<Self> {
        if percent > 100 {
            return Err(DomainError::validation("discount percent must be at most 100"));
        }
        Ok(Self { percent })
    }
}

impl DiscountPolicy for PercentageDiscount {
    fn apply_discount(
        &self,
        _product: &Product,
        quantity: u32,
        unit_price: &Money,
    ) -> DomainResult<Discount> {
        let line_total = unit_price.multiply_by(quantity)?;
        let amount = line_total.amount() / 100 * i64::from(self.percent)
            + line_total.amount() % 100 * i64::from(self.percent) / 100;
        Ok(Discount::new(
            Money::new(amount, unit_price.currency()),
            format!("{}% off", self.percent),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecommerce_core::{AggregateId, Currency};
    use ecommerce_products::{ProductId, ProductType};

    fn test_product() -> Product {
        Product::new(
            ProductId::new(AggregateId::new()),
            Money::new(1000, Currency::USD),
            "Test Product",
            ProductType::Standard,
        )
    }

    #[test]
    fn no_discount_is_zero_in_price_currency() {
        let product = test_product();
        let discount = NoDiscount
            .apply_discount(&product, 3, &product.price())
            .unwrap();
        assert_eq!(discount.amount, Money::zero(Currency::USD));
    }

    #[test]
    fn percentage_discount_applies_to_line_total() {
        let product = test_product();
        let discount = PercentageDiscount::new(10)
            .unwrap()
            .apply_discount(&product, 3, &product.price())
            .unwrap();
        assert_eq!(discount.amount, Money::new(300, Currency::USD));
        assert_eq!(discount.cause, "10% off");
    }

    #[test]
    fn percentage_discount_rounds_down() {
        let product = test_product();
        let discount = PercentageDiscount::new(15)
            .unwrap()
            .apply_discount(&product, 1, &Money::new(199, Currency::USD))
            .unwrap();
        // 15% of 1.99 = 0.2985
        assert_eq!(discount.amount, Money::new(29, Currency::USD));
    }

    #[test]
    fn percentage_discount_rejects_more_than_100() {
        let err = PercentageDiscount::new(101).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
