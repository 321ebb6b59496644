//! Taxes and the policy port that computes them.

use serde::{Deserialize, Serialize};

use ecommerce_core::{DomainError, DomainResult, Money, ValueObject};
use ecommerce_products::ProductType;

/// Tax charged on one invoice line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tax {
    pub amount: Money,
    pub description: String,
}

impl Tax {
    pub fn new(amount: Money, description: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
        }
    }
}

impl ValueObject for Tax {}

/// Computes the tax for one invoice line from its product type and net amount.
pub trait TaxPolicy {
    fn calculate_tax(&self, product_type: ProductType, net: &Money) -> DomainResult<Tax>;
}

/// Flat rate per product type, rounded down to the smallest currency unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardTaxPolicy {
    standard_percent: u8,
    food_percent: u8,
    drug_percent: u8,
}

impl StandardTaxPolicy {
    pub fn new(standard_percent: u8, food_percent: u8, drug_percent: u8) -> DomainResult<Self> {
        if [standard_percent, food_percent, drug_percent]
            .iter()
            .any(|p| *p > 100)
        {
            return Err(DomainError::validation("tax percent must be at most 100"));
        }
        Ok(Self {
            standard_percent,
            food_percent,
            drug_percent,
        })
    }

    fn rate(&self, product_type: ProductType) -> (u8, &'static str) {
        match product_type {
            ProductType::Standard => (self.standard_percent, ""),
            ProductType::Food => (self.food_percent, " (F)"),
            ProductType::Drug => (self.drug_percent, " (D)"),
        }
    }
}

impl Default for StandardTaxPolicy {
    fn default() -> Self {
        Self {
            standard_percent: 23,
            food_percent: 7,
            drug_percent: 5,
        }
    }
}

impl TaxPolicy for StandardTaxPolicy {
    fn calculate_tax(&self, product_type: ProductType, net: &Money) -> DomainResult<Tax> {
        let (percent, suffix) = self.rate(product_type);
        let percent = i64::from(percent);
        let amount = net.amount() / 100 * percent + net.amount() % 100 * percent / 100;
        Ok(Tax::new(
            Money::new(amount, net.currency()),
            format!("{percent}%{suffix}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecommerce_core::Currency;

    #[test]
    fn default_rates_depend_on_product_type() {
        let policy = StandardTaxPolicy::default();
        let net = Money::new(10_000, Currency::PLN);

        let standard = policy.calculate_tax(ProductType::Standard, &net).unwrap();
        let food = policy.calculate_tax(ProductType::Food, &net).unwrap();
        let drug = policy.calculate_tax(ProductType::Drug, &net).unwrap();

        assert_eq!(standard, Tax::new(Money::new(2_300, Currency::PLN), "23%"));
        assert_eq!(food, Tax::new(Money::new(700, Currency::PLN), "7% (F)"));
        assert_eq!(drug, Tax::new(Money::new(500, Currency::PLN), "5% (D)"));
    }

    #[test]
    fn tax_rounds_down() {
        let tax = StandardTaxPolicy::default()
            .calculate_tax(ProductType::Standard, &Money::from_minor(199))
            .unwrap();
        // 23% of 1.99 = 0.4577
        assert_eq!(tax.amount, Money::from_minor(45));
    }

    #[test]
    fn rejects_rates_above_100() {
        assert!(StandardTaxPolicy::new(101, 0, 0).is_err());
        assert!(StandardTaxPolicy::new(0, 0, 100).is_ok());
    }
}
