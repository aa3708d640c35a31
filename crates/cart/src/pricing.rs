//! Cart totals: decimal-exact net and VAT sums.

use shoplite_catalog::Catalog;
use shoplite_core::{DomainResult, Money};

use crate::line::CartLine;

/// Sums net and VAT amounts over cart lines.
///
/// Lines whose item no longer resolves are skipped: stale cart references to
/// deleted items are expected and must not abort the total. A resolvable
/// item with broken pricing data is a different matter and propagates.
pub struct CartCalculator<'a> {
    catalog: &'a dyn Catalog,
}

impl<'a> CartCalculator<'a> {
    pub fn new(catalog: &'a dyn Catalog) -> Self {
        Self { catalog }
    }

    /// Total net amount: `unit_net * quantity` per resolvable line.
    pub fn net(&self, lines: &[CartLine]) -> DomainResult<Money> {
        let mut net = Money::zero();
        for line in lines {
            let Some(item) = self.catalog.resolve(&line.item_id) else {
                tracing::debug!("skipping stale cart line: {}", line.item_id);
                continue;
            };
            let pricing = item.data().pricing()?;
            net += pricing.net * line.quantity;
        }
        Ok(net)
    }

    /// Total VAT amount: `(unit_net / 100) * vat_percent * quantity` per
    /// resolvable line.
    pub fn vat(&self, lines: &[CartLine]) -> DomainResult<Money> {
        let mut vat = Money::zero();
        for line in lines {
            let Some(item) = self.catalog.resolve(&line.item_id) else {
                tracing::debug!("skipping stale cart line: {}", line.item_id);
                continue;
            };
            let pricing = item.data().pricing()?;
            vat += pricing.vat.apply_to(pricing.net) * line.quantity;
        }
        Ok(vat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use shoplite_catalog::{BuyableRecord, InMemoryCatalog, ItemPricing};
    use shoplite_core::{ItemId, VatRate};

    fn record(id: ItemId, net: Decimal, vat: Decimal) -> BuyableRecord {
        BuyableRecord::new(
            id,
            "item",
            "/shop/item",
            ItemPricing {
                net: Money::new(net),
                vat: VatRate::new(vat),
                display_gross: false,
            },
        )
    }

    #[test]
    fn empty_cart_totals_are_zero() {
        let catalog = InMemoryCatalog::new();
        let calculator = CartCalculator::new(&catalog);

        assert_eq!(calculator.net(&[]).unwrap(), Money::zero());
        assert_eq!(calculator.vat(&[]).unwrap(), Money::zero());
    }

    #[test]
    fn sums_net_and_vat_per_line() {
        let mut catalog = InMemoryCatalog::new();
        let apples = ItemId::new();
        let wine = ItemId::new();
        catalog.insert(record(apples, dec!(2.50), dec!(10)));
        catalog.insert(record(wine, dec!(12.00), dec!(20)));
        let calculator = CartCalculator::new(&catalog);

        let lines = vec![
            CartLine::new(apples, dec!(4)),
            CartLine::new(wine, dec!(2)),
        ];

        // 2.50 * 4 + 12.00 * 2
        assert_eq!(calculator.net(&lines).unwrap(), Money::new(dec!(34.00)));
        // 0.25 * 4 + 2.40 * 2
        assert_eq!(calculator.vat(&lines).unwrap(), Money::new(dec!(5.80)));
    }

    #[test]
    fn fractional_quantities_stay_exact() {
        let mut catalog = InMemoryCatalog::new();
        let cheese = ItemId::new();
        catalog.insert(record(cheese, dec!(23.90), dec!(10)));
        let calculator = CartCalculator::new(&catalog);

        let lines = vec![CartLine::new(cheese, dec!(0.250))];

        assert_eq!(calculator.net(&lines).unwrap(), Money::new(dec!(5.9750)));
        assert_eq!(calculator.vat(&lines).unwrap(), Money::new(dec!(0.59750)));
    }

    #[test]
    fn stale_lines_are_skipped_silently() {
        let mut catalog = InMemoryCatalog::new();
        let kept = ItemId::new();
        catalog.insert(record(kept, dec!(5), dec!(20)));
        let calculator = CartCalculator::new(&catalog);

        let lines = vec![
            CartLine::new(ItemId::new(), dec!(99)),
            CartLine::new(kept, dec!(1)),
        ];

        assert_eq!(calculator.net(&lines).unwrap(), Money::new(dec!(5)));
        assert_eq!(calculator.vat(&lines).unwrap(), Money::new(dec!(1.00)));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: VAT is linear in each line's quantity.
            #[test]
            fn vat_is_linear_in_quantity(
                net in 1u32..100_000,
                vat in 0u32..40,
                quantity in 1u32..500,
            ) {
                let mut catalog = InMemoryCatalog::new();
                let id = ItemId::new();
                catalog.insert(record(
                    id,
                    Decimal::from(net) / Decimal::from(100u32),
                    Decimal::from(vat),
                ));
                let calculator = CartCalculator::new(&catalog);

                let single = vec![CartLine::new(id, Decimal::from(quantity))];
                let doubled = vec![CartLine::new(id, Decimal::from(quantity * 2))];

                let single_vat = calculator.vat(&single).unwrap();
                let doubled_vat = calculator.vat(&doubled).unwrap();
                prop_assert_eq!(single_vat + single_vat, doubled_vat);

                let single_net = calculator.net(&single).unwrap();
                let doubled_net = calculator.net(&doubled).unwrap();
                prop_assert_eq!(single_net + single_net, doubled_net);
            }
        }
    }
}
