//! Item data backed by the buyable extension fields.

use rust_decimal::Decimal;

use shoplite_catalog::{ItemData, ItemPricing, StockDescriptor};
use shoplite_core::{DomainError, DomainResult, Money, VatRate};
use shoplite_locale::Message;

use crate::access::{FieldAccess, FieldValue, field_value};

/// Item data read from the extension fields of a content object.
///
/// `item_price` is the unit net price, `item_vat` the VAT percentage. The
/// display mode and stock limits are injected; the content object does not
/// carry them.
pub struct FieldBackedItemData<'a> {
    content: &'a dyn FieldAccess,
    display_gross: bool,
    quantity_unit: Message,
    stock: StockDescriptor,
}

impl<'a> FieldBackedItemData<'a> {
    pub fn new(content: &'a dyn FieldAccess) -> Self {
        Self {
            content,
            display_gross: false,
            quantity_unit: Message::new("quantity_unit_items", "items"),
            stock: StockDescriptor::unlimited(),
        }
    }

    pub fn with_display_gross(mut self, display_gross: bool) -> Self {
        self.display_gross = display_gross;
        self
    }

    pub fn with_quantity_unit(mut self, unit: Message) -> Self {
        self.quantity_unit = unit;
        self
    }

    pub fn with_stock(mut self, stock: StockDescriptor) -> Self {
        self.stock = stock;
        self
    }

    /// Whether the content object is flagged buyable at all.
    ///
    /// An unset flag means not buyable; only the pricing fields are strict.
    pub fn buyable(&self) -> bool {
        matches!(
            self.content.field("item_buyable"),
            Some(FieldValue::Bool(true))
        )
    }
}

impl ItemData for FieldBackedItemData<'_> {
    fn pricing(&self) -> DomainResult<ItemPricing> {
        let net = match field_value(self.content, "item_price")? {
            FieldValue::Number(value) => Money::new(value),
            other => {
                return Err(DomainError::validation(format!(
                    "item_price: expected a number, got {:?}",
                    other
                )));
            }
        };
        let vat = match field_value(self.content, "item_vat")? {
            FieldValue::Text(value) => VatRate::new(value.parse::<Decimal>().map_err(|e| {
                DomainError::validation(format!("item_vat: {}", e))
            })?),
            FieldValue::Number(value) => VatRate::new(value),
            other => {
                return Err(DomainError::validation(format!(
                    "item_vat: expected a percentage, got {:?}",
                    other
                )));
            }
        };
        Ok(ItemPricing {
            net,
            vat,
            display_gross: self.display_gross,
        })
    }

    fn quantity_unit(&self) -> Message {
        self.quantity_unit.clone()
    }

    fn stock(&self) -> StockDescriptor {
        self.stock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::BTreeMap;

    struct MapContent(BTreeMap<&'static str, FieldValue>);

    impl FieldAccess for MapContent {
        fn field(&self, name: &str) -> Option<FieldValue> {
            self.0.get(name).cloned()
        }
    }

    fn buyable_content() -> MapContent {
        MapContent(BTreeMap::from([
            ("item_buyable", FieldValue::Bool(true)),
            ("item_price", FieldValue::Number(dec!(9.90))),
            ("item_vat", FieldValue::Text("20".to_string())),
        ]))
    }

    #[test]
    fn reads_pricing_from_fields() {
        let content = buyable_content();
        let data = FieldBackedItemData::new(&content).with_display_gross(true);

        assert!(data.buyable());
        let pricing = data.pricing().unwrap();
        assert_eq!(pricing.net, Money::new(dec!(9.90)));
        assert_eq!(pricing.vat, VatRate::new(dec!(20)));
        assert!(pricing.display_gross);
    }

    #[test]
    fn missing_price_field_surfaces() {
        let content = MapContent(BTreeMap::from([(
            "item_vat",
            FieldValue::Text("10".to_string()),
        )]));
        let data = FieldBackedItemData::new(&content);

        let err = data.pricing().unwrap_err();
        assert_eq!(err, DomainError::attribute_not_found("item_price"));
    }

    #[test]
    fn unparseable_vat_is_a_validation_error() {
        let content = MapContent(BTreeMap::from([
            ("item_price", FieldValue::Number(dec!(5))),
            ("item_vat", FieldValue::Text("lots".to_string())),
        ]));
        let data = FieldBackedItemData::new(&content);

        assert!(matches!(
            data.pricing().unwrap_err(),
            DomainError::Validation(_)
        ));
    }

    #[test]
    fn unset_buyable_flag_means_not_buyable() {
        let content = MapContent(BTreeMap::new());
        assert!(!FieldBackedItemData::new(&content).buyable());
    }
}
