//! Item data surface: pricing, stock limits, lookup traits.

use serde::{Deserialize, Serialize};

use shoplite_core::{DomainResult, ItemId, Money, VatRate};
use shoplite_locale::Message;

/// Pricing data for one buyable item, owned by the item data provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPricing {
    /// Unit net price.
    pub net: Money,
    /// VAT rate applied on top of `net`.
    pub vat: VatRate,
    /// Whether displayed prices include VAT.
    pub display_gross: bool,
}

/// Stock limits for one item.
///
/// `available` absent means unlimited stock. `overbook` absent disables the
/// exceed branch of reservation messaging; reserved-only messages can still
/// fire.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StockDescriptor {
    pub available: Option<f64>,
    pub overbook: Option<f64>,
}

impl StockDescriptor {
    pub fn limited(available: f64, overbook: f64) -> Self {
        Self {
            available: Some(available),
            overbook: Some(overbook),
        }
    }

    pub fn unlimited() -> Self {
        Self::default()
    }
}

/// Item data collaborator, polymorphic per content type.
///
/// Pricing reads can fail: a content object may miss the fields the shop
/// expects, and that is surfaced to the caller rather than swallowed.
pub trait ItemData {
    fn pricing(&self) -> DomainResult<ItemPricing>;

    /// Whether a buyer comment must accompany this item.
    fn comment_required(&self) -> bool {
        false
    }

    /// Label of the unit quantities are counted in ("items", "kg").
    fn quantity_unit(&self) -> Message;

    /// Whether fractional quantities are allowed for this item.
    fn quantity_unit_float(&self) -> bool {
        false
    }

    fn stock(&self) -> StockDescriptor {
        StockDescriptor::unlimited()
    }
}

/// One resolvable catalog entry: listing metadata plus its item data.
pub trait CatalogItem {
    fn id(&self) -> ItemId;
    fn title(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    fn url(&self) -> String;

    fn preview_image_url(&self) -> Option<String> {
        None
    }

    fn data(&self) -> &dyn ItemData;
}

/// Catalog/search collaborator: resolves an item id to a content object.
///
/// `None` means the item is gone (deleted, retracted); callers dealing with
/// carts treat that as a stale reference, not an error.
pub trait Catalog {
    fn resolve(&self, id: &ItemId) -> Option<&dyn CatalogItem>;
}
