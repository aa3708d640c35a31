//! Cart data assembly for rendering.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use shoplite_catalog::Catalog;
use shoplite_core::{DomainResult, ItemId, Money};
use shoplite_locale::Localizer;
use shoplite_settings::{SettingsStore, ShopSettings};

use crate::line::CartLine;
use crate::pricing::CartCalculator;
use crate::reservation::ItemReservationState;
use crate::store::CartStore;

/// One cart line resolved into everything the cart rendering needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItemView {
    pub item_id: ItemId,
    pub title: String,
    pub count: Decimal,
    /// Line price; gross when the item displays gross, net otherwise.
    pub price: Money,
    pub url: String,
    pub comment: Option<String>,
    pub description: String,
    pub comment_required: bool,
    pub quantity_unit_float: bool,
    /// Translated unit label.
    pub quantity_unit: String,
    pub preview_image_url: Option<String>,
    /// The requested quantity can no longer be taken at all.
    pub no_longer_available: bool,
    /// Rendered reservation advisory; empty when there is nothing to say.
    pub alert: String,
}

/// Assembles cart views, totals and shop settings from the injected
/// collaborators. One instance serves one request.
pub struct CartDataProvider<'a> {
    catalog: &'a dyn Catalog,
    settings: ShopSettings<'a>,
    localizer: &'a dyn Localizer,
    store: &'a dyn CartStore,
}

impl<'a> CartDataProvider<'a> {
    pub fn new(
        catalog: &'a dyn Catalog,
        settings: &'a dyn SettingsStore,
        localizer: &'a dyn Localizer,
        store: &'a dyn CartStore,
    ) -> Self {
        Self {
            catalog,
            settings: ShopSettings::new(settings),
            localizer,
            store,
        }
    }

    fn calculator(&self) -> CartCalculator<'a> {
        CartCalculator::new(self.catalog)
    }

    /// Total net amount over the given lines.
    pub fn net(&self, lines: &[CartLine]) -> DomainResult<Money> {
        self.calculator().net(lines)
    }

    /// Total VAT amount over the given lines.
    pub fn vat(&self, lines: &[CartLine]) -> DomainResult<Money> {
        self.calculator().vat(lines)
    }

    /// Resolve each line into a view. Stale lines are skipped; broken
    /// pricing data on a resolvable item propagates.
    pub fn cart_items(&self, lines: &[CartLine]) -> DomainResult<Vec<CartItemView>> {
        let mut views = Vec::with_capacity(lines.len());
        for line in lines {
            let Some(item) = self.catalog.resolve(&line.item_id) else {
                tracing::debug!("skipping stale cart line: {}", line.item_id);
                continue;
            };
            let data = item.data();
            let pricing = data.pricing()?;

            let mut price = pricing.net * line.quantity;
            if pricing.display_gross {
                price += pricing.vat.apply_to(price);
            }

            let requested = to_count(line.quantity);
            let aggregated = to_count(self.store.aggregated_count(line.item_id));
            let state = ItemReservationState::new(data.stock(), aggregated);

            views.push(CartItemView {
                item_id: line.item_id,
                title: item.title().to_string(),
                count: line.quantity,
                price,
                url: item.url(),
                comment: line.comment.clone(),
                description: item.description().to_string(),
                comment_required: data.comment_required(),
                quantity_unit_float: data.quantity_unit_float(),
                quantity_unit: self.localizer.translate(&data.quantity_unit()),
                preview_image_url: item.preview_image_url(),
                no_longer_available: !state.validate_count(requested),
                alert: state.message(requested, self.localizer),
            });
        }
        Ok(views)
    }

    pub fn currency(&self) -> String {
        self.settings.currency()
    }

    pub fn show_checkout(&self) -> bool {
        self.settings.show_checkout()
    }

    pub fn show_to_cart(&self) -> bool {
        self.settings.show_to_cart()
    }

    pub fn show_currency(&self) -> bool {
        self.settings.show_currency()
    }

    pub fn disable_max_article(&self) -> bool {
        self.settings.disable_max_article()
    }

    pub fn summary_total_only(&self) -> bool {
        self.settings.summary_total_only()
    }

    pub fn include_shipping_costs(&self) -> bool {
        self.settings.include_shipping_costs()
    }

    pub fn shipping_method(&self) -> String {
        self.settings.shipping_method()
    }

    /// Checkout view URL for the given site base.
    pub fn checkout_url(&self, base: &str) -> String {
        format!("{}/@@checkout", base.trim_end_matches('/'))
    }
}

/// Advisory arithmetic runs on plain floats.
fn to_count(quantity: Decimal) -> f64 {
    quantity.to_f64().unwrap_or(0.0)
}
