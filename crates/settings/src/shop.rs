//! Typed read-through over the shop's settings keys.

use serde_json::Value;

use crate::store::SettingsStore;

/// Shop settings, read through the injected store on every access.
///
/// Keys are namespaced `shop.*`. Values missing from the store, or stored
/// with the wrong type, fall back to the defaults below. No logic beyond
/// the read-through.
pub struct ShopSettings<'a> {
    store: &'a dyn SettingsStore,
}

impl<'a> ShopSettings<'a> {
    pub fn new(store: &'a dyn SettingsStore) -> Self {
        Self { store }
    }

    fn string(&self, key: &str, default: &str) -> String {
        match self.store.get(key) {
            Some(Value::String(s)) => s,
            _ => default.to_string(),
        }
    }

    fn flag(&self, key: &str, default: bool) -> bool {
        match self.store.get(key) {
            Some(Value::Bool(b)) => b,
            _ => default,
        }
    }

    /// ISO currency code shown next to prices.
    pub fn currency(&self) -> String {
        self.string("shop.currency", "EUR")
    }

    pub fn show_checkout(&self) -> bool {
        self.flag("shop.show_checkout", true)
    }

    pub fn show_to_cart(&self) -> bool {
        self.flag("shop.show_to_cart", true)
    }

    pub fn show_currency(&self) -> bool {
        self.flag("shop.show_currency", true)
    }

    pub fn disable_max_article(&self) -> bool {
        self.flag("shop.disable_max_article", false)
    }

    pub fn summary_total_only(&self) -> bool {
        self.flag("shop.summary_total_only", false)
    }

    pub fn include_shipping_costs(&self) -> bool {
        self.flag("shop.include_shipping_costs", false)
    }

    pub fn shipping_method(&self) -> String {
        self.string("shop.shipping_method", "flat_rate")
    }
}
