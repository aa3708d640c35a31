//! Cart store collaborator.

use rust_decimal::Decimal;

use shoplite_core::ItemId;

use crate::cookie::read_cookie;
use crate::line::{CartLine, aggregate_cart_item_count};

/// Cart store seam.
///
/// The current cart is cookie-backed; the aggregated count spans every open
/// cart tracked by the store, which is external input to the reservation
/// adviser.
pub trait CartStore {
    /// Lines of the current cart, in cookie order.
    fn lines(&self) -> Vec<CartLine>;

    /// Total quantity of `item_id` across all open carts.
    fn aggregated_count(&self, item_id: ItemId) -> Decimal;
}

/// Store over a single cookie value: the current cart is the only open cart
/// it knows about.
#[derive(Debug, Clone, Default)]
pub struct CookieCartStore {
    lines: Vec<CartLine>,
}

impl CookieCartStore {
    pub fn from_cookie(value: &str) -> Self {
        Self {
            lines: read_cookie(value),
        }
    }

    pub fn new(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }
}

impl CartStore for CookieCartStore {
    fn lines(&self) -> Vec<CartLine> {
        self.lines.clone()
    }

    fn aggregated_count(&self, item_id: ItemId) -> Decimal {
        aggregate_cart_item_count(item_id, &self.lines)
    }
}
