//! Cart lines.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shoplite_core::ItemId;

/// One line of the ephemeral cart: item, quantity, optional buyer comment.
///
/// Lines are reconstructed per request from the cart cookie; nothing here is
/// persisted by this workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub item_id: ItemId,
    /// Non-negative; fractional for items sold in fractional units.
    pub quantity: Decimal,
    pub comment: Option<String>,
}

impl CartLine {
    pub fn new(item_id: ItemId, quantity: Decimal) -> Self {
        Self {
            item_id,
            quantity,
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// Total quantity of `item_id` across the given lines.
pub fn aggregate_cart_item_count(item_id: ItemId, lines: &[CartLine]) -> Decimal {
    lines
        .iter()
        .filter(|line| line.item_id == item_id)
        .map(|line| line.quantity)
        .sum()
}
