//! Stock reservation advice.
//!
//! The advisory arithmetic is deliberately `f64`: it drives display text,
//! not billing, and the stock counts arrive as plain numbers. Billing math
//! stays decimal-exact in [`crate::pricing`].

use serde::{Deserialize, Serialize};

use shoplite_catalog::StockDescriptor;
use shoplite_locale::{Localizer, Message};

/// Outcome of evaluating one cart line against the item's stock limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "count")]
pub enum ReservationAdvisory {
    /// No limitation, or nothing reserved.
    None,
    /// Reservations exist, spread over more than this line's quantity.
    SomeReserved,
    /// Exactly this many items of the line are reserved.
    NumberReserved(f64),
    /// The sellable limit is exceeded by this many items.
    PartlyExceeded(f64),
    /// Nothing left to sell at all.
    CompletelyExceeded,
}

/// Decide the advisory for one cart line.
///
/// `aggregated_count` is the item's total quantity across all open carts;
/// `requested_count` is the quantity on the line being evaluated. Total
/// function; every input combination yields an advisory.
pub fn advise(
    stock: StockDescriptor,
    aggregated_count: f64,
    requested_count: f64,
) -> ReservationAdvisory {
    // No limitation.
    let Some(available) = stock.available else {
        return ReservationAdvisory::None;
    };
    // Number of reserved items.
    let mut reserved = 0.0;
    if available <= 0.0 {
        reserved = aggregated_count;
    } else if available - aggregated_count < 0.0 {
        reserved = (available - aggregated_count).abs();
    }
    // Number of items exceeding the limit. Without an overbook threshold
    // there is no exceed, only reservations.
    let mut exceed = 0.0;
    if let Some(overbook) = stock.overbook {
        if reserved > overbook {
            exceed = reserved - overbook;
        }
    }
    if reserved == 0.0 && exceed == 0.0 {
        return ReservationAdvisory::None;
    }
    // Total number of sellable items, overbook included.
    let overbook = stock.overbook.unwrap_or(0.0);
    let total_available = if available >= 0.0 {
        available + overbook
    } else {
        overbook - available
    };
    if exceed > 0.0 {
        if total_available > 0.0 {
            return ReservationAdvisory::PartlyExceeded(exceed);
        }
        return ReservationAdvisory::CompletelyExceeded;
    }
    // Reservations only. A single line holding the whole aggregate gets the
    // concrete number; otherwise the rest is spread over other carts.
    if aggregated_count > requested_count {
        ReservationAdvisory::SomeReserved
    } else {
        ReservationAdvisory::NumberReserved(reserved)
    }
}

/// Whether `requested_count` may be taken without pushing remaining stock
/// below the negative overbook threshold. Unlimited stock, or a missing
/// overbook threshold, validates everything.
pub fn validate_count(stock: StockDescriptor, requested_count: f64) -> bool {
    let (Some(available), Some(overbook)) = (stock.available, stock.overbook) else {
        return true;
    };
    available - requested_count >= -overbook
}

impl ReservationAdvisory {
    /// The display message for this advisory, or `None` when silent.
    pub fn message(&self) -> Option<Message> {
        match self {
            ReservationAdvisory::None => None,
            ReservationAdvisory::SomeReserved => Some(Message::new(
                "alert_item_some_reserved",
                "Some items reserved",
            )),
            ReservationAdvisory::NumberReserved(reserved) => Some(
                Message::new("alert_item_number_reserved", "${reserved} items reserved")
                    .with_arg("reserved", format_count(*reserved)),
            ),
            ReservationAdvisory::PartlyExceeded(exceed) => Some(
                Message::new("alert_item_number_exceed", "Limit exceed by ${exceed} items")
                    .with_arg("exceed", format_count(*exceed)),
            ),
            ReservationAdvisory::CompletelyExceeded => Some(Message::new(
                "alert_item_no_longer_available",
                "Item is no longer available, please remove from cart",
            )),
        }
    }

    /// Render through the given localizer; silent advisories render empty.
    pub fn render(&self, localizer: &dyn Localizer) -> String {
        self.message()
            .map(|message| localizer.translate(&message))
            .unwrap_or_default()
    }
}

/// Counts read naturally in messages: integral values drop the fraction.
fn format_count(count: f64) -> String {
    if count.fract() == 0.0 {
        format!("{}", count as i64)
    } else {
        format!("{}", count)
    }
}

/// Reservation state of one item against the carts a store tracks.
///
/// Binds the stock limits and the externally aggregated count so callers
/// evaluate line quantities against one snapshot.
#[derive(Debug, Clone, Copy)]
pub struct ItemReservationState {
    stock: StockDescriptor,
    aggregated_count: f64,
}

impl ItemReservationState {
    pub fn new(stock: StockDescriptor, aggregated_count: f64) -> Self {
        Self {
            stock,
            aggregated_count,
        }
    }

    pub fn advise(&self, requested_count: f64) -> ReservationAdvisory {
        advise(self.stock, self.aggregated_count, requested_count)
    }

    pub fn validate_count(&self, requested_count: f64) -> bool {
        validate_count(self.stock, requested_count)
    }

    /// Advisory text for a line of `requested_count`; empty when silent.
    pub fn message(&self, requested_count: f64, localizer: &dyn Localizer) -> String {
        self.advise(requested_count).render(localizer)
    }
}
