//! Cart cookie codec.
//!
//! The cart travels as a cookie value of comma-separated entries
//! `item:quantity` or `item:quantity;comment`, the comment percent-encoded
//! so it cannot collide with the separators.

use rust_decimal::Decimal;

use crate::line::CartLine;

const ENTRY_SEPARATOR: char = ',';
const FIELD_SEPARATOR: char = ':';
const COMMENT_SEPARATOR: char = ';';

/// Decode a cart cookie value into its ordered lines.
///
/// Malformed entries are skipped, matching the tolerance for stale lines
/// elsewhere in the cart: a broken cookie must not take the whole cart down.
pub fn read_cookie(value: &str) -> Vec<CartLine> {
    value
        .split(ENTRY_SEPARATOR)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| match parse_entry(entry) {
            Some(line) => Some(line),
            None => {
                tracing::warn!("skipping malformed cart cookie entry: {:?}", entry);
                None
            }
        })
        .collect()
}

fn parse_entry(entry: &str) -> Option<CartLine> {
    let (head, comment) = match entry.split_once(COMMENT_SEPARATOR) {
        Some((head, raw)) => (head, Some(urlencoding::decode(raw).ok()?.into_owned())),
        None => (entry, None),
    };
    let (id, quantity) = head.split_once(FIELD_SEPARATOR)?;
    let item_id = id.parse().ok()?;
    let quantity: Decimal = quantity.parse().ok()?;
    if quantity.is_sign_negative() {
        return None;
    }
    Some(CartLine {
        item_id,
        quantity,
        comment,
    })
}

/// Encode lines back into a cookie value. Inverse of [`read_cookie`] for
/// every valid cart.
pub fn write_cookie(lines: &[CartLine]) -> String {
    lines
        .iter()
        .map(|line| match &line.comment {
            Some(comment) => format!(
                "{}{}{}{}{}",
                line.item_id,
                FIELD_SEPARATOR,
                line.quantity,
                COMMENT_SEPARATOR,
                urlencoding::encode(comment)
            ),
            None => format!("{}{}{}", line.item_id, FIELD_SEPARATOR, line.quantity),
        })
        .collect::<Vec<_>>()
        .join(&ENTRY_SEPARATOR.to_string())
}
