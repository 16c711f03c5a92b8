//! Order numbers.

use jiff::Timestamp;

/// Human-readable order number, `ORD-<unix microseconds>`.
///
/// Not a key: orders are identified by UUID and the column carries no
/// uniqueness constraint, so a clash never rejects an order.
#[must_use]
pub fn order_number(now: Timestamp) -> String {
    format!("ORD-{}", now.as_microsecond())
}
