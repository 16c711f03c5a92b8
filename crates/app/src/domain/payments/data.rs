//! Payment Data

use crate::domain::orders::records::OrderUuid;

/// New Payment Data
///
/// The amount is always the order total, so callers only pick the method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPayment {
    pub order_uuid: OrderUuid,
    pub method_code: String,
}
