//! Voucher Records

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::uuids::TypedUuid;

/// Voucher UUID
pub type VoucherUuid = TypedUuid<VoucherRecord>;

/// Voucher Record
#[derive(Debug, Clone, PartialEq)]
pub struct VoucherRecord {
    pub uuid: VoucherUuid,
    pub code: String,
    pub description: String,
    pub discount_percent: Decimal,
    pub max_discount: u64,
    pub min_order_value: u64,
    pub expires_at: Timestamp,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
