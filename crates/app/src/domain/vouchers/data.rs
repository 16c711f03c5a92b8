//! Voucher Data

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::domain::vouchers::records::VoucherUuid;

/// New Voucher Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewVoucher {
    pub uuid: VoucherUuid,
    pub code: String,
    pub description: String,
    pub discount_percent: Decimal,
    pub max_discount: u64,
    pub min_order_value: u64,
    pub expires_at: Timestamp,
}
