//! Voucher discount evaluation.

use jiff::Timestamp;
use rust_decimal::{Decimal, prelude::ToPrimitive};

use crate::domain::vouchers::records::VoucherRecord;

/// Discount a voucher grants on `subtotal` at `now`, in minor units.
///
/// Zero when there is no voucher, or it is inactive, expired (`now >= expires_at`)
/// or the subtotal is below its minimum order value. Otherwise the percentage
/// of the subtotal, truncated toward zero and capped at the voucher maximum.
#[must_use]
pub fn discount_for(voucher: Option<&VoucherRecord>, subtotal: u64, now: Timestamp) -> u64 {
    let Some(voucher) = voucher else {
        return 0;
    };

    if !voucher.is_active || now >= voucher.expires_at || subtotal < voucher.min_order_value {
        return 0;
    }

    if voucher.discount_percent <= Decimal::ZERO {
        return 0;
    }

    let percentage = Decimal::from(subtotal)
        .checked_mul(voucher.discount_percent)
        .and_then(|amount| amount.checked_div(Decimal::ONE_HUNDRED))
        .and_then(|amount| amount.trunc().to_u64());

    percentage
        .unwrap_or(voucher.max_discount)
        .min(voucher.max_discount)
        .min(subtotal)
}
