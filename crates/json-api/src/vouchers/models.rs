//! Voucher response models.

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::vouchers::records::VoucherRecord;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VoucherResponse {
    pub uuid: Uuid,
    pub code: String,
    pub description: String,

    /// Percentage of the subtotal, e.g. "12.5"
    #[salvo(schema(value_type = String))]
    pub discount_percent: Decimal,

    /// Cap on the discount, in minor units
    pub max_discount: u64,

    /// Smallest subtotal the voucher applies to, in minor units
    pub min_order_value: u64,

    pub expires_at: String,
    pub is_active: bool,
    pub created_at: String,
}

impl From<VoucherRecord> for VoucherResponse {
    fn from(voucher: VoucherRecord) -> Self {
        VoucherResponse {
            uuid: voucher.uuid.into(),
            code: voucher.code,
            description: voucher.description,
            discount_percent: voucher.discount_percent,
            max_discount: voucher.max_discount,
            min_order_value: voucher.min_order_value,
            expires_at: voucher.expires_at.to_string(),
            is_active: voucher.is_active,
            created_at: voucher.created_at.to_string(),
        }
    }
}
