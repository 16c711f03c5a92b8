//! Payment response models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::payments::records::{PaymentMethodRecord, PaymentRecord};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PaymentMethodResponse {
    pub code: String,
    pub name: String,
    pub description: String,
}

impl From<PaymentMethodRecord> for PaymentMethodResponse {
    fn from(method: PaymentMethodRecord) -> Self {
        PaymentMethodResponse {
            code: method.code,
            name: method.name,
            description: method.description,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PaymentResponse {
    pub uuid: Uuid,
    pub order_uuid: Uuid,
    pub method: String,
    pub method_name: String,

    /// Order total at the time of payment, in minor units
    pub amount: u64,

    pub status: String,
    pub paid_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<PaymentRecord> for PaymentResponse {
    fn from(payment: PaymentRecord) -> Self {
        PaymentResponse {
            uuid: payment.uuid.into(),
            order_uuid: payment.order_uuid.into(),
            method: payment.method_code,
            method_name: payment.method_name,
            amount: payment.amount,
            status: payment.status.to_string(),
            paid_at: payment.paid_at.as_ref().map(ToString::to_string),
            created_at: payment.created_at.to_string(),
            updated_at: payment.updated_at.to_string(),
        }
    }
}
