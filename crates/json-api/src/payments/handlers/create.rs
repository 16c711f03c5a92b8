//! Create Payment Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::payments::data::NewPayment;

use crate::{
    errors::ApiError,
    extensions::*,
    payments::{errors::into_api_error, models::PaymentResponse},
    state::State,
};

/// Create Payment Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreatePaymentRequest {
    pub order_id: Uuid,

    /// Payment method code, e.g. COD
    pub method: String,
}

impl From<CreatePaymentRequest> for NewPayment {
    fn from(request: CreatePaymentRequest) -> Self {
        NewPayment {
            order_uuid: request.order_id.into(),
            method_code: request.method,
        }
    }
}

/// Create Payment Handler
///
/// Records a pending payment of the order total.
#[endpoint(
    tags("payments"),
    summary = "Create Payment",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Payment recorded"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown payment method"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreatePaymentRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<PaymentResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let payment = state
        .app
        .payments
        .create_payment(principal, json.into_inner().into())
        .await
        .map_err(into_api_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(payment.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::domain::{
        orders::records::OrderUuid,
        payments::{MockPaymentsService, PaymentsServiceError, records::PaymentStatus},
    };

    use crate::{
        errors::ErrorBody,
        payments::handlers::tests::make_payment,
        test_helpers::{TestState, customer, service_as},
    };

    use super::*;

    fn make_service(payments: MockPaymentsService) -> Service {
        service_as(
            customer(),
            TestState::default().payments(payments),
            Router::with_path("api/payments").post(handler),
        )
    }

    #[tokio::test]
    async fn test_create_payment_returns_pending_payment() -> TestResult {
        let order = OrderUuid::new();

        let mut payments = MockPaymentsService::new();

        payments
            .expect_create_payment()
            .once()
            .withf(move |principal, new| {
                *principal == customer()
                    && *new
                        == NewPayment {
                            order_uuid: order,
                            method_code: "COD".to_string(),
                        }
            })
            .return_once(move |_, _| Ok(make_payment(order, PaymentStatus::Pending)));

        let mut res = TestClient::post("http://example.com/api/payments")
            .json(&json!({ "orderId": order.into_uuid(), "method": "COD" }))
            .send(&make_service(payments))
            .await;

        let body: PaymentResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.status, "PENDING");
        assert_eq!(body.amount, 1_000_000);
        assert_eq!(body.paid_at, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_method_returns_400() -> TestResult {
        let mut payments = MockPaymentsService::new();

        payments
            .expect_create_payment()
            .once()
            .return_once(|_, new| Err(PaymentsServiceError::UnknownMethod(new.method_code)));

        let mut res = TestClient::post("http://example.com/api/payments")
            .json(&json!({ "orderId": OrderUuid::new().into_uuid(), "method": "BITCOIN" }))
            .send(&make_service(payments))
            .await;

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.code, "INVALID_PAYMENT_METHOD");

        Ok(())
    }

    #[tokio::test]
    async fn test_someone_elses_order_returns_404() -> TestResult {
        let mut payments = MockPaymentsService::new();

        payments
            .expect_create_payment()
            .once()
            .return_once(|_, _| Err(PaymentsServiceError::AccessDenied));

        let res = TestClient::post("http://example.com/api/payments")
            .json(&json!({ "orderId": OrderUuid::new().into_uuid(), "method": "COD" }))
            .send(&make_service(payments))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
