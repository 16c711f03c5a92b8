//! Create Order Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::domain::orders::data::NewOrder;

use crate::{
    errors::ApiError,
    extensions::*,
    observability::record_order_created,
    orders::{
        errors::create_order_error,
        models::{OrderResponse, ShippingAddressModel},
    },
    state::State,
};

/// Create Order Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateOrderRequest {
    pub shipping_address: ShippingAddressModel,
    pub voucher_code: Option<String>,
}

impl From<CreateOrderRequest> for NewOrder {
    fn from(request: CreateOrderRequest) -> Self {
        NewOrder {
            shipping_address: request.shipping_address.into(),
            voucher_code: request.voucher_code,
        }
    }
}

/// Create Order Handler
///
/// Turns the caller's cart into an order.
#[endpoint(
    tags("orders"),
    summary = "Create Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Order created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Order could not be created"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateOrderRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let order = state
        .app
        .orders
        .create_order(principal.user, json.into_inner().into())
        .await
        .map_err(create_order_error)?;

    record_order_created();

    res.add_header(LOCATION, format!("/api/orders/{}", order.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::domain::orders::{
        MockOrdersService, OrdersServiceError, records::OrderUuid,
    };

    use crate::{
        errors::ErrorBody,
        test_helpers::{
            TEST_CUSTOMER_UUID, TestState, customer, make_order, service_as, shipping_address,
        },
    };

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        service_as(
            customer(),
            TestState::default().orders(orders),
            Router::with_path("api/orders").post(handler),
        )
    }

    fn request_body(voucher_code: Option<&str>) -> serde_json::Value {
        json!({
            "shippingAddress": {
                "fullName": "Jane Doe",
                "phone": "0900000000",
                "address": "1 Main Street",
                "city": "Hanoi",
                "district": "Ba Dinh",
                "ward": "Kim Ma",
            },
            "voucherCode": voucher_code,
        })
    }

    #[tokio::test]
    async fn test_create_order_returns_201_with_order() -> TestResult {
        let uuid = OrderUuid::new();
        let order = make_order(uuid, TEST_CUSTOMER_UUID);

        let mut orders = MockOrdersService::new();

        orders
            .expect_create_order()
            .once()
            .withf(|user, new| {
                *user == TEST_CUSTOMER_UUID
                    && new.shipping_address == shipping_address()
                    && new.voucher_code.as_deref() == Some("SAVE20")
            })
            .return_once(move |_, _| Ok(order));

        let mut res = TestClient::post("http://example.com/api/orders")
            .json(&request_body(Some("SAVE20")))
            .send(&make_service(orders))
            .await;

        let body: OrderResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/api/orders/{uuid}").as_str()));
        assert_eq!(body.uuid, uuid.into_uuid());
        assert_eq!(body.status, "PENDING");
        assert_eq!(body.total, body.subtotal - body.discount);
        assert_eq!(body.items.len(), 1, "expected one order item");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_without_voucher_passes_none() -> TestResult {
        let order = make_order(OrderUuid::new(), TEST_CUSTOMER_UUID);

        let mut orders = MockOrdersService::new();

        orders
            .expect_create_order()
            .once()
            .withf(|_, new| new.voucher_code.is_none())
            .return_once(move |_, _| Ok(order));

        let res = TestClient::post("http://example.com/api/orders")
            .json(&request_body(None))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_empty_cart_returns_400_envelope() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_create_order()
            .once()
            .return_once(|_, _| Err(OrdersServiceError::EmptyCart));

        let mut res = TestClient::post("http://example.com/api/orders")
            .json(&request_body(None))
            .send(&make_service(orders))
            .await;

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.code, "CREATE_ORDER_FAILED");
        assert_eq!(body.message, "cart is empty");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_insufficient_stock_returns_400() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_create_order().once().return_once(|_, _| {
            Err(OrdersServiceError::InsufficientStock {
                sku: "PX-BLK-128".to_string(),
            })
        });

        let mut res = TestClient::post("http://example.com/api/orders")
            .json(&request_body(None))
            .send(&make_service(orders))
            .await;

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.code, "CREATE_ORDER_FAILED");
        assert!(body.message.contains("PX-BLK-128"), "{}", body.message);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_missing_address_is_rejected_before_service() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_create_order().never();

        let res = TestClient::post("http://example.com/api/orders")
            .json(&json!({ "voucherCode": "SAVE20" }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
