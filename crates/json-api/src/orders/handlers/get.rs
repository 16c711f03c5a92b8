//! Get Order Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    errors::ApiError,
    extensions::*,
    orders::{errors::into_api_error, models::OrderResponse},
    state::State,
};

/// Get Order Handler
///
/// Owners and admins see the order; anyone else gets a 404.
#[endpoint(
    tags("orders"),
    summary = "Get Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Order"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let order = state
        .app
        .orders
        .get_order(principal, order.into_inner().into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::{
        auth::Principal,
        domain::orders::{MockOrdersService, OrdersServiceError, records::OrderUuid},
    };

    use crate::{
        errors::ErrorBody,
        test_helpers::{TEST_CUSTOMER_UUID, TestState, admin, customer, make_order, service_as},
    };

    use super::*;

    fn make_service(principal: Principal, orders: MockOrdersService) -> Service {
        service_as(
            principal,
            TestState::default().orders(orders),
            Router::with_path("api/orders/{order}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_owner_gets_order() -> TestResult {
        let uuid = OrderUuid::new();
        let order = make_order(uuid, TEST_CUSTOMER_UUID);

        let mut orders = MockOrdersService::new();

        orders
            .expect_get_order()
            .once()
            .withf(move |principal, o| *principal == customer() && *o == uuid)
            .return_once(move |_, _| Ok(order));

        let mut res = TestClient::get(format!("http://example.com/api/orders/{uuid}"))
            .send(&make_service(customer(), orders))
            .await;

        let body: OrderResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.uuid, uuid.into_uuid());
        assert_eq!(body.shipping_address.full_name, "Jane Doe");
        assert_eq!(body.items.first().map(|item| item.total_price), Some(1_000_000));

        Ok(())
    }

    #[tokio::test]
    async fn test_admin_principal_is_forwarded() -> TestResult {
        let uuid = OrderUuid::new();
        let order = make_order(uuid, TEST_CUSTOMER_UUID);

        let mut orders = MockOrdersService::new();

        orders
            .expect_get_order()
            .once()
            .withf(|principal, _| principal.is_admin())
            .return_once(move |_, _| Ok(order));

        let res = TestClient::get(format!("http://example.com/api/orders/{uuid}"))
            .send(&make_service(admin(), orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_other_customers_order_returns_404_without_data() -> TestResult {
        let uuid = OrderUuid::new();

        let mut orders = MockOrdersService::new();

        orders
            .expect_get_order()
            .once()
            .return_once(|_, _| Err(OrdersServiceError::AccessDenied));

        let mut res = TestClient::get(format!("http://example.com/api/orders/{uuid}"))
            .send(&make_service(customer(), orders))
            .await;

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.code, "NOT_FOUND");
        assert_eq!(body.message, "order not found");

        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_uuid_returns_400() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_get_order().never();

        let res = TestClient::get("http://example.com/api/orders/not-a-uuid")
            .send(&make_service(customer(), orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
