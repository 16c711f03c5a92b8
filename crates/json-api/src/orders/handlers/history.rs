//! Order History Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    errors::ApiError,
    extensions::*,
    orders::{errors::into_api_error, models::StatusHistoryResponse},
    state::State,
};

/// Order History Handler
///
/// Returns the order's status changes, oldest first.
#[endpoint(
    tags("orders"),
    summary = "Get Order Status History",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Status history"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<Vec<StatusHistoryResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let history = state
        .app
        .orders
        .order_history(principal, order.into_inner().into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(history.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::orders::{
        MockOrdersService, OrdersServiceError,
        records::{OrderStatus, OrderUuid, StatusHistoryRecord, StatusHistoryUuid},
    };

    use crate::test_helpers::{
        TEST_ADMIN_UUID, TEST_CUSTOMER_UUID, TestState, customer, service_as,
    };

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        service_as(
            customer(),
            TestState::default().orders(orders),
            Router::with_path("api/orders/{order}/history").get(handler),
        )
    }

    #[tokio::test]
    async fn test_history_is_returned_in_order() -> TestResult {
        let uuid = OrderUuid::new();

        let entries = vec![
            StatusHistoryRecord {
                uuid: StatusHistoryUuid::new(),
                order_uuid: uuid,
                status: OrderStatus::Pending,
                note: Some("Order created".to_string()),
                updated_by: TEST_CUSTOMER_UUID,
                created_at: Timestamp::UNIX_EPOCH,
            },
            StatusHistoryRecord {
                uuid: StatusHistoryUuid::new(),
                order_uuid: uuid,
                status: OrderStatus::Shipping,
                note: None,
                updated_by: TEST_ADMIN_UUID,
                created_at: Timestamp::UNIX_EPOCH,
            },
        ];

        let mut orders = MockOrdersService::new();

        orders
            .expect_order_history()
            .once()
            .withf(move |principal, o| *principal == customer() && *o == uuid)
            .return_once(move |_, _| Ok(entries));

        let response: Vec<StatusHistoryResponse> =
            TestClient::get(format!("http://example.com/api/orders/{uuid}/history"))
                .send(&make_service(orders))
                .await
                .take_json()
                .await?;

        let statuses: Vec<_> = response.iter().map(|entry| entry.status.as_str()).collect();

        assert_eq!(statuses, vec!["PENDING", "SHIPPING"]);
        assert_eq!(
            response.last().map(|entry| entry.updated_by),
            Some(TEST_ADMIN_UUID.into_uuid())
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_order_returns_404() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_order_history()
            .once()
            .return_once(|_, _| Err(OrdersServiceError::NotFound));

        let res = TestClient::get(format!(
            "http://example.com/api/orders/{}/history",
            OrderUuid::new()
        ))
        .send(&make_service(orders))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
