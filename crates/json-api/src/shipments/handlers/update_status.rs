//! Update Shipment Status Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::shipments::records::ShipmentStatus;

use crate::{
    errors::ApiError,
    extensions::*,
    shipments::{errors::into_api_error, models::ShipmentResponse},
    state::State,
};

/// Update Shipment Status Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateShipmentStatusRequest {
    /// One of PENDING, SHIPPING, DELIVERED
    pub status: String,
}

/// Update Shipment Status Handler
///
/// Admin only. SHIPPING stamps the shipped-at time, DELIVERED the delivered-at time.
#[endpoint(
    tags("shipments"),
    summary = "Update Shipment Status",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Shipment updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid status"),
        (status_code = StatusCode::NOT_FOUND, description = "Shipment not found"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin access required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    json: JsonBody<UpdateShipmentStatusRequest>,
    depot: &mut Depot,
) -> Result<Json<ShipmentResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let status = json
        .into_inner()
        .status
        .parse::<ShipmentStatus>()
        .map_err(|error| ApiError::bad_request("INVALID_STATUS", error.to_string()))?;

    let shipment = state
        .app
        .shipments
        .update_shipment_status(order.into_inner().into(), status)
        .await
        .map_err(into_api_error)?;

    Ok(Json(shipment.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::domain::{
        orders::records::OrderUuid,
        shipments::{MockShipmentsService, ShipmentsServiceError},
    };

    use crate::{
        errors::ErrorBody,
        shipments::handlers::tests::make_shipment,
        test_helpers::{TestState, admin, service_as},
    };

    use super::*;

    fn make_service(shipments: MockShipmentsService) -> Service {
        service_as(
            admin(),
            TestState::default().shipments(shipments),
            Router::with_path("api/admin/shipments/{order}/status").put(handler),
        )
    }

    #[tokio::test]
    async fn test_mark_delivered() -> TestResult {
        let order = OrderUuid::new();

        let mut shipments = MockShipmentsService::new();

        shipments
            .expect_update_shipment_status()
            .once()
            .withf(move |o, status| *o == order && *status == ShipmentStatus::Delivered)
            .return_once(move |_, status| Ok(make_shipment(order, status)));

        let mut res = TestClient::put(format!(
            "http://example.com/api/admin/shipments/{order}/status"
        ))
        .json(&json!({ "status": "DELIVERED" }))
        .send(&make_service(shipments))
        .await;

        let body: ShipmentResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.status, "DELIVERED");

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_status_returns_400() -> TestResult {
        let mut shipments = MockShipmentsService::new();

        shipments.expect_update_shipment_status().never();

        let mut res = TestClient::put(format!(
            "http://example.com/api/admin/shipments/{}/status",
            OrderUuid::new()
        ))
        .json(&json!({ "status": "LOST" }))
        .send(&make_service(shipments))
        .await;

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.code, "INVALID_STATUS");

        Ok(())
    }

    #[tokio::test]
    async fn test_order_without_shipment_returns_404() -> TestResult {
        let mut shipments = MockShipmentsService::new();

        shipments
            .expect_update_shipment_status()
            .once()
            .return_once(|_, _| Err(ShipmentsServiceError::NotFound));

        let res = TestClient::put(format!(
            "http://example.com/api/admin/shipments/{}/status",
            OrderUuid::new()
        ))
        .json(&json!({ "status": "SHIPPING" }))
        .send(&make_service(shipments))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
