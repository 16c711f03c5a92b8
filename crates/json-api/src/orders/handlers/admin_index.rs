//! Admin Order Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use storefront_app::domain::orders::{
    OrdersServiceError, data::OrdersQuery, records::OrderStatus,
};

use crate::{
    errors::ApiError,
    extensions::*,
    orders::{errors::into_api_error, models::OrdersPageResponse},
    pagination,
    state::State,
};

/// Admin Order Index Handler
///
/// Returns one page of all orders, newest first.
#[endpoint(
    tags("orders"),
    summary = "List All Orders",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Orders page"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid status filter"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin access required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    page: QueryParam<i64, false>,
    limit: QueryParam<i64, false>,
    status: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<OrdersPageResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let status = status
        .into_inner()
        .filter(|status| !status.is_empty())
        .map(|status| status.parse::<OrderStatus>())
        .transpose()
        .map_err(|error| into_api_error(OrdersServiceError::from(error)))?;

    let query = OrdersQuery {
        pagination: pagination::from_query(page.into_inner(), limit.into_inner()),
        status,
    };

    let page = state
        .app
        .orders
        .list_orders(query)
        .await
        .map_err(into_api_error)?;

    Ok(Json(page.into()))
}
