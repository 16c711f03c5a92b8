//! Product Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use storefront_app::domain::catalog::data::{ProductSort, ProductsQuery};

use crate::{
    catalog::{errors::into_api_error, models::ProductsPageResponse},
    errors::ApiError,
    extensions::*,
    pagination,
    state::State,
};

/// Product Index Handler
///
/// Returns one page of active products. `search` matches part of the name,
/// `brand` and `category` match exactly, and `sort` is one of `newest`
/// (default), `name_asc` or `name_desc`.
#[endpoint(
    tags("products"),
    summary = "List Products",
    responses(
        (status_code = StatusCode::OK, description = "Products page"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown sort order"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    page: QueryParam<i64, false>,
    limit: QueryParam<i64, false>,
    search: QueryParam<String, false>,
    brand: QueryParam<String, false>,
    category: QueryParam<String, false>,
    sort: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsPageResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let sort = sort
        .into_inner()
        .filter(|sort| !sort.is_empty())
        .map(|sort| sort.parse::<ProductSort>())
        .transpose()
        .map_err(|error| ApiError::bad_request("BAD_REQUEST", error.to_string()))?
        .unwrap_or_default();

    let query = ProductsQuery {
        pagination: pagination::from_query(page.into_inner(), limit.into_inner()),
        search: search.into_inner(),
        brand: brand.into_inner(),
        category: category.into_inner(),
        sort,
    };

    let products = state
        .app
        .catalog
        .list_products(query)
        .await
        .map_err(into_api_error)?;

    Ok(Json(products.into()))
}
