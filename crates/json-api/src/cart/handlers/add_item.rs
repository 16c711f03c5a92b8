//! Add Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::carts::data::NewCartItem;

use crate::{
    cart::{errors::into_api_error, models::CartResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Add Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddCartItemRequest {
    pub variant_id: Uuid,
    pub quantity: u64,
}

impl From<AddCartItemRequest> for NewCartItem {
    fn from(request: AddCartItemRequest) -> Self {
        NewCartItem {
            variant_uuid: request.variant_id.into(),
            quantity: request.quantity,
        }
    }
}

/// Add Cart Item Handler
///
/// Adds to an existing line's quantity or appends a new line.
#[endpoint(
    tags("cart"),
    summary = "Add Item to Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Updated cart"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid quantity or low stock"),
        (status_code = StatusCode::NOT_FOUND, description = "Variant not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<AddCartItemRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let cart = state
        .app
        .carts
        .add_item(principal.user, json.into_inner().into())
        .await
        .map_err(|error| into_api_error(error, "ADD_ITEM_FAILED"))?;

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::domain::{
        carts::{CartsServiceError, MockCartsService},
        catalog::records::VariantUuid,
    };

    use crate::{
        cart::handlers::tests::make_cart,
        errors::ErrorBody,
        test_helpers::{TEST_CUSTOMER_UUID, TestState, customer, service_as},
    };

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        service_as(
            customer(),
            TestState::default().carts(carts),
            Router::with_path("api/cart/items").post(handler),
        )
    }

    #[tokio::test]
    async fn test_add_item_returns_cart() -> TestResult {
        let variant = VariantUuid::new();

        let mut carts = MockCartsService::new();

        carts
            .expect_add_item()
            .once()
            .withf(move |user, item| {
                *user == TEST_CUSTOMER_UUID
                    && *item
                        == NewCartItem {
                            variant_uuid: variant,
                            quantity: 2,
                        }
            })
            .return_once(move |user, _| Ok(make_cart(user, &[(variant, 2)])));

        let mut res = TestClient::post("http://example.com/api/cart/items")
            .json(&json!({ "variantId": variant.into_uuid(), "quantity": 2 }))
            .send(&make_service(carts))
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.items.len(), 1, "expected one cart line");

        Ok(())
    }

    #[tokio::test]
    async fn test_add_item_over_stock_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_add_item().once().return_once(|_, _| {
            Err(CartsServiceError::InsufficientStock {
                sku: "PX-BLK-128".to_string(),
                available: 1,
            })
        });

        let mut res = TestClient::post("http://example.com/api/cart/items")
            .json(&json!({ "variantId": VariantUuid::new().into_uuid(), "quantity": 5 }))
            .send(&make_service(carts))
            .await;

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.code, "ADD_ITEM_FAILED");

        Ok(())
    }

    #[tokio::test]
    async fn test_add_unknown_variant_returns_404() -> TestResult {
        let variant = VariantUuid::new();

        let mut carts = MockCartsService::new();

        carts
            .expect_add_item()
            .once()
            .return_once(move |_, _| Err(CartsServiceError::VariantNotFound(variant)));

        let res = TestClient::post("http://example.com/api/cart/items")
            .json(&json!({ "variantId": variant.into_uuid(), "quantity": 1 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
