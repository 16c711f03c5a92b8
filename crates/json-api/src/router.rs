//! App Router

use salvo::Router;

use crate::{auth, cart, catalog, orders, payments, shipments, vouchers};

/// Every `/api` route. Public catalog reads come first; everything else
/// requires a bearer token, and `/api/admin` an admin principal.
pub(crate) fn app_router() -> Router {
    Router::with_path("api")
        .push(
            Router::with_path("products")
                .get(catalog::index::handler)
                .push(Router::with_path("slug/{slug}").get(catalog::get_by_slug::handler))
                .push(Router::with_path("{product}").get(catalog::get::handler)),
        )
        .push(Router::with_path("brands").get(catalog::brands::handler))
        .push(Router::with_path("categories").get(catalog::categories::handler))
        .push(Router::with_path("variants/{variant}").get(catalog::get_variant::handler))
        .push(Router::with_path("payment-methods").get(payments::methods::handler))
        .push(Router::with_path("shipping-methods").get(shipments::methods::handler))
        .push(
            Router::new()
                .hoop(auth::middleware::handler)
                .push(
                    Router::with_path("cart").get(cart::get::handler).push(
                        Router::with_path("items")
                            .post(cart::add_item::handler)
                            .push(
                                Router::with_path("{variant}")
                                    .put(cart::update_item::handler)
                                    .delete(cart::remove_item::handler),
                            ),
                    ),
                )
                .push(
                    Router::with_path("orders")
                        .post(orders::create::handler)
                        .push(Router::with_path("me").get(orders::mine::handler))
                        .push(
                            Router::with_path("{order}")
                                .get(orders::get::handler)
                                .push(Router::with_path("history").get(orders::history::handler))
                                .push(
                                    Router::with_path("status")
                                        .hoop(auth::admin::handler)
                                        .put(orders::update_status::handler),
                                ),
                        ),
                )
                .push(
                    Router::with_path("payments")
                        .post(payments::create::handler)
                        .push(Router::with_path("{order}").get(payments::get::handler)),
                )
                .push(Router::with_path("shipments/{order}").get(shipments::get::handler))
                .push(admin_router()),
        )
}

fn admin_router() -> Router {
    Router::with_path("admin")
        .hoop(auth::admin::handler)
        .push(Router::with_path("orders").get(orders::admin_index::handler))
        .push(
            Router::with_path("products")
                .post(catalog::create_product::handler)
                .push(
                    Router::with_path("{product}/variants").post(catalog::create_variant::handler),
                ),
        )
        .push(Router::with_path("variants/{variant}").put(catalog::update_variant::handler))
        .push(
            Router::with_path("vouchers")
                .post(vouchers::create::handler)
                .push(Router::with_path("{code}").get(vouchers::get::handler)),
        )
        .push(
            Router::with_path("payments/{order}/status").put(payments::update_status::handler),
        )
        .push(
            Router::with_path("shipments")
                .post(shipments::create::handler)
                .push(
                    Router::with_path("{order}/status").put(shipments::update_status::handler),
                ),
        )
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        http::header::AUTHORIZATION,
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::{
        auth::MockAuthService,
        domain::{
            catalog::{
                MockCatalogService,
                records::{ProductDetails, ProductUuid},
            },
            orders::{MockOrdersService, records::OrderUuid},
            pagination::Page,
            shipments::MockShipmentsService,
        },
    };

    use crate::{
        errors::ErrorBody,
        test_helpers::{TEST_CUSTOMER_UUID, TestState, customer, make_order, make_product},
    };

    use super::*;

    fn make_service(state: TestState) -> Service {
        Service::new(Router::new().hoop(inject(state.build())).push(app_router()))
    }

    fn customer_auth() -> MockAuthService {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer()
            .withf(|token| token == "sf_customer")
            .returning(|_| Ok(customer()));

        auth
    }

    #[tokio::test]
    async fn test_product_listing_is_public() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_list_products()
            .once()
            .return_once(|query| Ok(Page::new(vec![], query.pagination, 0)));

        let res = TestClient::get("http://example.com/api/products")
            .send(&make_service(TestState::default().catalog(catalog)))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_slug_is_not_mistaken_for_a_product_id() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_get_product_by_slug()
            .once()
            .withf(|slug| slug == "phone-x")
            .return_once(|_| {
                Ok(ProductDetails {
                    product: make_product(ProductUuid::new()),
                    variants: vec![],
                })
            });

        let res = TestClient::get("http://example.com/api/products/slug/phone-x")
            .send(&make_service(TestState::default().catalog(catalog)))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_orders_require_a_token() -> TestResult {
        let mut res = TestClient::get("http://example.com/api/orders/me")
            .send(&make_service(TestState::default()))
            .await;

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));
        assert_eq!(body.code, "UNAUTHORIZED");

        Ok(())
    }

    #[tokio::test]
    async fn test_me_is_not_mistaken_for_an_order_id() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_list_user_orders()
            .once()
            .withf(|user| *user == TEST_CUSTOMER_UUID)
            .return_once(|user| Ok(vec![make_order(OrderUuid::new(), user)]));

        let res = TestClient::get("http://example.com/api/orders/me")
            .add_header(AUTHORIZATION, "Bearer sf_customer", true)
            .send(&make_service(
                TestState::default().auth(customer_auth()).orders(orders),
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_customers_cannot_change_order_status() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_update_status().never();

        let res = TestClient::put(format!(
            "http://example.com/api/orders/{}/status",
            OrderUuid::new()
        ))
        .add_header(AUTHORIZATION, "Bearer sf_customer", true)
        .json(&json!({ "status": "SHIPPING" }))
        .send(&make_service(
            TestState::default().auth(customer_auth()).orders(orders),
        ))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }

    #[tokio::test]
    async fn test_customers_cannot_create_shipments() -> TestResult {
        let mut shipments = MockShipmentsService::new();

        shipments.expect_create_shipment().never();

        let res = TestClient::post("http://example.com/api/admin/shipments")
            .add_header(AUTHORIZATION, "Bearer sf_customer", true)
            .json(&json!({ "orderId": OrderUuid::new().into_uuid(), "method": "STANDARD" }))
            .send(&make_service(
                TestState::default().auth(customer_auth()).shipments(shipments),
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }

    #[tokio::test]
    async fn test_customers_cannot_list_all_orders() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_list_orders().never();

        let res = TestClient::get("http://example.com/api/admin/orders")
            .add_header(AUTHORIZATION, "Bearer sf_customer", true)
            .send(&make_service(
                TestState::default().auth(customer_auth()).orders(orders),
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }
}
