//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use storefront_app::{
    auth::{MockAuthService, Principal},
    context::AppContext,
    domain::{
        carts::MockCartsService,
        catalog::{
            MockCatalogService,
            records::{ProductRecord, ProductUuid, VariantRecord, VariantUuid},
        },
        orders::{
            MockOrdersService,
            records::{
                OrderItemRecord, OrderItemUuid, OrderRecord, OrderStatus, OrderUuid,
                ShippingAddress,
            },
        },
        payments::MockPaymentsService,
        shipments::MockShipmentsService,
        users::records::{Role, UserUuid},
        vouchers::MockVouchersService,
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_CUSTOMER_UUID: UserUuid = UserUuid::from_uuid(Uuid::from_u128(1));

pub(crate) const TEST_ADMIN_UUID: UserUuid = UserUuid::from_uuid(Uuid::from_u128(2));

pub(crate) fn customer() -> Principal {
    Principal::new(TEST_CUSTOMER_UUID, Role::Customer)
}

pub(crate) fn admin() -> Principal {
    Principal::new(TEST_ADMIN_UUID, Role::Admin)
}

/// Hoop that authenticates every request as the given principal.
pub(crate) struct InjectPrincipal(Principal);

#[handler]
impl InjectPrincipal {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        depot.insert_principal(self.0);
        ctrl.call_next(req, depot, res).await;
    }
}

pub(crate) fn inject_principal(principal: Principal) -> InjectPrincipal {
    InjectPrincipal(principal)
}

/// Builds a [`State`] from mocks; services left unset have no expectations,
/// so any call to them fails the test.
#[derive(Default)]
pub(crate) struct TestState {
    catalog: Option<MockCatalogService>,
    carts: Option<MockCartsService>,
    vouchers: Option<MockVouchersService>,
    orders: Option<MockOrdersService>,
    payments: Option<MockPaymentsService>,
    shipments: Option<MockShipmentsService>,
    auth: Option<MockAuthService>,
}

impl TestState {
    pub(crate) fn catalog(mut self, catalog: MockCatalogService) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub(crate) fn carts(mut self, carts: MockCartsService) -> Self {
        self.carts = Some(carts);
        self
    }

    pub(crate) fn vouchers(mut self, vouchers: MockVouchersService) -> Self {
        self.vouchers = Some(vouchers);
        self
    }

    pub(crate) fn orders(mut self, orders: MockOrdersService) -> Self {
        self.orders = Some(orders);
        self
    }

    pub(crate) fn payments(mut self, payments: MockPaymentsService) -> Self {
        self.payments = Some(payments);
        self
    }

    pub(crate) fn shipments(mut self, shipments: MockShipmentsService) -> Self {
        self.shipments = Some(shipments);
        self
    }

    pub(crate) fn auth(mut self, auth: MockAuthService) -> Self {
        self.auth = Some(auth);
        self
    }

    pub(crate) fn build(self) -> Arc<State> {
        State::from_app_context(AppContext {
            catalog: Arc::new(self.catalog.unwrap_or_default()),
            carts: Arc::new(self.carts.unwrap_or_default()),
            vouchers: Arc::new(self.vouchers.unwrap_or_default()),
            orders: Arc::new(self.orders.unwrap_or_default()),
            payments: Arc::new(self.payments.unwrap_or_default()),
            shipments: Arc::new(self.shipments.unwrap_or_default()),
            auth: Arc::new(self.auth.unwrap_or_default()),
        })
    }
}

/// A service where every request is made by `principal`.
pub(crate) fn service_as(principal: Principal, state: TestState, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state.build()))
            .hoop(inject_principal(principal))
            .push(route),
    )
}

/// A service with no authenticated principal.
pub(crate) fn anonymous_service(state: TestState, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state.build())).push(route))
}

pub(crate) fn make_product(uuid: ProductUuid) -> ProductRecord {
    ProductRecord {
        uuid,
        name: "Phone X".to_string(),
        slug: "phone-x".to_string(),
        description: "A phone".to_string(),
        brand: "Acme".to_string(),
        category: "phones".to_string(),
        is_active: true,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_variant(uuid: VariantUuid, product_uuid: ProductUuid) -> VariantRecord {
    VariantRecord {
        uuid,
        product_uuid,
        sku: "PX-BLK-128".to_string(),
        color: "black".to_string(),
        storage: "128GB".to_string(),
        price: 500_000,
        stock: 10,
        is_active: true,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn shipping_address() -> ShippingAddress {
    ShippingAddress {
        full_name: "Jane Doe".to_string(),
        phone: "0900000000".to_string(),
        address: "1 Main Street".to_string(),
        city: "Hanoi".to_string(),
        district: "Ba Dinh".to_string(),
        ward: "Kim Ma".to_string(),
    }
}

pub(crate) fn make_order(uuid: OrderUuid, user: UserUuid) -> OrderRecord {
    OrderRecord {
        uuid,
        order_number: "ORD-1700000000000".to_string(),
        user_uuid: user,
        status: OrderStatus::Pending,
        shipping_address: shipping_address(),
        voucher_code: None,
        subtotal: 1_000_000,
        discount: 0,
        total: 1_000_000,
        items: vec![OrderItemRecord {
            uuid: OrderItemUuid::new(),
            order_uuid: uuid,
            product_uuid: ProductUuid::new(),
            variant_uuid: VariantUuid::new(),
            product_name: "Phone X".to_string(),
            sku: "PX-BLK-128".to_string(),
            color: "black".to_string(),
            storage: "128GB".to_string(),
            price: 500_000,
            quantity: 2,
            created_at: Timestamp::UNIX_EPOCH,
        }],
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
