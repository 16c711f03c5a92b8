//! Orders service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use rustc_hash::FxHashMap;
use tracing::{info, warn};

use crate::{
    auth::Principal,
    database::Db,
    domain::{
        carts::{
            CartsService, PgCartsService,
            repositories::{PgCartItemsRepository, PgCartsRepository},
        },
        catalog::{
            records::{ProductRecord, ProductUuid},
            repositories::{PgProductsRepository, PgVariantsRepository},
        },
        orders::{
            data::{NewOrder, OrderDraft, OrderItemDraft, OrdersQuery, StatusUpdate},
            errors::OrdersServiceError,
            number::order_number,
            records::{OrderItemRecord, OrderRecord, OrderStatus, OrderUuid, StatusHistoryRecord},
            repositories::{PgOrderItemsRepository, PgOrdersRepository, PgStatusHistoryRepository},
        },
        pagination::Page,
        users::records::UserUuid,
        vouchers::{discount_for, repository::PgVouchersRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    orders_repository: PgOrdersRepository,
    items_repository: PgOrderItemsRepository,
    history_repository: PgStatusHistoryRepository,
    carts_repository: PgCartsRepository,
    cart_items_repository: PgCartItemsRepository,
    carts_service: PgCartsService,
    products_repository: PgProductsRepository,
    variants_repository: PgVariantsRepository,
    vouchers_repository: PgVouchersRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            orders_repository: PgOrdersRepository::new(),
            items_repository: PgOrderItemsRepository::new(),
            history_repository: PgStatusHistoryRepository::new(),
            carts_repository: PgCartsRepository::new(),
            cart_items_repository: PgCartItemsRepository::new(),
            carts_service: PgCartsService::new(db.clone()),
            products_repository: PgProductsRepository::new(),
            variants_repository: PgVariantsRepository::new(),
            vouchers_repository: PgVouchersRepository::new(),
            db,
        }
    }

    /// Validate the cart, price it and write the order, its items and the
    /// initial history entry in a single transaction.
    async fn place_order(
        &self,
        user: UserUuid,
        order: &NewOrder,
        now: Timestamp,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let cart = self
            .carts_repository
            .find_cart_by_user(&mut tx, user)
            .await?
            .ok_or(OrdersServiceError::CartNotFound)?;

        let lines = self.cart_items_repository.list_lines(&mut tx, cart.uuid).await?;

        if lines.is_empty() {
            return Err(OrdersServiceError::EmptyCart);
        }

        let mut products: FxHashMap<ProductUuid, ProductRecord> = FxHashMap::default();
        let mut drafts = Vec::with_capacity(lines.len());
        let mut subtotal: u64 = 0;

        for line in &lines {
            let variant = self
                .variants_repository
                .find_active_variant(&mut tx, line.variant_uuid)
                .await?
                .ok_or(OrdersServiceError::VariantNotFound(line.variant_uuid))?;

            if variant.stock < line.quantity {
                return Err(OrdersServiceError::InsufficientStock { sku: variant.sku });
            }

            let product = match products.get(&variant.product_uuid) {
                Some(product) => product.clone(),
                None => {
                    let product = self
                        .products_repository
                        .find_active_product(&mut tx, variant.product_uuid)
                        .await?
                        .ok_or(OrdersServiceError::ProductNotFound(variant.product_uuid))?;

                    products.insert(product.uuid, product.clone());

                    product
                }
            };

            let line_total = variant
                .price
                .checked_mul(line.quantity)
                .ok_or(OrdersServiceError::InvalidData)?;

            subtotal = subtotal
                .checked_add(line_total)
                .ok_or(OrdersServiceError::InvalidData)?;

            drafts.push(OrderItemDraft {
                product_uuid: product.uuid,
                variant_uuid: variant.uuid,
                product_name: product.name,
                sku: variant.sku,
                color: variant.color,
                storage: variant.storage,
                price: variant.price,
                quantity: line.quantity,
            });
        }

        let voucher = match order.voucher_code() {
            Some(code) => {
                self.vouchers_repository
                    .find_voucher_by_code(&mut tx, code)
                    .await?
            }
            None => None,
        };

        let discount = discount_for(voucher.as_ref(), subtotal, now);

        let draft = OrderDraft {
            uuid: OrderUuid::new(),
            order_number: order_number(now),
            user_uuid: user,
            shipping_address: order.shipping_address.clone(),
            voucher_code: order.voucher_code().map(str::to_string),
            subtotal,
            discount,
            total: subtotal - discount,
        };

        let mut record = self.orders_repository.create_order(&mut tx, &draft).await?;

        for (position, item) in drafts.iter().enumerate() {
            let item = self
                .items_repository
                .create_item(&mut tx, record.uuid, position, item)
                .await?;

            record.items.push(item);
        }

        self.history_repository
            .append(&mut tx, record.uuid, OrderStatus::Pending, None, user)
            .await?;

        tx.commit().await?;

        Ok(record)
    }

    /// Take the purchased quantity out of stock. Never fails the order.
    ///
    /// Returns `false` when the stock was left untouched, either because it
    /// ran out after the order was placed or because the update failed.
    async fn decrement_stock(&self, item: &OrderItemRecord) -> bool {
        let result = async {
            let mut tx = self.db.begin().await?;

            let decremented = self
                .variants_repository
                .decrement_stock(&mut tx, item.variant_uuid, item.quantity)
                .await?;

            tx.commit().await?;

            Ok::<bool, sqlx::Error>(decremented)
        }
        .await;

        match result {
            Ok(true) => true,
            Ok(false) => {
                warn!(
                    variant_uuid = %item.variant_uuid,
                    sku = %item.sku,
                    quantity = item.quantity,
                    "stock ran out before decrement, skipping"
                );

                false
            }
            Err(error) => {
                warn!(
                    variant_uuid = %item.variant_uuid,
                    sku = %item.sku,
                    error = %error,
                    "failed to decrement stock"
                );

                false
            }
        }
    }

    /// Empty the buyer's cart through the carts service. Never fails the order.
    async fn clear_cart(&self, user: UserUuid) {
        if let Err(error) = self.carts_service.clear_cart(user).await {
            warn!(user_uuid = %user, error = %error, "failed to clear cart");
        }
    }

    /// Attach items to each order, preserving order sequence.
    async fn with_items(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        mut orders: Vec<OrderRecord>,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        if orders.is_empty() {
            return Ok(orders);
        }

        let uuids: Vec<OrderUuid> = orders.iter().map(|order| order.uuid).collect();

        let mut items_by_order: FxHashMap<OrderUuid, Vec<OrderItemRecord>> =
            FxHashMap::default();

        for item in self.items_repository.list_items(tx, &uuids).await? {
            items_by_order.entry(item.order_uuid).or_default().push(item);
        }

        for order in &mut orders {
            order.items = items_by_order.remove(&order.uuid).unwrap_or_default();
        }

        Ok(orders)
    }

    /// Load an order the principal is allowed to read.
    async fn readable_order(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        principal: Principal,
        order: OrderUuid,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let record = self.orders_repository.get_order(tx, order).await?;

        if !principal.can_access(record.user_uuid) {
            return Err(OrdersServiceError::AccessDenied);
        }

        Ok(record)
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn create_order(
        &self,
        user: UserUuid,
        order: NewOrder,
    ) -> Result<OrderRecord, OrdersServiceError> {
        if !order.shipping_address.is_complete() {
            return Err(OrdersServiceError::InvalidInput(
                "shipping address is incomplete",
            ));
        }

        let record = self.place_order(user, &order, Timestamp::now()).await?;

        for item in &record.items {
            self.decrement_stock(item).await;
        }

        self.clear_cart(user).await;

        info!(
            order_uuid = %record.uuid,
            order_number = %record.order_number,
            subtotal = record.subtotal,
            discount = record.discount,
            total = record.total,
            "order created"
        );

        Ok(record)
    }

    async fn update_status(
        &self,
        order: OrderUuid,
        update: StatusUpdate,
        actor: UserUuid,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self
            .orders_repository
            .update_status(&mut tx, order, update.status)
            .await?;

        self.history_repository
            .append(&mut tx, order, update.status, update.note.as_deref(), actor)
            .await?;

        let mut records = self.with_items(&mut tx, vec![record]).await?;

        tx.commit().await?;

        records.pop().ok_or(OrdersServiceError::NotFound)
    }

    async fn list_user_orders(&self, user: UserUuid) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self.orders_repository.list_user_orders(&mut tx, user).await?;
        let orders = self.with_items(&mut tx, orders).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn get_order(
        &self,
        principal: Principal,
        order: OrderUuid,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self.readable_order(&mut tx, principal, order).await?;
        let mut records = self.with_items(&mut tx, vec![record]).await?;

        tx.commit().await?;

        records.pop().ok_or(OrdersServiceError::NotFound)
    }

    async fn list_orders(&self, query: OrdersQuery) -> Result<Page<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self
            .orders_repository
            .list_orders(&mut tx, query.pagination, query.status)
            .await?;

        let total = self
            .orders_repository
            .count_orders(&mut tx, query.status)
            .await?;

        let orders = self.with_items(&mut tx, orders).await?;

        tx.commit().await?;

        Ok(Page::new(orders, query.pagination, total))
    }

    async fn order_history(
        &self,
        principal: Principal,
        order: OrderUuid,
    ) -> Result<Vec<StatusHistoryRecord>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        self.readable_order(&mut tx, principal, order).await?;

        let history = self.history_repository.list_history(&mut tx, order).await?;

        tx.commit().await?;

        Ok(history)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Turn the user's cart into an order.
    ///
    /// Validation, pricing and the order rows commit together. Stock
    /// decrement and cart clearing follow on a best-effort basis: their
    /// failures are logged and the order is still returned.
    async fn create_order(
        &self,
        user: UserUuid,
        order: NewOrder,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// Set the order's status and append a history entry in one transaction.
    async fn update_status(
        &self,
        order: OrderUuid,
        update: StatusUpdate,
        actor: UserUuid,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// The user's orders, newest first.
    async fn list_user_orders(&self, user: UserUuid) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// A single order. Non-admins only see their own orders.
    async fn get_order(
        &self,
        principal: Principal,
        order: OrderUuid,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// All orders, newest first, optionally filtered by status.
    async fn list_orders(&self, query: OrdersQuery) -> Result<Page<OrderRecord>, OrdersServiceError>;

    /// Status history of an order, oldest first.
    async fn order_history(
        &self,
        principal: Principal,
        order: OrderUuid,
    ) -> Result<Vec<StatusHistoryRecord>, OrdersServiceError>;
}
