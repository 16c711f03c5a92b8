//! Carts service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Postgres, Transaction};

use crate::{
    database::Db,
    domain::{
        carts::{
            data::NewCartItem,
            errors::CartsServiceError,
            records::CartRecord,
            repositories::{PgCartItemsRepository, PgCartsRepository},
        },
        catalog::{
            records::{VariantRecord, VariantUuid},
            repositories::{PgProductsRepository, PgVariantsRepository},
        },
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    carts_repository: PgCartsRepository,
    items_repository: PgCartItemsRepository,
    products_repository: PgProductsRepository,
    variants_repository: PgVariantsRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            carts_repository: PgCartsRepository::new(),
            items_repository: PgCartItemsRepository::new(),
            products_repository: PgProductsRepository::new(),
            variants_repository: PgVariantsRepository::new(),
        }
    }

    async fn load_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<CartRecord, CartsServiceError> {
        let mut cart = self.carts_repository.ensure_cart(tx, user).await?;

        let items = self.items_repository.list_items(tx, cart.uuid).await?;

        cart.items.extend(items);

        Ok(cart)
    }

    /// Resolve a variant that can be put in a cart: it and its product must be active.
    async fn purchasable_variant(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        variant: VariantUuid,
    ) -> Result<VariantRecord, CartsServiceError> {
        let record = self
            .variants_repository
            .find_active_variant(tx, variant)
            .await?
            .ok_or(CartsServiceError::VariantNotFound(variant))?;

        self.products_repository
            .find_active_product(tx, record.product_uuid)
            .await?
            .ok_or(CartsServiceError::VariantNotFound(variant))?;

        Ok(record)
    }
}

fn ensure_stock(variant: &VariantRecord, quantity: u64) -> Result<(), CartsServiceError> {
    if variant.stock < quantity {
        return Err(CartsServiceError::InsufficientStock {
            sku: variant.sku.clone(),
            available: variant.stock,
        });
    }

    Ok(())
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn get_cart(&self, user: UserUuid) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let cart = self.load_cart(&mut tx, user).await?;

        tx.commit().await?;

        Ok(cart)
    }

    async fn add_item(
        &self,
        user: UserUuid,
        item: NewCartItem,
    ) -> Result<CartRecord, CartsServiceError> {
        if item.quantity == 0 {
            return Err(CartsServiceError::InvalidQuantity);
        }

        let mut tx = self.db.begin().await?;

        let cart = self.carts_repository.ensure_cart(&mut tx, user).await?;
        let variant = self.purchasable_variant(&mut tx, item.variant_uuid).await?;

        let existing = self
            .items_repository
            .get_line_quantity(&mut tx, cart.uuid, item.variant_uuid)
            .await?
            .unwrap_or(0);

        let quantity = existing
            .checked_add(item.quantity)
            .ok_or(CartsServiceError::InvalidQuantity)?;

        ensure_stock(&variant, quantity)?;

        self.items_repository
            .set_quantity(&mut tx, cart.uuid, item.variant_uuid, quantity)
            .await?;

        self.carts_repository.touch_cart(&mut tx, cart.uuid).await?;

        let cart = self.load_cart(&mut tx, user).await?;

        tx.commit().await?;

        Ok(cart)
    }

    async fn update_item(
        &self,
        user: UserUuid,
        item: NewCartItem,
    ) -> Result<CartRecord, CartsServiceError> {
        if item.quantity == 0 {
            return Err(CartsServiceError::InvalidQuantity);
        }

        let mut tx = self.db.begin().await?;

        let cart = self.carts_repository.ensure_cart(&mut tx, user).await?;

        self.items_repository
            .get_line_quantity(&mut tx, cart.uuid, item.variant_uuid)
            .await?
            .ok_or(CartsServiceError::ItemNotFound)?;

        let variant = self.purchasable_variant(&mut tx, item.variant_uuid).await?;

        ensure_stock(&variant, item.quantity)?;

        self.items_repository
            .set_quantity(&mut tx, cart.uuid, item.variant_uuid, item.quantity)
            .await?;

        self.carts_repository.touch_cart(&mut tx, cart.uuid).await?;

        let cart = self.load_cart(&mut tx, user).await?;

        tx.commit().await?;

        Ok(cart)
    }

    async fn remove_item(
        &self,
        user: UserUuid,
        variant: VariantUuid,
    ) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let cart = self.carts_repository.ensure_cart(&mut tx, user).await?;

        let rows_affected = self
            .items_repository
            .delete_item(&mut tx, cart.uuid, variant)
            .await?;

        if rows_affected > 0 {
            self.carts_repository.touch_cart(&mut tx, cart.uuid).await?;
        }

        let cart = self.load_cart(&mut tx, user).await?;

        tx.commit().await?;

        Ok(cart)
    }

    async fn clear_cart(&self, user: UserUuid) -> Result<(), CartsServiceError> {
        let mut tx = self.db.begin().await?;

        if let Some(cart) = self
            .carts_repository
            .find_cart_by_user(&mut tx, user)
            .await?
        {
            self.items_repository.clear_items(&mut tx, cart.uuid).await?;
            self.carts_repository.touch_cart(&mut tx, cart.uuid).await?;
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieve the user's cart, creating an empty one on first access.
    async fn get_cart(&self, user: UserUuid) -> Result<CartRecord, CartsServiceError>;

    /// Add a quantity of a variant, merging with an existing line.
    async fn add_item(
        &self,
        user: UserUuid,
        item: NewCartItem,
    ) -> Result<CartRecord, CartsServiceError>;

    /// Replace the quantity of a line already in the cart.
    async fn update_item(
        &self,
        user: UserUuid,
        item: NewCartItem,
    ) -> Result<CartRecord, CartsServiceError>;

    /// Remove a line; removing an absent line is not an error.
    async fn remove_item(
        &self,
        user: UserUuid,
        variant: VariantUuid,
    ) -> Result<CartRecord, CartsServiceError>;

    /// Empty the cart without deleting it.
    async fn clear_cart(&self, user: UserUuid) -> Result<(), CartsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::{catalog::{CatalogService, data::VariantUpdate}, users::records::Role},
        test::{TestContext, helpers},
    };

    use super::*;

    #[tokio::test]
    async fn get_cart_creates_empty_cart_once() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user(Role::Customer).await?;

        let first = ctx.carts.get_cart(user).await?;
        let second = ctx.carts.get_cart(user).await?;

        assert_eq!(first.uuid, second.uuid);
        assert_eq!(first.user_uuid, user);
        assert!(first.items.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn add_item_merges_quantities_for_same_variant() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user(Role::Customer).await?;
        let variant = helpers::create_stocked_variant(&ctx, "SKU-1", 500, 10).await?;

        helpers::add_to_cart(&ctx, user, variant.uuid, 2).await?;
        let cart = helpers::add_to_cart(&ctx, user, variant.uuid, 3).await?;

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items.first().map(|item| item.quantity), Some(5));
        assert_eq!(cart.subtotal(), 2_500);

        Ok(())
    }

    #[tokio::test]
    async fn add_item_zero_quantity_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user(Role::Customer).await?;
        let variant = helpers::create_stocked_variant(&ctx, "SKU-1", 500, 10).await?;

        let result = helpers::add_to_cart(&ctx, user, variant.uuid, 0).await;

        assert!(
            matches!(result, Err(CartsServiceError::InvalidQuantity)),
            "expected InvalidQuantity, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn add_item_beyond_stock_returns_insufficient_stock() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user(Role::Customer).await?;
        let variant = helpers::create_stocked_variant(&ctx, "SKU-LOW", 500, 3).await?;

        helpers::add_to_cart(&ctx, user, variant.uuid, 2).await?;

        let result = helpers::add_to_cart(&ctx, user, variant.uuid, 2).await;

        assert!(
            matches!(
                result,
                Err(CartsServiceError::InsufficientStock { ref sku, available: 3 }) if sku == "SKU-LOW"
            ),
            "expected InsufficientStock, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn add_item_unknown_variant_returns_variant_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user(Role::Customer).await?;
        let missing = VariantUuid::new();

        let result = helpers::add_to_cart(&ctx, user, missing, 1).await;

        assert!(
            matches!(result, Err(CartsServiceError::VariantNotFound(uuid)) if uuid == missing),
            "expected VariantNotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn add_item_inactive_variant_returns_variant_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user(Role::Customer).await?;
        let variant = helpers::create_stocked_variant(&ctx, "SKU-OFF", 500, 3).await?;

        ctx.catalog
            .update_variant(
                variant.uuid,
                VariantUpdate {
                    is_active: Some(false),
                    ..VariantUpdate::default()
                },
            )
            .await?;

        let result = helpers::add_to_cart(&ctx, user, variant.uuid, 1).await;

        assert!(
            matches!(result, Err(CartsServiceError::VariantNotFound(_))),
            "expected VariantNotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_item_replaces_quantity() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user(Role::Customer).await?;
        let variant = helpers::create_stocked_variant(&ctx, "SKU-1", 100, 10).await?;

        helpers::add_to_cart(&ctx, user, variant.uuid, 4).await?;

        let cart = ctx
            .carts
            .update_item(
                user,
                NewCartItem {
                    variant_uuid: variant.uuid,
                    quantity: 1,
                },
            )
            .await?;

        assert_eq!(cart.items.first().map(|item| item.quantity), Some(1));

        Ok(())
    }

    #[tokio::test]
    async fn update_item_missing_line_returns_item_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user(Role::Customer).await?;
        let variant = helpers::create_stocked_variant(&ctx, "SKU-1", 100, 10).await?;

        let result = ctx
            .carts
            .update_item(
                user,
                NewCartItem {
                    variant_uuid: variant.uuid,
                    quantity: 1,
                },
            )
            .await;

        assert!(
            matches!(result, Err(CartsServiceError::ItemNotFound)),
            "expected ItemNotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn remove_item_is_idempotent() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user(Role::Customer).await?;
        let variant = helpers::create_stocked_variant(&ctx, "SKU-1", 100, 10).await?;

        helpers::add_to_cart(&ctx, user, variant.uuid, 1).await?;

        let cart = ctx.carts.remove_item(user, variant.uuid).await?;
        assert!(cart.items.is_empty());

        let cart = ctx.carts.remove_item(user, variant.uuid).await?;
        assert!(cart.items.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn clear_cart_empties_but_keeps_cart() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user(Role::Customer).await?;
        let variant = helpers::create_stocked_variant(&ctx, "SKU-1", 100, 10).await?;

        let before = helpers::add_to_cart(&ctx, user, variant.uuid, 1).await?;

        ctx.carts.clear_cart(user).await?;

        let after = ctx.carts.get_cart(user).await?;

        assert_eq!(before.uuid, after.uuid);
        assert!(after.items.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn carts_are_isolated_per_user() -> TestResult {
        let ctx = TestContext::new().await;
        let alice = ctx.create_user(Role::Customer).await?;
        let bob = ctx.create_user(Role::Customer).await?;
        let variant = helpers::create_stocked_variant(&ctx, "SKU-1", 100, 10).await?;

        helpers::add_to_cart(&ctx, alice, variant.uuid, 1).await?;

        let bobs = ctx.carts.get_cart(bob).await?;

        assert!(bobs.items.is_empty());

        Ok(())
    }
}
