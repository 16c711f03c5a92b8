//! Test Helpers

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{
    domain::{
        carts::{CartsService, CartsServiceError, data::NewCartItem, records::CartRecord},
        catalog::{
            CatalogService, CatalogServiceError,
            data::{NewProduct, NewVariant},
            records::{ProductRecord, ProductUuid, VariantRecord, VariantUuid},
        },
        orders::{
            OrdersService,
            data::NewOrder,
            records::{OrderRecord, ShippingAddress},
        },
        users::records::{Role, UserUuid},
        vouchers::{
            VouchersService, VouchersServiceError,
            data::NewVoucher,
            records::{VoucherRecord, VoucherUuid},
        },
    },
    test::TestContext,
};

pub(crate) async fn create_product(
    ctx: &TestContext,
    slug: &str,
) -> Result<ProductRecord, CatalogServiceError> {
    ctx.catalog
        .create_product(NewProduct {
            uuid: ProductUuid::new(),
            name: format!("Product {slug}"),
            slug: slug.to_string(),
            description: String::new(),
            brand: "Acme".to_string(),
            category: "Phones".to_string(),
        })
        .await
}

pub(crate) async fn create_variant(
    ctx: &TestContext,
    product: ProductUuid,
    sku: &str,
    price: u64,
    stock: u64,
) -> Result<VariantRecord, CatalogServiceError> {
    ctx.catalog
        .create_variant(NewVariant {
            uuid: VariantUuid::new(),
            product_uuid: product,
            sku: sku.to_string(),
            color: "Black".to_string(),
            storage: "128GB".to_string(),
            price,
            stock,
        })
        .await
}

/// A variant under its own product, named after the SKU.
pub(crate) async fn create_stocked_variant(
    ctx: &TestContext,
    sku: &str,
    price: u64,
    stock: u64,
) -> Result<VariantRecord, CatalogServiceError> {
    let product = create_product(ctx, &sku.to_lowercase()).await?;

    create_variant(ctx, product.uuid, sku, price, stock).await
}

pub(crate) async fn add_to_cart(
    ctx: &TestContext,
    user: UserUuid,
    variant: VariantUuid,
    quantity: u64,
) -> Result<CartRecord, CartsServiceError> {
    ctx.carts
        .add_item(
            user,
            NewCartItem {
                variant_uuid: variant,
                quantity,
            },
        )
        .await
}

pub(crate) async fn create_voucher(
    ctx: &TestContext,
    code: &str,
    percent: Decimal,
    max_discount: u64,
    min_order_value: u64,
    expires_at: Timestamp,
) -> Result<VoucherRecord, VouchersServiceError> {
    ctx.vouchers
        .create_voucher(NewVoucher {
            uuid: VoucherUuid::new(),
            code: code.to_string(),
            description: String::new(),
            discount_percent: percent,
            max_discount,
            min_order_value,
            expires_at,
        })
        .await
}

pub(crate) fn shipping_address() -> ShippingAddress {
    ShippingAddress {
        full_name: "Nguyen Van A".to_string(),
        phone: "0901234567".to_string(),
        address: "12 Nguyen Hue".to_string(),
        city: "Ho Chi Minh City".to_string(),
        district: "District 1".to_string(),
        ward: "Ben Nghe".to_string(),
    }
}

/// Place a one-line order for a new customer.
pub(crate) async fn place_order(
    ctx: &TestContext,
) -> Result<OrderRecord, Box<dyn std::error::Error + Send + Sync>> {
    let user = ctx.create_user(Role::Customer).await?;
    let sku = format!("SKU-{}", VariantUuid::new().into_uuid().simple());
    let variant = create_stocked_variant(ctx, &sku, 25_000, 5).await?;

    add_to_cart(ctx, user, variant.uuid, 2).await?;

    let order = ctx
        .orders
        .create_order(
            user,
            NewOrder {
                shipping_address: shipping_address(),
                voucher_code: None,
            },
        )
        .await?;

    Ok(order)
}
