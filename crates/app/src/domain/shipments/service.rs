//! Shipments service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Postgres, Transaction};
use tracing::info;

use crate::{
    auth::Principal,
    database::Db,
    domain::{
        orders::{
            records::{OrderRecord, OrderUuid},
            repositories::PgOrdersRepository,
        },
        shipments::{
            data::NewShipment,
            errors::ShipmentsServiceError,
            records::{ShipmentRecord, ShipmentStatus, ShippingMethodRecord},
            repository::PgShipmentsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgShipmentsService {
    db: Db,
    repository: PgShipmentsRepository,
    orders_repository: PgOrdersRepository,
}

impl PgShipmentsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgShipmentsRepository::new(),
            orders_repository: PgOrdersRepository::new(),
        }
    }

    async fn find_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<OrderRecord, ShipmentsServiceError> {
        match self.orders_repository.get_order(tx, order).await {
            Ok(record) => Ok(record),
            Err(sqlx::Error::RowNotFound) => Err(ShipmentsServiceError::OrderNotFound),
            Err(error) => Err(error.into()),
        }
    }
}

#[async_trait]
impl ShipmentsService for PgShipmentsService {
    async fn list_methods(&self) -> Result<Vec<ShippingMethodRecord>, ShipmentsServiceError> {
        let mut tx = self.db.begin().await?;

        let methods = self.repository.list_methods(&mut tx).await?;

        tx.commit().await?;

        Ok(methods)
    }

    async fn create_shipment(
        &self,
        shipment: NewShipment,
    ) -> Result<ShipmentRecord, ShipmentsServiceError> {
        let mut tx = self.db.begin().await?;

        let order = self.find_order(&mut tx, shipment.order_uuid).await?;

        self.repository
            .find_active_method(&mut tx, &shipment.method_code)
            .await?
            .ok_or_else(|| ShipmentsServiceError::UnknownMethod(shipment.method_code.clone()))?;

        let record = self.repository.create_shipment(&mut tx, &shipment).await?;

        tx.commit().await?;

        info!(
            order_uuid = %order.uuid,
            shipment_uuid = %record.uuid,
            method = %record.method_code,
            "shipment created"
        );

        Ok(record)
    }

    async fn get_shipment(
        &self,
        principal: Principal,
        order: OrderUuid,
    ) -> Result<ShipmentRecord, ShipmentsServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self.find_order(&mut tx, order).await?;

        if !principal.can_access(record.user_uuid) {
            return Err(ShipmentsServiceError::AccessDenied);
        }

        let shipment = self
            .repository
            .find_shipment(&mut tx, order)
            .await?
            .ok_or(ShipmentsServiceError::NotFound)?;

        tx.commit().await?;

        Ok(shipment)
    }

    async fn update_shipment_status(
        &self,
        order: OrderUuid,
        status: ShipmentStatus,
    ) -> Result<ShipmentRecord, ShipmentsServiceError> {
        let mut tx = self.db.begin().await?;

        let shipment = self.repository.update_status(&mut tx, order, status).await?;

        tx.commit().await?;

        info!(order_uuid = %order, status = %status, "shipment status changed");

        Ok(shipment)
    }
}

#[automock]
#[async_trait]
pub trait ShipmentsService: Send + Sync {
    /// Active shipping methods, cheapest first.
    async fn list_methods(&self) -> Result<Vec<ShippingMethodRecord>, ShipmentsServiceError>;

    /// Open the order's shipment as `PENDING`. An order ships at most once.
    async fn create_shipment(
        &self,
        shipment: NewShipment,
    ) -> Result<ShipmentRecord, ShipmentsServiceError>;

    /// The order's shipment. Non-admins only see shipments of their own orders.
    async fn get_shipment(
        &self,
        principal: Principal,
        order: OrderUuid,
    ) -> Result<ShipmentRecord, ShipmentsServiceError>;

    /// Move the order's shipment to a new status. Any status may follow any other.
    async fn update_shipment_status(
        &self,
        order: OrderUuid,
        status: ShipmentStatus,
    ) -> Result<ShipmentRecord, ShipmentsServiceError>;
}
