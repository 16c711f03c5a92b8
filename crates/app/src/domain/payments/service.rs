//! Payments service.

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
        payments::{
            data::NewPayment,
            errors::PaymentsServiceError,
            records::{PaymentMethodRecord, PaymentRecord, PaymentStatus},
            repository::PgPaymentsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgPaymentsService {
    db: Db,
    repository: PgPaymentsRepository,
    orders_repository: PgOrdersRepository,
}

impl PgPaymentsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgPaymentsRepository::new(),
            orders_repository: PgOrdersRepository::new(),
        }
    }

    /// Load the order, hiding orders the principal may not see.
    async fn readable_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        principal: Principal,
        order: OrderUuid,
    ) -> Result<OrderRecord, PaymentsServiceError> {
        let record = match self.orders_repository.get_order(tx, order).await {
            Ok(record) => record,
            Err(sqlx::Error::RowNotFound) => return Err(PaymentsServiceError::OrderNotFound),
            Err(error) => return Err(error.into()),
        };

        if !principal.can_access(record.user_uuid) {
            return Err(PaymentsServiceError::AccessDenied);
        }

        Ok(record)
    }
}

#[async_trait]
impl PaymentsService for PgPaymentsService {
    async fn list_methods(&self) -> Result<Vec<PaymentMethodRecord>, PaymentsServiceError> {
        let mut tx = self.db.begin().await?;

        let methods = self.repository.list_methods(&mut tx).await?;

        tx.commit().await?;

        Ok(methods)
    }

    async fn create_payment(
        &self,
        principal: Principal,
        payment: NewPayment,
    ) -> Result<PaymentRecord, PaymentsServiceError> {
        let mut tx = self.db.begin().await?;

        let order = self
            .readable_order(&mut tx, principal, payment.order_uuid)
            .await?;

        let method = self
            .repository
            .find_active_method(&mut tx, &payment.method_code)
            .await?
            .ok_or_else(|| PaymentsServiceError::UnknownMethod(payment.method_code.clone()))?;

        let record = self
            .repository
            .create_payment(&mut tx, order.uuid, &method.code, order.total)
            .await?;

        tx.commit().await?;

        info!(
            order_uuid = %order.uuid,
            payment_uuid = %record.uuid,
            method = %record.method_code,
            amount = record.amount,
            "payment recorded"
        );

        Ok(record)
    }

    async fn get_payment(
        &self,
        principal: Principal,
        order: OrderUuid,
    ) -> Result<PaymentRecord, PaymentsServiceError> {
        let mut tx = self.db.begin().await?;

        self.readable_order(&mut tx, principal, order).await?;

        let payment = self
            .repository
            .find_latest_payment(&mut tx, order)
            .await?
            .ok_or(PaymentsServiceError::NotFound)?;

        tx.commit().await?;

        Ok(payment)
    }

    async fn update_payment_status(
        &self,
        order: OrderUuid,
        status: PaymentStatus,
    ) -> Result<PaymentRecord, PaymentsServiceError> {
        let mut tx = self.db.begin().await?;

        let payment = self
            .repository
            .find_latest_payment(&mut tx, order)
            .await?
            .ok_or(PaymentsServiceError::NotFound)?;

        let payment = self
            .repository
            .update_status(&mut tx, payment.uuid, status)
            .await?;

        tx.commit().await?;

        Ok(payment)
    }
}

#[automock]
#[async_trait]
pub trait PaymentsService: Send + Sync {
    /// Active payment methods.
    async fn list_methods(&self) -> Result<Vec<PaymentMethodRecord>, PaymentsServiceError>;

    /// Record a pending payment of the order total. Owner or admin only.
    async fn create_payment(
        &self,
        principal: Principal,
        payment: NewPayment,
    ) -> Result<PaymentRecord, PaymentsServiceError>;

    /// The most recent payment recorded for an order.
    async fn get_payment(
        &self,
        principal: Principal,
        order: OrderUuid,
    ) -> Result<PaymentRecord, PaymentsServiceError>;

    /// Change the status of the order's most recent payment.
    async fn update_payment_status(
        &self,
        order: OrderUuid,
        status: PaymentStatus,
    ) -> Result<PaymentRecord, PaymentsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::users::records::Role,
        test::{TestContext, helpers},
    };

    use super::*;

    fn owner_of(order: &OrderRecord) -> Principal {
        Principal::new(order.user_uuid, Role::Customer)
    }

    #[tokio::test]
    async fn list_methods_returns_seeded_methods() -> TestResult {
        let ctx = TestContext::new().await;

        let methods = ctx.payments.list_methods().await?;

        let codes: Vec<&str> = methods.iter().map(|m| m.code.as_str()).collect();

        assert_eq!(codes, vec!["BANK_TRANSFER", "COD", "MOMO", "VNPAY"]);

        Ok(())
    }

    #[tokio::test]
    async fn create_payment_records_pending_order_total() -> TestResult {
        let ctx = TestContext::new().await;
        let order = helpers::place_order(&ctx).await?;

        let payment = ctx
            .payments
            .create_payment(
                owner_of(&order),
                NewPayment {
                    order_uuid: order.uuid,
                    method_code: "COD".to_string(),
                },
            )
            .await?;

        assert_eq!(payment.order_uuid, order.uuid);
        assert_eq!(payment.amount, order.total);
        assert_eq!(payment.status, PaymentStatus::Pending);
        assert_eq!(payment.method_name, "Cash on delivery");
        assert!(payment.paid_at.is_none());

        let fetched = ctx.payments.get_payment(owner_of(&order), order.uuid).await?;

        assert_eq!(fetched.uuid, payment.uuid);

        Ok(())
    }

    #[tokio::test]
    async fn create_payment_unknown_method_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;
        let order = helpers::place_order(&ctx).await?;

        let result = ctx
            .payments
            .create_payment(
                owner_of(&order),
                NewPayment {
                    order_uuid: order.uuid,
                    method_code: "BITCOIN".to_string(),
                },
            )
            .await;

        assert!(
            matches!(result, Err(PaymentsServiceError::UnknownMethod(ref code)) if code == "BITCOIN"),
            "expected UnknownMethod, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_payment_for_someone_elses_order_is_denied() -> TestResult {
        let ctx = TestContext::new().await;
        let order = helpers::place_order(&ctx).await?;
        let stranger = ctx.create_user(Role::Customer).await?;

        let result = ctx
            .payments
            .create_payment(
                Principal::new(stranger, Role::Customer),
                NewPayment {
                    order_uuid: order.uuid,
                    method_code: "COD".to_string(),
                },
            )
            .await;

        assert!(
            matches!(result, Err(PaymentsServiceError::AccessDenied)),
            "expected AccessDenied, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_payment_unknown_order_returns_order_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let admin = ctx.create_user(Role::Admin).await?;

        let result = ctx
            .payments
            .create_payment(
                Principal::new(admin, Role::Admin),
                NewPayment {
                    order_uuid: OrderUuid::new(),
                    method_code: "COD".to_string(),
                },
            )
            .await;

        assert!(
            matches!(result, Err(PaymentsServiceError::OrderNotFound)),
            "expected OrderNotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn get_payment_without_payment_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let order = helpers::place_order(&ctx).await?;

        let result = ctx.payments.get_payment(owner_of(&order), order.uuid).await;

        assert!(
            matches!(result, Err(PaymentsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn completing_a_payment_stamps_paid_at() -> TestResult {
        let ctx = TestContext::new().await;
        let order = helpers::place_order(&ctx).await?;

        ctx.payments
            .create_payment(
                owner_of(&order),
                NewPayment {
                    order_uuid: order.uuid,
                    method_code: "BANK_TRANSFER".to_string(),
                },
            )
            .await?;

        let payment = ctx
            .payments
            .update_payment_status(order.uuid, PaymentStatus::Completed)
            .await?;

        assert_eq!(payment.status, PaymentStatus::Completed);
        assert!(payment.paid_at.is_some());

        Ok(())
    }
}
