//! Vouchers service.

use async_trait::async_trait;
use mockall::automock;
use rust_decimal::Decimal;

use crate::{
    database::Db,
    domain::vouchers::{
        data::NewVoucher, errors::VouchersServiceError, records::VoucherRecord,
        repository::PgVouchersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgVouchersService {
    db: Db,
    repository: PgVouchersRepository,
}

impl PgVouchersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgVouchersRepository::new(),
        }
    }
}

#[async_trait]
impl VouchersService for PgVouchersService {
    async fn create_voucher(
        &self,
        voucher: NewVoucher,
    ) -> Result<VoucherRecord, VouchersServiceError> {
        if voucher.code.trim().is_empty()
            || voucher.discount_percent < Decimal::ZERO
            || voucher.discount_percent > Decimal::ONE_HUNDRED
        {
            return Err(VouchersServiceError::InvalidData);
        }

        let mut tx = self.db.begin().await?;

        let record = self.repository.create_voucher(&mut tx, &voucher).await?;

        tx.commit().await?;

        Ok(record)
    }

    async fn find_voucher(
        &self,
        code: &str,
    ) -> Result<Option<VoucherRecord>, VouchersServiceError> {
        let mut tx = self.db.begin().await?;

        let voucher = self.repository.find_voucher_by_code(&mut tx, code).await?;

        tx.commit().await?;

        Ok(voucher)
    }
}

#[automock]
#[async_trait]
pub trait VouchersService: Send + Sync {
    /// Create a voucher.
    async fn create_voucher(
        &self,
        voucher: NewVoucher,
    ) -> Result<VoucherRecord, VouchersServiceError>;

    /// Look up a voucher by its exact code, whether or not it is currently usable.
    async fn find_voucher(
        &self,
        code: &str,
    ) -> Result<Option<VoucherRecord>, VouchersServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::{SignedDuration, Timestamp};
    use testresult::TestResult;

    use crate::{domain::vouchers::records::VoucherUuid, test::TestContext};

    use super::*;

    fn new_voucher(code: &str, percent: Decimal) -> NewVoucher {
        NewVoucher {
            uuid: VoucherUuid::new(),
            code: code.to_string(),
            description: "Spring sale".to_string(),
            discount_percent: percent,
            max_discount: 150_000,
            min_order_value: 500_000,
            expires_at: Timestamp::now() + SignedDuration::from_hours(48),
        }
    }

    #[tokio::test]
    async fn create_voucher_then_find_by_code() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx
            .vouchers
            .create_voucher(new_voucher("SPRING20", Decimal::new(2000, 2)))
            .await?;

        let found = ctx.vouchers.find_voucher("SPRING20").await?;

        assert_eq!(found.as_ref().map(|v| v.uuid), Some(created.uuid));
        assert_eq!(created.discount_percent, Decimal::from(20));
        assert_eq!(created.max_discount, 150_000);
        assert!(created.is_active);

        Ok(())
    }

    #[tokio::test]
    async fn find_voucher_unknown_code_returns_none() -> TestResult {
        let ctx = TestContext::new().await;

        let found = ctx.vouchers.find_voucher("NOPE").await?;

        assert!(found.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn find_voucher_is_case_sensitive() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.vouchers
            .create_voucher(new_voucher("SPRING20", Decimal::from(20)))
            .await?;

        assert!(ctx.vouchers.find_voucher("spring20").await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn create_voucher_duplicate_code_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.vouchers
            .create_voucher(new_voucher("DUP", Decimal::from(10)))
            .await?;

        let result = ctx
            .vouchers
            .create_voucher(new_voucher("DUP", Decimal::from(10)))
            .await;

        assert!(
            matches!(result, Err(VouchersServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_voucher_percent_out_of_range_returns_invalid_data() {
        let ctx = TestContext::new().await;

        let result = ctx
            .vouchers
            .create_voucher(new_voucher("BIG", Decimal::from(101)))
            .await;

        assert!(
            matches!(result, Err(VouchersServiceError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );
    }
}
