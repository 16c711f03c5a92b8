//! Auth repository.

use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as};

use crate::{auth::Principal, domain::users::repository::try_get_role};

const FIND_PRINCIPAL_BY_TOKEN_HASH_SQL: &str =
    include_str!("sql/find_principal_by_token_hash.sql");

#[derive(Debug, Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn find_principal_by_token_hash(
        &self,
        hash: &str,
    ) -> Result<Option<Principal>, sqlx::Error> {
        query_as::<Postgres, Principal>(FIND_PRINCIPAL_BY_TOKEN_HASH_SQL)
            .bind(hash)
            .fetch_optional(&self.pool)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Principal {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            user: row.try_get("user_uuid")?,
            role: try_get_role(row, "role")?,
        })
    }
}
