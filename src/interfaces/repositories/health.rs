use async_trait::async_trait;

use crate::{errors::AppError, repositories::sqlx_repo::SqlxHealthRepo};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HealthRepository: Send + Sync {
    async fn check_connection(&self) -> Result<(), AppError>;
}

impl SqlxHealthRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxHealthRepo { pool }
    }
}

#[async_trait]
impl HealthRepository for SqlxHealthRepo {
    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(AppError::from)
    }
}
