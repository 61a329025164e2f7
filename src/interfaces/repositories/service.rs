use async_trait::async_trait;
use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::service::{NewService, Service},
    errors::AppError,
    repositories::sqlx_repo::SqlxServiceRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// Explicit order ascending, then newest first
    async fn list_services(&self) -> Result<Vec<Service>, AppError>;
    async fn create_service(&self, service: &NewService) -> Result<Service, AppError>;
    async fn update_service(&self, id: &Uuid, service: &NewService) -> Result<Service, AppError>;
    async fn delete_service(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxServiceRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxServiceRepo { pool }
    }
}

#[async_trait]
impl ServiceRepository for SqlxServiceRepo {
    async fn list_services(&self) -> Result<Vec<Service>, AppError> {
        let services = sqlx::query_as::<_, Service>(
            r#"SELECT * FROM services ORDER BY sort_order ASC, created_at DESC"#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(services)
    }

    async fn create_service(&self, service: &NewService) -> Result<Service, AppError> {
        service.validate()?;

        let created = sqlx::query_as::<_, Service>(
            r#"
            INSERT INTO services (
                title, description, icon, price_range, delivery_time,
                features, featured, sort_order
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#
        )
        .bind(&service.title)
        .bind(&service.description)
        .bind(&service.icon)
        .bind(&service.price_range)
        .bind(&service.delivery_time)
        .bind(&service.features)
        .bind(service.featured)
        .bind(service.order)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update_service(&self, id: &Uuid, service: &NewService) -> Result<Service, AppError> {
        service.validate()?;

        sqlx::query_as::<_, Service>(
            r#"
            UPDATE services SET
                title = $1,
                description = $2,
                icon = $3,
                price_range = $4,
                delivery_time = $5,
                features = $6,
                featured = $7,
                sort_order = $8
            WHERE id = $9
            RETURNING *
            "#
        )
        .bind(&service.title)
        .bind(&service.description)
        .bind(&service.icon)
        .bind(&service.price_range)
        .bind(&service.delivery_time)
        .bind(&service.features)
        .bind(service.featured)
        .bind(service.order)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Service not found".into()))
    }

    async fn delete_service(&self, id: &Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map(|result| {
                if result.rows_affected() == 0 {
                    Err(AppError::NotFound("Service not found".into()))
                } else {
                    Ok(())
                }
            })?
    }
}
