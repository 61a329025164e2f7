use async_trait::async_trait;
use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::contact::{Contact, NewContactForm},
    errors::AppError,
    repositories::sqlx_repo::SqlxContactRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create_contact(&self, msg: &NewContactForm) -> Result<Contact, AppError>;
    /// Newest first
    async fn list_contacts(&self) -> Result<Vec<Contact>, AppError>;
    async fn delete_contact(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxContactRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxContactRepo { pool }
    }
}

#[async_trait]
impl ContactRepository for SqlxContactRepo {
    async fn create_contact(&self, msg: &NewContactForm) -> Result<Contact, AppError> {
        msg.validate()?;

        let contact = sqlx::query_as::<_, Contact>(
            r#"
            INSERT INTO contacts (name, email, subject, message)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#
        )
        .bind(&msg.name)
        .bind(&msg.email)
        .bind(&msg.subject)
        .bind(&msg.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(contact)
    }

    async fn list_contacts(&self) -> Result<Vec<Contact>, AppError> {
        let messages = sqlx::query_as::<_, Contact>(
            r#"SELECT * FROM contacts ORDER BY created_at DESC"#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    async fn delete_contact(&self, id: &Uuid) -> Result<(), AppError> {
        sqlx::query(r#"DELETE FROM contacts WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await
            .map(|result| {
                if result.rows_affected() == 0 {
                    Err(AppError::NotFound("Contact message not found".into()))
                } else {
                    Ok(())
                }
            })?
    }
}
