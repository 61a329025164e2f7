use std::sync::Arc;

use tracing::instrument;
use validator::Validate;

use crate::{
    entities::contact::{Contact, NewContactForm},
    errors::AppError,
    repositories::contact::ContactRepository,
};

pub struct ContactHandler<R>
where
    R: ContactRepository + ?Sized,
{
    pub contact_repo: Arc<R>,
}

impl<R> ContactHandler<R>
where
    R: ContactRepository + ?Sized,
{
    pub fn new(contact_repo: Arc<R>) -> Self {
        ContactHandler { contact_repo }
    }

    /// Validates and stores an incoming contact message
    #[instrument(skip(self, form))]
    pub async fn create_contact(&self, form: NewContactForm) -> Result<Contact, AppError> {
        form.validate()?;

        let contact = self.contact_repo.create_contact(&form).await?;
        tracing::info!(contact_id = %contact.id, "Contact message received");

        Ok(contact)
    }
}
