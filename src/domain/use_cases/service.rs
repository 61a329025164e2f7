use std::sync::Arc;

use tracing::instrument;

use crate::{
    entities::service::ServiceResponse,
    errors::AppError,
    repositories::service::ServiceRepository,
};

pub struct ServiceHandler<R>
where
    R: ServiceRepository + ?Sized,
{
    pub service_repo: Arc<R>,
}

impl<R> ServiceHandler<R>
where
    R: ServiceRepository + ?Sized,
{
    pub fn new(service_repo: Arc<R>) -> Self {
        ServiceHandler { service_repo }
    }

    #[instrument(skip(self))]
    pub async fn list_services(&self) -> Result<Vec<ServiceResponse>, AppError> {
        let services = self.service_repo.list_services().await?;
        Ok(services.into_iter().map(ServiceResponse::from).collect())
    }
}
