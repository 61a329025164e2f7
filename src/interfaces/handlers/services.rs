use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{errors::AppError, AppState};

#[instrument(skip(state))]
pub async fn list_services(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let services = state.service_handler.list_services().await?;
    Ok(HttpResponse::Ok().json(services))
}
