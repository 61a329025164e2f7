use actix_web::web;

use crate::{
    constants::API_PREFIX,
    errors::AppError,
    handlers::{home::home, system::health_check},
};

mod blog;
mod portfolio;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);

    cfg.service(
        web::scope(API_PREFIX)
            .service(health_check)
            .configure(portfolio::config_routes)
            .configure(blog::config_routes)
    );

    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::from(err).into()
    }));
}
