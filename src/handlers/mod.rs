pub mod employee;
pub mod health;

use actix_web::web;
use crate::errors::AppError;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .service(
        web::resource("/health")
            .route(web::get().to(health::health)),
    )
    .service(
        web::resource("/v1/employee")
            .route(web::get().to(employee::get_employees))
            .route(web::post().to(employee::create_employee)),
    )
    .service(
        web::resource("/v1/employee/{employee_id}")
            .route(web::patch().to(employee::update_employee))
            .route(web::delete().to(employee::delete_employee)),
    );
}
