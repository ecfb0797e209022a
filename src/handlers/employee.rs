use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use validator::Validate;
use log::info;
use crate::db;
use crate::errors::AppError;
use crate::utils::validation::validate_payload;

#[derive(Deserialize, Validate)]
pub struct NewEmployee {
    first_name: String,
    last_name: String,
    #[validate(range(min = 1, message = "must be at least 1"))]
    department_id: i32,
}

#[derive(Deserialize, Validate)]
pub struct EmployeeUpdate {
    first_name: String,
    last_name: String,
    #[validate(range(min = 1, message = "must be at least 1"))]
    department_id: i32,
}

#[derive(Deserialize, Validate)]
pub struct EmployeePath {
    #[validate(range(min = 0, message = "must not be negative"))]
    employee_id: i32,
}

#[derive(Serialize)]
struct ActionResponse {
    message: String,
    timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    rows_affected: Option<u64>,
}

impl ActionResponse {
    fn new(verb: &str, timestamp: String, rows_affected: Option<u64>) -> Self {
        ActionResponse {
            message: format!("Employee {} successfully at {}", verb, timestamp),
            timestamp,
            rows_affected,
        }
    }
}

pub async fn get_employees(
    pool: web::Data<sqlx::PgPool>,
) -> Result<HttpResponse, AppError> {
    let table = db::employee::list(&pool).await?;
    Ok(HttpResponse::Ok().json(table))
}

pub async fn create_employee(
    pool: web::Data<sqlx::PgPool>,
    new_employee: web::Json<NewEmployee>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&*new_employee)?;

    let timestamp = db::employee::create(
        &pool,
        &new_employee.first_name,
        &new_employee.last_name,
        new_employee.department_id,
    )
    .await?;

    info!("Employee added at {}", timestamp);
    Ok(HttpResponse::Created().json(ActionResponse::new("added", timestamp, None)))
}

pub async fn update_employee(
    pool: web::Data<sqlx::PgPool>,
    path: web::Path<EmployeePath>,
    updates: web::Json<EmployeeUpdate>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&*path)?;
    validate_payload(&*updates)?;

    let outcome = db::employee::update(
        &pool,
        path.employee_id,
        &updates.first_name,
        &updates.last_name,
        updates.department_id,
    )
    .await?;

    info!("Employee {} updated at {}", path.employee_id, outcome.timestamp);
    Ok(HttpResponse::Ok().json(ActionResponse::new(
        "updated",
        outcome.timestamp,
        Some(outcome.rows_affected),
    )))
}

pub async fn delete_employee(
    pool: web::Data<sqlx::PgPool>,
    path: web::Path<EmployeePath>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&*path)?;

    let outcome = db::employee::delete(&pool, path.employee_id).await?;

    info!("Employee {} deleted at {}", path.employee_id, outcome.timestamp);
    Ok(HttpResponse::Ok().json(ActionResponse::new(
        "deleted",
        outcome.timestamp,
        Some(outcome.rows_affected),
    )))
}
