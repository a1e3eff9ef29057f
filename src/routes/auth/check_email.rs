use actix_web::{post, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{AvailabilityRes, RCheckEmail};
use crate::utils::validation::is_valid_email;

/// Availability probe for the signup form. Malformed input is a negative
/// answer, not a 400.
#[post("/check-email")]
async fn check_email(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RCheckEmail>,
) -> ApiResult<AvailabilityRes> {
    if body.email.is_empty() {
        return Err(AppError::BadRequest("email is required".to_string()));
    }

    if !is_valid_email(&body.email) {
        return Ok(ApiResponse::Ok(AvailabilityRes {
            available: false,
            message: "Invalid email format.".to_string(),
        }));
    }

    let exists = db.email_exists(&body.email).await?;
    Ok(ApiResponse::Ok(AvailabilityRes {
        available: !exists,
        message: if exists {
            "This email is already in use.".to_string()
        } else {
            "This email is available.".to_string()
        },
    }))
}
