use actix_web::{post, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{AvailabilityRes, RCheckNickname};
use crate::utils::validation::validate_nickname;

#[post("/check-nickname")]
async fn check_nickname(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RCheckNickname>,
) -> ApiResult<AvailabilityRes> {
    if body.nickname.is_empty() {
        return Err(AppError::BadRequest("nickname is required".to_string()));
    }

    let errors = validate_nickname(&body.nickname);
    if let Some(first) = errors.first() {
        return Ok(ApiResponse::Ok(AvailabilityRes {
            available: false,
            message: first.clone(),
        }));
    }

    let exists = db.nickname_exists(&body.nickname).await?;
    Ok(ApiResponse::Ok(AvailabilityRes {
        available: !exists,
        message: if exists {
            "This nickname is already in use.".to_string()
        } else {
            "This nickname is available.".to_string()
        },
    }))
}
