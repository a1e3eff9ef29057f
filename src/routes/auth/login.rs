use actix_web::{post, web};
use std::sync::Arc;

use crate::config::config;
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{LoginRes, RLogin, UserView};
use crate::utils::token::{issue_jwt, verify_password};
use entity::user::UserStatus;

#[post("/login")]
async fn login(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RLogin>,
) -> ApiResult<LoginRes> {
    if body.email.is_empty() || body.password.is_empty() {
        return Err(AppError::BadRequest(
            "email and password are required".to_string(),
        ));
    }

    // Same 401 for unknown email and wrong password.
    let user = db
        .get_user_by_email(&body.email)
        .await
        .map_err(|_| AppError::Unauthorized)?;

    if user.status != UserStatus::Active {
        return Err(AppError::Forbidden(
            "email verification required".to_string(),
        ));
    }

    let valid = verify_password(&body.password, &user.password_hash)
        .map_err(|e| AppError::Internal(format!("password verification failed: {e}")))?;
    if !valid {
        return Err(AppError::Unauthorized);
    }

    let token = issue_jwt(user.id, &config().jwt_secret)?;

    Ok(ApiResponse::Ok(LoginRes {
        token,
        user: UserView::from(user),
    }))
}
