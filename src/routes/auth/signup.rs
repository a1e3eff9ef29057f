use actix_web::{post, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RSignup, SignupRes, UserView};
use crate::utils::mail::{send_email, verification_email};
use crate::utils::token::hash_password;
use crate::utils::validation::{is_valid_email, validate_nickname, validate_password};

#[post("/signup")]
async fn signup(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RSignup>,
) -> ApiResult<SignupRes> {
    let body = body.into_inner();

    if !is_valid_email(&body.email) {
        return Err(AppError::Validation("invalid email format".to_string()));
    }
    let password_errors = validate_password(&body.password);
    if let Some(first) = password_errors.first() {
        return Err(AppError::Validation(first.clone()));
    }
    let nickname_errors = validate_nickname(&body.nickname);
    if let Some(first) = nickname_errors.first() {
        return Err(AppError::Validation(first.clone()));
    }

    let password_hash = hash_password(&body.password)
        .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))?;

    let user = db
        .create_user(DBUserCreate {
            email: body.email.clone(),
            password_hash,
            nickname: body.nickname.clone(),
        })
        .await?;

    let token = db.create_verification_token(user.id).await?;

    // The account and token are durable at this point; a flaky mail provider
    // should not fail the signup.
    if let Err(e) = send_email(verification_email(&user.email, &user.nickname, &token.token)).await
    {
        log::error!("failed to send verification email to user {}: {}", user.id, e);
    }

    Ok(ApiResponse::Created(SignupRes {
        message: "Signup complete. Check your email to verify your account.".to_string(),
        user: UserView::from(user),
    }))
}
