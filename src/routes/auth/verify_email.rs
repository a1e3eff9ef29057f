use actix_web::{get, web};
use serde::Deserialize;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserView;

#[derive(Deserialize)]
pub struct VerifyQuery {
    pub token: Option<String>,
}

#[get("/verify-email")]
async fn verify_email(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    query: web::Query<VerifyQuery>,
) -> ApiResult<UserView> {
    let token = query
        .token
        .as_deref()
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::BadRequest("verification token is required".to_string()))?;

    let user = db.consume_verification_token(token).await?;

    Ok(ApiResponse::Ok(UserView::from(user)))
}
