use actix_web::{post, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::post::{PostView, RPostCreate};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::validation::{validate_post_content, validate_rating};
use crate::utils::webutils::AuthedUser;

#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    user: AuthedUser,
    body: web::Json<RPostCreate>,
) -> ApiResult<PostView> {
    let body = body.into_inner();

    if body.title.trim().is_empty() {
        return Err(AppError::Validation("title is required".to_string()));
    }
    let content_errors = validate_post_content(&body.content);
    if let Some(first) = content_errors.first() {
        return Err(AppError::Validation(first.clone()));
    }
    if let Some(rating) = body.rating {
        if let Some(first) = validate_rating(rating).first() {
            return Err(AppError::Validation(first.clone()));
        }
    }

    let post_id = db.create_post(user.id, body).await?;
    let view = db.get_post_view(post_id, Some(user.id)).await?;

    Ok(ApiResponse::Created(view))
}
