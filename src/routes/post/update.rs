use actix_web::{put, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::post::{PostView, RPostUpdate};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::validation::{validate_post_content, validate_rating};
use crate::utils::webutils::AuthedUser;

#[put("/{post_id}")]
async fn update(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    user: AuthedUser,
    path: web::Path<i32>,
    body: web::Json<RPostUpdate>,
) -> ApiResult<PostView> {
    let post_id = path.into_inner();
    let body = body.into_inner();

    if let Some(title) = &body.title {
        if title.trim().is_empty() {
            return Err(AppError::Validation("title cannot be empty".to_string()));
        }
    }
    if let Some(content) = &body.content {
        if let Some(first) = validate_post_content(content).first() {
            return Err(AppError::Validation(first.clone()));
        }
    }
    if let Some(rating) = body.rating {
        if let Some(first) = validate_rating(rating).first() {
            return Err(AppError::Validation(first.clone()));
        }
    }

    let post = db.get_post(post_id).await?;
    if post.user_id != user.id {
        return Err(AppError::Forbidden(
            "only the author can edit this post".to_string(),
        ));
    }

    db.update_post(post_id, body).await?;
    let view = db.get_post_view(post_id, Some(user.id)).await?;

    Ok(ApiResponse::Ok(view))
}
