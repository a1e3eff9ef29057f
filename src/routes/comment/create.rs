use actix_web::{post, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::comment::{CommentView, RCommentCreate};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::validation::validate_comment_content;
use crate::utils::webutils::AuthedUser;

#[post("/{post_id}/comments")]
async fn create(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    user: AuthedUser,
    path: web::Path<i32>,
    body: web::Json<RCommentCreate>,
) -> ApiResult<CommentView> {
    let post_id = path.into_inner();

    if !db.post_exists(post_id).await? {
        return Err(AppError::NotFound);
    }

    if let Some(first) = validate_comment_content(&body.content).first() {
        return Err(AppError::Validation(first.clone()));
    }

    let comment = db
        .create_comment(
            post_id,
            user.id,
            body.content.trim().to_string(),
            body.parent_comment_id,
        )
        .await?;

    Ok(ApiResponse::Created(comment))
}
