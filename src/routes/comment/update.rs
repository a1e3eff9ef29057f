use actix_web::{patch, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::comment::{CommentView, RCommentUpdate};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::validation::validate_comment_content;
use crate::utils::webutils::AuthedUser;

#[patch("/{comment_id}")]
async fn update(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    user: AuthedUser,
    path: web::Path<i32>,
    body: web::Json<RCommentUpdate>,
) -> ApiResult<CommentView> {
    let comment_id = path.into_inner();

    if let Some(first) = validate_comment_content(&body.content).first() {
        return Err(AppError::Validation(first.clone()));
    }

    let comment = db.get_comment(comment_id).await?;
    if comment.user_id != user.id {
        return Err(AppError::Forbidden(
            "only the author can edit this comment".to_string(),
        ));
    }

    let view = db
        .update_comment(comment_id, body.content.trim().to_string())
        .await?;

    Ok(ApiResponse::Ok(view))
}
