use actix_web::{get, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::comment::CommentListRes;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/{post_id}/comments")]
async fn list(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<i32>,
) -> ApiResult<CommentListRes> {
    let post_id = path.into_inner();

    if !db.post_exists(post_id).await? {
        return Err(AppError::NotFound);
    }

    let comments = db.list_comment_views(post_id).await?;
    let total = comments.len() + comments.iter().map(|c| c.replies.len()).sum::<usize>();

    Ok(ApiResponse::Ok(CommentListRes { comments, total }))
}
