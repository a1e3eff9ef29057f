use actix_web::{delete, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::AuthedUser;

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

#[delete("/{post_id}")]
async fn delete(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    user: AuthedUser,
    path: web::Path<i32>,
) -> ApiResult<Response> {
    let post_id = path.into_inner();

    let post = db.get_post(post_id).await?;
    if post.user_id != user.id {
        return Err(AppError::Forbidden(
            "only the author can delete this post".to_string(),
        ));
    }

    db.delete_post(post_id).await?;

    Ok(ApiResponse::Ok(Response {
        message: "Post deleted.".to_string(),
    }))
}
