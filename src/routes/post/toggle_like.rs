use actix_web::{post, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::post::ToggleLikeRes;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::AuthedUser;

#[post("/{post_id}/toggle-like")]
async fn toggle_like(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    user: AuthedUser,
    path: web::Path<i32>,
) -> ApiResult<ToggleLikeRes> {
    let post_id = path.into_inner();

    if !db.post_exists(post_id).await? {
        return Err(AppError::NotFound);
    }

    let result = db.toggle_like(user.id, post_id).await?;
    Ok(ApiResponse::Ok(result))
}
