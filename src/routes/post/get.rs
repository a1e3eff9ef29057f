use actix_web::{get, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::post::PostView;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::MaybeAuthed;

#[get("/{post_id}")]
async fn get_post(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    viewer: MaybeAuthed,
    path: web::Path<i32>,
) -> ApiResult<PostView> {
    let post_id = path.into_inner();
    let view = db
        .get_post_view(post_id, viewer.0.map(|u| u.id))
        .await?;
    Ok(ApiResponse::Ok(view))
}
