use actix_web::{get, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::post::{PageQuery, Pagination, PostListRes};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::MaybeAuthed;

const DEFAULT_LIMIT: u64 = 20;
const MAX_LIMIT: u64 = 100;

#[get("")]
async fn list(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    viewer: MaybeAuthed,
    query: web::Query<PageQuery>,
) -> ApiResult<PostListRes> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
    let offset = query.offset.unwrap_or(0);
    let viewer_id = viewer.0.map(|u| u.id);

    let posts = db.list_post_views(limit, offset, viewer_id).await?;

    Ok(ApiResponse::Ok(PostListRes {
        pagination: Pagination {
            limit,
            offset,
            count: posts.len(),
        },
        data: posts,
    }))
}
