use actix_web::{get, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserView;
use crate::utils::webutils::AuthedUser;

#[get("/me")]
async fn me(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    user: AuthedUser,
) -> ApiResult<UserView> {
    let user = db.get_user_by_id(user.id).await?;
    Ok(ApiResponse::Ok(UserView::from(user)))
}
