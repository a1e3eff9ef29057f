use actix_web::{get, web};

use crate::routes::book::item_search;
use crate::types::book::BookView;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/{isbn}")]
async fn lookup(
    _req: actix_web::HttpRequest,
    path: web::Path<String>,
) -> ApiResult<BookView> {
    let isbn = path.into_inner();
    if isbn.trim().is_empty() {
        return Err(AppError::BadRequest("isbn is required".to_string()));
    }

    let response = item_search(&isbn, "ISBN", 1).await?;

    let book = response
        .item
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or(AppError::NotFound)?;

    Ok(ApiResponse::Ok(BookView::from(book)))
}
