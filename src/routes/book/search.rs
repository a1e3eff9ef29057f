use actix_web::{get, web};

use crate::routes::book::item_search;
use crate::types::book::{BookSearchQuery, BookSearchRes, BookView};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};

const DEFAULT_RESULTS: u32 = 10;
const MAX_RESULTS_CAP: u32 = 50;

/// Map the public `search_type` value onto the upstream QueryType parameter.
fn query_type_of(search_type: Option<&str>) -> Result<&'static str, AppError> {
    match search_type {
        None | Some("title") => Ok("Title"),
        Some("author") => Ok("Author"),
        Some("isbn") => Ok("ISBN"),
        Some(other) => Err(AppError::BadRequest(format!(
            "unknown search_type {other:?}; expected title, author or isbn"
        ))),
    }
}

fn effective_max_results(requested: Option<u32>) -> u32 {
    requested.unwrap_or(DEFAULT_RESULTS).clamp(1, MAX_RESULTS_CAP)
}

#[get("/search")]
async fn search(
    _req: actix_web::HttpRequest,
    query: web::Query<BookSearchQuery>,
) -> ApiResult<BookSearchRes> {
    if query.query.trim().is_empty() {
        return Err(AppError::BadRequest("search query is required".to_string()));
    }

    let query_type = query_type_of(query.search_type.as_deref())?;
    let max_results = effective_max_results(query.max_results);

    let response = item_search(&query.query, query_type, max_results).await?;

    let books: Vec<BookView> = response
        .item
        .unwrap_or_default()
        .into_iter()
        .map(BookView::from)
        .collect();
    let total_results = response.total_results.unwrap_or(books.len() as u32);

    Ok(ApiResponse::Ok(BookSearchRes {
        books,
        total_results,
    }))
}
