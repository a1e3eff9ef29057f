pub mod lookup;
pub mod search;

use crate::config::config;
use crate::types::book::AladinResponse;
use crate::types::error::AppError;
use std::time::Duration;

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(5);

/// One ItemSearch call against the configured Aladin-style endpoint.
pub(crate) async fn item_search(
    query: &str,
    query_type: &str,
    max_results: u32,
) -> Result<AladinResponse, AppError> {
    let books = &config().books;

    let client = reqwest::ClientBuilder::new()
        .user_agent("modubook/1.0 (+reqwest)")
        .timeout(UPSTREAM_TIMEOUT)
        .build()
        .map_err(|e| AppError::Internal(format!("build client failed: {e}")))?;

    let res = client
        .get(&books.endpoint)
        .query(&[
            ("ttbkey", books.api_key.as_str()),
            ("Query", query),
            ("QueryType", query_type),
            ("MaxResults", &max_results.to_string()),
            ("start", "1"),
            ("SearchTarget", "Book"),
            ("output", "js"),
            ("Version", "20131101"),
        ])
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                AppError::UpstreamTimeout("book search service did not respond".to_string())
            } else {
                AppError::Upstream(format!("book search request failed: {e}"))
            }
        })?;

    if !res.status().is_success() {
        return Err(AppError::Upstream(format!(
            "book search service returned HTTP {}",
            res.status()
        )));
    }

    res.json::<AladinResponse>()
        .await
        .map_err(|e| AppError::Upstream(format!("unexpected book search response: {e}")))
}
