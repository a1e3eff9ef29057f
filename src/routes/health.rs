use actix_web::get;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub success: bool,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

#[get("")]
async fn health(_req: actix_web::HttpRequest) -> ApiResult<Response> {
    Ok(ApiResponse::Ok(Response {
        success: true,
        message: "Server is running".to_string(),
        timestamp: Utc::now(),
    }))
}
