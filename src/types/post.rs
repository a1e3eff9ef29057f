use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RPostCreate {
    pub title: String,
    pub content: String,
    pub rating: Option<i16>,
    pub isbn: Option<String>,
    pub book_title: Option<String>,
    pub book_author: Option<String>,
}

/// All fields optional; absent fields keep their current value.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RPostUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub rating: Option<i16>,
    pub isbn: Option<String>,
    pub book_title: Option<String>,
    pub book_author: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PostAuthor {
    pub id: i32,
    pub nickname: String,
    pub profile_picture: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PostView {
    pub id: i32,
    pub author: PostAuthor,
    pub title: String,
    pub content: String,
    pub rating: Option<i16>,
    pub isbn: Option<String>,
    pub book_title: Option<String>,
    pub book_author: Option<String>,
    pub images: Vec<String>,
    pub hashtags: Vec<String>,
    pub like_count: u64,
    pub comment_count: u64,
    pub is_liked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct Pagination {
    pub limit: u64,
    pub offset: u64,
    pub count: usize,
}

#[derive(Serialize, Deserialize)]
pub struct PostListRes {
    pub data: Vec<PostView>,
    pub pagination: Pagination,
}

#[derive(Deserialize)]
pub struct PageQuery {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

#[derive(Serialize, Deserialize)]
pub struct ToggleLikeRes {
    pub action: String,
    pub like_count: u64,
    pub is_liked: bool,
}

#[derive(Serialize, Deserialize)]
pub struct UploadImagesRes {
    pub images: Vec<String>,
}
