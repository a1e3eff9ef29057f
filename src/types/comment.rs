use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RCommentCreate {
    pub content: String,
    pub parent_comment_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RCommentUpdate {
    pub content: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CommentView {
    pub id: i32,
    pub post_id: i32,
    pub user_id: i32,
    pub author_nickname: String,
    pub author_profile_picture: Option<String>,
    pub parent_comment_id: Option<i32>,
    /// Nickname of the comment being replied to; only set on replies.
    pub parent_author_nickname: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub replies: Vec<CommentView>,
}

#[derive(Serialize, Deserialize)]
pub struct CommentListRes {
    pub comments: Vec<CommentView>,
    /// Roots plus replies.
    pub total: usize,
}
