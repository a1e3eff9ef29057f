use crate::db::postgres_service::PostgresService;
use crate::types::comment::CommentView;
use crate::types::error::AppError;
use chrono::Utc;
use entity::comment::{ActiveModel as CommentActive, Entity as Comment, Model as CommentModel};
use entity::user::{Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, NotSet, QueryFilter, QueryOrder, Set,
};
use std::collections::HashMap;

impl PostgresService {
    pub async fn get_comment(&self, id: i32) -> Result<CommentModel, AppError> {
        Ok(Comment::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Comment does not exist".into()))?)
    }

    /// Insert a comment or a reply. Reply rules: the parent must exist, must
    /// belong to the same post, and must itself be a root comment.
    pub async fn create_comment(
        &self,
        post_id: i32,
        user_id: i32,
        content: String,
        parent_comment_id: Option<i32>,
    ) -> Result<CommentView, AppError> {
        if let Some(parent_id) = parent_comment_id {
            let parent = Comment::find_by_id(parent_id)
                .one(&self.database_connection)
                .await?
                .ok_or(AppError::NotFound)?;
            if parent.post_id != post_id {
                return Err(AppError::BadRequest(
                    "parent comment belongs to a different post".to_string(),
                ));
            }
            if parent.parent_comment_id.is_some() {
                return Err(AppError::BadRequest(
                    "replies to replies are not allowed".to_string(),
                ));
            }
        }

        let now = Utc::now();
        let comment = CommentActive {
            id: NotSet,
            post_id: Set(post_id),
            user_id: Set(user_id),
            parent_comment_id: Set(parent_comment_id),
            content: Set(content),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.database_connection)
        .await?;

        self.get_comment_view(comment.id).await
    }

    pub async fn get_comment_view(&self, id: i32) -> Result<CommentView, AppError> {
        let comment = self.get_comment(id).await?;
        let author = self.get_user_by_id(comment.user_id).await?;

        let parent_author_nickname = match comment.parent_comment_id {
            Some(parent_id) => {
                let parent = self.get_comment(parent_id).await?;
                Some(self.get_user_by_id(parent.user_id).await?.nickname)
            }
            None => None,
        };

        Ok(view_of(&comment, &author, parent_author_nickname))
    }

    /// Root comments oldest first, replies nested under their parent, also
    /// oldest first.
    pub async fn list_comment_views(&self, post_id: i32) -> Result<Vec<CommentView>, AppError> {
        let comments = Comment::find()
            .filter(entity::comment::Column::PostId.eq(post_id))
            .order_by_asc(entity::comment::Column::CreatedAt)
            .order_by_asc(entity::comment::Column::Id)
            .all(&self.database_connection)
            .await?;

        let author_ids: Vec<i32> = comments.iter().map(|c| c.user_id).collect();
        let authors: HashMap<i32, UserModel> = User::find()
            .filter(entity::user::Column::Id.is_in(author_ids))
            .all(&self.database_connection)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let by_id: HashMap<i32, &CommentModel> = comments.iter().map(|c| (c.id, c)).collect();

        let mut roots: Vec<CommentView> = Vec::new();
        let mut replies: Vec<CommentView> = Vec::new();
        for comment in &comments {
            let author = authors
                .get(&comment.user_id)
                .ok_or_else(|| AppError::Internal("comment without author".to_string()))?;
            let parent_author_nickname = comment
                .parent_comment_id
                .and_then(|pid| by_id.get(&pid))
                .and_then(|parent| authors.get(&parent.user_id))
                .map(|u| u.nickname.clone());
            let view = view_of(comment, author, parent_author_nickname);
            if comment.parent_comment_id.is_none() {
                roots.push(view);
            } else {
                replies.push(view);
            }
        }

        for reply in replies {
            if let Some(parent) = roots
                .iter_mut()
                .find(|root| Some(root.id) == reply.parent_comment_id)
            {
                parent.replies.push(reply);
            }
        }

        Ok(roots)
    }

    pub async fn update_comment(&self, id: i32, content: String) -> Result<CommentView, AppError> {
        let mut am: CommentActive = self.get_comment(id).await?.into();
        am.content = Set(content);
        am.updated_at = Set(Utc::now());
        let updated = am.update(&self.database_connection).await?;
        self.get_comment_view(updated.id).await
    }

    /// Deleting a root takes its replies with it (FK cascade).
    pub async fn delete_comment(&self, id: i32) -> Result<(), AppError> {
        Comment::delete_by_id(id)
            .exec(&self.database_connection)
            .await?;
        Ok(())
    }
}

fn view_of(
    comment: &CommentModel,
    author: &UserModel,
    parent_author_nickname: Option<String>,
) -> CommentView {
    CommentView {
        id: comment.id,
        post_id: comment.post_id,
        user_id: comment.user_id,
        author_nickname: author.nickname.clone(),
        author_profile_picture: author.profile_picture.clone(),
        parent_comment_id: comment.parent_comment_id,
        parent_author_nickname,
        content: comment.content.clone(),
        created_at: comment.created_at,
        updated_at: comment.updated_at,
        replies: Vec::new(),
    }
}
