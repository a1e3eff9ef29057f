use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::post::ToggleLikeRes;
use chrono::Utc;
use entity::post_like::{ActiveModel as LikeActive, Entity as PostLike};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, NotSet, PaginatorTrait, QueryFilter,
    Set, TransactionTrait,
};

impl PostgresService {
    /// Toggle the (user, post) like inside one transaction: look up the
    /// current row, insert or delete, then re-count. The unique index on
    /// (user_id, post_id) backstops concurrent toggles.
    pub async fn toggle_like(&self, user_id: i32, post_id: i32) -> Result<ToggleLikeRes, AppError> {
        let txn = self.database_connection.begin().await?;

        let existing = PostLike::find()
            .filter(entity::post_like::Column::UserId.eq(user_id))
            .filter(entity::post_like::Column::PostId.eq(post_id))
            .one(&txn)
            .await?;

        let liked = match existing {
            Some(like) => {
                like.delete(&txn).await?;
                false
            }
            None => {
                LikeActive {
                    id: NotSet,
                    user_id: Set(user_id),
                    post_id: Set(post_id),
                    created_at: Set(Utc::now()),
                }
                .insert(&txn)
                .await?;
                true
            }
        };

        let like_count = PostLike::find()
            .filter(entity::post_like::Column::PostId.eq(post_id))
            .count(&txn)
            .await?;

        txn.commit().await?;

        Ok(ToggleLikeRes {
            action: if liked { "liked" } else { "unliked" }.to_string(),
            like_count,
            is_liked: liked,
        })
    }

    pub async fn is_liked(&self, user_id: i32, post_id: i32) -> Result<bool, AppError> {
        Ok(PostLike::find()
            .filter(entity::post_like::Column::UserId.eq(user_id))
            .filter(entity::post_like::Column::PostId.eq(post_id))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn like_count(&self, post_id: i32) -> Result<u64, AppError> {
        Ok(PostLike::find()
            .filter(entity::post_like::Column::PostId.eq(post_id))
            .count(&self.database_connection)
            .await?)
    }
}
