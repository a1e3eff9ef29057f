use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::post::{PostAuthor, PostView, RPostCreate, RPostUpdate};
use crate::utils::hashtags::extract_hashtags;
use chrono::Utc;
use entity::post::{ActiveModel as PostActive, Entity as Post, Model as PostModel};
use entity::post_hashtag::{ActiveModel as HashtagActive, Entity as PostHashtag};
use entity::post_image::{ActiveModel as ImageActive, Entity as PostImage};
use entity::post_like::Entity as PostLike;
use entity::user::{Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use std::collections::{HashMap, HashSet};

impl PostgresService {
    pub async fn post_exists(&self, id: i32) -> Result<bool, AppError> {
        Ok(Post::find_by_id(id)
            .count(&self.database_connection)
            .await?
            > 0)
    }

    /// Raw row, used for ownership checks before update/delete.
    pub async fn get_post(&self, id: i32) -> Result<PostModel, AppError> {
        Ok(Post::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Post does not exist".into()))?)
    }

    pub async fn create_post(&self, user_id: i32, payload: RPostCreate) -> Result<i32, AppError> {
        let tags = extract_hashtags(&payload.content);
        let now = Utc::now();
        let txn = self.database_connection.begin().await?;

        let post = PostActive {
            id: NotSet,
            user_id: Set(user_id),
            title: Set(payload.title),
            content: Set(payload.content),
            rating: Set(payload.rating),
            isbn: Set(payload.isbn),
            book_title: Set(payload.book_title),
            book_author: Set(payload.book_author),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        insert_hashtags(&txn, post.id, &tags).await?;

        txn.commit().await?;
        Ok(post.id)
    }

    /// Applies only the provided fields; a changed content re-derives the
    /// hashtag set. Set-only: `None` leaves a column untouched, so rating and
    /// book metadata cannot be cleared back to null through an update.
    pub async fn update_post(&self, id: i32, payload: RPostUpdate) -> Result<(), AppError> {
        let post = self.get_post(id).await?;
        let content_changed = payload.content.is_some();
        let new_tags = payload.content.as_deref().map(extract_hashtags);

        let txn = self.database_connection.begin().await?;

        let mut am: PostActive = post.into();
        if let Some(title) = payload.title {
            am.title = Set(title);
        }
        if let Some(content) = payload.content {
            am.content = Set(content);
        }
        if let Some(rating) = payload.rating {
            am.rating = Set(Some(rating));
        }
        if let Some(isbn) = payload.isbn {
            am.isbn = Set(Some(isbn));
        }
        if let Some(book_title) = payload.book_title {
            am.book_title = Set(Some(book_title));
        }
        if let Some(book_author) = payload.book_author {
            am.book_author = Set(Some(book_author));
        }
        am.updated_at = Set(Utc::now());
        am.update(&txn).await?;

        if content_changed {
            PostHashtag::delete_many()
                .filter(entity::post_hashtag::Column::PostId.eq(id))
                .exec(&txn)
                .await?;
            if let Some(tags) = new_tags {
                insert_hashtags(&txn, id, &tags).await?;
            }
        }

        txn.commit().await?;
        Ok(())
    }

    /// Comments, likes, images and hashtags go with it (FK cascade).
    pub async fn delete_post(&self, id: i32) -> Result<(), AppError> {
        Post::delete_by_id(id)
            .exec(&self.database_connection)
            .await?;
        Ok(())
    }

    pub async fn get_post_view(&self, id: i32, viewer: Option<i32>) -> Result<PostView, AppError> {
        let (post, author) = Post::find_by_id(id)
            .find_also_related(User)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Post does not exist".into()))?;
        let author =
            author.ok_or_else(|| AppError::Internal("post without author".to_string()))?;

        let mut views = self.assemble_post_views(vec![(post, author)], viewer).await?;
        views
            .pop()
            .ok_or_else(|| AppError::Internal("post view assembly failed".to_string()))
    }

    /// Newest first. `viewer` personalises `is_liked`.
    pub async fn list_post_views(
        &self,
        limit: u64,
        offset: u64,
        viewer: Option<i32>,
    ) -> Result<Vec<PostView>, AppError> {
        let rows = Post::find()
            .find_also_related(User)
            .order_by_desc(entity::post::Column::CreatedAt)
            .order_by_desc(entity::post::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(&self.database_connection)
            .await?;

        let pairs = rows
            .into_iter()
            .filter_map(|(post, author)| author.map(|a| (post, a)))
            .collect();
        self.assemble_post_views(pairs, viewer).await
    }

    /// Batch-fetch like counts, comment counts, images and hashtags for a
    /// page of posts, then fold everything into views.
    async fn assemble_post_views(
        &self,
        pairs: Vec<(PostModel, UserModel)>,
        viewer: Option<i32>,
    ) -> Result<Vec<PostView>, AppError> {
        if pairs.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<i32> = pairs.iter().map(|(p, _)| p.id).collect();

        let likes = PostLike::find()
            .filter(entity::post_like::Column::PostId.is_in(ids.clone()))
            .all(&self.database_connection)
            .await?;
        let mut like_counts: HashMap<i32, u64> = HashMap::new();
        let mut liked_by_viewer: HashSet<i32> = HashSet::new();
        for like in likes {
            *like_counts.entry(like.post_id).or_default() += 1;
            if viewer == Some(like.user_id) {
                liked_by_viewer.insert(like.post_id);
            }
        }

        let comment_posts: Vec<i32> = entity::comment::Entity::find()
            .select_only()
            .column(entity::comment::Column::PostId)
            .filter(entity::comment::Column::PostId.is_in(ids.clone()))
            .into_tuple()
            .all(&self.database_connection)
            .await?;
        let mut comment_counts: HashMap<i32, u64> = HashMap::new();
        for post_id in comment_posts {
            *comment_counts.entry(post_id).or_default() += 1;
        }

        let mut images: HashMap<i32, Vec<String>> = HashMap::new();
        for image in PostImage::find()
            .filter(entity::post_image::Column::PostId.is_in(ids.clone()))
            .order_by_asc(entity::post_image::Column::Id)
            .all(&self.database_connection)
            .await?
        {
            images.entry(image.post_id).or_default().push(image.file_path);
        }

        let mut hashtags: HashMap<i32, Vec<String>> = HashMap::new();
        for tag in PostHashtag::find()
            .filter(entity::post_hashtag::Column::PostId.is_in(ids))
            .order_by_asc(entity::post_hashtag::Column::Id)
            .all(&self.database_connection)
            .await?
        {
            hashtags.entry(tag.post_id).or_default().push(tag.tag);
        }

        Ok(pairs
            .into_iter()
            .map(|(post, author)| PostView {
                id: post.id,
                author: PostAuthor {
                    id: author.id,
                    nickname: author.nickname,
                    profile_picture: author.profile_picture,
                },
                title: post.title,
                content: post.content,
                rating: post.rating,
                isbn: post.isbn,
                book_title: post.book_title,
                book_author: post.book_author,
                images: images.remove(&post.id).unwrap_or_default(),
                hashtags: hashtags.remove(&post.id).unwrap_or_default(),
                like_count: like_counts.get(&post.id).copied().unwrap_or(0),
                comment_count: comment_counts.get(&post.id).copied().unwrap_or(0),
                is_liked: liked_by_viewer.contains(&post.id),
                created_at: post.created_at,
                updated_at: post.updated_at,
            })
            .collect())
    }

    pub async fn count_post_images(&self, post_id: i32) -> Result<u64, AppError> {
        Ok(PostImage::find()
            .filter(entity::post_image::Column::PostId.eq(post_id))
            .count(&self.database_connection)
            .await?)
    }

    pub async fn add_post_images(
        &self,
        post_id: i32,
        file_paths: Vec<String>,
    ) -> Result<(), AppError> {
        let now = Utc::now();
        let txn = self.database_connection.begin().await?;
        for file_path in file_paths {
            ImageActive {
                id: NotSet,
                post_id: Set(post_id),
                file_path: Set(file_path),
                created_at: Set(now),
            }
            .insert(&txn)
            .await?;
        }
        txn.commit().await?;
        Ok(())
    }
}

async fn insert_hashtags<C: ConnectionTrait>(
    conn: &C,
    post_id: i32,
    tags: &[String],
) -> Result<(), AppError> {
    for tag in tags {
        HashtagActive {
            id: NotSet,
            post_id: Set(post_id),
            tag: Set(tag.clone()),
        }
        .insert(conn)
        .await?;
    }
    Ok(())
}
