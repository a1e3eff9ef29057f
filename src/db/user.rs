use crate::db::postgres_service::PostgresService;
use crate::types::{error::AppError, user::DBUserCreate};
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel, UserStatus};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, NotSet, PaginatorTrait, QueryFilter, Set,
};

impl PostgresService {
    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn nickname_exists(&self, nickname: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Nickname.eq(nickname))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn get_user_by_id(&self, id: i32) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<UserModel, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    /// Signup: the account starts out inactive until email verification.
    pub async fn create_user(&self, payload: DBUserCreate) -> Result<UserModel, AppError> {
        if self.email_exists(&payload.email).await? {
            return Err(AppError::Conflict("email already in use".to_string()));
        }
        if self.nickname_exists(&payload.nickname).await? {
            return Err(AppError::Conflict("nickname already in use".to_string()));
        }

        let now = Utc::now();
        let user = UserActive {
            id: NotSet,
            email: Set(payload.email),
            password_hash: Set(payload.password_hash),
            nickname: Set(payload.nickname),
            profile_picture: Set(None),
            status: Set(UserStatus::Inactive),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.database_connection)
        .await?;

        Ok(user)
    }

    pub async fn activate_user(&self, user_id: i32) -> Result<UserModel, AppError> {
        let mut am: UserActive = self.get_user_by_id(user_id).await?.into();
        am.status = Set(UserStatus::Active);
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.database_connection).await?)
    }
}
