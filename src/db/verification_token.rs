use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::token::{new_verification_token, verification_expiry};
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel, UserStatus};
use entity::verification_token::{
    ActiveModel as TokenActive, Entity as VerificationToken, Model as TokenModel,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, NotSet, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl PostgresService {
    pub async fn create_verification_token(&self, user_id: i32) -> Result<TokenModel, AppError> {
        let row = TokenActive {
            id: NotSet,
            user_id: Set(user_id),
            token: Set(new_verification_token()),
            expires_at: Set(verification_expiry()),
            used: Set(false),
            created_at: Set(Utc::now()),
        }
        .insert(&self.database_connection)
        .await?;
        Ok(row)
    }

    pub async fn find_verification_token(&self, token: &str) -> Result<Option<TokenModel>, AppError> {
        Ok(VerificationToken::find()
            .filter(entity::verification_token::Column::Token.eq(token))
            .one(&self.database_connection)
            .await?)
    }

    /// Most recent token for a user; the one a resend flow would invalidate.
    pub async fn latest_verification_token_for_user(
        &self,
        user_id: i32,
    ) -> Result<Option<TokenModel>, AppError> {
        Ok(VerificationToken::find()
            .filter(entity::verification_token::Column::UserId.eq(user_id))
            .order_by_desc(entity::verification_token::Column::Id)
            .one(&self.database_connection)
            .await?)
    }

    /// Validate a verification token and, when it checks out, activate the
    /// user and burn the token in one transaction.
    pub async fn consume_verification_token(&self, token: &str) -> Result<UserModel, AppError> {
        let row = self
            .find_verification_token(token)
            .await?
            .ok_or_else(|| AppError::BadRequest("invalid verification token".to_string()))?;

        if row.used {
            return Err(AppError::BadRequest(
                "verification token has already been used".to_string(),
            ));
        }
        if Utc::now() > row.expires_at {
            return Err(AppError::BadRequest(
                "verification token has expired".to_string(),
            ));
        }

        let txn = self.database_connection.begin().await?;

        let user = User::find_by_id(row.user_id)
            .one(&txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?;

        let mut user_am: UserActive = user.into();
        user_am.status = Set(UserStatus::Active);
        user_am.updated_at = Set(Utc::now());
        let user = user_am.update(&txn).await?;

        let mut token_am: TokenActive = row.into();
        token_am.used = Set(true);
        token_am.update(&txn).await?;

        txn.commit().await?;
        Ok(user)
    }

    /// Housekeeping: drop tokens past their expiry.
    pub async fn delete_expired_tokens(&self) -> Result<u64, AppError> {
        let res = VerificationToken::delete_many()
            .filter(entity::verification_token::Column::ExpiresAt.lt(Utc::now()))
            .exec(&self.database_connection)
            .await?;
        Ok(res.rows_affected)
    }
}
