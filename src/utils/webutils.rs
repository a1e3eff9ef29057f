use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use futures_util::future::LocalBoxFuture;
use std::sync::Arc;

use crate::config::config;
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::token::decode_jwt;
use entity::user::UserStatus;

/// The authenticated caller, resolved from the bearer JWT against the
/// database. Extraction fails with 401 on a missing/invalid token and 403
/// when the account is not active.
#[derive(Debug, Clone)]
pub struct AuthedUser {
    pub id: i32,
    pub email: String,
    pub nickname: String,
    pub profile_picture: Option<String>,
}

/// Optional identity for public routes that personalise their response
/// (`is_liked`). A missing or invalid token is not an error here.
pub struct MaybeAuthed(pub Option<AuthedUser>);

async fn authed_from_request(req: HttpRequest) -> Result<AuthedUser, AppError> {
    let auth = BearerAuth::extract(&req)
        .await
        .map_err(|_| AppError::Unauthorized)?;
    let claims = decode_jwt(auth.token(), &config().jwt_secret)?;

    let db = req
        .app_data::<web::Data<Arc<PostgresService>>>()
        .ok_or_else(|| AppError::Internal("database not configured".to_string()))?;

    let user = db
        .get_user_by_id(claims.sub)
        .await
        .map_err(|_| AppError::Unauthorized)?;
    if user.status != UserStatus::Active {
        return Err(AppError::Forbidden("account is not active".to_string()));
    }

    Ok(AuthedUser {
        id: user.id,
        email: user.email,
        nickname: user.nickname,
        profile_picture: user.profile_picture,
    })
}

impl FromRequest for AuthedUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, AppError>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(authed_from_request(req))
    }
}

impl FromRequest for MaybeAuthed {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, AppError>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move { Ok(MaybeAuthed(authed_from_request(req).await.ok())) })
    }
}
