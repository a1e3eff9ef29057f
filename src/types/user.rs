use entity::user::{Model as UserModel, UserStatus};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RSignup {
    pub email: String,
    pub password: String,
    pub nickname: String,
}

#[derive(Serialize, Deserialize)]
pub struct RLogin {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct RCheckEmail {
    pub email: String,
}

#[derive(Serialize, Deserialize)]
pub struct RCheckNickname {
    pub nickname: String,
}

/// Public projection of a user row; never carries the password hash.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserView {
    pub id: i32,
    pub email: String,
    pub nickname: String,
    pub profile_picture: Option<String>,
    pub status: UserStatus,
}

impl From<UserModel> for UserView {
    fn from(m: UserModel) -> Self {
        UserView {
            id: m.id,
            email: m.email,
            nickname: m.nickname,
            profile_picture: m.profile_picture,
            status: m.status,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct SignupRes {
    pub message: String,
    pub user: UserView,
}

#[derive(Serialize, Deserialize)]
pub struct LoginRes {
    pub token: String,
    pub user: UserView,
}

#[derive(Serialize, Deserialize)]
pub struct AvailabilityRes {
    pub available: bool,
    pub message: String,
}

/// Payload for inserting a user; the password is already hashed by the caller.
pub struct DBUserCreate {
    pub email: String,
    pub password_hash: String,
    pub nickname: String,
}
