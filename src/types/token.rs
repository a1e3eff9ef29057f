use serde::{Deserialize, Serialize};

/// JWT claims for login sessions. `sub` is the user id.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Claims {
    pub sub: i32,
    pub iat: i64,
    pub exp: i64,
}
