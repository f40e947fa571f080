use serde::{Deserialize, Serialize};

/// Request body for user registration. `name` may be omitted.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    pub password: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public fields of a freshly registered user. The hash and the admin
/// flag are never part of any response.
#[derive(Debug, Serialize)]
pub struct RegisteredUser {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Response returned after login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: PublicUser,
}

/// Public part of the user returned with a token.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: i32,
    pub email: String,
}
