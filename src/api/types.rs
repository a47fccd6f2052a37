// Request/response types for the /users JSON API

use serde::{Deserialize, Serialize};

use crate::store::User;

/// Message returned when a registration succeeds.
pub const REGISTERED_MESSAGE: &str = "사용자가 등록되었습니다.";

/// Message returned when a user id cannot be found.
pub const NOT_FOUND_MESSAGE: &str = "사용자를 찾을 수 없습니다.";

/// POST /users request body.
///
/// `age` stays raw JSON because clients send it both as a number and as a
/// numeric string; the validator coerces it.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub age: Option<serde_json::Value>,
}

/// GET /users response.
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub success: bool,
    pub count: usize,
    pub users: Vec<User>,
}

/// POST /users success response.
#[derive(Debug, Serialize)]
pub struct UserCreatedResponse {
    pub success: bool,
    pub message: &'static str,
    pub user: User,
}

/// GET /users/:id success response.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub success: bool,
    pub user: User,
}

/// Error body shared by 400 and 404 responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: &'static str,
}
