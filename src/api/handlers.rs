// Handlers for the /users JSON routes

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use super::response::{self, json_response};
use super::types::{
    CreateUserRequest, UserCreatedResponse, UserListResponse, UserResponse, REGISTERED_MESSAGE,
};
use crate::config::AppState;
use crate::logger;
use crate::registration::{self, AgeInput};

/// GET /users: every record in insertion order.
pub async fn list_users(state: &AppState) -> Response<Full<Bytes>> {
    let users = state.store.list().await;
    let body = UserListResponse {
        success: true,
        count: users.len(),
        users,
    };
    json_response(StatusCode::OK, &body)
}

/// GET /users/:id.
///
/// A segment that does not parse as an integer behaves like an unknown id.
pub async fn get_user(state: &AppState, id_segment: &str) -> Response<Full<Bytes>> {
    let Ok(id) = id_segment.parse::<u64>() else {
        return response::user_not_found();
    };

    match state.store.get(id).await {
        Some(user) => json_response(
            StatusCode::OK,
            &UserResponse {
                success: true,
                user,
            },
        ),
        None => response::user_not_found(),
    }
}

/// POST /users: validate the JSON body and append to the store.
pub async fn create_user(state: &AppState, body: &[u8]) -> Response<Full<Bytes>> {
    let request: CreateUserRequest = match serde_json::from_slice(body) {
        Ok(r) => r,
        Err(e) => {
            logger::log_warning(&format!("Invalid JSON body: {e}"));
            return response::validation_failed();
        }
    };

    let age = request.age.as_ref().and_then(age_input);
    let registration = match registration::validate(request.name.as_deref(), age) {
        Ok(r) => r,
        Err(e) => {
            logger::log_warning(&format!("Registration rejected: {e:?}"));
            return response::validation_failed();
        }
    };

    let user = state.store.register(registration).await;
    logger::log_user_registered(user.id, &user.name);

    json_response(
        StatusCode::CREATED,
        &UserCreatedResponse {
            success: true,
            message: REGISTERED_MESSAGE,
            user,
        },
    )
}

/// Map a raw JSON age field to validator input.
///
/// Numbers and strings are accepted; anything else (including fractional
/// numbers) fails validation downstream as a missing age.
fn age_input(value: &serde_json::Value) -> Option<AgeInput<'_>> {
    match value {
        serde_json::Value::Number(n) => n.as_i64().map(AgeInput::Number),
        serde_json::Value::String(s) => Some(AgeInput::Text(s)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_support::test_state;
    use http_body_util::BodyExt;

    async fn body_json(response: Response<Full<Bytes>>) -> serde_json::Value {
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("collect body")
            .to_bytes();
        serde_json::from_slice(&bytes).expect("valid JSON body")
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let state = test_state("public");
        let response = create_user(&state, br#"{"name":"Kim","age":30}"#).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["user"]["id"], 1);
        assert_eq!(json["user"]["name"], "Kim");
        assert_eq!(json["user"]["age"], 30);
        assert!(json["user"]["createdAt"].is_string());

        assert_eq!(state.store.list().await.len(), 1);
    }

    #[tokio::test]
    async fn test_create_user_id_is_previous_size_plus_one() {
        let state = test_state("public");
        create_user(&state, br#"{"name":"Kim","age":30}"#).await;
        let response = create_user(&state, br#"{"name":"Lee","age":25}"#).await;

        let json = body_json(response).await;
        assert_eq!(json["user"]["id"], 2);
    }

    #[tokio::test]
    async fn test_create_user_accepts_string_age() {
        let state = test_state("public");
        let response = create_user(&state, br#"{"name":"Kim","age":"30"}"#).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["user"]["age"], 30);
    }

    #[tokio::test]
    async fn test_create_user_invalid_inputs_leave_store_unchanged() {
        let state = test_state("public");
        let bodies: &[&[u8]] = &[
            br#"{"name":"","age":30}"#,
            br#"{"name":"Kim","age":-1}"#,
            br#"{"name":"Kim","age":151}"#,
            br#"{"name":"Kim"}"#,
            br#"{"age":30}"#,
            br#"not json"#,
        ];

        for body in bodies {
            let response = create_user(&state, body).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let json = body_json(response).await;
            assert_eq!(json["success"], false);
            assert!(json["message"].is_string());
        }

        assert!(state.store.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_get_user_roundtrip() {
        let state = test_state("public");
        create_user(&state, br#"{"name":"Kim","age":30}"#).await;

        let response = get_user(&state, "1").await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["user"]["name"], "Kim");
        assert_eq!(json["user"]["age"], 30);
    }

    #[tokio::test]
    async fn test_get_user_unknown_id() {
        let state = test_state("public");
        let response = get_user(&state, "42").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn test_get_user_non_numeric_id() {
        let state = test_state("public");
        let response = get_user(&state, "abc").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_users_counts_registrations() {
        let state = test_state("public");
        let response = list_users(&state).await;
        let json = body_json(response).await;
        assert_eq!(json["count"], 0);
        assert_eq!(json["users"], serde_json::json!([]));

        create_user(&state, br#"{"name":"Kim","age":30}"#).await;
        let response = list_users(&state).await;
        let json = body_json(response).await;
        assert_eq!(json["count"], 1);
        assert_eq!(json["users"][0]["name"], "Kim");
    }
}
