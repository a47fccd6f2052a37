//! JSON API for user registration and lookup.

pub mod handlers;
pub mod response;
pub mod types;

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Method, Request, Response};

use crate::config::AppState;
use crate::http;
use crate::logger;

/// Dispatch `/users` (list and create).
pub async fn handle_users_collection<B>(req: Request<B>, state: &AppState) -> Response<Full<Bytes>>
where
    B: hyper::body::Body,
    B::Error: std::fmt::Display,
{
    match *req.method() {
        Method::GET => handlers::list_users(state).await,
        Method::POST => {
            let body = match req.collect().await {
                Ok(collected) => collected.to_bytes(),
                Err(e) => {
                    logger::log_warning(&format!("Failed to read request body: {e}"));
                    return response::validation_failed();
                }
            };
            handlers::create_user(state, &body).await
        }
        _ => http::build_405_response("GET, POST, OPTIONS"),
    }
}

/// Dispatch `/users/:id` (lookup only).
pub async fn handle_user_by_id(
    method: &Method,
    id_segment: &str,
    state: &AppState,
) -> Response<Full<Bytes>> {
    if *method == Method::GET {
        handlers::get_user(state, id_segment).await
    } else {
        http::build_405_response("GET, OPTIONS")
    }
}
