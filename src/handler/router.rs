//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method/path matching and
//! dispatch to the JSON API, the form endpoints, or static files.

use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::header::{HeaderValue, ACCESS_CONTROL_ALLOW_ORIGIN, SERVER};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

use crate::api;
use crate::config::AppState;
use crate::handler::{form, static_files};
use crate::http;
use crate::logger;

/// Main entry point for HTTP request handling.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let access_log = state.config.logging.access_log;
    if access_log {
        logger::log_request(&method, req.uri(), req.version());
    }
    logger::log_headers_count(req.headers().len(), state.config.logging.show_headers);

    // Preflight requests are answered before routing
    if method == Method::OPTIONS {
        let response = http::build_options_response(state.config.http.enable_cors);
        return Ok(finish(response, &state, access_log));
    }

    if let Some(response) = check_body_size(&req, state.config.http.max_body_size) {
        return Ok(finish(response, &state, access_log));
    }

    let response = route_request(req, &method, &path, &state).await;
    Ok(finish(response, &state, access_log))
}

/// Dispatch on (method, path).
async fn route_request<B>(
    req: Request<B>,
    method: &Method,
    path: &str,
    state: &AppState,
) -> Response<Full<Bytes>>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    // 1. JSON API
    if path == "/users" {
        return api::handle_users_collection(req, state).await;
    }
    if let Some(id_segment) = path.strip_prefix("/users/") {
        return api::handle_user_by_id(method, id_segment, state).await;
    }

    // 2. Form endpoints
    if path == "/users-form" {
        return form::handle_users_form(req, state).await;
    }

    // 3. Everything else is a static asset, including "/". Non-GET
    // requests outside the known routes have nothing to hit: 404.
    if *method == Method::GET {
        static_files::serve(state, path).await
    } else {
        logger::log_warning(&format!("No route for: {method} {path}"));
        http::build_404_response()
    }
}

/// Validate Content-Length header and return 413 if exceeded.
fn check_body_size<B>(req: &Request<B>, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

/// Stamp common headers and log the outcome.
fn finish(
    mut response: Response<Full<Bytes>>,
    state: &AppState,
    access_log: bool,
) -> Response<Full<Bytes>> {
    if state.config.http.enable_cors {
        response
            .headers_mut()
            .insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    }
    if let Ok(value) = HeaderValue::from_str(&state.config.http.server_name) {
        response.headers_mut().insert(SERVER, value);
    }

    if access_log {
        let size = response.body().size_hint().exact().unwrap_or(0);
        logger::log_response(response.status().as_u16(), size);
    }

    response
}
