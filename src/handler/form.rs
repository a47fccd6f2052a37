//! Form and query-string registration endpoints.
//!
//! `POST /users-form` reads a URL-encoded body; `GET /users-form` reads
//! the query string. Both decode the `name`/`age` pair, run the shared
//! validator, append to the store, render the result page, write it to
//! the static directory, and serve the written file back.

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Method, Request, Response, StatusCode};
use std::path::{Path, PathBuf};
use tokio::fs;
use url::form_urlencoded;

use crate::config::AppState;
use crate::html;
use crate::http;
use crate::logger;
use crate::registration::{self, AgeInput, VALIDATION_MESSAGE};

const WRITE_FAILED_MESSAGE: &str = "결과 페이지를 저장하지 못했습니다.";

/// Dispatch `/users-form`.
pub async fn handle_users_form<B>(req: Request<B>, state: &AppState) -> Response<Full<Bytes>>
where
    B: hyper::body::Body,
    B::Error: std::fmt::Display,
{
    match *req.method() {
        Method::GET => {
            let (name, age) = extract_fields(req.uri().query().unwrap_or("").as_bytes());
            register_and_render(state, name, age).await
        }
        Method::POST => {
            let body = match req.collect().await {
                Ok(collected) => collected.to_bytes(),
                Err(e) => {
                    logger::log_warning(&format!("Failed to read form body: {e}"));
                    return http::build_text_response(StatusCode::BAD_REQUEST, VALIDATION_MESSAGE);
                }
            };
            let (name, age) = extract_fields(&body);
            register_and_render(state, name, age).await
        }
        _ => http::build_405_response("GET, POST, OPTIONS"),
    }
}

/// Pull `name` and `age` out of URL-encoded pairs.
///
/// Later occurrences of a key win; unknown keys are ignored.
fn extract_fields(input: &[u8]) -> (Option<String>, Option<String>) {
    let mut name = None;
    let mut age = None;
    for (key, value) in form_urlencoded::parse(input) {
        match key.as_ref() {
            "name" => name = Some(value.into_owned()),
            "age" => age = Some(value.into_owned()),
            _ => {}
        }
    }
    (name, age)
}

fn result_path(state: &AppState) -> PathBuf {
    Path::new(&state.config.resources.static_dir).join(&state.config.resources.result_file)
}

/// Shared tail of both form variants: validate, store, render, write, serve.
async fn register_and_render(
    state: &AppState,
    name: Option<String>,
    age: Option<String>,
) -> Response<Full<Bytes>> {
    let age_input = age.as_deref().map(AgeInput::Text);
    let registration = match registration::validate(name.as_deref(), age_input) {
        Ok(r) => r,
        Err(e) => {
            logger::log_warning(&format!("Form registration rejected: {e:?}"));
            return http::build_text_response(StatusCode::BAD_REQUEST, VALIDATION_MESSAGE);
        }
    };

    let user = state.store.register(registration).await;
    logger::log_user_registered(user.id, &user.name);
    let page = html::render_result_page(&user);

    let path = result_path(state);
    if let Err(e) = fs::write(&path, &page).await {
        logger::log_error(&format!(
            "Failed to write result page '{}': {e}",
            path.display()
        ));
        return http::build_500_response(WRITE_FAILED_MESSAGE);
    }

    // Serve what actually landed on disk; concurrent registrations race on
    // this file and the last writer wins.
    match fs::read_to_string(&path).await {
        Ok(contents) => http::build_html_response(contents),
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read result page '{}': {e}",
                path.display()
            ));
            http::build_500_response(WRITE_FAILED_MESSAGE)
        }
    }
}
