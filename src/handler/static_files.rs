//! Static file serving module
//!
//! Serves the front page and arbitrary assets from the public directory
//! with MIME type detection and path-traversal protection.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

use crate::config::AppState;
use crate::http::{self, mime};
use crate::logger;

/// Serve a request path from the configured static directory.
pub async fn serve(state: &AppState, path: &str) -> Response<Full<Bytes>> {
    match load_from_directory(&state.config.resources.static_dir, path).await {
        Some((content, content_type)) => build_static_file_response(content, content_type),
        None => http::build_404_response(),
    }
}

/// Load a file from the static directory.
///
/// `/` maps to `index.html`. The resolved path is canonicalized and must
/// stay inside the static directory.
pub async fn load_from_directory(static_dir: &str, path: &str) -> Option<(Vec<u8>, &'static str)> {
    // Remove leading slash and prevent directory traversal
    let clean_path = path.trim_start_matches('/').replace("..", "");
    let relative_path = if clean_path.is_empty() {
        "index.html"
    } else {
        clean_path.as_str()
    };
    let file_path = Path::new(static_dir).join(relative_path);

    let static_dir_canonical = match Path::new(static_dir).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Static directory not found or inaccessible '{static_dir}': {e}"
            ));
            return None;
        }
    };

    // File not found is common (404), no need to log at warning level
    let Ok(file_path_canonical) = file_path.canonicalize() else {
        return None;
    };
    if !file_path_canonical.starts_with(&static_dir_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            path,
            file_path_canonical.display()
        ));
        return None;
    }

    let content = match fs::read(&file_path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {}",
                file_path.display(),
                e
            ));
            return None;
        }
    };

    let content_type = mime::get_content_type(file_path.extension().and_then(|e| e.to_str()));

    Some((content, content_type))
}

fn build_static_file_response(data: Vec<u8>, content_type: &str) -> Response<Full<Bytes>> {
    let content_length = data.len();
    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(Bytes::from(data)))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build static file response: {e}"));
            Response::new(Full::new(Bytes::new()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    // These tests run with the crate root as working directory, where the
    // real public/ directory lives.

    #[tokio::test]
    async fn test_root_maps_to_index_html() {
        let (content, content_type) = load_from_directory("public", "/")
            .await
            .expect("index.html should load");
        assert_eq!(content_type, "text/html; charset=utf-8");
        assert!(!content.is_empty());
    }

    #[tokio::test]
    async fn test_explicit_index_path() {
        assert!(load_from_directory("public", "/index.html").await.is_some());
    }

    #[tokio::test]
    async fn test_missing_file_is_none() {
        assert!(load_from_directory("public", "/no-such-file.css")
            .await
            .is_none());
    }

    #[tokio::test]
    async fn test_traversal_is_blocked() {
        assert!(load_from_directory("public", "/../Cargo.toml").await.is_none());
        assert!(load_from_directory("public", "/..%2F..%2FCargo.toml")
            .await
            .is_none());
    }
}
