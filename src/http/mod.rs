//! HTTP building blocks shared by every route.

pub mod mime;
pub mod response;

pub use response::{
    build_404_response, build_405_response, build_413_response, build_500_response,
    build_html_response, build_options_response, build_text_response,
};
