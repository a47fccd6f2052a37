//! Request handling: routing, form endpoints, and static files.

pub mod form;
pub mod router;
pub mod static_files;

pub use router::handle_request;
