//! Request handling
//!
//! Classification plus the staged dispatch that turns a request path into a
//! response.

pub mod classify;
pub mod pipeline;
pub mod static_files;

// Re-export main entry point
pub use pipeline::handle_request;
