//! HTTP protocol helpers shared by the static and API handlers.

pub mod mime;
pub mod query;
pub mod response;

// Re-export commonly used builders
pub use response::{error_response, file_response, json_response};
