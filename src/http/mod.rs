//! HTTP protocol layer module
//!
//! Provides response construction decoupled from routing and business
//! logic.

pub mod response;

// Re-export commonly used builders
pub use response::{
    build_css_response, build_html_response, build_json_response, build_not_found_response,
};
