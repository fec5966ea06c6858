//! Presentation of comparison reports: colored terminal text and JSON.

mod json;
mod terminal;

pub use json::{to_json, to_json_pretty};
pub use terminal::format_comparison;
