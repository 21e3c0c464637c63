// file: src/parser/mod.rs
// description: label formatting and response header parsing exports
// reference: internal module structure

pub mod disposition;
pub mod label;

pub use disposition::{extract_filename, resolve_filename};
pub use label::format_label;
