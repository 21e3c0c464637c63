// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod exported_file;
pub mod query_input;
pub mod result_set;

pub use exported_file::ExportedFile;
pub use query_input::{QueryForm, QueryInput};
pub use result_set::{ResultRow, ResultSet, ResultTable, cell_text};
