// file: src/pipeline/mod.rs
// description: query flow module exports and public api
// reference: pipeline orchestration

pub mod console;
pub mod export;
pub mod form;
pub mod results;

pub use console::QueryConsole;
pub use export::{ExportOutcome, export_results, fetch_export};
pub use form::collect_input;
pub use results::{NO_RESULTS_NOTICE, RenderOutcome, fetch_results, render_results};
