// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod surface;
pub mod utils;

pub use client::{HttpTransport, Transport, TransportResponse};
pub use config::{Config, EndpointConfig, OutputConfig, ServerConfig};
pub use error::{QueryError, Result};
pub use models::{ExportedFile, QueryForm, QueryInput, ResultRow, ResultSet, ResultTable};
pub use parser::{extract_filename, format_label, resolve_filename};
pub use pipeline::{ExportOutcome, QueryConsole, RenderOutcome};
pub use surface::{MemorySurface, Surface, SurfaceEvent, TerminalSurface};
pub use utils::Validator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let config = Config::default_config();
        let _transport = HttpTransport::new(&config.server).unwrap();
        assert_eq!(format_label("school_name"), "School name");
    }
}
