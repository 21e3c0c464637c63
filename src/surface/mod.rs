// file: src/surface/mod.rs
// description: display surface abstraction driven by the query flows
// reference: internal module structure

pub mod memory;
pub mod terminal;

pub use memory::{MemorySurface, SurfaceEvent};
pub use terminal::TerminalSurface;

use crate::error::Result;
use crate::models::{ExportedFile, ResultTable};
use std::path::PathBuf;

/// Everything the flows need from the place they are displayed in.
///
/// `show_table`, `show_notice` and `show_error` each replace the contents
/// of the results region. `alert` interrupts the user without touching it.
pub trait Surface {
    /// Current value of an input field, `None` if the surface has no such field.
    fn read_field(&self, name: &str) -> Option<String>;

    fn show_table(&mut self, table: &ResultTable);

    fn show_notice(&mut self, message: &str);

    fn show_error(&mut self, message: &str);

    fn alert(&mut self, message: &str);

    /// Saves an export and returns where it ended up.
    fn save_file(&mut self, file: &ExportedFile) -> Result<PathBuf>;
}
