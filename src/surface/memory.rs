// file: src/surface/memory.rs
// description: in-memory surface that records every display call

use crate::error::{QueryError, Result};
use crate::models::{ExportedFile, ResultTable};
use crate::surface::Surface;
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    Table(ResultTable),
    Notice(String),
    Error(String),
    Alert(String),
    Saved(ExportedFile),
}

#[derive(Debug, Default)]
pub struct MemorySurface {
    fields: HashMap<String, String>,
    events: Vec<SurfaceEvent>,
    fail_saves: bool,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Makes every `save_file` call fail with an I/O error.
    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    /// What the results region shows now: the latest table, notice or error.
    pub fn region(&self) -> Option<&SurfaceEvent> {
        self.events.iter().rev().find(|event| {
            matches!(
                event,
                SurfaceEvent::Table(_) | SurfaceEvent::Notice(_) | SurfaceEvent::Error(_)
            )
        })
    }

    pub fn alerts(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SurfaceEvent::Alert(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn saved(&self) -> Vec<&ExportedFile> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SurfaceEvent::Saved(file) => Some(file),
                _ => None,
            })
            .collect()
    }
}

impl Surface for MemorySurface {
    fn read_field(&self, name: &str) -> Option<String> {
        self.fields.get(name).cloned()
    }

    fn show_table(&mut self, table: &ResultTable) {
        self.events.push(SurfaceEvent::Table(table.clone()));
    }

    fn show_notice(&mut self, message: &str) {
        self.events.push(SurfaceEvent::Notice(message.to_string()));
    }

    fn show_error(&mut self, message: &str) {
        self.events.push(SurfaceEvent::Error(message.to_string()));
    }

    fn alert(&mut self, message: &str) {
        self.events.push(SurfaceEvent::Alert(message.to_string()));
    }

    fn save_file(&mut self, file: &ExportedFile) -> Result<PathBuf> {
        if self.fail_saves {
            return Err(QueryError::io(
                &file.filename,
                io::Error::new(io::ErrorKind::PermissionDenied, "saving disabled"),
            ));
        }

        self.events.push(SurfaceEvent::Saved(file.clone()));
        Ok(PathBuf::from(&file.filename))
    }
}
