// file: src/pipeline/export.rs
// description: fetch-then-save flow for the export endpoints

use crate::client::Transport;
use crate::error::{QueryError, Result};
use crate::models::{ExportedFile, QueryInput};
use crate::parser::resolve_filename;
use crate::surface::Surface;
use std::path::PathBuf;
use tracing::{error, info, warn};

#[derive(Debug)]
pub enum ExportOutcome {
    Saved { path: PathBuf, bytes: usize },
    Failed(QueryError),
}

impl ExportOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, ExportOutcome::Failed(_))
    }
}

/// Posts `input` and keeps the response body as an opaque attachment.
pub async fn fetch_export<T: Transport>(
    transport: &T,
    endpoint: &str,
    input: &QueryInput,
    default_filename: &str,
) -> Result<ExportedFile> {
    let response = transport.post_json(endpoint, input).await?;

    if !response.is_success() {
        return Err(QueryError::Http {
            status: response.status,
        });
    }

    if response.content_disposition.is_none() {
        warn!(
            "{} sent no Content-Disposition, using {}",
            endpoint, default_filename
        );
    }

    let filename = resolve_filename(response.content_disposition.as_deref(), default_filename);
    Ok(ExportedFile::new(filename, response.body))
}

/// Runs the export flow to completion. Failures interrupt the user through
/// the surface's alert instead of the results region.
pub async fn export_results<T: Transport, S: Surface>(
    transport: &T,
    endpoint: &str,
    input: &QueryInput,
    default_filename: &str,
    surface: &mut S,
) -> ExportOutcome {
    let saved = match fetch_export(transport, endpoint, input, default_filename).await {
        Ok(file) => surface.save_file(&file).map(|path| (path, file.len())),
        Err(e) => Err(e),
    };

    match saved {
        Ok((path, bytes)) => {
            info!("Saved {} bytes to {}", bytes, path.display());
            ExportOutcome::Saved { path, bytes }
        }
        Err(e) => {
            error!("Export from {} failed: {}", endpoint, e);
            surface.alert(&format!("Failed to export CSV: {}", e));
            ExportOutcome::Failed(e)
        }
    }
}
