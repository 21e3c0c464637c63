// file: src/pipeline/results.rs
// description: fetch-then-render flow for the results endpoints

use crate::client::Transport;
use crate::error::{QueryError, Result};
use crate::models::{QueryInput, ResultSet, ResultTable};
use crate::surface::Surface;
use serde_json::Value;
use tracing::{debug, error, info};

pub const NO_RESULTS_NOTICE: &str = "No results found.";

#[derive(Debug)]
pub enum RenderOutcome {
    Table { rows: usize },
    Empty,
    Failed(QueryError),
}

impl RenderOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, RenderOutcome::Failed(_))
    }
}

/// Posts `input` and decodes the response into rows.
pub async fn fetch_results<T: Transport>(
    transport: &T,
    endpoint: &str,
    input: &QueryInput,
) -> Result<ResultSet> {
    let response = transport.post_json(endpoint, input).await?;

    if !response.is_success() {
        debug!(
            "{} error body: {}",
            endpoint,
            String::from_utf8_lossy(&response.body)
        );
        return Err(QueryError::Http {
            status: response.status,
        });
    }

    let value: Value = serde_json::from_slice(&response.body)?;
    ResultSet::from_value(value)
}

/// Runs the results flow to completion. Every failure is shown inline in
/// the results region and returned, never propagated.
pub async fn render_results<T: Transport, S: Surface>(
    transport: &T,
    endpoint: &str,
    input: &QueryInput,
    surface: &mut S,
) -> RenderOutcome {
    let results = match fetch_results(transport, endpoint, input).await {
        Ok(results) => results,
        Err(e) => {
            error!("Query against {} failed: {}", endpoint, e);
            surface.show_error(&format!("Error: {}", e));
            return RenderOutcome::Failed(e);
        }
    };

    match ResultTable::from_result_set(&results) {
        Some(table) => {
            info!("Rendering {} row(s) from {}", results.len(), endpoint);
            surface.show_table(&table);
            RenderOutcome::Table {
                rows: results.len(),
            }
        }
        None => {
            info!("{} returned no rows", endpoint);
            surface.show_notice(NO_RESULTS_NOTICE);
            RenderOutcome::Empty
        }
    }
}
