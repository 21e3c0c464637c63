// file: src/pipeline/console.rs
// description: ties a transport and the configured endpoints to the two flows
// reference: user action -> input collection -> request -> surface update

use crate::client::Transport;
use crate::config::{Config, EndpointConfig};
use crate::models::QueryForm;
use crate::pipeline::export::{ExportOutcome, export_results};
use crate::pipeline::form::collect_input;
use crate::pipeline::results::{RenderOutcome, render_results};
use crate::surface::Surface;
use tracing::info;

/// Each call is an independent flow; nothing is shared between calls, so
/// overlapping invocations simply race for the surface.
pub struct QueryConsole<T> {
    transport: T,
    endpoints: EndpointConfig,
    default_filename: String,
}

impl<T: Transport> QueryConsole<T> {
    pub fn new(transport: T, config: &Config) -> Self {
        Self {
            transport,
            endpoints: config.endpoints.clone(),
            default_filename: config.output.default_filename.clone(),
        }
    }

    pub async fn show_results<S: Surface>(&self, form: QueryForm, surface: &mut S) -> RenderOutcome {
        let input = collect_input(form, surface);
        let endpoint = form.results_endpoint(&self.endpoints);
        info!("Requesting results from {}", endpoint);

        render_results(&self.transport, endpoint, &input, surface).await
    }

    pub async fn export<S: Surface>(&self, form: QueryForm, surface: &mut S) -> ExportOutcome {
        let input = collect_input(form, surface);
        let endpoint = form.export_endpoint(&self.endpoints);
        info!("Requesting export from {}", endpoint);

        export_results(
            &self.transport,
            endpoint,
            &input,
            &self.default_filename,
            surface,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::TransportResponse;
    use crate::models::ResultTable;
    use crate::pipeline::testing::ScriptedTransport;
    use crate::surface::{MemorySurface, SurfaceEvent};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_sql_query_scenario() {
        let transport = ScriptedTransport::respond(TransportResponse::new(
            200,
            r#"[{"id": 1, "school_name": "Alpha"}]"#,
        ));
        let console = QueryConsole::new(transport, &Config::default_config());
        let mut surface = MemorySurface::new().with_field("query", "SELECT * FROM x");

        let outcome = console.show_results(QueryForm::Sql, &mut surface).await;

        assert!(matches!(outcome, RenderOutcome::Table { rows: 1 }));
        assert_eq!(
            surface.region(),
            Some(&SurfaceEvent::Table(ResultTable {
                headers: vec!["Id".to_string(), "School name".to_string()],
                rows: vec![vec!["1".to_string(), "Alpha".to_string()]],
            }))
        );
        assert_eq!(
            console.transport.requests(),
            vec![("/query".to_string(), r#"{"query":"SELECT * FROM x"}"#.to_string())]
        );
    }

    #[tokio::test]
    async fn test_nearby_export_uses_export_endpoint() {
        let transport = ScriptedTransport::respond(
            TransportResponse::new(200, "a\n")
                .with_content_disposition("attachment; filename=export.csv"),
        );
        let console = QueryConsole::new(transport, &Config::default_config());
        let mut surface = MemorySurface::new()
            .with_field("lat", "37.4")
            .with_field("long", "-122.1")
            .with_field("max_distance", "5");

        let outcome = console.export(QueryForm::Nearby, &mut surface).await;

        assert!(!outcome.is_failure());
        assert_eq!(
            console.transport.requests()[0].0,
            "/export-nearby-schools".to_string()
        );
        assert_eq!(surface.saved()[0].filename, "export.csv");
    }
}
