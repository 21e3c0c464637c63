// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use school_query::utils::logging::{format_success, init_logger};
use school_query::{
    Config, ExportOutcome, HttpTransport, QueryConsole, QueryForm, TerminalSurface,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};

const DEFAULT_SQL: &str = "SELECT school_name, location_city FROM school_data LIMIT 10";

#[derive(Parser)]
#[command(name = "school_query")]
#[command(version)]
#[command(about = "Query and export school data from the school query service", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    /// Overrides server.base_url from the configuration
    #[arg(long, value_name = "URL", env = "SCHOOL_QUERY_BASE_URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a SQL query and print the rows as a table
    Query {
        #[arg(default_value = DEFAULT_SQL)]
        sql: String,
    },

    /// Run a SQL query and save the result as CSV
    Export {
        #[arg(default_value = DEFAULT_SQL)]
        sql: String,

        #[command(flatten)]
        save: SaveArgs,
    },

    /// List schools within a distance of a coordinate
    FindSchools {
        #[command(flatten)]
        location: LocationArgs,
    },

    /// Save schools within a distance of a coordinate as CSV
    ExportSchools {
        #[command(flatten)]
        location: LocationArgs,

        #[command(flatten)]
        save: SaveArgs,
    },
}

/// Values are sent to the service as typed, without validation.
#[derive(Args)]
struct LocationArgs {
    #[arg(long, allow_hyphen_values = true)]
    lat: String,

    #[arg(long, allow_hyphen_values = true)]
    long: String,

    /// Search radius in miles
    #[arg(long, default_value = "10", allow_hyphen_values = true)]
    max_distance: String,
}

#[derive(Args)]
struct SaveArgs {
    /// Save to this exact path instead of the server-suggested name (replaces an existing file)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Directory for server-named downloads (existing files are kept, the new one gets a numbered name)
    #[arg(long, value_name = "DIR")]
    dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    colored::control::set_override(cli.color);
    init_logger(cli.color, cli.verbose);

    let mut config = if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    if let Some(base_url) = cli.base_url {
        config.server.base_url = base_url;
        config.validate().context("Invalid --base-url")?;
    }

    let transport =
        HttpTransport::new(&config.server).context("Failed to create HTTP client")?;
    let console = QueryConsole::new(transport, &config);
    let surface = TerminalSurface::stdout(&config.output);

    let failed = match cli.command {
        Commands::Query { sql } => {
            let mut surface = surface.with_field("query", sql);
            console
                .show_results(QueryForm::Sql, &mut surface)
                .await
                .is_failure()
        }
        Commands::Export { sql, save } => {
            let mut surface = with_save_args(surface.with_field("query", sql), save);
            report_export(console.export(QueryForm::Sql, &mut surface).await)
        }
        Commands::FindSchools { location } => {
            let mut surface = with_location(surface, location);
            console
                .show_results(QueryForm::Nearby, &mut surface)
                .await
                .is_failure()
        }
        Commands::ExportSchools { location, save } => {
            let mut surface = with_save_args(with_location(surface, location), save);
            report_export(console.export(QueryForm::Nearby, &mut surface).await)
        }
    };

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn with_location(surface: TerminalSurface, location: LocationArgs) -> TerminalSurface {
    surface
        .with_field("lat", location.lat)
        .with_field("long", location.long)
        .with_field("max_distance", location.max_distance)
}

fn with_save_args(surface: TerminalSurface, save: SaveArgs) -> TerminalSurface {
    let surface = match save.dir {
        Some(dir) => surface.with_download_dir(dir),
        None => surface,
    };
    surface.with_output_override(save.output)
}

fn report_export(outcome: ExportOutcome) -> bool {
    match outcome {
        ExportOutcome::Saved { path, bytes } => {
            eprintln!(
                "{}",
                format_success(&format!("Saved {} bytes to {}", bytes, path.display()))
            );
            false
        }
        ExportOutcome::Failed(_) => true,
    }
}
