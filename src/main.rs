//! Site route table CLI.
//!
//! ```text
//! site-routes resolve /projects/123/editor
//! site-routes --env development --routes extra.toml list
//! site-routes check
//! site-routes aliases
//! ```
//!
//! Output is JSON on stdout; logs go to stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use site_routes::config::{Environment, ObservabilityConfig, RoutesConfig};
use site_routes::edge;
use site_routes::lifecycle::{startup, StartupError};
use site_routes::observability::logging;

#[derive(Parser)]
#[command(name = "site-routes")]
#[command(about = "Inspect and resolve the site route table", long_about = None)]
struct Cli {
    /// Deployment environment [default: $SITE_ENV, then $NODE_ENV, then production]
    #[arg(short, long, global = true)]
    env: Option<Environment>,

    /// TOML file with extra routes appended after the built-in table
    #[arg(short, long, global = true)]
    routes: Option<PathBuf>,

    /// Log level when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a request path (exit status 1 when nothing matches)
    Resolve {
        /// Decoded request path, e.g. /projects/123/editor
        path: String,

        /// Query string to match along with the path
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Print the route table in resolution order
    List,
    /// Build the route table and report every problem
    Check,
    /// Print routes grouped by edge alias
    Aliases,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = RoutesConfig {
        environment: cli.env.unwrap_or_else(Environment::from_env),
        route_file: cli.routes,
        observability: ObservabilityConfig {
            log_level: cli.log_level,
        },
    };
    logging::init(&config.observability.log_level);

    tracing::debug!(
        environment = %config.environment,
        route_file = ?config.route_file,
        "Configuration loaded"
    );

    let code = match cli.command {
        Commands::Check => check(&config),
        Commands::Resolve { path, query } => {
            let router = startup::start(&config)?;
            let resolution = router.resolve_with_query(&path, query.as_deref());
            println!("{}", serde_json::to_string_pretty(&resolution)?);
            if resolution.is_not_found() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Commands::List => {
            let router = startup::start(&config)?;
            println!("{}", serde_json::to_string_pretty(router.table().entries())?);
            ExitCode::SUCCESS
        }
        Commands::Aliases => {
            let router = startup::start(&config)?;
            let groups = edge::alias_groups(router.table());
            println!("{}", serde_json::to_string_pretty(&groups)?);
            ExitCode::SUCCESS
        }
    };

    Ok(code)
}

fn check(config: &RoutesConfig) -> ExitCode {
    match startup::build_table(config) {
        Ok(table) => {
            println!("ok: {} routes ({})", table.len(), config.environment);
            ExitCode::SUCCESS
        }
        Err(StartupError::Table(e)) => {
            for error in e.errors() {
                eprintln!("error: {error}");
            }
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
