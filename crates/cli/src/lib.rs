mod generate;
mod pass;
mod routes;

use clap::{Parser, Subcommand};
use routegen_core::logging::{LogOptions, init_logging};
use std::path::PathBuf;
use std::process::ExitCode;

pub use generate::{GenerateArgs, GenerateReport};
pub use pass::ProjectPass;
pub use routes::{RoutesArgs, RoutesReport};

#[derive(Parser)]
#[command(
    name = "routegen",
    version,
    about = "Generate a typed route registry for Java UI projects",
    long_about = "Routegen scans a Java project for route markers, collects page types by naming \
                  convention plus explicitly declared extra routes, and emits a Routes class \
                  holding one constant per route, an ordered AllRoutes list and a RouteTypeMap."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory for daily-rolling log files
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Default log level when RUST_LOG is unset
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate Routes.g.java for a project
    #[command(
        long_about = "Runs one generation pass and writes Routes.g.java. The output directory is \
                      --out, else output_dir from routegen.json, else the directory holding the \
                      source file of the type carrying @AutoRoutes."
    )]
    Generate {
        /// Path to the project root directory
        #[arg(value_name = "PROJECT_PATH")]
        path: PathBuf,

        /// Directory to write the generated file into
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,

        /// Configuration file (defaults to routegen.json in the project root)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Print the generated source instead of writing it
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the route table without writing anything
    Routes {
        /// Path to the project root directory
        #[arg(value_name = "PROJECT_PATH")]
        path: PathBuf,

        /// Configuration file (defaults to routegen.json in the project root)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let component = match &cli.command {
        Commands::Generate { .. } => "generate",
        Commands::Routes { .. } => "routes",
    };
    let _guard = init_logging(
        component,
        &LogOptions {
            log_dir: cli.log_dir.clone(),
            level: cli.log_level.clone(),
        },
    );

    match cli.command {
        Commands::Generate {
            path,
            out,
            config,
            dry_run,
        } => generate::run(GenerateArgs {
            path,
            out,
            config,
            dry_run,
        }),
        Commands::Routes { path, config, json } => routes::run(RoutesArgs { path, config, json }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_flags() {
        let cli = Cli::try_parse_from([
            "routegen",
            "generate",
            "proj",
            "--out",
            "gen",
            "--dry-run",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        match cli.command {
            Commands::Generate {
                path, out, dry_run, ..
            } => {
                assert_eq!(path, PathBuf::from("proj"));
                assert_eq!(out, Some(PathBuf::from("gen")));
                assert!(dry_run);
            }
            Commands::Routes { .. } => panic!("expected generate"),
        }
    }
}
