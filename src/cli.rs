use crate::config::{ResolvedConfig, ResolvedConfigFile};
use crate::errors::{AppError, AppResult};
use crate::exporter::run_export;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use tracing::info;

// CLI metadata constants
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_ABOUT: &str = env!("CARGO_PKG_DESCRIPTION");

fn build_command() -> Command<'static> {
    Command::new("dfrp-export")
        .version(APP_VERSION)
        .about(APP_ABOUT)
        .subcommand(
            Command::new("cli")
                .about("Export the registry dump found in a base directory")
                .after_help("Example:\n  dfrp-export cli -b C:/GIS/DFRP -o C:/GIS/DFRP/tables")
                .arg(
                    Arg::new("base_dir")
                        .short('b')
                        .long("base-dir")
                        .help("Directory holding the XML dump (tables are written here unless --output-dir is set)")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("input_file")
                        .short('i')
                        .long("input-file")
                        .help("File name of the XML dump inside the base directory")
                        .value_parser(clap::value_parser!(String))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("output_dir")
                        .short('o')
                        .long("output-dir")
                        .help("Directory for the CSV tables")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("no_progress")
                        .long("no-progress")
                        .help("Do not draw a progress bar")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("toml")
                .about("Run using a TOML configuration file")
                .arg(
                    Arg::new("config")
                        .help("Path to the TOML config file")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
}

/// Resolves the export configuration from the `cli` subcommand's arguments.
fn config_from_args(sub: &ArgMatches) -> AppResult<ResolvedConfig> {
    let mut config = ResolvedConfig::default();
    if let Some(base_dir) = sub.get_one::<PathBuf>("base_dir") {
        config.base_dir = base_dir.clone();
    }
    if let Some(input_file) = sub.get_one::<String>("input_file") {
        config.input_file = input_file.clone();
    }
    if let Some(output_dir) = sub.get_one::<PathBuf>("output_dir") {
        config.output_dir = Some(output_dir.clone());
    }
    if sub.get_one::<bool>("no_progress").copied().unwrap_or(false) {
        config.progress = false;
    }
    config.validate()?;
    Ok(config)
}

/// Parses command-line arguments and runs the export.
///
/// This function handles two subcommands:
/// - `cli`: paths given as flags, defaults for everything else
/// - `toml`: settings read from a TOML configuration file
///
/// Both run the same workflow (see [`run_export`]). With no subcommand the help
/// text is printed.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the export fails.
pub fn cli() -> AppResult<()> {
    let cmd = build_command();
    let mut cmd_for_help = cmd.clone();
    let matches = cmd.get_matches();

    let config = match matches.subcommand() {
        Some(("cli", sub)) => config_from_args(sub)?,
        Some(("toml", sub)) => {
            let config_path = sub
                .get_one::<PathBuf>("config")
                .ok_or_else(|| AppError::InvalidInput("Missing config path".into()))?;
            ResolvedConfigFile::from_toml_file(config_path)?
        }
        _ => {
            cmd_for_help
                .print_help()
                .map_err(|e| AppError::IoError(format!("Failed to print help: {e}")))?;
            return Ok(());
        }
    };

    info!(
        input = %config.input_path().display(),
        output_dir = %config.output_dir().display(),
        "Starting export"
    );
    let stats = run_export(&config)?;
    info!(rows = stats.total_rows(), "All tables written");

    Ok(())
}
