//! # Baccaroad CLI Library
//!
//! Terminal front end for the baccarat road map pages. Every page action is
//! a subcommand; backend actions go through the same controllers a page
//! would use and print what the page would paint.
//!
//! ## Example Usage
//!
//! ```
//! use std::io;
//! let args = vec!["baccaroad", "point", "K", "9"];
//! let code = baccaroad_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `cfg`: Display resolved settings and their sources
//! - `point`: Point of a hand, computed locally
//! - `road`: Draw the road map (backend or saved file)
//! - `add`: Record a round result
//! - `clear`: Delete all recorded results
//! - `new-shoe`: Start a new shoe
//! - `train`: Train the prediction model
//! - `predict`: Predict the next round

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod ui;

use cli::{BaccaroadCli, Commands};
use commands::{
    handle_add_command, handle_cfg_command, handle_clear_command, handle_new_shoe_command,
    handle_point_command, handle_predict_command, handle_road_command, handle_train_command,
};

pub use cli::{LogOutput, PredictMode, SideArg};
pub use error::CliError;

/// Default log filter for the binary; `RUST_LOG` overrides it.
pub const LOG_FILTER: &str = "warn";

/// Main entry point for the CLI application.
///
/// Parses `args`, runs the subcommand and returns the exit code: `0` on
/// success, `2` for any error. Normal output goes to `out`, warnings and
/// errors to `err`.
///
/// ```
/// use std::io;
/// let code = baccaroad_cli::run(
///     vec!["baccaroad", "clear"],
///     &mut io::stdout(),
///     &mut io::stderr(),
/// );
/// assert_eq!(code, 2);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &[
        "cfg", "point", "road", "add", "clear", "new-shoe", "train", "predict",
    ];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match BaccaroadCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = write_usage(err, &e, COMMANDS);
                    exit_code::ERROR
                }
            };
        }
    };

    match dispatch(cli, out, err) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            if !e.is_reported() && ui::write_error(err, &e.to_string()).is_err() {
                return exit_code::ERROR;
            }
            exit_code::ERROR
        }
    }
}

fn write_usage(
    err: &mut dyn Write,
    e: &clap::Error,
    commands: &[&str],
) -> std::io::Result<()> {
    writeln!(err, "{}", e)?;
    writeln!(err)?;
    writeln!(err, "Baccarat road map CLI")?;
    writeln!(err, "Usage: baccaroad [--server URL] <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in commands {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: baccaroad --help")
}

fn dispatch(cli: BaccaroadCli, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let server = cli.server.as_deref();
    match cli.cmd {
        Commands::Cfg => handle_cfg_command(server, out),
        Commands::Point { cards, side } => handle_point_command(&cards, side, out, err),
        Commands::Road { input } => {
            handle_road_command(settings(server)?, input.as_deref(), out, err)
        }
        Commands::Add {
            result,
            player,
            banker,
        } => handle_add_command(settings(server)?, &result, &player, &banker, out, err),
        Commands::Clear { yes } => handle_clear_command(settings(server)?, yes, out, err),
        Commands::NewShoe => handle_new_shoe_command(settings(server)?, out, err),
        Commands::Train => handle_train_command(settings(server)?, out, err),
        Commands::Predict {
            mode,
            player,
            banker,
        } => handle_predict_command(settings(server)?, mode, &player, &banker, out, err),
    }
}

fn settings(server: Option<&str>) -> Result<baccaroad_web::ClientSettings, CliError> {
    let resolved = config::load_with_sources(server)?;
    tracing::debug!(base_url = %resolved.settings.base_url, "settings resolved");
    Ok(resolved.settings)
}
