use clap::Parser;
use std::io;

use baccaroad_cli::cli::BaccaroadCli;
use baccaroad_cli::{LOG_FILTER, LogOutput};
use baccaroad_web::{LogFormat, init_logging};

fn main() {
    let format = match BaccaroadCli::try_parse().map(|cli| cli.log_format) {
        Ok(LogOutput::Json) => LogFormat::Json,
        _ => LogFormat::Text,
    };
    // A second subscriber can only come from a test harness; keep going.
    let _ = init_logging(format, LOG_FILTER);

    let mut out = io::stdout();
    let mut err = io::stderr();
    let code = baccaroad_cli::run(std::env::args(), &mut out, &mut err);
    std::process::exit(code);
}
