mod commands;

use clap::Parser;
use commands::{EXIT_FAILURE, EXIT_MANIFEST_ERROR};
use std::process::ExitCode;

/// Takes no arguments: the manifest is located relative to the installed
/// executable, one directory up and then into `superset-frontend/`.
///
/// `--help` and `--version` are disabled so that stdout only ever carries the
/// manifest value.
#[derive(Debug, Parser)]
#[command(
    name = "get-version",
    about = "Print the product version recorded in superset-frontend/package.json",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            eprint!("{e}");
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("PKGVERSION_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let result = commands::executable_anchor()
        .and_then(|anchor| commands::resolve::run(&anchor, &mut std::io::stdout().lock()));

    match result {
        Ok(code) => ExitCode::from(code),
        Err(msg) => {
            eprintln!("error: {msg}");
            let code = if msg.starts_with("manifest error:") {
                EXIT_MANIFEST_ERROR
            } else {
                EXIT_FAILURE
            };
            ExitCode::from(code)
        }
    }
}
