// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod cmd_check;

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;
use wordcheck::cli::Cli;
use wordcheck::error::ExitCode;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    match cmd_check::run(&cli) {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::Failure.into()
        }
    }
}

/// Log to stderr: load summaries by default, per-file detail with `--verbose`.
fn init_tracing(verbose: bool) {
    let filter = if verbose { "warn,wordcheck=debug" } else { "warn,wordcheck=info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .with_target(false)
        .init();
}
