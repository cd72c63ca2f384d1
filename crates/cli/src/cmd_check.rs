// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Default command: load patterns, then check words.

use std::io;

use termcolor::StandardStream;
use wordcheck::cli::{Cli, OutputFormat};
use wordcheck::color::resolve_color;
use wordcheck::config::{self, Config};
use wordcheck::discovery;
use wordcheck::error::ExitCode;
use wordcheck::loader;
use wordcheck::report::formatter_for;
use wordcheck::session::Session;
use wordcheck::settings::Settings;

/// Run the checker.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;

    let config = match cli.config.clone().or_else(|| discovery::find_config(&cwd)) {
        Some(path) => config::load(&path)?,
        None => Config::default(),
    };

    let settings = Settings::resolve(cli, &config, &cwd)?;
    let patterns = loader::load(&settings.dirty, settings.clean.as_deref(), &settings.options)?;
    tracing::info!(
        "ready: {} dirty, {} clean patterns",
        patterns.dirty.len(),
        patterns.clean.len()
    );

    let formatter = formatter_for(cli.output);
    let session = Session::new(&patterns, formatter.as_ref())
        .with_prompt(cli.output == OutputFormat::Text);
    let mut stdout = StandardStream::stdout(resolve_color(cli.color, cli.no_color));

    if cli.words.is_empty() {
        session.run(io::stdin().lock(), &mut stdout)?;
    } else {
        session.check_all(cli.words.as_slice(), &mut stdout)?;
    }

    Ok(ExitCode::Success)
}
