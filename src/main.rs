// sift — interactive filterable selector
// Reads items from stdin, lets the user narrow and pick one, prints it to stdout.

mod app;
mod config;
mod error;
mod event;
mod logging;
mod model;
mod selector;
mod source;
mod tui;
mod ui;

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use app::App;
use config::Config;
use error::SiftError;
use selector::Selector;
use source::OutputField;

/// Exit status when the user cancels, as with an interrupted shell command.
const EXIT_CANCELLED: u8 = 130;

#[derive(Debug, Parser)]
#[command(name = "sift", version, about = "Pick one line from stdin with an incrementally filtered list")]
struct Cli {
    /// Prompt shown above the list
    #[arg(short, long)]
    prompt: Option<String>,

    /// Match the filter case-sensitively
    #[arg(short, long)]
    case_sensitive: bool,

    /// Split each line into DISPLAY<delimiter>VALUE
    #[arg(short, long, value_name = "CHAR")]
    delimiter: Option<char>,

    /// What to print for the chosen line
    #[arg(long, value_enum, default_value_t = OutputField::Value)]
    output: OutputField,

    /// Log file (default: ~/.cache/sift/sift.log)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(Some(line)) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::from(EXIT_CANCELLED),
        Err(e) => {
            eprintln!("sift: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<Option<String>> {
    let config = Config::load()?;
    let _log_guard = match cli.log_file.clone().or_else(logging::default_log_path) {
        Some(path) => logging::init(&path, &config.log_level)?,
        None => None,
    };

    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(SiftError::NoInput.into());
    }
    let items = source::read_items(stdin.lock(), cli.delimiter).context("reading items from stdin")?;
    info!(count = items.len(), "items loaded");

    let prompt = cli.prompt.unwrap_or_else(|| config.prompt().to_string());
    let selector = Selector::new(items, prompt).case_sensitive(cli.case_sensitive || config.case_sensitive);

    let mut terminal = tui::init().context("terminal init failed")?;
    let result = App::new(selector).run(&mut terminal);

    // Always restore terminal, even on error
    let _ = tui::restore(&mut terminal);

    let completion = result?;
    Ok(completion.confirmed().map(|item| cli.output.format(&item)))
}
