mod app;
mod cli;
mod clipboard;
mod config;
mod token;
mod ui;
mod utils;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Commands};
use clipboard::CopyDispatcher;
use config::Config;
use std::fs::OpenOptions;
use std::io::IsTerminal;
use std::sync::mpsc;
use token::TokenDisplay;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};
use ui::theme::Theme;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    init_logging()?;

    match cli.command {
        Some(Commands::Show) => {
            handle_show(&cli)?;
        }
        None => {
            let token = resolve_token(&cli)?;
            info!("displaying token from {}", token.source_label());

            let (outcome_tx, outcome_rx) = mpsc::channel();
            let dispatcher = CopyDispatcher::new(outcome_tx);

            let theme = Theme::from_config(&config);
            let state = app::AppState::new(token, dispatcher, theme, config.copy_key_char());

            ui::run_tui(state, outcome_rx)?;
        }
    }

    Ok(())
}

/// Pick the token source: inline argument, file, then piped stdin.
fn resolve_token(cli: &Cli) -> Result<TokenDisplay> {
    if let Some(text) = &cli.token {
        return Ok(TokenDisplay::from_inline(text.clone()));
    }

    if let Some(path) = &cli.file {
        return TokenDisplay::from_file(path);
    }

    if !std::io::stdin().is_terminal() {
        return TokenDisplay::from_stdin();
    }

    bail!("No token provided. Pass one as an argument, via --file, or pipe it on stdin.")
}

fn handle_show(cli: &Cli) -> Result<()> {
    let token = resolve_token(cli)?;
    // Verbatim: no added newline, no trimming.
    print!("{}", token.text());
    Ok(())
}

fn init_logging() -> Result<()> {
    utils::paths::ensure_directories_exist()?;
    let log_path = utils::paths::get_log_path()?;

    let log_file = OpenOptions::new().create(true).append(true).open(log_path)?;

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .init();

    Ok(())
}
