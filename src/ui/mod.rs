pub mod components;
pub mod theme;

use crate::app::{AppState, event::handle_key_event};
use crate::clipboard::CopyOutcome;
use anyhow::Result;
use crossterm::{
    event::{
        self, Event, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

struct TerminalGuard {
    keyboard_enhancement: bool,
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        if self.keyboard_enhancement {
            let _ = execute!(stdout, PopKeyboardEnhancementFlags);
        }
        let _ = disable_raw_mode();
        let _ = execute!(stdout, LeaveAlternateScreen);
        let _ = stdout.flush();
    }
}

pub fn run_tui(mut state: AppState, outcome_rx: mpsc::Receiver<CopyOutcome>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let supports_keyboard_enhancement = execute!(
        stdout,
        PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
    )
    .is_ok();

    let _guard = TerminalGuard {
        keyboard_enhancement: supports_keyboard_enhancement,
    };

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (watch_tx, watch_rx) = mpsc::channel();
    let _watcher = state
        .token
        .watch_path()
        .and_then(|path| setup_token_watcher(watch_tx.clone(), path));

    let result = run_app(&mut terminal, &mut state, outcome_rx, watch_rx);
    terminal.show_cursor()?;

    result
}

fn setup_token_watcher(tx: mpsc::Sender<()>, path: &Path) -> Option<RecommendedWatcher> {
    let watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| {
            if let Ok(event) = res {
                if event.kind.is_modify() {
                    let _ = tx.send(());
                }
            }
        },
        Config::default(),
    );

    match watcher {
        Ok(mut w) => {
            if w.watch(path, RecursiveMode::NonRecursive).is_ok() {
                Some(w)
            } else {
                None
            }
        }
        Err(_) => None,
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    outcome_rx: mpsc::Receiver<CopyOutcome>,
    watch_rx: mpsc::Receiver<()>,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            components::render(f, state);
        })?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key_event(key, state)?;
                }
            }
        }

        // Resolved copy requests become acknowledgements one at a time: the
        // next one is surfaced only after the current modal is dismissed.
        if !state.is_blocked() {
            if let Ok(outcome) = outcome_rx.try_recv() {
                state.show_acknowledgement(outcome);
            }
        }

        let mut should_reload = false;
        while watch_rx.try_recv().is_ok() {
            should_reload = true;
        }
        if should_reload {
            let _ = state.reload_token();
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
