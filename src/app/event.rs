use super::state::AppState;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;

pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> Result<()> {
    // A displayed acknowledgement is modal: any key dismisses it and nothing
    // else happens until then.
    if state.is_blocked() {
        state.dismiss_acknowledgement();
        return Ok(());
    }

    if state.show_help {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                state.show_help = false;
            }
            _ => {}
        }
        return Ok(());
    }

    match (key.code, key.modifiers) {
        // Copy the displayed token
        (KeyCode::Char(c), KeyModifiers::NONE) if c == state.copy_key => {
            state.request_copy();
        }
        (KeyCode::Enter, KeyModifiers::NONE) => {
            state.request_copy();
        }

        // Reload a file-backed token
        (KeyCode::Char('r'), KeyModifiers::NONE) => {
            if let Err(e) = state.reload_token() {
                // Keep showing the last good text if the file went away.
                warn!("token reload failed: {e:#}");
            }
        }

        // Help toggle
        (KeyCode::Char('?'), KeyModifiers::NONE) => {
            state.show_help = true;
        }

        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => {
            state.should_quit = true;
        }

        _ => {}
    }

    Ok(())
}
