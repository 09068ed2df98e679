use crate::clipboard::{CopyDispatcher, CopyOutcome};
use crate::token::TokenDisplay;
use crate::ui::theme::Theme;
use anyhow::Result;
use tracing::info;

/// The modal acknowledgement shown after a copy request resolves. While one
/// is displayed, all other input is blocked until it is dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acknowledgement {
    Copied,
    Failed,
}

impl Acknowledgement {
    pub fn message(&self) -> &'static str {
        match self {
            Acknowledgement::Copied => "Token copied to clipboard",
            Acknowledgement::Failed => "Failed to copy token",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Acknowledgement::Copied => " Copied ",
            Acknowledgement::Failed => " Copy failed ",
        }
    }

    fn from_outcome(outcome: CopyOutcome) -> Self {
        match outcome {
            CopyOutcome::Copied => Acknowledgement::Copied,
            CopyOutcome::Failed => Acknowledgement::Failed,
        }
    }
}

pub struct AppState {
    pub token: TokenDisplay,
    pub clipboard: CopyDispatcher,
    pub acknowledgement: Option<Acknowledgement>,
    pub should_quit: bool,
    pub show_help: bool,
    pub theme: Theme,
    pub copy_key: char,
    pub copy_count: u64,
}

impl AppState {
    pub fn new(token: TokenDisplay, clipboard: CopyDispatcher, theme: Theme, copy_key: char) -> Self {
        Self {
            token,
            clipboard,
            acknowledgement: None,
            should_quit: false,
            show_help: false,
            theme,
            copy_key,
            copy_count: 0,
        }
    }

    /// The copy handler: read the display text as it is right now and
    /// dispatch a clipboard write. Never blocks, never fails; the outcome
    /// arrives later on the dispatcher's channel.
    pub fn request_copy(&mut self) {
        self.clipboard.request_copy(self.token.text());
        self.copy_count += 1;
    }

    /// Surface the acknowledgement for a resolved copy request.
    pub fn show_acknowledgement(&mut self, outcome: CopyOutcome) {
        self.acknowledgement = Some(Acknowledgement::from_outcome(outcome));
    }

    pub fn dismiss_acknowledgement(&mut self) {
        self.acknowledgement = None;
    }

    pub fn is_blocked(&self) -> bool {
        self.acknowledgement.is_some()
    }

    /// Re-read a file-backed token so the display tracks external edits.
    pub fn reload_token(&mut self) -> Result<()> {
        if self.token.reload()? {
            info!("token reloaded from {}", self.token.source_label());
        }
        Ok(())
    }
}
