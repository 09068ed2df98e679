use anyhow::{Context, Result};
use arboard::Clipboard;
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread;
use tracing::{debug, warn};

/// Result of a single clipboard write request. Exactly one outcome is
/// delivered per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
}

type WriteFn = Arc<dyn Fn(&str) -> Result<()> + Send + Sync>;

/// Dispatches clipboard writes off the UI thread.
///
/// Each `request_copy` spawns an independent write; outcomes arrive on the
/// channel supplied at construction. Rapid successive requests are neither
/// debounced nor merged — the OS clipboard ends up with whichever write
/// completes last.
pub struct CopyDispatcher {
    outcome_tx: Sender<CopyOutcome>,
    write: WriteFn,
}

impl CopyDispatcher {
    pub fn new(outcome_tx: Sender<CopyOutcome>) -> Self {
        Self {
            outcome_tx,
            write: Arc::new(|text| copy_to_clipboard(text)),
        }
    }

    /// Build a dispatcher with a custom write function. Lets tests exercise
    /// both continuation paths without touching the system clipboard.
    pub fn with_writer(outcome_tx: Sender<CopyOutcome>, write: WriteFn) -> Self {
        Self { outcome_tx, write }
    }

    /// Request that `text` be written to the clipboard. Returns immediately;
    /// the outcome is sent on the channel once the write resolves or rejects.
    pub fn request_copy(&self, text: &str) {
        let write = Arc::clone(&self.write);
        let tx = self.outcome_tx.clone();
        let text = text.to_owned();

        thread::spawn(move || {
            let outcome = match write(&text) {
                Ok(()) => {
                    debug!("clipboard write succeeded ({} bytes)", text.len());
                    CopyOutcome::Copied
                }
                Err(e) => {
                    // Cause stays in the log; the UI shows a generic failure.
                    warn!("clipboard write failed: {e:#}");
                    CopyOutcome::Failed
                }
            };
            let _ = tx.send(outcome);
        });
    }
}

/// Copy text to the system clipboard.
///
/// Returns Ok(()) on success, or an error if clipboard is unavailable
/// (headless environment, missing display server, denied access).
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access system clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to copy text to clipboard")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;
    use std::sync::mpsc;
    use std::time::Duration;

    const RECV_TIMEOUT: Duration = Duration::from_secs(5);

    fn recording_dispatcher(
        ok: bool,
    ) -> (CopyDispatcher, mpsc::Receiver<CopyOutcome>, Arc<Mutex<Vec<String>>>) {
        let written = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&written);
        let (tx, rx) = mpsc::channel();

        let dispatcher = CopyDispatcher::with_writer(
            tx,
            Arc::new(move |text: &str| {
                sink.lock().unwrap().push(text.to_owned());
                if ok { Ok(()) } else { Err(anyhow!("denied")) }
            }),
        );

        (dispatcher, rx, written)
    }

    #[test]
    fn test_copy_argument_is_verbatim() {
        let (dispatcher, rx, written) = recording_dispatcher(true);

        dispatcher.request_copy("abc123.def456.ghi789");

        assert_eq!(rx.recv_timeout(RECV_TIMEOUT).unwrap(), CopyOutcome::Copied);
        assert_eq!(written.lock().unwrap().as_slice(), ["abc123.def456.ghi789"]);
    }

    #[test]
    fn test_success_delivers_exactly_one_outcome() {
        let (dispatcher, rx, _) = recording_dispatcher(true);

        dispatcher.request_copy("token");

        assert_eq!(rx.recv_timeout(RECV_TIMEOUT).unwrap(), CopyOutcome::Copied);
        assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());
    }

    #[test]
    fn test_failure_delivers_exactly_one_outcome() {
        let (dispatcher, rx, _) = recording_dispatcher(false);

        dispatcher.request_copy("token");

        assert_eq!(rx.recv_timeout(RECV_TIMEOUT).unwrap(), CopyOutcome::Failed);
        assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());
    }

    #[test]
    fn test_rapid_requests_are_independent() {
        let (dispatcher, rx, written) = recording_dispatcher(true);

        dispatcher.request_copy("first");
        dispatcher.request_copy("second");

        assert_eq!(rx.recv_timeout(RECV_TIMEOUT).unwrap(), CopyOutcome::Copied);
        assert_eq!(rx.recv_timeout(RECV_TIMEOUT).unwrap(), CopyOutcome::Copied);

        let mut seen = written.lock().unwrap().clone();
        seen.sort();
        assert_eq!(seen, ["first", "second"]);
    }

    #[test]
    fn test_system_copy_no_panic() {
        // Best-effort: in headless CI the clipboard may be unavailable, we
        // only require an error, never a panic.
        let _ = copy_to_clipboard("test");
    }
}
