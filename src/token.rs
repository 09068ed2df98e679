use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where the displayed token came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenSource {
    Inline,
    File(PathBuf),
    Stdin,
}

/// The display element: the token text currently shown on screen.
///
/// The text is held byte-for-byte as supplied — no trimming, no
/// normalization. Whatever is displayed is exactly what a copy
/// request transcribes to the clipboard.
pub struct TokenDisplay {
    text: String,
    source: TokenSource,
    loaded_at: DateTime<Local>,
}

impl TokenDisplay {
    pub fn from_inline(text: String) -> Self {
        Self {
            text,
            source: TokenSource::Inline,
            loaded_at: Local::now(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read token file: {}", path.display()))?;

        Ok(Self {
            text,
            source: TokenSource::File(path.to_path_buf()),
            loaded_at: Local::now(),
        })
    }

    pub fn from_stdin() -> Result<Self> {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read token from stdin")?;

        Ok(Self {
            text,
            source: TokenSource::Stdin,
            loaded_at: Local::now(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn loaded_at(&self) -> DateTime<Local> {
        self.loaded_at
    }

    /// Path to watch for external changes, for file-backed tokens.
    pub fn watch_path(&self) -> Option<&Path> {
        match &self.source {
            TokenSource::File(path) => Some(path),
            _ => None,
        }
    }

    /// Re-read the backing file. Returns true if the displayed text changed.
    /// Inline and stdin tokens are fixed for the process lifetime.
    pub fn reload(&mut self) -> Result<bool> {
        let path = match &self.source {
            TokenSource::File(path) => path.clone(),
            _ => return Ok(false),
        };

        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read token file: {}", path.display()))?;

        if text == self.text {
            return Ok(false);
        }

        self.text = text;
        self.loaded_at = Local::now();
        Ok(true)
    }

    pub fn source_label(&self) -> String {
        match &self.source {
            TokenSource::Inline => "inline".to_string(),
            TokenSource::Stdin => "stdin".to_string(),
            TokenSource::File(path) => path.display().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_inline_token_verbatim() {
        let display = TokenDisplay::from_inline("  abc123.def456.ghi789\n".to_string());
        assert_eq!(display.text(), "  abc123.def456.ghi789\n");
        assert_eq!(display.source_label(), "inline");
    }

    #[test]
    fn test_file_token_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("token.txt");
        fs::write(&path, "abc123.def456.ghi789\n").unwrap();

        let display = TokenDisplay::from_file(&path).unwrap();
        assert_eq!(display.text(), "abc123.def456.ghi789\n");
        assert_eq!(display.watch_path(), Some(path.as_path()));
    }

    #[test]
    fn test_file_token_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");

        assert!(TokenDisplay::from_file(&path).is_err());
    }

    #[test]
    fn test_reload_detects_change() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("token.txt");
        fs::write(&path, "first").unwrap();

        let mut display = TokenDisplay::from_file(&path).unwrap();
        assert_eq!(display.text(), "first");

        assert!(!display.reload().unwrap());

        fs::write(&path, "second").unwrap();
        assert!(display.reload().unwrap());
        assert_eq!(display.text(), "second");
    }

    #[test]
    fn test_inline_reload_is_noop() {
        let mut display = TokenDisplay::from_inline("fixed".to_string());
        assert!(!display.reload().unwrap());
        assert_eq!(display.text(), "fixed");
    }
}
