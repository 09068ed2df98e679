use crate::app::AppState;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthChar;

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let title = format!(" Token ({}) ", state.token.source_label());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(state.theme.border))
        .style(Style::default().bg(state.theme.background));

    let inner_width = area.width.saturating_sub(2) as usize;
    let token_style = Style::default().fg(state.theme.token);

    let lines: Vec<Line> = if state.token.is_empty() {
        vec![Line::from(Span::styled(
            "(empty token)",
            Style::default().fg(state.theme.foreground),
        ))]
    } else {
        wrap_text(state.token.text(), inner_width)
            .into_iter()
            .map(|l| Line::from(Span::styled(l, token_style)))
            .collect()
    };

    let paragraph = Paragraph::new(lines).block(block);

    f.render_widget(paragraph, area);
}

/// Wrap by display width, breaking anywhere. Tokens are opaque character
/// runs with no useful word boundaries, so mid-"word" breaks are expected.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for ch in text.chars() {
        if ch == '\n' {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
            continue;
        }

        let w = ch.width().unwrap_or(0);
        if current_width + w > max_width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(ch);
        current_width += w;
    }

    lines.push(current);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wrap_short_text() {
        assert_eq!(wrap_text("abc", 10), vec!["abc"]);
    }

    #[test]
    fn test_wrap_breaks_anywhere() {
        assert_eq!(wrap_text("abcdef", 2), vec!["ab", "cd", "ef"]);
    }

    #[test]
    fn test_wrap_preserves_newlines() {
        assert_eq!(wrap_text("ab\ncd", 10), vec!["ab", "cd"]);
    }

    #[test]
    fn test_wrap_empty() {
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn test_wrap_trailing_newline_yields_empty_line() {
        assert_eq!(wrap_text("abc\n", 10), vec!["abc", ""]);
    }
}
