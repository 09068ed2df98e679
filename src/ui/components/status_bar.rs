use crate::app::AppState;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let loaded_label = state.token.loaded_at().format("%H:%M:%S").to_string();

    let copies_label = if state.copy_count == 1 {
        "1 copy".to_string()
    } else {
        format!("{} copies", state.copy_count)
    };

    let nav_hint = format!("{} copy  r reload  ? help  q quit", state.copy_key);
    let version_text = format!("v{VERSION}");

    let left_content = format!(
        " {} | loaded {} | {}",
        state.token.source_label(),
        loaded_label,
        copies_label
    );

    let padding = area
        .width
        .saturating_sub(left_content.len() as u16 + nav_hint.len() as u16 + version_text.len() as u16 + 3);

    let base_style = Style::default()
        .fg(state.theme.status_bar_fg)
        .bg(state.theme.status_bar_bg);

    let status_line = format!(
        "{} {} {:>padding$} {}",
        left_content,
        nav_hint,
        "",
        version_text,
        padding = padding as usize
    );

    let status = Paragraph::new(Line::from(vec![Span::styled(status_line, base_style)]));

    f.render_widget(status, area);
}
