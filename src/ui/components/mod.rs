pub mod status_bar;
pub mod token_view;

use crate::app::{Acknowledgement, AppState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Token view
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    token_view::render(f, state, chunks[0]);
    status_bar::render(f, state, chunks[1]);

    if state.show_help {
        render_help_overlay(f, state);
    }

    // Drawn last so it sits above everything else.
    if let Some(ack) = state.acknowledgement {
        render_acknowledgement_modal(f, state, ack);
    }
}

fn render_acknowledgement_modal(f: &mut Frame, state: &AppState, ack: Acknowledgement) {
    let area = centered_rect(40, 20, f.area());

    let accent = match ack {
        Acknowledgement::Copied => state.theme.success,
        Acknowledgement::Failed => state.theme.failure,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(ack.title())
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(state.theme.background));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            ack.message(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "press any key",
            Style::default().fg(state.theme.foreground),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

fn render_help_overlay(f: &mut Frame, state: &AppState) {
    let help_text = format!(
        r#"
    TOKTUI Help

      {} or Enter    Copy token to clipboard
      r              Reload file-backed token
      ?              Toggle help
      q              Quit

    While the copy acknowledgement is shown,
    any key dismisses it.
    "#,
        state.copy_key
    );

    let area = centered_rect(60, 50, f.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(state.theme.background));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .style(Style::default().fg(state.theme.foreground))
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
