//! Status bar rendering with keybindings and history position

use crate::game::History;
use crate::ui::app::Screen;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Everything the status bar shows
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub screen: Screen,
    pub history: &'a History,
    pub show_five_button: bool,
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, theme: &Theme, data: StatusRenderData) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let bar_bg = theme.section_bg;
    let history = data.history;

    // Left side: history position and status
    let left_spans = vec![
        Span::styled(
            format!(" Move {}/{} ", history.position(), history.len() - 1),
            Style::default()
                .bg(theme.tint)
                .fg(theme.bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", Style::default().bg(bar_bg).fg(theme.muted)),
        Span::styled(
            format!(" {} ", data.message),
            Style::default().bg(bar_bg).fg(theme.fg),
        ),
    ];

    frame.render_widget(
        Paragraph::new(Line::from(left_spans))
            .style(Style::default().bg(bar_bg))
            .alignment(Alignment::Left),
        layout[0],
    );

    // Right side: keybinds with visual grouping
    let key_style = Style::default().bg(theme.muted).fg(theme.bg);
    let off_key_style = Style::default().bg(theme.disabled).fg(theme.bg);
    let desc_style = Style::default().bg(bar_bg).fg(theme.fg);
    let sep_style = Style::default().bg(bar_bg).fg(theme.muted);

    let mut binds: Vec<(String, &str, bool)> = Vec::new();
    match data.screen {
        Screen::Scoreboard => {
            binds.push(("⇥".to_string(), "team", true));
            let keys = if data.show_five_button { "1 5 4 b" } else { "1 4 b" };
            binds.push((keys.to_string(), "score", true));
            binds.push(("←".to_string(), "undo", history.can_undo()));
            binds.push(("→".to_string(), "redo", history.can_redo()));
            binds.push(("s".to_string(), "settings", true));
        }
        Screen::Settings => {
            binds.push(("h".to_string(), "haptics", true));
            binds.push(("l/d".to_string(), "theme", true));
            binds.push(("esc".to_string(), "back", true));
        }
    }
    binds.push(("q".to_string(), "quit", true));

    let mut right_spans = Vec::new();
    for (i, (key, desc, enabled)) in binds.into_iter().enumerate() {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
        }
        right_spans.push(Span::styled(
            format!(" {} ", key),
            if enabled { key_style } else { off_key_style },
        ));
        right_spans.push(Span::styled(format!(" {} ", desc), desc_style));
    }

    frame.render_widget(
        Paragraph::new(Line::from(right_spans))
            .style(Style::default().bg(bar_bg))
            .alignment(Alignment::Right),
        layout[1],
    );
}
