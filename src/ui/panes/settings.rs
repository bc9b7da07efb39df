// Settings screen rendering

use crate::prefs::Preferences;
use crate::ui::theme::{Scheme, Theme};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
    Frame,
};

const HOW_TO_PLAY: [&str; 5] = [
    "1. Press Tab (or ↑/↓) to select which team to add points to",
    "2. Press the scoring keys to add points to the selected team",
    "3. Bunco gives +21 points!",
    "4. Use undo/redo (←/→) to correct mistakes",
    "5. Press c to CLEAR SCORES for both teams",
];

pub fn render_settings(
    frame: &mut Frame,
    area: Rect,
    prefs: &Preferences,
    feedback_supported: bool,
    theme: &Theme,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(HOW_TO_PLAY.len() as u16 * 2 + 1),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .split(area);

    // Header
    let header = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border_normal));
    let header_cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14),
            Constraint::Min(0),
            Constraint::Length(14),
        ])
        .split(header.inner(rows[0]));
    frame.render_widget(header, rows[0]);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            " ‹ back (esc)",
            Style::default().fg(theme.tint),
        ))),
        header_cells[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Settings",
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        header_cells[1],
    );

    // How to Play
    let mut lines = Vec::new();
    for (i, step) in HOW_TO_PLAY.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(*step, Style::default().fg(theme.fg))));
    }
    frame.render_widget(
        Paragraph::new(lines)
            .block(section("How to Play", theme))
            .wrap(Wrap { trim: true }),
        rows[1],
    );

    // Haptics
    let (switch, switch_style) = if prefs.haptics_enabled() {
        (" ● ON ", Style::default().bg(theme.success).fg(theme.button_fg))
    } else {
        (" OFF ○ ", Style::default().bg(theme.disabled).fg(theme.button_fg))
    };
    let mut haptics_line = vec![
        Span::styled("Haptic Feedback  ", Style::default().fg(theme.fg)),
        Span::styled(switch, switch_style.add_modifier(Modifier::BOLD)),
        Span::styled("  (h)", Style::default().fg(theme.muted)),
    ];
    if !feedback_supported {
        haptics_line.push(Span::styled(
            "  unavailable on this terminal",
            Style::default().fg(theme.muted),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(haptics_line)).block(section("Haptics", theme)),
        rows[2],
    );

    // Appearance
    let forced = prefs.forced_theme();
    let option = |scheme: Scheme, icon: &'static str, label: &'static str, key: &'static str| {
        let chosen = forced == Some(scheme);
        let icon_style = if chosen {
            Style::default().fg(theme.highlight)
        } else {
            Style::default().fg(theme.tint)
        };
        let label_style = if chosen {
            Style::default()
                .fg(theme.fg)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.fg)
        };
        vec![
            Span::styled(icon, icon_style),
            Span::styled(format!(" {} ", label), label_style),
            Span::styled(format!("({})", key), Style::default().fg(theme.muted)),
        ]
    };
    let mut appearance = option(Scheme::Light, "☀", "Light", "l");
    appearance.push(Span::raw("      "));
    appearance.extend(option(Scheme::Dark, "☾", "Dark", "d"));
    frame.render_widget(
        Paragraph::new(Line::from(appearance))
            .alignment(Alignment::Center)
            .block(section("Appearance", theme)),
        rows[3],
    );
}

fn section<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_normal))
        .style(Style::default().bg(theme.section_bg))
        .padding(Padding::horizontal(1))
}
