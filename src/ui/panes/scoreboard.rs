//! Scoreboard screen rendering
//!
//! Top to bottom: the undo/redo/settings bar, the two team cards, then one
//! row per scoring button and the CLEAR SCORES button.

use crate::game::{ScoreButton, Scoreboard, Team};
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub fn render_scoreboard(frame: &mut Frame, area: Rect, scoreboard: &Scoreboard, theme: &Theme) {
    let buttons = scoreboard.buttons();

    let mut constraints = vec![Constraint::Length(3), Constraint::Length(7)];
    constraints.extend(buttons.iter().map(|_| Constraint::Length(3)));
    constraints.push(Constraint::Length(3));
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    render_top_bar(frame, rows[0], scoreboard, theme);
    render_team_cards(frame, rows[1], scoreboard, theme);

    for (i, button) in buttons.iter().enumerate() {
        let color = match button {
            ScoreButton::Bunco => theme.bunco_button,
            _ => theme.score_button,
        };
        render_button(frame, rows[2 + i], button.label(), button.key(), color, theme);
    }
    render_button(
        frame,
        rows[2 + buttons.len()],
        "CLEAR SCORES",
        'c',
        theme.clear_button,
        theme,
    );
}

fn render_top_bar(frame: &mut Frame, area: Rect, scoreboard: &Scoreboard, theme: &Theme) {
    let history = scoreboard.history();
    let enabled = |on: bool| {
        if on {
            Style::default().fg(theme.tint).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.disabled)
        }
    };

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border_normal));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let left = Line::from(vec![
        Span::styled(" ↶ undo ", enabled(history.can_undo())),
        Span::raw("  "),
        Span::styled(" ↷ redo ", enabled(history.can_redo())),
    ]);
    frame.render_widget(Paragraph::new(left).alignment(Alignment::Left), halves[0]);

    let right = Line::from(Span::styled(" ⚙ settings ", enabled(true)));
    frame.render_widget(Paragraph::new(right).alignment(Alignment::Right), halves[1]);
}

fn render_team_cards(frame: &mut Frame, area: Rect, scoreboard: &Scoreboard, theme: &Theme) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let state = scoreboard.current();
    for (team, card) in [Team::Team1, Team::Team2].into_iter().zip(cards.iter()) {
        let selected = scoreboard.selected() == team;
        let border_style = if selected {
            Style::default()
                .fg(theme.selected_border)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.border_normal)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if selected {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(border_style);

        let text = vec![
            Line::from(Span::styled(
                team.label(),
                Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                state.score(team).to_string(),
                Style::default().fg(theme.tint).add_modifier(Modifier::BOLD),
            )),
        ];

        let paragraph = Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, *card);
    }
}

fn render_button(frame: &mut Frame, area: Rect, label: &str, key: char, bg: Color, theme: &Theme) {
    let area = Rect {
        x: area.x + 2,
        width: area.width.saturating_sub(4),
        ..area
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(bg))
        .title(Span::styled(
            format!(" {} ", key),
            Style::default().fg(theme.muted),
        ));

    let paragraph = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", label),
        Style::default()
            .bg(bg)
            .fg(theme.button_fg)
            .add_modifier(Modifier::BOLD),
    )))
    .block(block)
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
