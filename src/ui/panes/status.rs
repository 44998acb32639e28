//! Status bar with step progress, step details and key bindings

use crate::animation::DisplayInfo;
use crate::controller::PlaybackState;
use crate::ui::theme::UiTheme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::Duration;

/// Everything the status bar shows
pub struct StatusRenderData<'a> {
    pub step: usize,
    pub max_steps: usize,
    pub info: &'a DisplayInfo,
    pub playback: PlaybackState,
    pub tick_interval: Duration,
    /// Last message from the host, such as an export confirmation
    pub message: &'a str,
}

fn playback_badge(playback: PlaybackState, theme: &UiTheme) -> Option<(&'static str, Color)> {
    match playback {
        PlaybackState::Idle => None,
        PlaybackState::Ready => Some((" READY ", theme.success)),
        PlaybackState::Playing => Some((" ▶ PLAYING ", theme.secondary)),
        PlaybackState::Paused => Some((" ⏸ PAUSED ", theme.primary)),
        PlaybackState::Completed => Some((" DONE ", theme.error)),
    }
}

/// Render the two-line status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData, theme: &UiTheme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let bar = Style::default().bg(theme.current_line_bg);
    let label = Style::default().bg(theme.current_line_bg).fg(theme.comment);
    let value = Style::default().bg(theme.current_line_bg).fg(theme.fg);

    // Top row: where the animation is
    let mut details = vec![
        Span::styled(
            format!(" Step {}/{} ", data.step, data.max_steps),
            Style::default()
                .bg(theme.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  value ", label),
        Span::styled(data.info.current_value.clone(), value),
        Span::styled("  status ", label),
        Span::styled(data.info.status.clone(), value),
    ];
    if data.info.iteration > 0 {
        details.push(Span::styled("  iteration ", label));
        details.push(Span::styled(data.info.iteration.to_string(), value));
    }
    details.push(Span::styled("  speed ", label));
    details.push(Span::styled(
        format!("{}ms", data.tick_interval.as_millis()),
        value,
    ));
    frame.render_widget(Paragraph::new(Line::from(details)).style(bar), rows[0]);

    // Bottom row: host message on the left, keys on the right
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);

    frame.render_widget(
        Paragraph::new(Span::styled(format!(" {}", data.message), value)).style(bar),
        halves[0],
    );

    let key = Style::default().bg(theme.comment).fg(Color::Black);
    let sep = Span::styled("│", label);
    let mut keys = Vec::new();
    for (k, desc) in [
        ("⎵", "play"),
        ("→", "step"),
        ("r", "reset"),
        ("+/-", "speed"),
        ("n/p", "week"),
        ("tab", "anim"),
        ("l", "lesson"),
        ("t", "theme"),
        ("e", "export"),
        ("q", "quit"),
    ] {
        keys.push(Span::styled(format!(" {} ", k), key));
        keys.push(Span::styled(format!(" {} ", desc), value));
        keys.push(sep.clone());
    }
    if let Some((text, color)) = playback_badge(data.playback, theme) {
        keys.push(Span::styled(
            text,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    } else {
        keys.pop();
    }

    frame.render_widget(
        Paragraph::new(Line::from(keys))
            .style(bar)
            .alignment(Alignment::Right),
        halves[1],
    );
}
