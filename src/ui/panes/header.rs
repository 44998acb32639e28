//! Lesson header and animation tabs

use crate::lesson::WeekData;
use crate::ui::theme::UiTheme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

/// Render the week title, its metadata and one tab per animation
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    lesson: &WeekData,
    selected: usize,
    theme: &UiTheme,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(1)])
        .split(area);

    let title = Line::from(vec![
        Span::styled(
            lesson.title.clone(),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   {} · {}", lesson.duration, lesson.difficulty),
            Style::default().fg(theme.comment),
        ),
    ]);
    let summary = Line::from(Span::styled(
        lesson.description.clone(),
        Style::default().fg(theme.fg),
    ));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_normal))
        .title(format!(" Week {} ", lesson.week));
    frame.render_widget(
        Paragraph::new(vec![title, summary])
            .block(block)
            .wrap(Wrap { trim: true }),
        rows[0],
    );

    let titles: Vec<Line> = lesson
        .animations
        .iter()
        .map(|anim| Line::from(anim.title.clone()))
        .collect();
    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(theme.comment))
        .highlight_style(
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("│");
    frame.render_widget(tabs, rows[1]);
}
