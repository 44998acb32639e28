//! Activity log pane

use crate::ui::theme::UiTheme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the log, newest entry on top and emphasised
pub fn render_log_pane<'a>(
    frame: &mut Frame,
    area: Rect,
    entries: impl Iterator<Item = &'a str>,
    theme: &UiTheme,
) {
    let block = Block::default()
        .title(" Activity Log ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_normal));

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let items: Vec<ListItem> = entries
        .take(visible_height)
        .enumerate()
        .map(|(i, entry)| {
            let style = if i == 0 {
                Style::default().fg(theme.fg).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.comment)
            };
            ListItem::new(entry.to_string()).style(style)
        })
        .collect();

    if items.is_empty() {
        let paragraph = Paragraph::new("(nothing yet)")
            .block(block)
            .style(Style::default().fg(theme.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let list = List::new(items).block(block.padding(Padding::new(1, 0, 0, 0)));
    frame.render_widget(list, area);
}
