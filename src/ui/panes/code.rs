//! Code pane with C syntax highlighting
//!
//! Shows the listing an animation walks through. The lines the current step
//! executes are marked with an arrow; a line whose condition was just
//! evaluated is tinted by the outcome.

use crate::animation::CodeFocus;
use crate::ui::theme::UiTheme;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Split one line of C into styled spans
pub fn highlight_line<'a>(line: &'a str, theme: &UiTheme) -> Line<'a> {
    if line.trim_start().starts_with('#') {
        return Line::from(Span::styled(line, Style::default().fg(theme.preprocessor)));
    }

    let mut spans = Vec::new();
    let mut word_start: Option<usize> = None;
    let mut chars = line.char_indices().peekable();

    let flush = |spans: &mut Vec<Span<'a>>, start: &mut Option<usize>, end: usize, call: bool| {
        if let Some(begin) = start.take() {
            let word = &line[begin..end];
            spans.push(Span::styled(word, word_style(word, call, theme)));
        }
    };

    while let Some((i, c)) = chars.next() {
        if c.is_alphanumeric() || c == '_' {
            word_start.get_or_insert(i);
            continue;
        }
        flush(&mut spans, &mut word_start, i, c == '(');

        if c == '/' && matches!(chars.peek(), Some((_, '/'))) {
            spans.push(Span::styled(&line[i..], Style::default().fg(theme.comment)));
            return Line::from(spans);
        }

        if c == '"' || c == '\'' {
            let mut end = line.len();
            let mut escaped = false;
            for (j, d) in chars.by_ref() {
                if escaped {
                    escaped = false;
                } else if d == '\\' {
                    escaped = true;
                } else if d == c {
                    end = j + d.len_utf8();
                    break;
                }
            }
            spans.push(Span::styled(&line[i..end], Style::default().fg(theme.string)));
            continue;
        }

        let style = match c {
            '{' | '}' | '(' | ')' | '[' | ']' => Style::default().fg(theme.primary),
            _ => Style::default().fg(theme.fg),
        };
        spans.push(Span::styled(&line[i..i + c.len_utf8()], style));
    }
    flush(&mut spans, &mut word_start, line.len(), false);

    Line::from(spans)
}

fn word_style(word: &str, is_call: bool, theme: &UiTheme) -> Style {
    match word {
        "int" | "char" | "void" | "bool" | "_Bool" | "float" | "double" | "long" | "short"
        | "unsigned" | "signed" | "const" => Style::default().fg(theme.type_name),
        "struct" | "return" | "if" | "else" | "while" | "for" | "do" | "switch" | "case"
        | "default" | "break" | "continue" | "sizeof" => Style::default()
            .fg(theme.keyword)
            .add_modifier(Modifier::BOLD),
        "NULL" | "true" | "false" => Style::default().fg(theme.number),
        _ if word.starts_with(|c: char| c.is_ascii_digit()) => Style::default().fg(theme.number),
        _ if is_call => Style::default().fg(theme.function),
        _ => Style::default().fg(theme.fg),
    }
}

/// Background for a focused line
fn focus_background(focus: &CodeFocus, theme: &UiTheme) -> Color {
    match focus.condition {
        Some(true) => theme.success,
        Some(false) => theme.error,
        None => theme.current_line_bg,
    }
}

/// Render the code pane
pub fn render_code_pane(
    frame: &mut Frame,
    area: Rect,
    listing: &[String],
    focus: Option<&CodeFocus>,
    theme: &UiTheme,
) {
    let block = Block::default()
        .title(" Code ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_normal));

    if listing.is_empty() {
        let paragraph = Paragraph::new("(no code for this animation)")
            .block(block)
            .style(Style::default().fg(theme.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    // Keep the first focused line on screen
    let first_focus = focus
        .and_then(|f| f.lines.iter().min().copied())
        .unwrap_or(1);
    let offset = first_focus
        .saturating_sub(visible_height)
        .min(listing.len().saturating_sub(visible_height));

    let lines: Vec<Line> = listing
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_height)
        .map(|(idx, text)| {
            let line_num = idx + 1;
            let focused = focus.filter(|f| f.lines.contains(&line_num));

            let marker = if focused.is_some() { "▶" } else { " " };
            let num_style = if focused.is_some() {
                Style::default()
                    .fg(theme.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.comment)
            };

            let mut content = highlight_line(text, theme);
            if let Some(focus) = focused {
                let bg = Style::default().bg(focus_background(focus, theme));
                for span in &mut content.spans {
                    span.style = span.style.patch(bg);
                }
            }

            let mut spans = vec![Span::styled(format!("{}{:3} ", marker, line_num), num_style)];
            spans.extend(content.spans);
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
