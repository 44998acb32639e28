//! Lesson content pane
//!
//! The week's reading material, one tab per section. Which tab is open, the
//! selected item within it and whether the exercise hint and solution are
//! revealed live in [`LessonView`], owned by the app.

use crate::lesson::WeekData;
use crate::ui::panes::code::highlight_line;
use crate::ui::theme::UiTheme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LessonTab {
    #[default]
    Objectives,
    Examples,
    Exercises,
    Files,
    Links,
}

impl LessonTab {
    pub const ALL: [LessonTab; 5] = [
        LessonTab::Objectives,
        LessonTab::Examples,
        LessonTab::Exercises,
        LessonTab::Files,
        LessonTab::Links,
    ];

    pub fn title(self) -> &'static str {
        match self {
            LessonTab::Objectives => "Objectives",
            LessonTab::Examples => "Examples",
            LessonTab::Exercises => "Exercises",
            LessonTab::Files => "Files",
            LessonTab::Links => "Links",
        }
    }

    fn index(self) -> usize {
        LessonTab::ALL
            .iter()
            .position(|tab| *tab == self)
            .unwrap_or_default()
    }

    pub fn next(self) -> Self {
        LessonTab::ALL[(self.index() + 1) % LessonTab::ALL.len()]
    }

    /// Number of selectable items this tab shows for `lesson`
    pub fn item_count(self, lesson: &WeekData) -> usize {
        match self {
            LessonTab::Objectives => 0,
            LessonTab::Examples => lesson.code_examples.len(),
            LessonTab::Exercises => lesson.exercises.len(),
            LessonTab::Files => lesson.files.len(),
            LessonTab::Links => lesson.links.len(),
        }
    }
}

/// Navigation state of the lesson pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LessonView {
    pub tab: LessonTab,
    /// Selected example, exercise, file or link
    pub item: usize,
    pub show_hint: bool,
    pub show_solution: bool,
}

impl LessonView {
    /// Open `tab` at its first item with everything hidden
    pub fn open(&mut self, tab: LessonTab) {
        *self = LessonView {
            tab,
            ..LessonView::default()
        };
    }

    /// Move the selection by `delta`, wrapping within the tab's items
    pub fn select(&mut self, lesson: &WeekData, delta: isize) {
        let count = self.tab.item_count(lesson);
        if count == 0 {
            return;
        }
        let count = count as isize;
        self.item = (self.item as isize + delta).rem_euclid(count) as usize;
        self.show_hint = false;
        self.show_solution = false;
    }
}

fn heading(text: String, theme: &UiTheme) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD),
    ))
}

fn muted(text: String, theme: &UiTheme) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(theme.comment)))
}

fn position(view: &LessonView, count: usize) -> String {
    format!("[{}/{}]", view.item + 1, count)
}

fn objectives<'a>(lesson: &'a WeekData, theme: &UiTheme) -> Vec<Line<'a>> {
    let mut lines = vec![
        Line::from(Span::styled(
            lesson.description.as_str(),
            Style::default().fg(theme.fg),
        )),
        Line::default(),
    ];
    if lesson.objectives.is_empty() {
        lines.push(muted("No objectives listed for this week.".into(), theme));
    }
    for objective in &lesson.objectives {
        lines.push(Line::from(vec![
            Span::styled(" • ", Style::default().fg(theme.secondary)),
            Span::styled(objective.as_str(), Style::default().fg(theme.fg)),
        ]));
    }
    lines
}

fn examples<'a>(lesson: &'a WeekData, view: &LessonView, theme: &UiTheme) -> Vec<Line<'a>> {
    let Some(example) = lesson.code_examples.get(view.item) else {
        return vec![muted("No code examples for this week yet.".into(), theme)];
    };
    let mut lines = vec![
        heading(
            format!(
                "{} {}",
                position(view, lesson.code_examples.len()),
                example.title
            ),
            theme,
        ),
        muted(example.explanation.clone(), theme),
        Line::default(),
    ];
    lines.extend(example.code.lines().map(|line| highlight_line(line, theme)));
    lines
}

fn exercises<'a>(lesson: &'a WeekData, view: &LessonView, theme: &UiTheme) -> Vec<Line<'a>> {
    let Some(exercise) = lesson.exercises.get(view.item) else {
        return vec![muted("No exercises for this week yet.".into(), theme)];
    };
    let mut lines = vec![
        heading(
            format!("{} {}", position(view, lesson.exercises.len()), exercise.title),
            theme,
        ),
        Line::from(Span::styled(
            exercise.prompt.as_str(),
            Style::default().fg(theme.fg),
        )),
        Line::default(),
    ];

    if view.show_hint {
        lines.push(Line::from(vec![
            Span::styled(
                "Hint: ",
                Style::default()
                    .fg(theme.secondary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(exercise.hint.as_str(), Style::default().fg(theme.fg)),
        ]));
    } else {
        lines.push(muted("[h] show hint".into(), theme));
    }

    if view.show_solution {
        lines.push(Line::from(Span::styled(
            "Solution:",
            Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD),
        )));
        lines.extend(
            exercise
                .solution
                .lines()
                .map(|line| highlight_line(line, theme)),
        );
    } else {
        lines.push(muted("[s] show solution".into(), theme));
    }
    lines
}

/// A list of `(name, detail)` entries with the selected one marked
fn entries<'a>(
    items: impl Iterator<Item = (&'a str, String)>,
    view: &LessonView,
    theme: &UiTheme,
) -> Vec<Line<'a>> {
    items
        .enumerate()
        .flat_map(|(i, (name, detail))| {
            let selected = i == view.item;
            let marker = if selected { "▶ " } else { "  " };
            let name_style = if selected {
                Style::default()
                    .fg(theme.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg)
            };
            [
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(theme.secondary)),
                    Span::styled(name, name_style),
                ]),
                muted(format!("  {}", detail), theme),
            ]
        })
        .collect()
}

fn files<'a>(lesson: &'a WeekData, view: &LessonView, theme: &UiTheme) -> Vec<Line<'a>> {
    if lesson.files.is_empty() {
        return vec![muted("No downloadable files for this week.".into(), theme)];
    }
    let mut lines = entries(
        lesson
            .files
            .iter()
            .map(|file| (file.name.as_str(), file.description.clone())),
        view,
        theme,
    );
    lines.push(Line::default());
    lines.push(muted("[d] save the selected file".into(), theme));
    lines
}

fn links<'a>(lesson: &'a WeekData, view: &LessonView, theme: &UiTheme) -> Vec<Line<'a>> {
    if lesson.links.is_empty() {
        return vec![muted("No links for this week.".into(), theme)];
    }
    entries(
        lesson
            .links
            .iter()
            .map(|link| (link.title.as_str(), format!("{} - {}", link.url, link.description))),
        view,
        theme,
    )
}

/// Render the lesson pane: section tabs above the open section
pub fn render_lesson_pane(
    frame: &mut Frame,
    area: Rect,
    lesson: &WeekData,
    view: &LessonView,
    theme: &UiTheme,
) {
    let block = Block::default()
        .title(" Lesson ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let titles: Vec<Line> = LessonTab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab.title())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(view.tab.index())
        .style(Style::default().fg(theme.comment))
        .highlight_style(
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("│");
    frame.render_widget(tabs, rows[0]);

    let body = match view.tab {
        LessonTab::Objectives => objectives(lesson, theme),
        LessonTab::Examples => examples(lesson, view, theme),
        LessonTab::Exercises => exercises(lesson, view, theme),
        LessonTab::Files => files(lesson, view, theme),
        LessonTab::Links => links(lesson, view, theme),
    };
    frame.render_widget(
        Paragraph::new(body)
            .style(Style::default().bg(theme.bg))
            .wrap(Wrap { trim: false }),
        rows[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Theme;
    use crate::lesson::fallback_week;

    #[test]
    fn test_tabs_cycle() {
        let mut tab = LessonTab::default();
        for _ in 0..LessonTab::ALL.len() {
            tab = tab.next();
        }
        assert_eq!(tab, LessonTab::Objectives);
        assert_eq!(LessonTab::Links.next(), LessonTab::Objectives);
    }

    #[test]
    fn test_selection_wraps_and_hides_reveals() {
        let mut lesson = fallback_week(1, Theme::Classic);
        lesson.exercises.push(lesson.exercises[0].clone());

        let mut view = LessonView::default();
        view.open(LessonTab::Exercises);
        view.show_hint = true;
        view.select(&lesson, -1);

        assert_eq!(view.item, 1);
        assert!(!view.show_hint);
        view.select(&lesson, 1);
        assert_eq!(view.item, 0);
    }

    #[test]
    fn test_objectives_tab_has_no_items() {
        let lesson = fallback_week(3, Theme::Lotr);
        let mut view = LessonView::default();
        view.select(&lesson, 1);
        assert_eq!(view.item, 0);
    }
}
