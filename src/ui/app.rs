//! Main TUI application state and logic

use crate::animation::Theme;
use crate::controller::{AnimationController, StatusSink};
use crate::lesson::{LessonLibrary, WeekData, FIRST_WEEK, LAST_WEEK};
use crate::settings::Settings;
use crate::ui::panes::{
    render_canvas_pane, render_code_pane, render_header, render_lesson_pane, render_log_pane,
    render_status_bar, LessonTab, LessonView, StatusRenderData,
};
use crate::ui::theme::ui_theme;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::{info, warn};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// How much one `+`/`-` press changes the step interval
const SPEED_STEP: Duration = Duration::from_millis(100);

/// The main application state
pub struct App {
    pub controller: AnimationController,
    library: LessonLibrary,
    lesson: WeekData,
    week: u32,
    theme: Theme,
    /// Index into `lesson.animations`
    selected: usize,
    frame_interval: Duration,
    autoplay: bool,
    /// Whether the lesson pane covers the animation canvas
    show_lesson: bool,
    lesson_view: LessonView,
    /// Where exports and saved lesson files are written
    export_dir: PathBuf,
    pub status_message: String,
    pub should_quit: bool,
}

impl App {
    /// Build the app and open the configured week
    pub fn new(settings: &Settings) -> Self {
        let theme = settings.lesson.theme;
        let mut controller = AnimationController::default().with_theme(theme);
        controller.set_speed(settings.tick_interval());

        let mut app = App {
            controller,
            library: LessonLibrary::new(settings.lesson.root.clone()),
            lesson: WeekData::default(),
            week: settings.week(),
            theme,
            selected: 0,
            frame_interval: settings.frame_interval(),
            autoplay: settings.playback.autoplay,
            show_lesson: false,
            lesson_view: LessonView::default(),
            export_dir: PathBuf::from("."),
            status_message: String::from("Ready!"),
            should_quit: false,
        };
        app.open_week(app.week);
        app
    }

    pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = dir.into();
        self
    }

    pub fn week(&self) -> u32 {
        self.week
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn lesson(&self) -> &WeekData {
        &self.lesson
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn lesson_view(&self) -> &LessonView {
        &self.lesson_view
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.controller.poll(Instant::now());

            // Waiting at most one frame keeps redraws at the frame rate
            if event::poll(self.frame_interval)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let theme = ui_theme(self.theme);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Min(0),
                Constraint::Length(2),
            ])
            .split(frame.area());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[1]);

        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[1]);

        render_header(frame, rows[0], &self.lesson, self.selected, theme);

        if self.show_lesson {
            render_lesson_pane(frame, columns[0], &self.lesson, &self.lesson_view, theme);
        } else {
            let title = self
                .lesson
                .animations
                .get(self.selected)
                .map(|anim| anim.title.as_str())
                .unwrap_or("Animation");
            render_canvas_pane(frame, columns[0], title, &self.controller.draw_list(), theme);
        }

        let focus = self.controller.code_focus();
        render_code_pane(
            frame,
            right_rows[0],
            &self.controller.code_listing(),
            focus.as_ref(),
            theme,
        );

        render_log_pane(frame, right_rows[1], self.controller.status().log(), theme);

        let state = self.controller.state();
        let board = self.controller.status();
        render_status_bar(
            frame,
            rows[2],
            &StatusRenderData {
                step: board.step,
                max_steps: board.max_steps,
                info: &board.info,
                playback: state.playback,
                tick_interval: state.tick_interval,
                message: &self.status_message,
            },
            theme,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.show_lesson && self.handle_lesson_key(key) {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.controller.pause();
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                self.controller.toggle();
                self.status_message = if self.controller.is_playing() {
                    "Playing...".to_string()
                } else {
                    "Paused".to_string()
                };
            }
            KeyCode::Right => {
                self.controller.pause();
                self.status_message = if self.controller.step() {
                    "Stepped forward".to_string()
                } else {
                    "Already at the last step".to_string()
                };
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.controller.reset();
                self.status_message = "Animation reset".to_string();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let current = self.controller.state().tick_interval;
                let interval = self.controller.set_speed(current.saturating_sub(SPEED_STEP));
                self.status_message = format!("Speed: {}ms", interval.as_millis());
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                let current = self.controller.state().tick_interval;
                let interval = self.controller.set_speed(current + SPEED_STEP);
                self.status_message = format!("Speed: {}ms", interval.as_millis());
            }
            KeyCode::Char('n') | KeyCode::PageDown => {
                if self.week < LAST_WEEK {
                    self.open_week(self.week + 1);
                }
            }
            KeyCode::Char('p') | KeyCode::PageUp => {
                if self.week > FIRST_WEEK {
                    self.open_week(self.week - 1);
                }
            }
            KeyCode::Tab => {
                let count = self.lesson.animations.len().max(1);
                self.select_animation((self.selected + 1) % count);
            }
            KeyCode::BackTab => {
                let count = self.lesson.animations.len().max(1);
                self.select_animation((self.selected + count - 1) % count);
            }
            KeyCode::Char('l') | KeyCode::Char('L') => {
                self.show_lesson = !self.show_lesson;
                self.status_message = if self.show_lesson {
                    format!("Lesson: {}", self.lesson_view.tab.title())
                } else {
                    "Animation".to_string()
                };
            }
            KeyCode::Char('t') | KeyCode::Char('T') => self.toggle_theme(),
            KeyCode::Char('e') | KeyCode::Char('E') => {
                self.status_message = match self.export() {
                    Ok(Some(path)) => format!("Exported to {}", path.display()),
                    Ok(None) => "Nothing to export".to_string(),
                    Err(err) => {
                        warn!("Export failed: {}", err);
                        format!("Export failed: {}", err)
                    }
                };
            }
            _ => {}
        }
    }

    /// Keys that only mean something while the lesson pane is open.
    /// Returns whether the key was consumed.
    fn handle_lesson_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                self.lesson_view.open(LessonTab::ALL[index]);
                self.status_message = format!("Lesson: {}", self.lesson_view.tab.title());
            }
            KeyCode::Char(']') => {
                self.lesson_view.open(self.lesson_view.tab.next());
                self.status_message = format!("Lesson: {}", self.lesson_view.tab.title());
            }
            KeyCode::Down | KeyCode::Char('j') => self.lesson_view.select(&self.lesson, 1),
            KeyCode::Up | KeyCode::Char('k') => self.lesson_view.select(&self.lesson, -1),
            KeyCode::Char('h') if self.lesson_view.tab == LessonTab::Exercises => {
                self.lesson_view.show_hint = !self.lesson_view.show_hint;
            }
            KeyCode::Char('s') if self.lesson_view.tab == LessonTab::Exercises => {
                self.lesson_view.show_solution = !self.lesson_view.show_solution;
            }
            KeyCode::Char('d') if self.lesson_view.tab == LessonTab::Files => {
                self.status_message = match self.save_file() {
                    Ok(Some(path)) => format!("Saved {}", path.display()),
                    Ok(None) => "No file to save".to_string(),
                    Err(err) => {
                        warn!("Saving lesson file failed: {}", err);
                        format!("Save failed: {}", err)
                    }
                };
            }
            _ => return false,
        }
        true
    }

    /// Load `week` and its first animation
    pub fn open_week(&mut self, week: u32) {
        self.week = week.clamp(FIRST_WEEK, LAST_WEEK);
        self.lesson = self.library.load(self.week, self.theme);
        self.lesson_view.open(self.lesson_view.tab);
        self.status_message = self.lesson.title.clone();
        info!("Opened week {} ({})", self.week, self.theme);
        self.select_animation(0);
    }

    /// Make the `index`-th animation of the week the active one
    pub fn select_animation(&mut self, index: usize) {
        let Some(descriptor) = self.lesson.animations.get(index) else {
            return;
        };
        self.selected = index;
        self.controller
            .setup(&descriptor.kind, descriptor.config.clone());
        if self.autoplay {
            self.controller.start();
        }
    }

    /// Switch between the classic and lotr themes.
    ///
    /// The step is kept when the new week content offers the same animation.
    pub fn toggle_theme(&mut self) {
        let previous = self.lesson.animations.get(self.selected).cloned();
        self.theme = self.theme.toggled();
        self.lesson = self.library.load(self.week, self.theme);
        self.lesson_view.open(self.lesson_view.tab);
        self.controller.set_theme(self.theme);

        let same = match (&previous, self.lesson.animations.get(self.selected)) {
            (Some(old), Some(new)) => old.kind == new.kind && old.config == new.config,
            _ => false,
        };
        if !same {
            self.select_animation(0);
        }
        self.status_message = format!("Theme: {}", self.theme);
    }

    /// Write the active animation's snapshot as pretty JSON.
    ///
    /// Returns the written path, or `None` when nothing is loaded.
    pub fn export(&mut self) -> io::Result<Option<PathBuf>> {
        let Some(snapshot) = self.controller.export() else {
            return Ok(None);
        };
        let json = serde_json::to_string_pretty(&snapshot)?;
        let path = self.write_output(&export_file_name(self.week), &json)?;
        info!("Exported animation data to {}", path.display());
        Ok(Some(path))
    }

    /// Write the lesson file selected in the files tab next to the exports.
    ///
    /// Only the final component of the file's name is used. Returns the
    /// written path, or `None` when the week has no such file.
    pub fn save_file(&mut self) -> io::Result<Option<PathBuf>> {
        let Some(file) = self.lesson.files.get(self.lesson_view.item) else {
            return Ok(None);
        };
        let name = Path::new(&file.name).file_name().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("'{}' is not a file name", file.name),
            )
        })?;
        let path = self.write_output(name, &file.content)?;
        let message = format!("{} saved", file.name);

        info!("Saved lesson file to {}", path.display());
        self.controller.status_mut().push_log(&message);
        Ok(Some(path))
    }

    fn write_output(&self, name: impl AsRef<Path>, contents: &str) -> io::Result<PathBuf> {
        let path = self.export_dir.join(name);
        fs::write(&path, contents)?;
        Ok(path)
    }
}

fn export_file_name(week: u32) -> String {
    format!("animation-data-week{:02}.json", week)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::AnimationKind;
    use crate::controller::{AnimationExport, PlaybackState};
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn test_settings() -> Settings {
        let mut settings = Settings::default();
        settings.lesson.root = PathBuf::from("no-such-lessons-dir");
        settings
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_opens_fallback_week() {
        let app = App::new(&test_settings());
        assert_eq!(app.week(), 1);
        assert_eq!(app.lesson().title, "Week 1: C Programming");
        assert_eq!(app.controller.state().kind, Some(AnimationKind::Simple));
    }

    #[test]
    fn test_ui_renders_without_panic() {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        let mut app = App::new(&test_settings());
        press(&mut app, KeyCode::Right);

        terminal.draw(|f| app.render(f)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("Activity Log"));
        assert!(text.contains("Step 1/3"));
    }

    #[test]
    fn test_tiny_terminal_renders() {
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        let app = App::new(&test_settings());
        terminal.draw(|f| app.render(f)).unwrap();
    }

    #[test]
    fn test_space_toggles_playback() {
        let mut app = App::new(&test_settings());
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.controller.state().playback, PlaybackState::Playing);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.controller.state().playback, PlaybackState::Paused);
    }

    #[test]
    fn test_week_navigation_stays_in_course() {
        let mut app = App::new(&test_settings());
        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.week(), 1);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.week(), 2);
        assert_eq!(app.controller.state().kind, Some(AnimationKind::Variables));
    }

    #[test]
    fn test_tab_cycles_animations() {
        let mut app = App::new(&test_settings());
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.selected(), 1);
        assert_eq!(app.controller.state().kind, Some(AnimationKind::Compilation));

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.selected(), 0);
    }

    #[test]
    fn test_theme_toggle_keeps_step() {
        let mut app = App::new(&test_settings());
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('t'));

        assert_eq!(app.theme(), Theme::Lotr);
        assert_eq!(app.controller.theme(), Theme::Lotr);
        assert_eq!(app.controller.state().step, 1);
        assert!(app.lesson().title.contains("Middle-earth"));
    }

    #[test]
    fn test_speed_keys_clamp() {
        let mut app = App::new(&test_settings());
        for _ in 0..40 {
            press(&mut app, KeyCode::Char('+'));
        }
        assert_eq!(app.controller.state().tick_interval, Duration::from_millis(300));
    }

    #[test]
    fn test_export_writes_pretty_json() {
        let dir = std::env::temp_dir().join(format!("ctutor-export-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let mut app = App::new(&test_settings()).with_export_dir(&dir);
        press(&mut app, KeyCode::Right);

        let path = app.export().unwrap().unwrap();
        assert_eq!(path, dir.join("animation-data-week01.json"));

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n  \"type\": \"simple\""));
        let snapshot: AnimationExport = serde_json::from_str(&text).unwrap();
        assert_eq!(snapshot.current_step, 1);
        assert_eq!(snapshot.max_steps, 3);

        fs::remove_dir_all(&dir).ok();
    }

    fn lesson_screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        screen_text(&terminal)
    }

    #[test]
    fn test_lesson_pane_replaces_canvas() {
        let mut app = App::new(&test_settings());
        press(&mut app, KeyCode::Char('l'));

        let text = lesson_screen(&app);
        assert!(text.contains("Lesson"));
        assert!(text.contains("1 Objectives"));
        assert!(text.contains("Learn the core concepts"));
        assert!(text.contains("Practice hands-on"));

        press(&mut app, KeyCode::Char('l'));
        assert!(!lesson_screen(&app).contains("Learn the core concepts"));
    }

    #[test]
    fn test_lesson_examples_tab() {
        let mut app = App::new(&test_settings());
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Char('2'));

        assert_eq!(app.lesson_view().tab, LessonTab::Examples);
        let text = lesson_screen(&app);
        assert!(text.contains("[1/1] Hello World"));
        assert!(text.contains("Your first C program"));
        assert!(text.contains("#include <stdio.h>"));
    }

    #[test]
    fn test_lesson_exercise_reveals() {
        let mut app = App::new(&test_settings());
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Char('3'));

        let text = lesson_screen(&app);
        assert!(text.contains("Practice Exercise"));
        assert!(text.contains("[h] show hint"));
        assert!(!text.contains("Read every line"));

        press(&mut app, KeyCode::Char('h'));
        press(&mut app, KeyCode::Char('s'));
        let text = lesson_screen(&app);
        assert!(text.contains("Hint: Read every line of the code carefully"));
        assert!(text.contains("Solution coming soon"));

        // the animation keeps its own keys
        press(&mut app, KeyCode::Right);
        assert_eq!(app.controller.state().step, 1);
    }

    #[test]
    fn test_lesson_files_and_links_tabs() {
        let mut app = App::new(&test_settings());
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Char('4'));

        let text = lesson_screen(&app);
        assert!(text.contains("week1_example.c"));
        assert!(text.contains("[d] save the selected file"));

        press(&mut app, KeyCode::Char('5'));
        let text = lesson_screen(&app);
        assert!(text.contains("C Reference"));
        assert!(text.contains("https://en.cppreference.com/w/c"));
    }

    #[test]
    fn test_save_lesson_file() {
        let dir = std::env::temp_dir().join(format!("ctutor-save-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let mut app = App::new(&test_settings()).with_export_dir(&dir);
        app.lesson.files[0].name = "../nested/week1_example.c".to_string();

        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Char('d'));

        let path = dir.join("week1_example.c");
        assert_eq!(app.status_message, format!("Saved {}", path.display()));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            app.lesson().code_examples[0].code
        );
        assert_eq!(
            app.controller.status().log().next(),
            Some("../nested/week1_example.c saved")
        );

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_week_change_resets_lesson_selection() {
        let mut app = App::new(&test_settings());
        app.lesson.exercises.push(app.lesson.exercises[0].clone());
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.lesson_view().item, 1);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.lesson_view().tab, LessonTab::Exercises);
        assert_eq!(app.lesson_view().item, 0);
        assert!(!app.lesson_view().show_hint);
    }

    #[test]
    fn test_quit_key() {
        let mut app = App::new(&test_settings());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
