//! TUI pane rendering modules
//!
//! Each pane is a stateless `render_*` function over data borrowed from the
//! app.
//!
//! - [`header`]: week title, metadata and animation tabs
//! - [`canvas`]: the animation frame, replayed onto a ratatui canvas
//! - [`code`]: the animation's C listing with the executing lines marked
//! - [`lesson`]: objectives, examples, exercises, files and links of the week
//! - [`log`]: activity log, newest first
//! - [`status`]: step details and key bindings

pub mod canvas;
pub mod code;
pub mod header;
pub mod lesson;
pub mod log;
pub mod status;

pub use canvas::{render_canvas_pane, CanvasPainter};
pub use code::{highlight_line, render_code_pane};
pub use header::render_header;
pub use lesson::{render_lesson_pane, LessonTab, LessonView};
pub use log::render_log_pane;
pub use status::{render_status_bar, StatusRenderData};
