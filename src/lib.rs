//! # Introduction
//!
//! ctutor is a terminal tutor for introductory C. Each week of the course
//! comes with lesson content and a set of step-by-step animations that show
//! what a piece of C does as it runs, drawn in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Architecture
//!
//! ```text
//! Lesson file → WeekData → AnimationConfig → Variant ← Controller ← ticks / keys
//!                                               ↓
//!                                   DrawList → canvas pane
//! ```
//!
//! 1. [`lesson`]: loads `<root>/<theme>/weekNN.json`, falling back to built-in
//!    content.
//! 2. [`animation`]: the concept animations. Each maps a step number to a
//!    frame, a [`animation::DisplayInfo`] and a log line.
//! 3. [`controller`]: owns the step counter, the playback state machine and
//!    the tick source; isolates animation faults.
//! 4. [`render`]: the [`render::Surface`] drawing abstraction and the
//!    [`render::DrawList`] recorder.
//! 5. [`settings`] and [`cli`]: `ctutor.toml`, `CTUTOR_*` variables and flags.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.

pub mod animation;
pub mod cli;
pub mod controller;
pub mod errors;
pub mod lesson;
pub mod render;
pub mod settings;
pub mod ui;
