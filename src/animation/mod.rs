//! Concept animations
//!
//! Every animation implements the same capability set, [`Animation`]. The
//! global step counter lives in the controller; an animation only *maps* a
//! step to a frame, a [`DisplayInfo`] and a log line, so asking twice about the
//! same step always gives the same answer.
//!
//! - [`kind`]: [`AnimationKind`] tags and their `max_steps` budgets
//! - [`config`]: [`AnimationConfig`] options from lesson data
//! - [`phase`]: step → phase arithmetic for loop animations
//! - [`palette`]: [`Theme`] and colour palettes
//! - [`factory`]: [`Variant`], the closed set of implementations, and [`create`]
//! - [`variants`]: the concept renderers themselves

pub mod config;
pub(crate) mod draw;
pub mod factory;
pub mod kind;
pub mod palette;
pub mod phase;
pub mod variants;

pub use config::{AnimationConfig, MAX_CONFIGURED_COUNT};
pub use factory::{create, create_named, Variant};
pub use kind::AnimationKind;
pub use palette::{palette, Palette, Theme};
pub use phase::{LoopPhase, LoopShape};

use crate::errors::AnimationError;
use crate::render::Surface;

/// What the status widgets show for a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayInfo {
    pub current_value: String,
    pub status: String,
    pub iteration: usize,
}

impl DisplayInfo {
    pub fn new(current_value: impl Into<String>, status: impl Into<String>, iteration: usize) -> Self {
        DisplayInfo {
            current_value: current_value.into(),
            status: status.into(),
            iteration,
        }
    }

    /// Shown when nothing is loaded
    pub fn ready() -> Self {
        DisplayInfo::new("-", "Ready", 0)
    }

    /// Shown when a variant fails to describe its step
    pub fn unavailable() -> Self {
        DisplayInfo::new("-", "Unavailable", 0)
    }
}

/// Lines of the code listing that correspond to a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeFocus {
    /// 1-based line numbers into [`Animation::code_listing`]
    pub lines: Vec<usize>,
    /// Outcome of the condition evaluated on these lines, if any
    pub condition: Option<bool>,
}

impl CodeFocus {
    pub fn line(line: usize) -> Self {
        CodeFocus {
            lines: vec![line],
            condition: None,
        }
    }

    pub fn condition(line: usize, holds: bool) -> Self {
        CodeFocus {
            lines: vec![line],
            condition: Some(holds),
        }
    }
}

/// The capability set shared by every concept animation
pub trait Animation {
    fn kind(&self) -> AnimationKind;

    fn max_steps(&self) -> usize;

    /// Draw the frame for `step`. Must not depend on anything but `step` and
    /// the animation's configuration.
    fn render(&self, surface: &mut dyn Surface, step: usize) -> Result<(), AnimationError>;

    fn info(&self, step: usize) -> Result<DisplayInfo, AnimationError>;

    /// Narration of the transition into `step`; empty when nothing happened
    fn log_message(&self, step: usize) -> Result<String, AnimationError>;

    /// The C snippet this animation walks through
    fn code_listing(&self) -> Vec<String> {
        Vec::new()
    }

    fn code_focus(&self, _step: usize) -> Option<CodeFocus> {
        None
    }

    /// Bookkeeping hook called after the controller advances
    fn on_step(&mut self, _step: usize) {}

    /// Forget any bookkeeping from `on_step`
    fn reset(&mut self) {}
}

/// Reject steps past the animation's last one
pub(crate) fn ensure_step(
    kind: AnimationKind,
    step: usize,
    max_steps: usize,
) -> Result<(), AnimationError> {
    if step > max_steps {
        Err(AnimationError::StepOutOfRange {
            kind,
            step,
            max_steps,
        })
    } else {
        Ok(())
    }
}
