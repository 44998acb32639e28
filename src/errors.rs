//! Error types
//!
//! None of these are fatal to the tutor. Animation faults are absorbed by the
//! controller, lesson failures fall back to built-in content, and a missing
//! settings file falls back to defaults. Only the binary decides what to surface.

use crate::animation::AnimationKind;
use std::path::PathBuf;
use thiserror::Error;

/// Faults raised by an animation variant while rendering or describing a step
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnimationError {
    /// The variant was asked about a step past its last one
    #[error("{kind} animation has no step {step} (max {max_steps})")]
    StepOutOfRange {
        kind: AnimationKind,
        step: usize,
        max_steps: usize,
    },
}

/// Failures while loading week content from disk
#[derive(Debug, Error)]
pub enum LessonError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("week {0} is outside the course (1-{max})", max = crate::lesson::LAST_WEEK)]
    UnknownWeek(u32),
}

/// Failures while loading `ctutor.toml`
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_error_messages() {
        let err = AnimationError::StepOutOfRange {
            kind: AnimationKind::ForLoop,
            step: 19,
            max_steps: 18,
        };
        assert_eq!(err.to_string(), "for-loop animation has no step 19 (max 18)");
    }

    #[test]
    fn test_unknown_week_message() {
        let err = LessonError::UnknownWeek(99);
        assert!(err.to_string().contains("week 99"));
    }
}
