//! Tutor configuration
//!
//! Settings come from `ctutor.toml` when present, then environment variables,
//! then command-line flags, each layer overriding the one before it.

use crate::animation::Theme;
use crate::cli::RunOptions;
use crate::controller::{clamp_interval, DEFAULT_TICK_INTERVAL};
use crate::errors::SettingsError;
use crate::lesson::{DEFAULT_LESSON_ROOT, FIRST_WEEK, LAST_WEEK};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "ctutor.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub lesson: LessonSettings,
    pub playback: PlaybackSettings,
    pub logging: LoggingSettings,
}

/// Which content to open
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LessonSettings {
    /// Week shown at startup (1-14)
    pub week: u32,
    pub theme: Theme,
    /// Directory holding `<theme>/weekNN.json` files
    pub root: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Step interval in milliseconds, clamped to 300-3000
    pub speed_ms: u64,
    /// Redraws per second
    pub frame_rate: u32,
    /// Start playing as soon as an animation is loaded
    pub autoplay: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `env_logger` filter used when `RUST_LOG` is unset
    pub level: String,
    /// Log destination; the system temp dir when unset
    pub file: Option<PathBuf>,
}

impl Default for LessonSettings {
    fn default() -> Self {
        Self {
            week: FIRST_WEEK,
            theme: Theme::Classic,
            root: PathBuf::from(DEFAULT_LESSON_ROOT),
        }
    }
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            speed_ms: DEFAULT_TICK_INTERVAL.as_millis() as u64,
            frame_rate: 30,
            autoplay: false,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Settings {
    /// Load settings from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path`, or defaults when it doesn't exist.
    ///
    /// A file that exists but can't be read or parsed is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        match Self::load_from_file(path) {
            Err(SettingsError::Io { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Apply `CTUTOR_*` environment overrides
    pub fn merge_with_env(&mut self) {
        self.merge_with_vars(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any variable lookup. Unparseable values are ignored.
    pub fn merge_with_vars<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("CTUTOR_WEEK") {
            if let Ok(week) = val.trim().parse::<u32>() {
                self.lesson.week = week;
            }
        }
        if let Some(val) = lookup("CTUTOR_THEME") {
            if let Some(theme) = Theme::from_name(val.trim()) {
                self.lesson.theme = theme;
            }
        }
        if let Some(val) = lookup("CTUTOR_LESSONS") {
            self.lesson.root = PathBuf::from(val);
        }
        if let Some(val) = lookup("CTUTOR_SPEED_MS") {
            if let Ok(ms) = val.trim().parse::<u64>() {
                self.playback.speed_ms = ms;
            }
        }
        if let Some(val) = lookup("CTUTOR_LOG_FILE") {
            self.logging.file = Some(PathBuf::from(val));
        }
    }

    /// Apply command-line flags, which win over everything else
    pub fn apply_args(&mut self, options: &RunOptions) {
        if let Some(week) = options.week {
            self.lesson.week = week;
        }
        if let Some(theme) = options.theme {
            self.lesson.theme = theme;
        }
        if let Some(root) = &options.lessons {
            self.lesson.root = root.clone();
        }
        if let Some(ms) = options.speed_ms {
            self.playback.speed_ms = ms;
        }
    }

    /// Startup week, kept inside the course
    pub fn week(&self) -> u32 {
        self.lesson.week.clamp(FIRST_WEEK, LAST_WEEK)
    }

    pub fn tick_interval(&self) -> Duration {
        clamp_interval(Duration::from_millis(self.playback.speed_ms))
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.playback.frame_rate.clamp(1, 120)))
    }

    pub fn log_file(&self) -> PathBuf {
        self.logging
            .file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("ctutor.log"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.lesson.week, 1);
        assert_eq!(settings.lesson.theme, Theme::Classic);
        assert_eq!(settings.tick_interval(), Duration::from_millis(1200));
        assert_eq!(settings.frame_interval(), Duration::from_millis(33));
        assert!(!settings.playback.autoplay);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [lesson]
            theme = "lotr"

            [playback]
            speed_ms = 100
            "#,
        )
        .unwrap();

        assert_eq!(settings.lesson.theme, Theme::Lotr);
        assert_eq!(settings.lesson.week, 1);
        assert_eq!(settings.playback.frame_rate, 30);
        assert_eq!(settings.tick_interval(), Duration::from_millis(300));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("CTUTOR_WEEK", "4"),
            ("CTUTOR_THEME", "LOTR"),
            ("CTUTOR_SPEED_MS", "fast"),
            ("CTUTOR_LOG_FILE", "/tmp/tutor.log"),
        ]
        .into_iter()
        .collect();

        let mut settings = Settings::default();
        settings.merge_with_vars(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(settings.lesson.week, 4);
        assert_eq!(settings.lesson.theme, Theme::Lotr);
        assert_eq!(settings.playback.speed_ms, 1200);
        assert_eq!(settings.log_file(), PathBuf::from("/tmp/tutor.log"));
    }

    #[test]
    fn test_args_win() {
        let mut settings = Settings::default();
        settings.apply_args(&RunOptions {
            week: Some(20),
            speed_ms: Some(5000),
            ..RunOptions::default()
        });

        assert_eq!(settings.week(), 14);
        assert_eq!(settings.tick_interval(), Duration::from_millis(3000));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let settings = Settings::load_or_default("definitely/not/here.toml").unwrap();
        assert_eq!(settings, Settings::default());
    }
}
