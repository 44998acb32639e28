//! Weekly lesson content
//!
//! Lessons live on disk as `<root>/<theme>/weekNN.json`. Loading never fails
//! from the caller's point of view: [`LessonLibrary::load`] validates and
//! enriches what it finds and falls back to built-in content when the file is
//! missing or malformed. [`LessonLibrary::try_load`] exposes the underlying
//! error for tooling and tests.

mod defaults;

pub use defaults::{default_animations, default_code_examples, fallback_week};

use crate::animation::{AnimationConfig, AnimationKind, Theme};
use crate::errors::LessonError;
use log::{debug, info, warn};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const FIRST_WEEK: u32 = 1;
pub const LAST_WEEK: u32 = 14;

/// Directory searched when no lesson root is configured
pub const DEFAULT_LESSON_ROOT: &str = "lessons";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeExample {
    pub title: String,
    pub code: String,
    pub explanation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Exercise {
    pub title: String,
    pub prompt: String,
    pub hint: String,
    pub solution: String,
}

/// A downloadable source file attached to a week
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LessonFile {
    pub name: String,
    pub content: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    pub title: String,
    pub url: String,
    pub description: String,
}

/// One animation offered by a week, as written in lesson files
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationDescriptor {
    /// Kind name such as `for-loop`; unknown names are kept verbatim
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    pub config: AnimationConfig,
}

impl AnimationDescriptor {
    /// The animation kind this descriptor selects, degrading unknown names
    pub fn resolved_kind(&self) -> AnimationKind {
        AnimationKind::resolve(&self.kind)
    }
}

/// All content of one week
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WeekData {
    pub week: u32,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub difficulty: String,
    pub objectives: Vec<String>,
    pub code_examples: Vec<CodeExample>,
    pub exercises: Vec<Exercise>,
    pub files: Vec<LessonFile>,
    pub links: Vec<Link>,
    pub animations: Vec<AnimationDescriptor>,
}

impl WeekData {
    /// Fill in whatever a lesson file left out
    pub fn enrich(mut self, week: u32, theme: Theme) -> Self {
        self.week = week;
        if self.title.is_empty() {
            self.title = format!("Week {}", week);
        }
        if self.description.is_empty() {
            self.description = "Description coming soon...".to_string();
        }
        if self.duration.is_empty() {
            self.duration = "90 minutes".to_string();
        }
        if self.difficulty.is_empty() {
            self.difficulty = "Intermediate".to_string();
        }
        if self.animations.is_empty() {
            self.animations = default_animations(week);
        }
        if self.code_examples.is_empty() {
            self.code_examples = default_code_examples(week, theme);
        }
        self
    }
}

/// Path of a week's lesson file below `root`
pub fn week_path(root: &Path, week: u32, theme: Theme) -> PathBuf {
    root.join(theme.name()).join(format!("week{:02}.json", week))
}

/// Loads and caches week content
#[derive(Debug, Clone)]
pub struct LessonLibrary {
    root: PathBuf,
    cache: FxHashMap<(Theme, u32), WeekData>,
}

impl Default for LessonLibrary {
    fn default() -> Self {
        LessonLibrary::new(DEFAULT_LESSON_ROOT)
    }
}

impl LessonLibrary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        LessonLibrary {
            root: root.into(),
            cache: FxHashMap::default(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read and enrich a week from disk, reporting why that failed
    pub fn try_load(&self, week: u32, theme: Theme) -> Result<WeekData, LessonError> {
        if !(FIRST_WEEK..=LAST_WEEK).contains(&week) {
            return Err(LessonError::UnknownWeek(week));
        }

        let path = week_path(&self.root, week, theme);
        let text = fs::read_to_string(&path).map_err(|source| LessonError::Io {
            path: path.clone(),
            source,
        })?;
        let data: WeekData =
            serde_json::from_str(&text).map_err(|source| LessonError::Parse { path, source })?;

        Ok(data.enrich(week, theme))
    }

    /// Week content, from cache, disk, or the built-in fallback
    pub fn load(&mut self, week: u32, theme: Theme) -> WeekData {
        if let Some(cached) = self.cache.get(&(theme, week)) {
            debug!("Week {} ({}) served from cache", week, theme);
            return cached.clone();
        }

        let data = match self.try_load(week, theme) {
            Ok(data) => {
                info!("Loaded week {} for theme {}", week, theme);
                data
            }
            Err(err) => {
                warn!("Using fallback content for week {} ({}): {}", week, theme, err);
                fallback_week(week, theme)
            }
        };
        self.cache.insert((theme, week), data.clone());
        data
    }

    /// Load several weeks into the cache ahead of time
    pub fn preload(&mut self, weeks: impl IntoIterator<Item = u32>, theme: Theme) {
        for week in weeks {
            self.load(week, theme);
        }
    }

    pub fn cached(&self, week: u32, theme: Theme) -> Option<&WeekData> {
        self.cache.get(&(theme, week))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_path_is_zero_padded() {
        let path = week_path(Path::new("data"), 4, Theme::Lotr);
        assert_eq!(path, Path::new("data").join("lotr").join("week04.json"));
    }

    #[test]
    fn test_enrich_fills_missing_fields() {
        let data: WeekData = serde_json::from_str(r#"{ "title": "Loops", "extra": 1 }"#).unwrap();
        let data = data.enrich(4, Theme::Classic);

        assert_eq!(data.week, 4);
        assert_eq!(data.title, "Loops");
        assert_eq!(data.duration, "90 minutes");
        assert_eq!(data.animations[0].kind, "for-loop");
        assert!(!data.code_examples.is_empty());
    }

    #[test]
    fn test_descriptor_parses_type_key() {
        let desc: AnimationDescriptor = serde_json::from_str(
            r#"{ "type": "while-loop", "title": "While", "config": { "maxIterations": 3 } }"#,
        )
        .unwrap();
        assert_eq!(desc.resolved_kind(), AnimationKind::WhileLoop);
        assert_eq!(desc.config.max_iterations, Some(3));
    }

    #[test]
    fn test_out_of_range_week_is_rejected() {
        let library = LessonLibrary::new("does-not-exist");
        assert!(matches!(
            library.try_load(0, Theme::Classic),
            Err(LessonError::UnknownWeek(0))
        ));
        assert!(matches!(
            library.try_load(3, Theme::Classic),
            Err(LessonError::Io { .. })
        ));
    }
}
