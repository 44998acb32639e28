//! Animation kinds and their step budgets

use super::config::AnimationConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Iteration bound used by loop animations when none is configured
pub const DEFAULT_ITERATIONS: usize = 5;

/// Array length used by `array-memory` when none is configured
pub const DEFAULT_ARRAY_SIZE: usize = 5;

/// Which concept an animation visualizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationKind {
    Simple,
    Variables,
    Conditional,
    Flowchart,
    LoopComparison,
    ForLoop,
    WhileLoop,
    FunctionCall,
    ArrayMemory,
    MemoryView,
    ExecutionTrace,
    Compilation,
}

impl AnimationKind {
    pub const ALL: [AnimationKind; 12] = [
        AnimationKind::Simple,
        AnimationKind::Variables,
        AnimationKind::Conditional,
        AnimationKind::Flowchart,
        AnimationKind::LoopComparison,
        AnimationKind::ForLoop,
        AnimationKind::WhileLoop,
        AnimationKind::FunctionCall,
        AnimationKind::ArrayMemory,
        AnimationKind::MemoryView,
        AnimationKind::ExecutionTrace,
        AnimationKind::Compilation,
    ];

    /// The kebab-case name used in lesson files
    pub fn name(self) -> &'static str {
        match self {
            AnimationKind::Simple => "simple",
            AnimationKind::Variables => "variables",
            AnimationKind::Conditional => "conditional",
            AnimationKind::Flowchart => "flowchart",
            AnimationKind::LoopComparison => "loop-comparison",
            AnimationKind::ForLoop => "for-loop",
            AnimationKind::WhileLoop => "while-loop",
            AnimationKind::FunctionCall => "function-call",
            AnimationKind::ArrayMemory => "array-memory",
            AnimationKind::MemoryView => "memory-view",
            AnimationKind::ExecutionTrace => "execution-trace",
            AnimationKind::Compilation => "compilation",
        }
    }

    /// Look up a kind by its lesson-file name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Like [`from_name`](Self::from_name), but unknown names degrade to
    /// [`AnimationKind::Simple`] so a typo in lesson data never blocks a page.
    pub fn resolve(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            log::warn!("Unknown animation kind '{}', falling back to simple", name);
            AnimationKind::Simple
        })
    }

    /// Number of steps from the initial frame to the last one
    pub fn max_steps(self, config: &AnimationConfig) -> usize {
        match self {
            AnimationKind::Simple => 3,
            AnimationKind::Conditional => 4,
            AnimationKind::Flowchart => 6,
            AnimationKind::LoopComparison => 4,
            AnimationKind::Variables => config
                .variables
                .as_ref()
                .map_or(4, |vars| vars.len() + 1),
            AnimationKind::ForLoop => config
                .max_iterations
                .unwrap_or(DEFAULT_ITERATIONS)
                .saturating_mul(3)
                .saturating_add(3),
            AnimationKind::WhileLoop => config
                .max_iterations
                .unwrap_or(DEFAULT_ITERATIONS)
                .saturating_mul(2)
                .saturating_add(1),
            AnimationKind::FunctionCall => 6,
            AnimationKind::ArrayMemory => config
                .array_size
                .unwrap_or(DEFAULT_ARRAY_SIZE)
                .saturating_add(2),
            AnimationKind::MemoryView => config.max_value.map_or(6, |max| max.saturating_add(1)),
            AnimationKind::ExecutionTrace => {
                config.max_iterations.map_or(10, |n| n.saturating_mul(2))
            }
            AnimationKind::Compilation => 8,
        }
    }
}

impl fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_iterations(n: usize) -> AnimationConfig {
        AnimationConfig {
            max_iterations: Some(n),
            ..AnimationConfig::default()
        }
    }

    #[test]
    fn test_names_round_trip() {
        for kind in AnimationKind::ALL {
            assert_eq!(AnimationKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(AnimationKind::from_name("parameter-passing"), None);
        assert_eq!(
            AnimationKind::resolve("parameter-passing"),
            AnimationKind::Simple
        );
    }

    #[test]
    fn test_fixed_stage_budgets() {
        let config = AnimationConfig::default();
        assert_eq!(AnimationKind::Simple.max_steps(&config), 3);
        assert_eq!(AnimationKind::Conditional.max_steps(&config), 4);
        assert_eq!(AnimationKind::Flowchart.max_steps(&config), 6);
        assert_eq!(AnimationKind::LoopComparison.max_steps(&config), 4);
        assert_eq!(AnimationKind::FunctionCall.max_steps(&config), 6);
        assert_eq!(AnimationKind::Compilation.max_steps(&config), 8);
    }

    #[test]
    fn test_configured_budgets() {
        assert_eq!(AnimationKind::ForLoop.max_steps(&with_iterations(5)), 18);
        assert_eq!(AnimationKind::ForLoop.max_steps(&with_iterations(2)), 9);
        assert_eq!(AnimationKind::WhileLoop.max_steps(&with_iterations(5)), 11);
        assert_eq!(AnimationKind::WhileLoop.max_steps(&with_iterations(0)), 1);
        assert_eq!(
            AnimationKind::ExecutionTrace.max_steps(&with_iterations(3)),
            6
        );

        let vars = AnimationConfig {
            variables: Some(vec!["int".into(), "double".into()]),
            ..AnimationConfig::default()
        };
        assert_eq!(AnimationKind::Variables.max_steps(&vars), 3);

        let array = AnimationConfig {
            array_size: Some(8),
            ..AnimationConfig::default()
        };
        assert_eq!(AnimationKind::ArrayMemory.max_steps(&array), 10);

        let memory = AnimationConfig {
            max_value: Some(9),
            ..AnimationConfig::default()
        };
        assert_eq!(AnimationKind::MemoryView.max_steps(&memory), 10);
    }

    #[test]
    fn test_default_budgets() {
        let config = AnimationConfig::default();
        assert_eq!(AnimationKind::Variables.max_steps(&config), 4);
        assert_eq!(AnimationKind::ForLoop.max_steps(&config), 18);
        assert_eq!(AnimationKind::WhileLoop.max_steps(&config), 11);
        assert_eq!(AnimationKind::ArrayMemory.max_steps(&config), 7);
        assert_eq!(AnimationKind::MemoryView.max_steps(&config), 6);
        assert_eq!(AnimationKind::ExecutionTrace.max_steps(&config), 10);
    }

    #[test]
    fn test_huge_counts_saturate() {
        let config = AnimationConfig {
            max_iterations: Some(usize::MAX),
            array_size: Some(usize::MAX),
            max_value: Some(usize::MAX),
            ..AnimationConfig::default()
        };
        for kind in AnimationKind::ALL {
            assert!(kind.max_steps(&config) > 0, "{}", kind);
        }
        assert_eq!(AnimationKind::ForLoop.max_steps(&config), usize::MAX);
    }
}
