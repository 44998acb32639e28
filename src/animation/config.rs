//! Per-animation options supplied by lesson data

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Largest iteration count, array length or tracked value a lesson may ask for
pub const MAX_CONFIGURED_COUNT: usize = 100;

/// Named options for one animation
///
/// Every field is optional; each variant substitutes its own default when a
/// field is absent. Options no variant understands (for example `showNodes`
/// or `highlightLines` in older lesson files) are kept in `extra` so exports
/// reproduce the configuration exactly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_iterations: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub array_size: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_indexing: Option<bool>,

    /// Largest value tracked by `memory-view`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_addresses: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_variable: Option<String>,

    /// C type names declared one per step by `variables`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Vec<String>>,

    /// Source listing walked by `execution-trace`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_lines: Option<Vec<String>>,

    /// Label of the decision diamond in `flowchart`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_paths: Option<bool>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl AnimationConfig {
    pub fn with_iterations(max_iterations: usize) -> Self {
        AnimationConfig {
            max_iterations: Some(max_iterations),
            ..AnimationConfig::default()
        }
    }

    /// This configuration with every count capped at [`MAX_CONFIGURED_COUNT`].
    ///
    /// Counts come straight from lesson files and size both the step budget
    /// and the drawing, so oversized values are cut down with a warning.
    pub fn bounded(mut self) -> Self {
        for (name, field) in [
            ("maxIterations", &mut self.max_iterations),
            ("arraySize", &mut self.array_size),
            ("maxValue", &mut self.max_value),
        ] {
            if let Some(count) = *field {
                if count > MAX_CONFIGURED_COUNT {
                    warn!(
                        "{} of {} is too large, using {}",
                        name, count, MAX_CONFIGURED_COUNT
                    );
                    *field = Some(MAX_CONFIGURED_COUNT);
                }
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_camel_case_options() {
        let config: AnimationConfig = serde_json::from_str(
            r#"{ "maxIterations": 3, "trackVariable": "j", "showNodes": ["init", "cond"] }"#,
        )
        .unwrap();

        assert_eq!(config.max_iterations, Some(3));
        assert_eq!(config.track_variable.as_deref(), Some("j"));
        assert!(config.array_size.is_none());
        assert!(config.extra.contains_key("showNodes"));
    }

    #[test]
    fn test_unknown_options_survive_serialization() {
        let config: AnimationConfig =
            serde_json::from_str(r#"{ "showBoth": true, "arraySize": 4 }"#).unwrap();
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["showBoth"], Value::Bool(true));
        assert_eq!(json["arraySize"], Value::from(4));
        assert!(json.get("maxIterations").is_none());
    }

    #[test]
    fn test_bounded_caps_counts() {
        let config: AnimationConfig = serde_json::from_str(
            r#"{ "maxIterations": 18446744073709551615, "arraySize": 101, "maxValue": 7 }"#,
        )
        .unwrap();
        let bounded = config.bounded();

        assert_eq!(bounded.max_iterations, Some(MAX_CONFIGURED_COUNT));
        assert_eq!(bounded.array_size, Some(MAX_CONFIGURED_COUNT));
        assert_eq!(bounded.max_value, Some(7));
    }
}
