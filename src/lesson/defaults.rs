//! Built-in week content used when lesson files are missing

use super::{AnimationDescriptor, CodeExample, Exercise, LessonFile, Link, WeekData};
use crate::animation::{AnimationConfig, Theme};
use serde_json::{json, Value};

fn descriptor(kind: &str, title: &str, description: &str, config: Value) -> AnimationDescriptor {
    AnimationDescriptor {
        kind: kind.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        config: serde_json::from_value(config).unwrap_or_else(|err| {
            log::warn!("Invalid built-in config for {}: {}", kind, err);
            AnimationConfig::default()
        }),
    }
}

/// Animations offered for `week` when its lesson file lists none.
///
/// Weeks 6 and 7 name kinds the tutor doesn't draw yet; they degrade to the
/// simple animation when selected.
pub fn default_animations(week: u32) -> Vec<AnimationDescriptor> {
    match week {
        1 => vec![
            descriptor(
                "simple",
                "Program Flow",
                "How a C program runs from start to finish",
                json!({ "maxSteps": 3 }),
            ),
            descriptor(
                "compilation",
                "From Source to Executable",
                "The four stages gcc runs to build a program",
                json!({}),
            ),
        ],
        2 => vec![
            descriptor(
                "variables",
                "Declaring Variables",
                "How variables are created in memory",
                json!({ "variables": ["int", "float", "char"] }),
            ),
            descriptor(
                "memory-view",
                "Memory View",
                "Memory addresses of variables",
                json!({ "showAddresses": true }),
            ),
        ],
        3 => vec![
            descriptor(
                "conditional",
                "Checking a Condition",
                "How an if-else statement chooses a branch",
                json!({ "condition": "number > 0" }),
            ),
            descriptor(
                "flowchart",
                "Decision Flow",
                "Flowchart of a conditional statement",
                json!({ "showPaths": true }),
            ),
        ],
        4 => vec![
            descriptor(
                "for-loop",
                "For Loop Flow",
                "A for loop, step by step",
                json!({ "maxIterations": 5, "showNodes": ["init", "cond", "body", "inc"] }),
            ),
            descriptor(
                "memory-view",
                "Loop Variable",
                "How i changes in memory",
                json!({ "trackVariable": "i" }),
            ),
            descriptor(
                "execution-trace",
                "Execution Trace",
                "The code running line by line",
                json!({ "highlightLines": true }),
            ),
        ],
        5 => vec![
            descriptor(
                "while-loop",
                "While Loop",
                "How a while loop works",
                json!({ "maxIterations": 5 }),
            ),
            descriptor(
                "loop-comparison",
                "For vs While",
                "The two loop forms side by side",
                json!({ "showBoth": true }),
            ),
        ],
        6 => vec![
            descriptor(
                "function-call",
                "Calling a Function",
                "How a function call works",
                json!({ "showCallStack": true }),
            ),
            descriptor(
                "parameter-passing",
                "Passing Parameters",
                "How arguments reach a function",
                json!({ "showMemory": true }),
            ),
        ],
        7 => vec![
            descriptor(
                "array-memory",
                "Array Memory Layout",
                "How arrays are stored in memory",
                json!({ "arraySize": 5 }),
            ),
            descriptor(
                "array-access",
                "Array Access",
                "How an element is looked up",
                json!({ "showIndexing": true }),
            ),
        ],
        _ => vec![descriptor(
            "simple",
            "General Animation",
            "Animation for this week",
            json!({ "maxSteps": 1 }),
        )],
    }
}

fn example(title: &str, code: &str, explanation: &str) -> CodeExample {
    CodeExample {
        title: title.to_string(),
        code: code.to_string(),
        explanation: explanation.to_string(),
    }
}

/// A single starter example for `week` in the given theme
pub fn default_code_examples(week: u32, theme: Theme) -> Vec<CodeExample> {
    let lotr = theme == Theme::Lotr;
    let sample = match week {
        1 => example(
            "Hello World",
            if lotr {
                "#include <stdio.h>\nint main() {\n    printf(\"Welcome to Middle-earth! Frodo sets out...\\n\");\n    return 0;\n}"
            } else {
                "#include <stdio.h>\nint main() {\n    printf(\"Hello, World!\\n\");\n    return 0;\n}"
            },
            "Your first C program",
        ),
        2 => example(
            "Declaring Variables",
            if lotr {
                "#include <stdio.h>\nint main() {\n    int frodo_age = 33;\n    float ring_weight = 0.05;\n    char ring_owner = 'F';\n    printf(\"Frodo is %d, the ring weighs %.2f kg.\\n\", frodo_age, ring_weight);\n    return 0;\n}"
            } else {
                "#include <stdio.h>\nint main() {\n    int number = 10;\n    float pi = 3.14;\n    char letter = 'A';\n    printf(\"Number: %d, Pi: %.2f, Letter: %c\\n\", number, pi, letter);\n    return 0;\n}"
            },
            "The basic data types",
        ),
        3 => example(
            "Conditional Statement",
            if lotr {
                "#include <stdio.h>\nint main() {\n    char owner = 'F';\n    if (owner == 'F') {\n        printf(\"The ring is with Frodo.\\n\");\n    } else {\n        printf(\"The ring has changed hands!\\n\");\n    }\n    return 0;\n}"
            } else {
                "#include <stdio.h>\nint main() {\n    int number = 5;\n    if (number > 0) {\n        printf(\"Positive\\n\");\n    } else {\n        printf(\"Negative or zero\\n\");\n    }\n    return 0;\n}"
            },
            "The if-else statement",
        ),
        4 => example(
            "For Loop",
            if lotr {
                "#include <stdio.h>\nint main() {\n    for (int day = 1; day <= 5; day++) {\n        printf(\"Day %d: the Fellowship marches on...\\n\", day);\n    }\n    return 0;\n}"
            } else {
                "#include <stdio.h>\nint main() {\n    for (int i = 0; i < 5; i++) {\n        printf(\"i is %d\\n\", i);\n    }\n    return 0;\n}"
            },
            "A basic for loop",
        ),
        5 => example(
            "While Loop",
            if lotr {
                "#include <stdio.h>\nint main() {\n    int depth = 0;\n    while (depth < 5) {\n        printf(\"Depth %d: moving on through the dark...\\n\", depth);\n        depth++;\n    }\n    printf(\"At last, the way out!\\n\");\n    return 0;\n}"
            } else {
                "#include <stdio.h>\nint main() {\n    int i = 0;\n    while (i < 5) {\n        printf(\"i is %d\\n\", i);\n        i++;\n    }\n    return 0;\n}"
            },
            "A basic while loop",
        ),
        _ => example(
            "Sample Code",
            "#include <stdio.h>\nint main() {\n    printf(\"Sample code for this week\\n\");\n    return 0;\n}",
            "A general example",
        ),
    };
    vec![sample]
}

/// Complete stand-in content for a week that could not be loaded
pub fn fallback_week(week: u32, theme: Theme) -> WeekData {
    let code_examples = default_code_examples(week, theme);
    let starter = code_examples
        .first()
        .map(|example| example.code.clone())
        .unwrap_or_default();
    let subject = match theme {
        Theme::Lotr => "A Middle-earth Adventure",
        Theme::Classic => "C Programming",
    };

    WeekData {
        week,
        title: format!("Week {}: {}", week, subject),
        description: "Content for this week is on its way...".to_string(),
        duration: "90 minutes".to_string(),
        difficulty: "Intermediate".to_string(),
        objectives: vec![
            "Learn the core concepts".to_string(),
            "Study the code examples".to_string(),
            "Practice hands-on".to_string(),
        ],
        code_examples,
        exercises: vec![Exercise {
            title: "Practice Exercise".to_string(),
            prompt: "Run the given code and observe the output".to_string(),
            hint: "Read every line of the code carefully".to_string(),
            solution: "// Solution coming soon...".to_string(),
        }],
        files: vec![LessonFile {
            name: format!("week{}_example.c", week),
            content: starter,
            description: "Example C file for this week".to_string(),
        }],
        links: vec![Link {
            title: "C Reference".to_string(),
            url: "https://en.cppreference.com/w/c".to_string(),
            description: "C language reference documentation".to_string(),
        }],
        animations: default_animations(week),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::AnimationKind;

    #[test]
    fn test_every_week_has_an_animation() {
        for week in 1..=14 {
            assert!(!default_animations(week).is_empty(), "week {}", week);
        }
    }

    #[test]
    fn test_unknown_kinds_keep_their_names() {
        let week7 = default_animations(7);
        assert_eq!(week7[1].kind, "array-access");
        assert_eq!(week7[1].resolved_kind(), AnimationKind::Simple);
        assert_eq!(week7[1].config.show_indexing, Some(true));
    }

    #[test]
    fn test_builtin_configs_parse() {
        let week4 = default_animations(4);
        assert_eq!(week4[0].config.max_iterations, Some(5));
        assert!(week4[0].config.extra.contains_key("showNodes"));
    }

    #[test]
    fn test_fallback_follows_theme() {
        let classic = fallback_week(1, Theme::Classic);
        let lotr = fallback_week(1, Theme::Lotr);
        assert!(classic.title.contains("C Programming"));
        assert!(lotr.code_examples[0].code.contains("Middle-earth"));
        assert_eq!(lotr.files[0].content, lotr.code_examples[0].code);
    }
}
