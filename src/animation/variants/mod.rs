//! Concept renderers
//!
//! | module | animations |
//! |---|---|
//! | [`program`] | `simple`, `function-call` |
//! | [`branching`] | `conditional`, `flowchart` |
//! | [`loops`] | `for-loop`, `while-loop`, `loop-comparison` |
//! | [`variables`] | `variables` |
//! | [`memory`] | `array-memory`, `memory-view` |
//! | [`trace`] | `execution-trace` |
//! | [`compilation`] | `compilation` |
//!
//! Fixed-stage animations describe themselves with lookup tables indexed by
//! step; steps past the table read as "Completed".

pub mod branching;
pub mod compilation;
pub mod loops;
pub mod memory;
pub mod program;
pub mod trace;
pub mod variables;

pub use branching::{ConditionalAnimation, FlowchartAnimation};
pub use compilation::CompilationAnimation;
pub use loops::{ForLoopAnimation, LoopComparisonAnimation, WhileLoopAnimation};
pub use memory::{ArrayMemoryAnimation, MemoryViewAnimation};
pub use program::{FunctionCallAnimation, SimpleAnimation};
pub use trace::ExecutionTraceAnimation;
pub use variables::VariablesAnimation;

/// Status label used once a staged animation runs past its table
pub(crate) const COMPLETED: &str = "Completed";

pub(crate) fn stage_status(stages: &[&str], step: usize) -> String {
    stages.get(step).copied().unwrap_or(COMPLETED).to_string()
}

pub(crate) fn stage_message(messages: &[&str], step: usize) -> String {
    messages.get(step).copied().unwrap_or_default().to_string()
}

/// Fake address of the `index`-th 4-byte slot, as the lessons draw them
pub(crate) fn slot_address(index: usize) -> String {
    format!("0x{:x}", 1000 + index * 4)
}

pub(crate) fn lines(listing: &[&str]) -> Vec<String> {
    listing.iter().map(|line| line.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_tables_saturate() {
        let stages = ["Ready", "Running"];
        assert_eq!(stage_status(&stages, 1), "Running");
        assert_eq!(stage_status(&stages, 5), COMPLETED);
        assert_eq!(stage_message(&["", "one"], 0), "");
        assert_eq!(stage_message(&["", "one"], 9), "");
    }

    #[test]
    fn test_slot_addresses() {
        assert_eq!(slot_address(0), "0x3e8");
        assert_eq!(slot_address(2), "0x3f0");
    }
}
