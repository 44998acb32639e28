//! Construction of animation variants from lesson descriptors

use super::variants::{
    ArrayMemoryAnimation, CompilationAnimation, ConditionalAnimation, ExecutionTraceAnimation,
    FlowchartAnimation, ForLoopAnimation, FunctionCallAnimation, LoopComparisonAnimation,
    MemoryViewAnimation, SimpleAnimation, VariablesAnimation, WhileLoopAnimation,
};
use super::{palette, Animation, AnimationConfig, AnimationKind, CodeFocus, DisplayInfo, Theme};
use crate::errors::AnimationError;
use crate::render::Surface;

/// One of the concept animations, selected by [`AnimationKind`]
#[derive(Debug, Clone)]
pub enum Variant {
    Simple(SimpleAnimation),
    Variables(VariablesAnimation),
    Conditional(ConditionalAnimation),
    Flowchart(FlowchartAnimation),
    LoopComparison(LoopComparisonAnimation),
    ForLoop(ForLoopAnimation),
    WhileLoop(WhileLoopAnimation),
    FunctionCall(FunctionCallAnimation),
    ArrayMemory(ArrayMemoryAnimation),
    MemoryView(MemoryViewAnimation),
    ExecutionTrace(ExecutionTraceAnimation),
    Compilation(CompilationAnimation),
}

/// Build the animation for `kind`, filling unset options with its defaults.
/// Counts are capped first, see [`AnimationConfig::bounded`].
pub fn create(kind: AnimationKind, config: &AnimationConfig, theme: Theme) -> Variant {
    let p = palette(theme);
    let config = &config.clone().bounded();
    match kind {
        AnimationKind::Simple => Variant::Simple(SimpleAnimation::new(p)),
        AnimationKind::Variables => Variant::Variables(VariablesAnimation::new(p, config)),
        AnimationKind::Conditional => Variant::Conditional(ConditionalAnimation::new(p, config)),
        AnimationKind::Flowchart => Variant::Flowchart(FlowchartAnimation::new(p, config)),
        AnimationKind::LoopComparison => {
            Variant::LoopComparison(LoopComparisonAnimation::new(p))
        }
        AnimationKind::ForLoop => Variant::ForLoop(ForLoopAnimation::new(p, config)),
        AnimationKind::WhileLoop => Variant::WhileLoop(WhileLoopAnimation::new(p, config)),
        AnimationKind::FunctionCall => Variant::FunctionCall(FunctionCallAnimation::new(p)),
        AnimationKind::ArrayMemory => Variant::ArrayMemory(ArrayMemoryAnimation::new(p, config)),
        AnimationKind::MemoryView => Variant::MemoryView(MemoryViewAnimation::new(p, config)),
        AnimationKind::ExecutionTrace => {
            Variant::ExecutionTrace(ExecutionTraceAnimation::new(p, config))
        }
        AnimationKind::Compilation => Variant::Compilation(CompilationAnimation::new(p)),
    }
}

/// Like [`create`], but from a lesson-file kind name. Unknown names build the
/// simple animation.
pub fn create_named(name: &str, config: &AnimationConfig, theme: Theme) -> Variant {
    create(AnimationKind::resolve(name), config, theme)
}

macro_rules! delegate {
    ($self:ident, $inner:ident => $body:expr) => {
        match $self {
            Variant::Simple($inner) => $body,
            Variant::Variables($inner) => $body,
            Variant::Conditional($inner) => $body,
            Variant::Flowchart($inner) => $body,
            Variant::LoopComparison($inner) => $body,
            Variant::ForLoop($inner) => $body,
            Variant::WhileLoop($inner) => $body,
            Variant::FunctionCall($inner) => $body,
            Variant::ArrayMemory($inner) => $body,
            Variant::MemoryView($inner) => $body,
            Variant::ExecutionTrace($inner) => $body,
            Variant::Compilation($inner) => $body,
        }
    };
}

impl Animation for Variant {
    fn kind(&self) -> AnimationKind {
        delegate!(self, a => a.kind())
    }

    fn max_steps(&self) -> usize {
        delegate!(self, a => a.max_steps())
    }

    fn render(&self, surface: &mut dyn Surface, step: usize) -> Result<(), AnimationError> {
        delegate!(self, a => a.render(surface, step))
    }

    fn info(&self, step: usize) -> Result<DisplayInfo, AnimationError> {
        delegate!(self, a => a.info(step))
    }

    fn log_message(&self, step: usize) -> Result<String, AnimationError> {
        delegate!(self, a => a.log_message(step))
    }

    fn code_listing(&self) -> Vec<String> {
        delegate!(self, a => a.code_listing())
    }

    fn code_focus(&self, step: usize) -> Option<CodeFocus> {
        delegate!(self, a => a.code_focus(step))
    }

    fn on_step(&mut self, step: usize) {
        delegate!(self, a => a.on_step(step))
    }

    fn reset(&mut self) {
        delegate!(self, a => a.reset())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_builds_its_own_variant() {
        let config = AnimationConfig::default();
        for kind in AnimationKind::ALL {
            let variant = create(kind, &config, Theme::Classic);
            assert_eq!(variant.kind(), kind);
            assert_eq!(variant.max_steps(), kind.max_steps(&config), "{}", kind);
        }
    }

    #[test]
    fn test_unknown_name_degrades_to_simple() {
        let variant = create_named("parameter-passing", &AnimationConfig::default(), Theme::Lotr);
        assert_eq!(variant.kind(), AnimationKind::Simple);
        assert_eq!(variant.max_steps(), 3);
    }
}
