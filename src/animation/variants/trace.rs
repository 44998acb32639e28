use crate::animation::draw::{caption, draw_background, draw_title, label};
use crate::animation::{
    ensure_step, Animation, AnimationConfig, AnimationKind, CodeFocus, DisplayInfo, Palette,
};
use crate::errors::AnimationError;
use crate::render::{Align, Bounds, Paint, Rgba, Surface, TextStyle};

const DEFAULT_LISTING: [&str; 4] = [
    "int i = 0;",
    "for (i = 0; i < 5; i++) {",
    "    printf(\"i = %d\\n\", i);",
    "}",
];

/// Shown for a line the configured listing doesn't have
const NO_SOURCE: &str = "(no source)";

const LINE_HEIGHT: f64 = 25.0;
const FIRST_LINE_Y: f64 = 80.0;

/// Steps through a listing line by line with an execution pointer
///
/// Step 1 runs the first line; afterwards the pointer cycles through
/// condition (line 2), body (line 3) and increment (line 2 again).
#[derive(Debug, Clone)]
pub struct ExecutionTraceAnimation {
    palette: &'static Palette,
    listing: Vec<String>,
    max_steps: usize,
}

impl ExecutionTraceAnimation {
    pub fn new(palette: &'static Palette, config: &AnimationConfig) -> Self {
        let listing = config
            .code_lines
            .clone()
            .unwrap_or_else(|| DEFAULT_LISTING.iter().map(|l| l.to_string()).collect());
        ExecutionTraceAnimation {
            palette,
            listing,
            max_steps: AnimationKind::ExecutionTrace.max_steps(config),
        }
    }

    /// 0-based line executing at `step`
    pub fn executing_line(step: usize) -> Option<usize> {
        match step {
            0 => None,
            1 => Some(0),
            s => Some(match (s - 2) % 3 {
                1 => 2,
                _ => 1,
            }),
        }
    }

    /// Value of `i` once `step` has run
    fn counter(step: usize) -> usize {
        step.saturating_sub(1) / 3
    }

    /// Executing line and its source text; a listing too short for the
    /// pointer gives no text
    fn current(&self, step: usize) -> Option<(usize, Option<&str>)> {
        Self::executing_line(step)
            .map(|line| (line, self.listing.get(line).map(String::as_str)))
    }
}

impl Animation for ExecutionTraceAnimation {
    fn kind(&self) -> AnimationKind {
        AnimationKind::ExecutionTrace
    }

    fn max_steps(&self) -> usize {
        self.max_steps
    }

    fn render(&self, surface: &mut dyn Surface, step: usize) -> Result<(), AnimationError> {
        ensure_step(self.kind(), step, self.max_steps())?;
        let current = self.current(step);
        let p = self.palette;
        draw_background(surface, p);
        draw_title(surface, p, "Execution Trace - Line by Line");

        let (width, _) = surface.size();
        for (idx, text) in self.listing.iter().enumerate() {
            let y = FIRST_LINE_Y + idx as f64 * LINE_HEIGHT;
            if current.map(|(line, _)| line) == Some(idx) {
                surface.rect(
                    Bounds::new(20.0, y - 10.0, width - 40.0, LINE_HEIGHT),
                    Paint::filled(p.warning.with_alpha(100)),
                );
            }
            surface.text(
                (40.0, y),
                &(idx + 1).to_string(),
                TextStyle::new(Rgba::gray(100), 12.0, Align::Right),
            );
            label(surface, (50.0, y), text, p.text, 14.0);
        }

        if let Some((line, text)) = current {
            let pointer_y = FIRST_LINE_Y + line as f64 * LINE_HEIGHT;
            label(surface, (5.0, pointer_y), "▶", p.accent, 16.0);
            if text.is_none() {
                label(surface, (50.0, pointer_y), NO_SOURCE, Rgba::gray(100), 14.0);
            }
            let rows = self.listing.len().max(line + 1);
            caption(
                surface,
                (width / 2.0, FIRST_LINE_Y + rows as f64 * LINE_HEIGHT + 30.0),
                &format!("Variables: i = {}", Self::counter(step)),
                p.secondary,
                16.0,
            );
        }
        Ok(())
    }

    fn info(&self, step: usize) -> Result<DisplayInfo, AnimationError> {
        ensure_step(self.kind(), step, self.max_steps())?;
        Ok(match self.current(step) {
            None => DisplayInfo::new("-", "Ready", 0),
            Some((line, _)) => DisplayInfo::new(
                format!("line {}", line + 1),
                format!("Running line {}", line + 1),
                Self::counter(step),
            ),
        })
    }

    fn log_message(&self, step: usize) -> Result<String, AnimationError> {
        ensure_step(self.kind(), step, self.max_steps())?;
        Ok(match self.current(step) {
            None => String::new(),
            Some((line, text)) => format!(
                "Executing line {}: {}",
                line + 1,
                text.map_or(NO_SOURCE, str::trim)
            ),
        })
    }

    fn code_listing(&self) -> Vec<String> {
        self.listing.clone()
    }

    fn code_focus(&self, step: usize) -> Option<CodeFocus> {
        Self::executing_line(step)
            .filter(|line| *line < self.listing.len())
            .map(|line| CodeFocus::line(line + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{palette, Theme};
    use crate::render::DrawList;

    #[test]
    fn test_pointer_cycles_condition_body_increment() {
        let lines: Vec<Option<usize>> = (0..8).map(ExecutionTraceAnimation::executing_line).collect();
        assert_eq!(
            lines,
            vec![None, Some(0), Some(1), Some(2), Some(1), Some(1), Some(2), Some(1)]
        );
    }

    #[test]
    fn test_narrates_executing_line() {
        let anim = ExecutionTraceAnimation::new(palette(Theme::Classic), &AnimationConfig::default());
        assert_eq!(anim.max_steps(), 10);
        assert_eq!(anim.log_message(0).unwrap(), "");
        assert_eq!(anim.log_message(1).unwrap(), "Executing line 1: int i = 0;");
        assert_eq!(
            anim.log_message(3).unwrap(),
            "Executing line 3: printf(\"i = %d\\n\", i);"
        );
        assert_eq!(anim.info(3).unwrap().current_value, "line 3");
        assert_eq!(anim.info(7).unwrap().iteration, 2);
    }

    #[test]
    fn test_short_listing_narrates_missing_lines() {
        let config = AnimationConfig {
            code_lines: Some(vec!["int x = 1;".into()]),
            max_iterations: Some(2),
            ..AnimationConfig::default()
        };
        let anim = ExecutionTraceAnimation::new(palette(Theme::Classic), &config);

        for step in 0..=anim.max_steps() {
            assert!(anim.info(step).is_ok(), "step {}", step);
            assert!(anim.render(&mut DrawList::new(), step).is_ok(), "step {}", step);
        }
        assert_eq!(anim.log_message(2).unwrap(), "Executing line 2: (no source)");
        assert_eq!(anim.info(3).unwrap().current_value, "line 3");

        let mut frame = DrawList::new();
        anim.render(&mut frame, 2).unwrap();
        assert!(frame.contains_text("(no source)"));
        assert_eq!(anim.code_focus(2), None);
        assert!(anim.info(anim.max_steps() + 1).is_err());
    }
}
