//! Decision animations: a single `if`/`else` and a generic flowchart

use super::{lines, stage_message, stage_status};
use crate::animation::draw::{caption, draw_arrow, draw_background, draw_title, label};
use crate::animation::palette::{ACTIVE_HIGHLIGHT, INACTIVE};
use crate::animation::{
    ensure_step, Animation, AnimationConfig, AnimationKind, CodeFocus, DisplayInfo, Palette,
};
use crate::errors::AnimationError;
use crate::render::{Bounds, Paint, Point, Rgba, Stroke, Surface, TextStyle};

/// `if (number > 0)` taking its true branch
#[derive(Debug, Clone)]
pub struct ConditionalAnimation {
    palette: &'static Palette,
    condition: String,
}

impl ConditionalAnimation {
    const STAGES: [&'static str; 4] = [
        "Ready",
        "Evaluating condition",
        "TRUE branch taken",
        "if block running",
    ];
    const LISTING: [&'static str; 6] = [
        "int number = 5;",
        "if (number > 0) {",
        "    printf(\"Positive\\n\");",
        "} else {",
        "    printf(\"Not positive\\n\");",
        "}",
    ];

    pub fn new(palette: &'static Palette, config: &AnimationConfig) -> Self {
        ConditionalAnimation {
            palette,
            condition: config
                .condition
                .clone()
                .unwrap_or_else(|| "number > 0".to_string()),
        }
    }

    fn branch(surface: &mut dyn Surface, p: &Palette, bounds: Bounds, fill: Rgba, text: &str) {
        surface.rect(bounds, Paint::new(fill, Stroke::new(p.text, 2.0)));
        caption(surface, bounds.center(), text, Rgba::WHITE, 14.0);
    }
}

impl Animation for ConditionalAnimation {
    fn kind(&self) -> AnimationKind {
        AnimationKind::Conditional
    }

    fn max_steps(&self) -> usize {
        4
    }

    fn render(&self, surface: &mut dyn Surface, step: usize) -> Result<(), AnimationError> {
        ensure_step(self.kind(), step, self.max_steps())?;
        let p = self.palette;
        draw_background(surface, p);
        draw_title(surface, p, "Conditional Statements");

        let (width, _) = surface.size();
        let mid = width / 2.0;

        let decision = Bounds::new(mid - 100.0, 80.0, 200.0, 40.0);
        surface.rect(decision, Paint::new(p.warning, Stroke::new(p.text, 2.0)));
        caption(surface, decision.center(), &format!("{} ?", self.condition), p.text, 14.0);

        if step == 0 {
            return Ok(());
        }

        let on_true = Bounds::new(mid - 150.0, 150.0, 120.0, 40.0);
        let on_false = Bounds::new(mid + 30.0, 150.0, 120.0, 40.0);
        Self::branch(surface, p, on_true, p.success, "TRUE");
        Self::branch(surface, p, on_false, p.danger, "FALSE");

        if step >= 2 {
            surface.rect(on_true, Paint::outlined(Stroke::new(ACTIVE_HIGHLIGHT, 4.0)));
            draw_arrow(
                surface,
                (mid - 40.0, decision.y + decision.height),
                (mid - 90.0, on_true.y),
                ACTIVE_HIGHLIGHT,
            );
        }
        if step >= 3 {
            caption(surface, (mid, 240.0), "Output: Positive", p.success, 16.0);
        }
        Ok(())
    }

    fn info(&self, step: usize) -> Result<DisplayInfo, AnimationError> {
        ensure_step(self.kind(), step, self.max_steps())?;
        let value = if step > 0 { "number = 5" } else { "-" };
        Ok(DisplayInfo::new(value, stage_status(&Self::STAGES, step), 0))
    }

    fn log_message(&self, step: usize) -> Result<String, AnimationError> {
        ensure_step(self.kind(), step, self.max_steps())?;
        Ok(match step {
            0 => String::new(),
            1 => format!("Evaluating condition: {}", self.condition),
            2 => "Condition is TRUE, entering the if block".to_string(),
            3 => "printf(\"Positive\\n\") executed".to_string(),
            _ => "Conditional statement finished".to_string(),
        })
    }

    fn code_listing(&self) -> Vec<String> {
        lines(&Self::LISTING)
    }

    fn code_focus(&self, step: usize) -> Option<CodeFocus> {
        match step {
            1 | 2 => Some(CodeFocus::condition(2, true)),
            3 => Some(CodeFocus::line(3)),
            4 => Some(CodeFocus::line(6)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Oval,
    Rect,
    Diamond,
}

struct Element<'a> {
    shape: Shape,
    center: Point,
    size: (f64, f64),
    label: &'a str,
    /// First step on which the element is visible
    step: usize,
}

/// Start → process → decision → branches → end, revealed one element per step
#[derive(Debug, Clone)]
pub struct FlowchartAnimation {
    palette: &'static Palette,
    condition: String,
    show_paths: bool,
}

impl FlowchartAnimation {
    const STAGES: [&'static str; 6] = [
        "Ready",
        "Start",
        "Process",
        "Decision",
        "Path chosen",
        "End",
    ];
    const MESSAGES: [&'static str; 6] = [
        "",
        "Flow started",
        "First process step executed",
        "Reached the decision point",
        "A path was chosen",
        "Flow finished",
    ];

    pub fn new(palette: &'static Palette, config: &AnimationConfig) -> Self {
        FlowchartAnimation {
            palette,
            condition: config
                .condition
                .clone()
                .unwrap_or_else(|| "condition".to_string()),
            show_paths: config.show_paths.unwrap_or(false),
        }
    }

    fn elements(&self, mid: f64) -> [Element<'_>; 6] {
        [
            Element {
                shape: Shape::Oval,
                center: (mid, 60.0),
                size: (100.0, 40.0),
                label: "Start",
                step: 1,
            },
            Element {
                shape: Shape::Rect,
                center: (mid, 120.0),
                size: (120.0, 40.0),
                label: "Process 1",
                step: 2,
            },
            Element {
                shape: Shape::Diamond,
                center: (mid, 180.0),
                size: (100.0, 60.0),
                label: &self.condition,
                step: 3,
            },
            Element {
                shape: Shape::Rect,
                center: (mid - 80.0, 250.0),
                size: (80.0, 40.0),
                label: "TRUE",
                step: 4,
            },
            Element {
                shape: Shape::Rect,
                center: (mid + 80.0, 250.0),
                size: (80.0, 40.0),
                label: "FALSE",
                step: 4,
            },
            Element {
                shape: Shape::Oval,
                center: (mid, 310.0),
                size: (100.0, 40.0),
                label: "End",
                step: 5,
            },
        ]
    }

    fn draw_element(&self, surface: &mut dyn Surface, element: &Element<'_>, active: bool) {
        let p = self.palette;
        let fill = if active { p.warning } else { p.secondary };
        let paint = Paint::new(fill, Stroke::new(p.text, if active { 3.0 } else { 2.0 }));
        let (cx, cy) = element.center;
        let (w, h) = element.size;

        match element.shape {
            Shape::Oval => surface.ellipse(element.center, w, h, paint),
            Shape::Rect => surface.rect(Bounds::centered(cx, cy, w, h), paint),
            Shape::Diamond => surface.polygon(
                &[
                    (cx, cy - h / 2.0),
                    (cx + w / 2.0, cy),
                    (cx, cy + h / 2.0),
                    (cx - w / 2.0, cy),
                ],
                paint,
            ),
        }
        surface.text(
            element.center,
            element.label,
            TextStyle::centered(Rgba::WHITE, 12.0),
        );
    }
}

impl Animation for FlowchartAnimation {
    fn kind(&self) -> AnimationKind {
        AnimationKind::Flowchart
    }

    fn max_steps(&self) -> usize {
        6
    }

    fn render(&self, surface: &mut dyn Surface, step: usize) -> Result<(), AnimationError> {
        ensure_step(self.kind(), step, self.max_steps())?;
        let p = self.palette;
        draw_background(surface, p);
        draw_title(surface, p, "Flowchart");

        let (width, _) = surface.size();
        let mid = width / 2.0;

        for element in self.elements(mid).iter().filter(|e| step >= e.step) {
            self.draw_element(surface, element, step == element.step);
        }

        if step >= 2 {
            draw_arrow(surface, (mid, 80.0), (mid, 100.0), INACTIVE);
        }
        if step >= 3 {
            draw_arrow(surface, (mid, 140.0), (mid, 150.0), INACTIVE);
        }
        if step >= 4 {
            draw_arrow(surface, (mid - 30.0, 210.0), (mid - 80.0, 230.0), INACTIVE);
            draw_arrow(surface, (mid + 30.0, 210.0), (mid + 80.0, 230.0), INACTIVE);
            if self.show_paths {
                label(surface, (mid - 95.0, 205.0), "yes", p.success, 11.0);
                label(surface, (mid + 70.0, 205.0), "no", p.danger, 11.0);
            }
        }
        Ok(())
    }

    fn info(&self, step: usize) -> Result<DisplayInfo, AnimationError> {
        ensure_step(self.kind(), step, self.max_steps())?;
        Ok(DisplayInfo::new("-", stage_status(&Self::STAGES, step), 0))
    }

    fn log_message(&self, step: usize) -> Result<String, AnimationError> {
        ensure_step(self.kind(), step, self.max_steps())?;
        Ok(stage_message(&Self::MESSAGES, step))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{palette, Theme};
    use crate::render::{DrawCommand, DrawList};

    #[test]
    fn test_conditional_uses_configured_condition() {
        let config = AnimationConfig {
            condition: Some("x >= 10".into()),
            ..AnimationConfig::default()
        };
        let anim = ConditionalAnimation::new(palette(Theme::Classic), &config);
        let mut frame = DrawList::new();
        anim.render(&mut frame, 0).unwrap();

        assert!(frame.contains_text("x >= 10 ?"));
        assert!(!frame.contains_text("TRUE"));
        assert_eq!(anim.log_message(1).unwrap(), "Evaluating condition: x >= 10");
    }

    #[test]
    fn test_conditional_marks_condition_line_true() {
        let anim = ConditionalAnimation::new(palette(Theme::Classic), &AnimationConfig::default());
        let focus = anim.code_focus(1).unwrap();
        assert_eq!(focus.lines, vec![2]);
        assert_eq!(focus.condition, Some(true));
        assert_eq!(anim.info(4).unwrap().status, "if block running");
    }

    #[test]
    fn test_flowchart_reveals_elements_by_step() {
        let anim = FlowchartAnimation::new(palette(Theme::Classic), &AnimationConfig::default());

        let mut early = DrawList::new();
        anim.render(&mut early, 2).unwrap();
        assert!(early.contains_text("Process 1"));
        assert!(!early.contains_text("condition"));

        let mut late = DrawList::new();
        anim.render(&mut late, 6).unwrap();
        let diamonds = late
            .commands()
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Polygon { .. }))
            .count();
        assert_eq!(diamonds, 1);
        assert!(late.contains_text("End"));
        assert_eq!(anim.log_message(6).unwrap(), "");
    }

    #[test]
    fn test_flowchart_path_labels_are_optional() {
        let config = AnimationConfig {
            show_paths: Some(true),
            ..AnimationConfig::default()
        };
        let with_paths = FlowchartAnimation::new(palette(Theme::Lotr), &config);
        let mut frame = DrawList::new();
        with_paths.render(&mut frame, 4).unwrap();
        assert!(frame.contains_text("yes"));

        let plain = FlowchartAnimation::new(palette(Theme::Lotr), &AnimationConfig::default());
        let mut frame = DrawList::new();
        plain.render(&mut frame, 4).unwrap();
        assert!(!frame.contains_text("yes"));
    }
}
