//! Whole-program animations: a minimal `main` and a function call

use super::{lines, stage_message, stage_status};
use crate::animation::draw::{caption, draw_background, draw_title, label};
use crate::animation::{ensure_step, Animation, AnimationKind, CodeFocus, DisplayInfo, Palette};
use crate::errors::AnimationError;
use crate::render::{Bounds, Paint, Rgba, Stroke, Surface};

const HELLO_WORLD: [&str; 5] = [
    "#include <stdio.h>",
    "int main() {",
    "    printf(\"Hello, World!\\n\");",
    "    return 0;",
    "}",
];

/// Three narrated stages of a hello-world program
#[derive(Debug, Clone)]
pub struct SimpleAnimation {
    palette: &'static Palette,
}

impl SimpleAnimation {
    const STAGES: [&'static str; 4] = ["Ready", "Starting", "printf running", "Exiting"];
    const MESSAGES: [&'static str; 4] = [
        "",
        "Program started, main() was called",
        "printf() executed",
        "Program ended with return 0",
    ];

    pub fn new(palette: &'static Palette) -> Self {
        SimpleAnimation { palette }
    }
}

impl Animation for SimpleAnimation {
    fn kind(&self) -> AnimationKind {
        AnimationKind::Simple
    }

    fn max_steps(&self) -> usize {
        3
    }

    fn render(&self, surface: &mut dyn Surface, step: usize) -> Result<(), AnimationError> {
        ensure_step(self.kind(), step, self.max_steps())?;
        let p = self.palette;
        draw_background(surface, p);
        draw_title(surface, p, "Program Execution");

        let (width, height) = surface.size();
        let rows = [
            (p.secondary, "1. Program starting..."),
            (p.success, "2. printf() is running"),
            (p.primary, "3. Program ends (return 0)"),
        ];
        for (idx, (color, text)) in rows.iter().enumerate().take(step) {
            let y = height / 2.0 - 60.0 + idx as f64 * 40.0;
            caption(surface, (width / 2.0, y), text, *color, 16.0);
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

    fn code_listing(&self) -> Vec<String> {
        lines(&HELLO_WORLD)
    }

    fn code_focus(&self, step: usize) -> Option<CodeFocus> {
        match step {
            1 => Some(CodeFocus::line(2)),
            2 => Some(CodeFocus::line(3)),
            3 => Some(CodeFocus::line(4)),
            _ => None,
        }
    }
}

/// Call stack growth and shrinkage around `add(5, 3)`
#[derive(Debug, Clone)]
pub struct FunctionCallAnimation {
    palette: &'static Palette,
}

impl FunctionCallAnimation {
    const STAGES: [&'static str; 6] = [
        "Ready",
        "main() started",
        "add() called",
        "Parameters copied",
        "Sum computed",
        "Value returned",
    ];
    const MESSAGES: [&'static str; 7] = [
        "",
        "main() started",
        "add(5, 3) called, a new frame is pushed",
        "Parameters copied onto the stack: a = 5, b = 3",
        "Computed 5 + 3 = 8",
        "8 returned to main(), the add() frame is popped",
        "main() stored the result: result = 8",
    ];
    const LISTING: [&'static str; 8] = [
        "int add(int a, int b) {",
        "    return a + b;",
        "}",
        "",
        "int main() {",
        "    int result = add(5, 3);",
        "    return 0;",
        "}",
    ];

    pub fn new(palette: &'static Palette) -> Self {
        FunctionCallAnimation { palette }
    }

    fn frame(surface: &mut dyn Surface, p: &Palette, bounds: Bounds, fill: Rgba, name: &str) {
        surface.rect(bounds, Paint::new(fill, Stroke::new(p.text, 2.0)));
        caption(surface, bounds.center(), name, Rgba::WHITE, 14.0);
    }
}

impl Animation for FunctionCallAnimation {
    fn kind(&self) -> AnimationKind {
        AnimationKind::FunctionCall
    }

    fn max_steps(&self) -> usize {
        6
    }

    fn render(&self, surface: &mut dyn Surface, step: usize) -> Result<(), AnimationError> {
        ensure_step(self.kind(), step, self.max_steps())?;
        let p = self.palette;
        draw_background(surface, p);
        draw_title(surface, p, "Function Call");

        let (width, _) = surface.size();
        let stack_x = 100.0;
        let stack_y = 120.0;
        let frame_h = 40.0;

        label(surface, (stack_x, stack_y + frame_h + 20.0), "call stack", p.text, 11.0);
        Self::frame(
            surface,
            p,
            Bounds::new(stack_x, stack_y, 150.0, frame_h),
            p.primary,
            "main()",
        );

        // The callee frame only exists between the call and the return
        let callee = Bounds::new(stack_x, stack_y - frame_h - 5.0, 150.0, frame_h);
        if (2..=5).contains(&step) {
            Self::frame(surface, p, callee, p.secondary, "add(5, 3)");
        }
        if (3..=5).contains(&step) {
            label(surface, (stack_x + 160.0, callee.y + 10.0), "a = 5", p.warning, 14.0);
            label(surface, (stack_x + 160.0, callee.y + 28.0), "b = 3", p.warning, 14.0);
        }
        if step >= 4 {
            label(surface, (stack_x + 160.0, stack_y - 10.0), "return 8", p.success, 14.0);
        }
        if step >= 5 {
            caption(
                surface,
                (width / 2.0, stack_y + frame_h + 60.0),
                "result = 8",
                p.accent,
                16.0,
            );
        }
        Ok(())
    }

    fn info(&self, step: usize) -> Result<DisplayInfo, AnimationError> {
        ensure_step(self.kind(), step, self.max_steps())?;
        let value = if step >= 4 { "return 8" } else { "-" };
        Ok(DisplayInfo::new(value, stage_status(&Self::STAGES, step), 0))
    }

    fn log_message(&self, step: usize) -> Result<String, AnimationError> {
        ensure_step(self.kind(), step, self.max_steps())?;
        Ok(stage_message(&Self::MESSAGES, step))
    }

    fn code_listing(&self) -> Vec<String> {
        lines(&Self::LISTING)
    }

    fn code_focus(&self, step: usize) -> Option<CodeFocus> {
        match step {
            1 => Some(CodeFocus::line(5)),
            2 | 6 => Some(CodeFocus::line(6)),
            3 => Some(CodeFocus::line(1)),
            4 | 5 => Some(CodeFocus::line(2)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{palette, Theme};
    use crate::render::DrawList;

    #[test]
    fn test_simple_reveals_stages_progressively() {
        let anim = SimpleAnimation::new(palette(Theme::Classic));
        let mut frame = DrawList::new();
        anim.render(&mut frame, 2).unwrap();

        assert!(frame.contains_text("printf() is running"));
        assert!(!frame.contains_text("return 0"));
        assert_eq!(anim.info(3).unwrap().status, "Exiting");
        assert_eq!(anim.log_message(0).unwrap(), "");
    }

    #[test]
    fn test_function_frame_pops_after_return() {
        let anim = FunctionCallAnimation::new(palette(Theme::Classic));

        let mut during = DrawList::new();
        anim.render(&mut during, 3).unwrap();
        assert!(during.contains_text("add(5, 3)"));
        assert!(during.contains_text("a = 5"));

        let mut after = DrawList::new();
        anim.render(&mut after, 6).unwrap();
        assert!(!after.contains_text("add(5, 3)"));
        assert!(after.contains_text("result = 8"));

        assert_eq!(anim.info(6).unwrap().status, "Completed");
        assert_eq!(anim.info(4).unwrap().current_value, "return 8");
    }

    #[test]
    fn test_out_of_range_step_is_an_error() {
        let anim = FunctionCallAnimation::new(palette(Theme::Lotr));
        assert!(anim.info(7).is_err());
        assert!(anim.render(&mut DrawList::new(), 7).is_err());
    }
}
