//! The four gcc stages turning `main.c` into `main`
//!
//! Each stage takes two steps: on the even step it processes its input, on the
//! odd step its output file is written. Step 8 is the finished executable.

use crate::animation::draw::{caption, draw_arrow, draw_background, draw_title, label};
use crate::animation::palette::INACTIVE;
use crate::animation::{ensure_step, Animation, AnimationKind, CodeFocus, DisplayInfo, Palette};
use crate::errors::AnimationError;
use crate::render::{Bounds, Paint, Rgba, Stroke, Surface};

struct Stage {
    name: &'static str,
    summary: &'static str,
    input: &'static str,
    output: &'static str,
    details: &'static [&'static str],
    command: &'static str,
}

const STAGES: [Stage; 4] = [
    Stage {
        name: "Pre-processing",
        summary: "Expands macros and strips comments",
        input: "main.c",
        output: "main.i",
        details: &[
            "Pastes #include files in",
            "Expands macros",
            "Removes comments",
        ],
        command: "$ gcc -E main.c -o main.i  # Pre-processing",
    },
    Stage {
        name: "Compilation",
        summary: "Translates C into assembly",
        input: "main.i",
        output: "main.s",
        details: &["Checks syntax", "Emits assembly", "Applies optimizations"],
        command: "$ gcc -S main.i -o main.s  # Compilation",
    },
    Stage {
        name: "Assembly",
        summary: "Translates assembly into machine code",
        input: "main.s",
        output: "main.o",
        details: &[
            "Encodes machine instructions",
            "Writes an object file",
            "Leaves symbols unresolved",
        ],
        command: "$ gcc -c main.s -o main.o  # Assembly",
    },
    Stage {
        name: "Linking",
        summary: "Builds the final executable",
        input: "main.o",
        output: "main",
        details: &[
            "Resolves function calls",
            "Links libraries and startup code",
            "Writes the executable",
        ],
        command: "$ gcc main.o -o main       # Linking",
    },
];

const FILES: [(&str, Rgba); 5] = [
    ("main.c", Rgba::rgb(100, 200, 100)),
    ("main.i", Rgba::rgb(200, 200, 100)),
    ("main.s", Rgba::rgb(200, 100, 200)),
    ("main.o", Rgba::rgb(100, 100, 200)),
    ("main", Rgba::rgb(200, 100, 100)),
];

/// Contents of each file in [`FILES`], abbreviated
const PREVIEWS: [&[&str]; 5] = [
    &["#include <stdio.h>", "int main() {", "    printf(\"Hello World\");"],
    &["int printf(const char*, ...);", "int main() {", "    printf(\"Hello World\");"],
    &[".globl main", "main:  pushq %rbp", "       call printf"],
    &["01000101 01101100 01100110", "[machine code]", "[unresolved: printf]"],
    &["ELF 64-bit executable", "[symbols resolved]", "[startup code linked]"],
];

const FULL_BUILD: &str = "$ gcc main.c -o main       # Complete compilation";

const SOURCE: [&str; 5] = [
    "#include <stdio.h>",
    "int main() {",
    "    printf(\"Hello World\");",
    "    return 0;",
    "}",
];

#[derive(Debug, Clone)]
pub struct CompilationAnimation {
    palette: &'static Palette,
}

impl CompilationAnimation {
    pub fn new(palette: &'static Palette) -> Self {
        CompilationAnimation { palette }
    }

    /// Stage index and whether its output has been written
    fn position(step: usize) -> (usize, bool) {
        (step / 2, step % 2 == 1)
    }

    fn draw_pipeline(&self, surface: &mut dyn Surface, stage: usize) {
        let p = self.palette;
        let (x0, y0, w, h, gap) = (20.0, 50.0, 100.0, 36.0, 20.0);

        for (idx, item) in STAGES.iter().enumerate() {
            let x = x0 + idx as f64 * (w + gap);
            let (fill, text) = if idx == stage {
                (p.warning, Rgba::WHITE)
            } else if idx < stage {
                (p.success, Rgba::WHITE)
            } else {
                (Rgba::gray(200), p.text)
            };
            let bounds = Bounds::new(x, y0, w, h);
            surface.rect(bounds, Paint::new(fill, Stroke::new(p.text, 2.0)));
            caption(surface, bounds.center(), item.name, text, 10.0);

            if idx + 1 < STAGES.len() {
                let color = if idx < stage { p.success } else { INACTIVE };
                draw_arrow(surface, (x + w, y0 + h / 2.0), (x + w + gap, y0 + h / 2.0), color);
            }
        }
    }

    fn draw_files(&self, surface: &mut dyn Surface, stage: usize, written: bool) {
        let p = self.palette;
        let (x0, y0, w, h) = (20.0, 105.0, 80.0, 25.0);

        for (idx, (name, color)) in FILES.iter().enumerate() {
            let (active, done) = if idx == 0 {
                (stage == 0 && !written, stage > 0)
            } else {
                let created_by = idx - 1;
                (stage == created_by && written, stage > created_by)
            };
            let alpha = if done {
                255
            } else if active {
                200
            } else {
                100
            };
            let bounds = Bounds::new(x0 + idx as f64 * 96.0, y0, w, h);
            surface.rect(
                bounds,
                Paint::new(
                    color.with_alpha(alpha),
                    Stroke::new(p.text, if active { 2.0 } else { 1.0 }),
                ),
            );
            caption(surface, bounds.center(), name, p.text, 11.0);
        }
    }

    fn draw_details(&self, surface: &mut dyn Surface, idx: usize, item: &Stage) {
        let p = self.palette;
        let (width, _) = surface.size();
        let bounds = Bounds::new(20.0, 145.0, width - 40.0, 95.0);
        surface.rect(
            bounds,
            Paint::new(Rgba::WHITE.with_alpha(200), Stroke::new(p.primary, 2.0)),
        );

        let x = bounds.x + 10.0;
        label(surface, (x, bounds.y + 12.0), &format!("{}. {}", idx + 1, item.name), p.text, 14.0);
        label(surface, (x, bounds.y + 30.0), item.summary, p.secondary, 12.0);
        label(
            surface,
            (x, bounds.y + 46.0),
            &format!("Input: {} → Output: {}", item.input, item.output),
            p.text,
            11.0,
        );
        for (row, detail) in item.details.iter().enumerate() {
            label(
                surface,
                (x + 5.0, bounds.y + 62.0 + row as f64 * 12.0),
                &format!("• {detail}"),
                p.text,
                10.0,
            );
        }
    }

    fn draw_preview(&self, surface: &mut dyn Surface, file: usize) {
        let p = self.palette;
        let (width, _) = surface.size();
        let bounds = Bounds::new(20.0, 248.0, width - 40.0, 52.0);
        surface.rect(bounds, Paint::new(p.code_bg, Stroke::new(p.text, 1.0)));
        for (row, text) in PREVIEWS[file].iter().enumerate() {
            label(
                surface,
                (bounds.x + 6.0, bounds.y + 10.0 + row as f64 * 14.0),
                text,
                Rgba::gray(200),
                10.0,
            );
        }
    }

    fn draw_command(&self, surface: &mut dyn Surface, command: &str) {
        let p = self.palette;
        let (width, height) = surface.size();
        let bounds = Bounds::new(10.0, height - 42.0, width - 20.0, 30.0);
        surface.rect(bounds, Paint::new(p.terminal_bg, Stroke::new(p.text, 1.0)));
        label(
            surface,
            (bounds.x + 5.0, bounds.center().1),
            command,
            Rgba::rgb(100, 255, 100),
            11.0,
        );
    }
}

impl Animation for CompilationAnimation {
    fn kind(&self) -> AnimationKind {
        AnimationKind::Compilation
    }

    fn max_steps(&self) -> usize {
        STAGES.len() * 2
    }

    fn render(&self, surface: &mut dyn Surface, step: usize) -> Result<(), AnimationError> {
        ensure_step(self.kind(), step, self.max_steps())?;
        let p = self.palette;
        draw_background(surface, p);
        draw_title(surface, p, "C Compilation Process");

        let (stage, written) = Self::position(step);
        self.draw_pipeline(surface, stage);
        self.draw_files(surface, stage, written);

        match STAGES.get(stage) {
            Some(item) => {
                self.draw_details(surface, stage, item);
                self.draw_preview(surface, stage + usize::from(written));
                self.draw_command(surface, item.command);
            }
            None => {
                let (width, _) = surface.size();
                caption(surface, (width / 2.0, 190.0), "Executable ready", p.success, 18.0);
                self.draw_preview(surface, FILES.len() - 1);
                self.draw_command(surface, FULL_BUILD);
            }
        }
        Ok(())
    }

    fn info(&self, step: usize) -> Result<DisplayInfo, AnimationError> {
        ensure_step(self.kind(), step, self.max_steps())?;
        let (stage, written) = Self::position(step);
        Ok(match STAGES.get(stage) {
            Some(item) if written => {
                DisplayInfo::new(item.output, format!("{} done", item.name), stage)
            }
            Some(item) => DisplayInfo::new(item.input, format!("{} running", item.name), stage),
            None => DisplayInfo::new("Executable ready", "Compilation complete", STAGES.len()),
        })
    }

    fn log_message(&self, step: usize) -> Result<String, AnimationError> {
        ensure_step(self.kind(), step, self.max_steps())?;
        if step == 0 {
            return Ok(String::new());
        }
        let (stage, written) = Self::position(step);
        Ok(match STAGES.get(stage) {
            Some(item) if written => format!("{} done, {} written", item.name, item.output),
            Some(item) => format!("{} started, processing {}", item.name, item.input),
            None => "Compilation finished, the executable is ready".to_string(),
        })
    }

    fn code_listing(&self) -> Vec<String> {
        SOURCE.iter().map(|line| line.to_string()).collect()
    }

    fn code_focus(&self, step: usize) -> Option<CodeFocus> {
        // Pre-processing only touches the directive; later stages the whole unit
        match Self::position(step) {
            (0, _) if step > 0 => Some(CodeFocus::line(1)),
            (1..=3, _) => Some(CodeFocus {
                lines: (2..=SOURCE.len()).collect(),
                condition: None,
            }),
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
    fn test_stage_progression() {
        let anim = CompilationAnimation::new(palette(Theme::Classic));
        assert_eq!(anim.max_steps(), 8);

        let info = anim.info(2).unwrap();
        assert_eq!(info.current_value, "main.i");
        assert_eq!(info.status, "Compilation running");

        let info = anim.info(3).unwrap();
        assert_eq!(info.current_value, "main.s");
        assert_eq!(info.iteration, 1);

        assert_eq!(anim.info(8).unwrap().status, "Compilation complete");
    }

    #[test]
    fn test_log_lines() {
        let anim = CompilationAnimation::new(palette(Theme::Classic));
        assert_eq!(anim.log_message(0).unwrap(), "");
        assert_eq!(
            anim.log_message(1).unwrap(),
            "Pre-processing done, main.i written"
        );
        assert_eq!(
            anim.log_message(6).unwrap(),
            "Linking started, processing main.o"
        );
    }

    #[test]
    fn test_frames_show_the_matching_command() {
        let anim = CompilationAnimation::new(palette(Theme::Lotr));

        let mut frame = DrawList::new();
        anim.render(&mut frame, 4).unwrap();
        assert!(frame.contains_text("gcc -c main.s -o main.o"));
        assert!(frame.contains_text("3. Assembly"));

        let mut done = DrawList::new();
        anim.render(&mut done, 8).unwrap();
        assert!(done.contains_text("Executable ready"));
        assert!(done.contains_text("Complete compilation"));
    }
}
