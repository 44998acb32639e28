//! Memory layout animations: a contiguous array and a single tracked cell

use super::slot_address;
use crate::animation::draw::{caption, draw_background, draw_title, label};
use crate::animation::kind::DEFAULT_ARRAY_SIZE;
use crate::animation::{
    ensure_step, Animation, AnimationConfig, AnimationKind, CodeFocus, DisplayInfo, Palette,
    MAX_CONFIGURED_COUNT,
};
use crate::errors::AnimationError;
use crate::render::{Bounds, Paint, Rgba, Stroke, Surface};

/// Array cells initialised left to right, then `*(numbers + 2)`
#[derive(Debug, Clone)]
pub struct ArrayMemoryAnimation {
    palette: &'static Palette,
    size: usize,
    show_addresses: bool,
}

impl ArrayMemoryAnimation {
    pub fn new(palette: &'static Palette, config: &AnimationConfig) -> Self {
        ArrayMemoryAnimation {
            palette,
            size: config
                .array_size
                .unwrap_or(DEFAULT_ARRAY_SIZE)
                .min(MAX_CONFIGURED_COUNT),
            show_addresses: config.show_indexing.unwrap_or(false),
        }
    }

    fn initializer(&self) -> String {
        let values: Vec<String> = (1..=self.size).map(|v| v.to_string()).collect();
        format!("int numbers[{}] = {{{}}};", self.size, values.join(", "))
    }

    /// Index whose pointer arithmetic is shown, clamped for short arrays
    fn read_index(&self) -> usize {
        2.min(self.size.saturating_sub(1))
    }
}

impl Animation for ArrayMemoryAnimation {
    fn kind(&self) -> AnimationKind {
        AnimationKind::ArrayMemory
    }

    fn max_steps(&self) -> usize {
        self.size.saturating_add(2)
    }

    fn render(&self, surface: &mut dyn Surface, step: usize) -> Result<(), AnimationError> {
        ensure_step(self.kind(), step, self.max_steps())?;
        let p = self.palette;
        draw_background(surface, p);
        draw_title(surface, p, "Array Memory Layout");

        let (width, _) = surface.size();
        if step >= 1 {
            caption(surface, (width / 2.0, 55.0), &self.initializer(), p.text, 14.0);
        }

        let cell_w = (width - 40.0) / self.size.max(1) as f64;
        let cell_w = cell_w.min(50.0);
        let cell_h = 40.0;
        let start_x = (width - self.size as f64 * cell_w) / 2.0;
        let start_y = 120.0;

        for idx in (0..self.size).take(step.saturating_sub(1)) {
            let x = start_x + idx as f64 * cell_w;
            let bounds = Bounds::new(x, start_y, cell_w, cell_h);
            surface.rect(
                bounds,
                Paint::new(p.secondary.with_alpha(150), Stroke::new(p.text, 2.0)),
            );
            caption(surface, bounds.center(), &(idx + 1).to_string(), p.text, 16.0);
            caption(
                surface,
                (bounds.center().0, start_y - 15.0),
                &format!("[{idx}]"),
                p.warning,
                12.0,
            );
            if self.show_addresses {
                caption(
                    surface,
                    (bounds.center().0, start_y + cell_h + 15.0),
                    &slot_address(idx),
                    Rgba::gray(100),
                    10.0,
                );
            }
        }

        if step >= self.size + 2 && self.size > 0 {
            let index = self.read_index();
            caption(
                surface,
                (width / 2.0, start_y + cell_h + 50.0),
                &format!("numbers[{index}] = *(numbers + {index})"),
                p.accent,
                12.0,
            );
        }
        Ok(())
    }

    fn info(&self, step: usize) -> Result<DisplayInfo, AnimationError> {
        ensure_step(self.kind(), step, self.max_steps())?;
        Ok(match step {
            0 => DisplayInfo::new("-", "Ready", 0),
            1 => DisplayInfo::new("-", "Array declared", 0),
            s if s <= self.size + 1 => {
                let idx = s - 2;
                DisplayInfo::new(
                    format!("numbers[{idx}] = {}", idx + 1),
                    format!("Element {idx} initialized"),
                    idx + 1,
                )
            }
            _ => DisplayInfo::new("-", "Array complete", self.size),
        })
    }

    fn log_message(&self, step: usize) -> Result<String, AnimationError> {
        ensure_step(self.kind(), step, self.max_steps())?;
        Ok(match step {
            0 => String::new(),
            1 => format!("Array declared: int numbers[{}]", self.size),
            s if s <= self.size + 1 => {
                let idx = s - 2;
                format!(
                    "numbers[{idx}] = {} assigned (address: {})",
                    idx + 1,
                    slot_address(idx)
                )
            }
            _ => "Array initialization complete".to_string(),
        })
    }

    fn code_listing(&self) -> Vec<String> {
        let index = self.read_index();
        vec![
            self.initializer(),
            format!("int third = *(numbers + {index});"),
        ]
    }

    fn code_focus(&self, step: usize) -> Option<CodeFocus> {
        match step {
            0 => None,
            s if s <= self.size + 1 => Some(CodeFocus::line(1)),
            _ => Some(CodeFocus::line(2)),
        }
    }
}

const MEMORY_CELLS: usize = 8;

/// Slot of the tracked variable among the drawn cells
const TRACKED_CELL: usize = 2;

/// A row of memory cells with one variable written and read in turn
#[derive(Debug, Clone)]
pub struct MemoryViewAnimation {
    palette: &'static Palette,
    max_steps: usize,
    show_addresses: bool,
    variable: String,
}

impl MemoryViewAnimation {
    pub fn new(palette: &'static Palette, config: &AnimationConfig) -> Self {
        MemoryViewAnimation {
            palette,
            max_steps: AnimationKind::MemoryView.max_steps(config),
            show_addresses: config.show_addresses.unwrap_or(false),
            variable: config
                .track_variable
                .clone()
                .unwrap_or_else(|| "i".to_string()),
        }
    }

    /// Value stored in the tracked variable at `step`
    fn value(step: usize) -> usize {
        step.saturating_sub(1) / 2
    }
}

impl Animation for MemoryViewAnimation {
    fn kind(&self) -> AnimationKind {
        AnimationKind::MemoryView
    }

    fn max_steps(&self) -> usize {
        self.max_steps
    }

    fn render(&self, surface: &mut dyn Surface, step: usize) -> Result<(), AnimationError> {
        ensure_step(self.kind(), step, self.max_steps())?;
        let p = self.palette;
        draw_background(surface, p);
        draw_title(surface, p, "Memory View");

        let cell_w = 50.0;
        let cell_h = 40.0;
        let start_x = 30.0;
        let y = 120.0;

        for idx in 0..MEMORY_CELLS {
            let x = start_x + idx as f64 * (cell_w + 5.0);
            let bounds = Bounds::new(x, y, cell_w, cell_h);
            let active = step > 0 && idx == TRACKED_CELL;

            let paint = if active {
                Paint::new(p.warning, Stroke::new(p.text, 3.0))
            } else {
                Paint::new(Rgba::gray(240), Stroke::new(Rgba::gray(200), 1.0))
            };
            surface.rect(bounds, paint);

            if active {
                caption(surface, bounds.center(), &Self::value(step).to_string(), p.text, 12.0);
                caption(surface, (bounds.center().0, y - 10.0), &self.variable, p.text, 10.0);
            }
            if self.show_addresses {
                caption(
                    surface,
                    (bounds.center().0, y + cell_h + 15.0),
                    &slot_address(idx),
                    Rgba::gray(100),
                    8.0,
                );
            }
        }

        if step > 0 {
            let (_, height) = surface.size();
            let access = if step % 2 == 1 { "write" } else { "read" };
            label(
                surface,
                (20.0, height - 40.0),
                &format!("{access} {} = {}", self.variable, Self::value(step)),
                p.secondary,
                12.0,
            );
        }
        Ok(())
    }

    fn info(&self, step: usize) -> Result<DisplayInfo, AnimationError> {
        ensure_step(self.kind(), step, self.max_steps())?;
        let value = Self::value(step);
        let status = if step == 0 {
            "Memory ready"
        } else {
            "Variable updated"
        };
        Ok(DisplayInfo::new(
            format!("{} = {}", self.variable, value),
            status,
            value,
        ))
    }

    fn log_message(&self, step: usize) -> Result<String, AnimationError> {
        ensure_step(self.kind(), step, self.max_steps())?;
        if step == 0 {
            return Ok(String::new());
        }
        let access = if step % 2 == 1 { "written" } else { "read" };
        Ok(format!(
            "Memory {access}: {} = {} at {}",
            self.variable,
            Self::value(step),
            slot_address(TRACKED_CELL)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{palette, Theme};
    use crate::render::DrawList;

    #[test]
    fn test_array_cells_fill_in_order() {
        let anim = ArrayMemoryAnimation::new(palette(Theme::Classic), &AnimationConfig::default());
        assert_eq!(anim.max_steps(), 7);

        let mut frame = DrawList::new();
        anim.render(&mut frame, 3).unwrap();
        assert!(frame.contains_text("[1]"));
        assert!(!frame.contains_text("[2]"));
        assert!(!frame.contains_text("*(numbers"));

        let mut last = DrawList::new();
        anim.render(&mut last, 7).unwrap();
        assert!(last.contains_text("numbers[2] = *(numbers + 2)"));
    }

    #[test]
    fn test_array_narration_includes_addresses() {
        let config = AnimationConfig {
            array_size: Some(3),
            show_indexing: Some(true),
            ..AnimationConfig::default()
        };
        let anim = ArrayMemoryAnimation::new(palette(Theme::Classic), &config);
        assert_eq!(anim.code_listing()[0], "int numbers[3] = {1, 2, 3};");
        assert_eq!(
            anim.log_message(3).unwrap(),
            "numbers[1] = 2 assigned (address: 0x3ec)"
        );
        assert_eq!(anim.info(5).unwrap().status, "Array complete");

        let mut frame = DrawList::new();
        anim.render(&mut frame, 2).unwrap();
        assert!(frame.contains_text("0x3e8"));
    }

    #[test]
    fn test_memory_view_alternates_write_and_read() {
        let config = AnimationConfig {
            track_variable: Some("count".into()),
            ..AnimationConfig::default()
        };
        let anim = MemoryViewAnimation::new(palette(Theme::Classic), &config);
        assert_eq!(anim.max_steps(), 6);
        assert_eq!(
            anim.log_message(3).unwrap(),
            "Memory written: count = 1 at 0x3f0"
        );
        assert_eq!(anim.log_message(4).unwrap(), "Memory read: count = 1 at 0x3f0");
        assert_eq!(anim.info(0).unwrap().current_value, "count = 0");
        assert_eq!(anim.info(5).unwrap().iteration, 2);
    }
}
