use crate::animation::draw::{caption, draw_background, draw_title, label};
use crate::animation::{
    ensure_step, Animation, AnimationConfig, AnimationKind, CodeFocus, DisplayInfo, Palette,
};
use crate::errors::AnimationError;
use crate::render::{Bounds, Paint, Rgba, Stroke, Surface};

const DEFAULT_TYPES: [&str; 3] = ["int", "float", "char"];

/// One declaration drawn as a memory box
#[derive(Debug, Clone, PartialEq)]
struct Declaration {
    c_type: String,
    name: String,
    value: String,
    bytes: usize,
}

impl Declaration {
    fn for_type(c_type: &str) -> Self {
        let (name, value, bytes) = match c_type {
            "int" => ("number", "10", 4),
            "float" => ("pi", "3.14", 4),
            "char" => ("letter", "'A'", 1),
            "double" => ("ratio", "2.71828", 8),
            "long" => ("big", "100000L", 8),
            "short" => ("small", "7", 2),
            "_Bool" | "bool" => ("flag", "1", 1),
            "unsigned" | "unsigned int" => ("count", "42u", 4),
            _ => ("value", "0", 4),
        };
        Declaration {
            c_type: c_type.to_string(),
            name: name.to_string(),
            value: value.to_string(),
            bytes,
        }
    }

    fn source(&self) -> String {
        format!("{} {} = {};", self.c_type, self.name, self.value)
    }
}

/// Declares one variable per step, then summarizes
#[derive(Debug, Clone)]
pub struct VariablesAnimation {
    palette: &'static Palette,
    declarations: Vec<Declaration>,
}

impl VariablesAnimation {
    pub fn new(palette: &'static Palette, config: &AnimationConfig) -> Self {
        let declarations = match &config.variables {
            Some(types) => types.iter().map(|t| Declaration::for_type(t)).collect(),
            None => DEFAULT_TYPES
                .iter()
                .map(|t| Declaration::for_type(t))
                .collect(),
        };
        VariablesAnimation {
            palette,
            declarations,
        }
    }

    fn box_color(&self, index: usize) -> Rgba {
        let p = self.palette;
        [p.danger, p.secondary, p.success, p.warning][index % 4]
    }
}

impl Animation for VariablesAnimation {
    fn kind(&self) -> AnimationKind {
        AnimationKind::Variables
    }

    fn max_steps(&self) -> usize {
        self.declarations.len() + 1
    }

    fn render(&self, surface: &mut dyn Surface, step: usize) -> Result<(), AnimationError> {
        ensure_step(self.kind(), step, self.max_steps())?;
        let p = self.palette;
        draw_background(surface, p);
        draw_title(surface, p, "Declaring Variables");

        let (width, height) = surface.size();
        let box_w = 200.0;
        // Shrink rows so long declaration lists still fit the canvas
        let rows = self.declarations.len().max(1) as f64;
        let row_h = ((height - 120.0) / rows).min(60.0);
        let box_h = (row_h - 10.0).max(12.0);

        for (idx, decl) in self.declarations.iter().enumerate().take(step) {
            let color = self.box_color(idx);
            let y = 60.0 + idx as f64 * row_h;
            let bounds = Bounds::new(width / 2.0 - box_w / 2.0, y, box_w, box_h);
            surface.rect(bounds, Paint::new(color.with_alpha(100), Stroke::new(color, 2.0)));
            caption(surface, bounds.center(), &decl.source(), p.text, 14.0);
            label(
                surface,
                (bounds.x + box_w + 10.0, bounds.center().1),
                &format!("{} byte{}", decl.bytes, if decl.bytes == 1 { "" } else { "s" }),
                color,
                10.0,
            );
        }

        if step == self.max_steps() {
            let total: usize = self.declarations.iter().map(|d| d.bytes).sum();
            caption(
                surface,
                (width / 2.0, height - 30.0),
                &format!("{} bytes reserved", total),
                p.accent,
                14.0,
            );
        }
        Ok(())
    }

    fn info(&self, step: usize) -> Result<DisplayInfo, AnimationError> {
        ensure_step(self.kind(), step, self.max_steps())?;
        if step == 0 {
            return Ok(DisplayInfo::new("-", "Ready", 0));
        }
        Ok(match self.declarations.get(step - 1) {
            Some(decl) => DisplayInfo::new(
                decl.value.clone(),
                format!("{} declared", decl.c_type),
                step,
            ),
            None => DisplayInfo::new("-", "All variables declared", self.declarations.len()),
        })
    }

    fn log_message(&self, step: usize) -> Result<String, AnimationError> {
        ensure_step(self.kind(), step, self.max_steps())?;
        if step == 0 {
            return Ok(String::new());
        }
        Ok(match self.declarations.get(step - 1) {
            Some(decl) => format!(
                "Declared {} variable {} ({} byte{})",
                decl.c_type,
                decl.name,
                decl.bytes,
                if decl.bytes == 1 { "" } else { "s" }
            ),
            None => "All variables declared".to_string(),
        })
    }

    fn code_listing(&self) -> Vec<String> {
        self.declarations.iter().map(Declaration::source).collect()
    }

    fn code_focus(&self, step: usize) -> Option<CodeFocus> {
        (1..=self.declarations.len())
            .contains(&step)
            .then(|| CodeFocus::line(step))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{palette, Theme};
    use crate::render::DrawList;

    #[test]
    fn test_defaults_declare_three_variables() {
        let anim = VariablesAnimation::new(palette(Theme::Classic), &AnimationConfig::default());
        assert_eq!(anim.max_steps(), 4);
        assert_eq!(anim.code_listing()[1], "float pi = 3.14;");
        assert_eq!(anim.info(3).unwrap().current_value, "'A'");
        assert_eq!(anim.log_message(3).unwrap(), "Declared char variable letter (1 byte)");
        assert_eq!(anim.info(4).unwrap().status, "All variables declared");
        assert_eq!(anim.code_focus(4), None);
    }

    #[test]
    fn test_configured_types() {
        let config = AnimationConfig {
            variables: Some(vec!["double".into(), "wchar_t".into()]),
            ..AnimationConfig::default()
        };
        let anim = VariablesAnimation::new(palette(Theme::Lotr), &config);
        assert_eq!(anim.max_steps(), 3);
        assert_eq!(anim.code_listing()[1], "wchar_t value = 0;");

        let mut frame = DrawList::new();
        anim.render(&mut frame, 3).unwrap();
        assert!(frame.contains_text("double ratio = 2.71828;"));
        assert!(frame.contains_text("12 bytes reserved"));
    }

    #[test]
    fn test_boxes_appear_one_per_step() {
        let anim = VariablesAnimation::new(palette(Theme::Classic), &AnimationConfig::default());
        let mut frame = DrawList::new();
        anim.render(&mut frame, 1).unwrap();
        assert!(frame.contains_text("int number = 10;"));
        assert!(!frame.contains_text("float"));
    }
}
