//! Recording surface
//!
//! [`DrawList`] stores drawing calls instead of executing them. The controller
//! renders every frame into a fresh list first, so a variant that fails
//! half-way through never leaves a partial frame on screen.

use super::{Bounds, Paint, Point, Rgba, Stroke, Surface, TextStyle};

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Background(Rgba),
    Rect {
        bounds: Bounds,
        paint: Paint,
    },
    Ellipse {
        center: Point,
        width: f64,
        height: f64,
        paint: Paint,
    },
    Polygon {
        points: Vec<Point>,
        paint: Paint,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Text {
        at: Point,
        content: String,
        style: TextStyle,
    },
}

/// An ordered list of drawing calls making up one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        DrawList {
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The most recent background colour, if any was set
    pub fn background_color(&self) -> Option<Rgba> {
        self.commands.iter().rev().find_map(|cmd| match cmd {
            DrawCommand::Background(color) => Some(*color),
            _ => None,
        })
    }

    /// All text runs in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
    }

    /// Whether any text run contains `needle`
    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.contains(needle))
    }

    /// Replay every recorded call onto another surface
    pub fn replay(&self, target: &mut dyn Surface) {
        for cmd in &self.commands {
            match cmd {
                DrawCommand::Background(color) => target.background(*color),
                DrawCommand::Rect { bounds, paint } => target.rect(*bounds, *paint),
                DrawCommand::Ellipse {
                    center,
                    width,
                    height,
                    paint,
                } => target.ellipse(*center, *width, *height, *paint),
                DrawCommand::Polygon { points, paint } => target.polygon(points, *paint),
                DrawCommand::Line { from, to, stroke } => target.line(*from, *to, *stroke),
                DrawCommand::Text { at, content, style } => target.text(*at, content, *style),
            }
        }
    }
}

impl Surface for DrawList {
    fn background(&mut self, color: Rgba) {
        // Everything drawn before a background clear is invisible
        self.commands.clear();
        self.commands.push(DrawCommand::Background(color));
    }

    fn rect(&mut self, bounds: Bounds, paint: Paint) {
        self.commands.push(DrawCommand::Rect { bounds, paint });
    }

    fn ellipse(&mut self, center: Point, width: f64, height: f64, paint: Paint) {
        self.commands.push(DrawCommand::Ellipse {
            center,
            width,
            height,
            paint,
        });
    }

    fn polygon(&mut self, points: &[Point], paint: Paint) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            paint,
        });
    }

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke });
    }

    fn text(&mut self, at: Point, content: &str, style: TextStyle) {
        self.commands.push(DrawCommand::Text {
            at,
            content: content.to_string(),
            style,
        });
    }
}
