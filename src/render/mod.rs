//! Drawing surface abstraction
//!
//! Animations never talk to a terminal directly. They issue immediate-mode
//! drawing calls against a [`Surface`] whose logical size is fixed at
//! [`CANVAS_WIDTH`] × [`CANVAS_HEIGHT`], with the origin in the top-left
//! corner and `y` growing downwards.
//!
//! - [`recording`]: [`DrawList`], a surface that records every call so a frame
//!   can be inspected, compared, or replayed onto a real backend later.
//!
//! The TUI replays a [`DrawList`] onto a ratatui canvas; see
//! `ui::panes::canvas`.

pub mod recording;

pub use recording::{DrawCommand, DrawList};

/// Logical canvas width shared by every animation
pub const CANVAS_WIDTH: f64 = 500.0;

/// Logical canvas height shared by every animation
pub const CANVAS_HEIGHT: f64 = 350.0;

/// A point in logical canvas coordinates
pub type Point = (f64, f64);

/// An RGBA colour. Alpha 255 is fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Rgba { r, g, b, a: 255 }
    }

    pub const fn gray(level: u8) -> Self {
        Rgba::rgb(level, level, level)
    }

    /// Same colour with a different alpha
    pub const fn with_alpha(self, a: u8) -> Self {
        Rgba { a, ..self }
    }

    /// Composite this colour over an opaque backdrop
    pub fn over(self, backdrop: Rgba) -> Rgba {
        let a = self.a as u16;
        let mix = |fg: u8, bg: u8| ((fg as u16 * a + bg as u16 * (255 - a)) / 255) as u8;
        Rgba::rgb(
            mix(self.r, backdrop.r),
            mix(self.g, backdrop.g),
            mix(self.b, backdrop.b),
        )
    }
}

/// Outline settings for a shape or a line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub weight: f32,
}

impl Stroke {
    pub const fn new(color: Rgba, weight: f32) -> Self {
        Stroke { color, weight }
    }
}

/// Fill and outline for a closed shape. `None` means "not painted".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Paint {
    pub fill: Option<Rgba>,
    pub stroke: Option<Stroke>,
}

impl Paint {
    pub const fn filled(color: Rgba) -> Self {
        Paint {
            fill: Some(color),
            stroke: None,
        }
    }

    pub const fn outlined(stroke: Stroke) -> Self {
        Paint {
            fill: None,
            stroke: Some(stroke),
        }
    }

    pub const fn new(fill: Rgba, stroke: Stroke) -> Self {
        Paint {
            fill: Some(fill),
            stroke: Some(stroke),
        }
    }
}

/// Horizontal anchor of a text run relative to its position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: Rgba,
    pub size: f32,
    pub align: Align,
}

impl TextStyle {
    pub const fn new(color: Rgba, size: f32, align: Align) -> Self {
        TextStyle { color, size, align }
    }

    pub const fn centered(color: Rgba, size: f32) -> Self {
        TextStyle::new(color, size, Align::Center)
    }
}

/// Axis-aligned rectangle in logical coordinates (top-left anchored)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Bounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size centred on `(cx, cy)`
    pub fn centered(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Bounds::new(cx - width / 2.0, cy - height / 2.0, width, height)
    }

    pub fn center(&self) -> Point {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Immediate-mode 2-D drawing surface
///
/// Implementors receive every primitive an animation draws for one frame.
/// Calls carry their full style so a surface never has to track pen state.
pub trait Surface {
    /// Logical size of the surface
    fn size(&self) -> (f64, f64) {
        (CANVAS_WIDTH, CANVAS_HEIGHT)
    }

    /// Clear the whole surface to a colour
    fn background(&mut self, color: Rgba);

    fn rect(&mut self, bounds: Bounds, paint: Paint);

    /// Ellipse with the given centre and full width/height
    fn ellipse(&mut self, center: Point, width: f64, height: f64, paint: Paint);

    /// Closed polygon through `points`
    fn polygon(&mut self, points: &[Point], paint: Paint);

    fn line(&mut self, from: Point, to: Point, stroke: Stroke);

    /// A single line of text; `at` is the anchor selected by `style.align`
    fn text(&mut self, at: Point, content: &str, style: TextStyle);
}
