//! Shared drawing helpers for animation variants
//!
//! Free functions rather than a base type: variants hold no drawing state,
//! they only pass their [`Palette`] in.

use super::palette::{Palette, ACTIVE_HIGHLIGHT};
use crate::render::{Align, Bounds, Paint, Point, Rgba, Stroke, Surface, TextStyle};

/// Text colour for labels drawn on filled nodes
pub(crate) const NODE_LABEL: Rgba = Rgba::gray(230);

const ARROW_HEAD: f64 = 8.0;

pub(crate) fn draw_background(surface: &mut dyn Surface, palette: &Palette) {
    surface.background(palette.background);
}

pub(crate) fn draw_title(surface: &mut dyn Surface, palette: &Palette, title: &str) {
    let (width, _) = surface.size();
    surface.text(
        (width / 2.0, 15.0),
        title,
        TextStyle::centered(palette.text, 16.0),
    );
}

/// Visual state of a flow node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeState {
    pub active: bool,
    /// `Some` only on an active condition node; colours the outline
    pub condition: Option<bool>,
}

impl NodeState {
    pub(crate) const IDLE: NodeState = NodeState {
        active: false,
        condition: None,
    };
}

/// Rounded box with a centred, possibly multi-line label
pub(crate) fn draw_node(
    surface: &mut dyn Surface,
    palette: &Palette,
    bounds: Bounds,
    label: &str,
    state: NodeState,
) {
    let (fill, mut stroke) = if state.active {
        (palette.primary, Stroke::new(ACTIVE_HIGHLIGHT, 3.0))
    } else {
        let p = palette.primary;
        (
            Rgba::rgb(
                p.r.saturating_sub(20),
                p.g.saturating_sub(20),
                p.b.saturating_sub(20),
            ),
            Stroke::new(Rgba::gray(100), 1.5),
        )
    };

    if state.active {
        match state.condition {
            Some(true) => stroke = Stroke::new(palette.success, 4.0),
            Some(false) => stroke = Stroke::new(palette.danger, 4.0),
            None => {}
        }
    }

    surface.rect(bounds, Paint::new(fill, stroke));
    draw_multiline(
        surface,
        bounds.center(),
        label,
        TextStyle::centered(NODE_LABEL, 12.0),
    );
}

/// Draw `label` split on `\n`, vertically centred on `center`
pub(crate) fn draw_multiline(surface: &mut dyn Surface, center: Point, label: &str, style: TextStyle) {
    let lines: Vec<&str> = label.lines().collect();
    let line_height = style.size as f64 + 2.0;
    let top = center.1 - line_height * (lines.len().saturating_sub(1)) as f64 / 2.0;
    for (idx, line) in lines.iter().enumerate() {
        surface.text((center.0, top + idx as f64 * line_height), line, style);
    }
}

/// Straight arrow with a two-stroke head at `to`
pub(crate) fn draw_arrow(surface: &mut dyn Surface, from: Point, to: Point, color: Rgba) {
    let stroke = Stroke::new(color, 2.0);
    surface.line(from, to, stroke);

    let angle = (to.1 - from.1).atan2(to.0 - from.0);
    for side in [-1.0, 1.0] {
        // Head wings sit behind the tip, half a head-length to either side
        let dx = -ARROW_HEAD;
        let dy = side * ARROW_HEAD / 2.0;
        let wing = (
            to.0 + dx * angle.cos() - dy * angle.sin(),
            to.1 + dx * angle.sin() + dy * angle.cos(),
        );
        surface.line(to, wing, stroke);
    }
}

/// Active / true / false colour key along the bottom edge
pub(crate) fn draw_legend(surface: &mut dyn Surface, palette: &Palette) {
    let (_, height) = surface.size();
    let y = height - 40.0;
    let entries = [
        (20.0, ACTIVE_HIGHLIGHT, "Active step"),
        (140.0, palette.success, "Condition true"),
        (270.0, palette.danger, "Condition false"),
    ];
    for (x, color, label) in entries {
        surface.rect(Bounds::new(x, y - 5.0, 10.0, 10.0), Paint::filled(color));
        surface.text((x + 15.0, y), label, TextStyle::new(color, 11.0, Align::Left));
    }
}

/// Left-aligned text helper used by the listing-style variants
pub(crate) fn label(surface: &mut dyn Surface, at: Point, content: &str, color: Rgba, size: f32) {
    surface.text(at, content, TextStyle::new(color, size, Align::Left));
}

/// Centred text helper
pub(crate) fn caption(surface: &mut dyn Surface, at: Point, content: &str, color: Rgba, size: f32) {
    surface.text(at, content, TextStyle::centered(color, size));
}
