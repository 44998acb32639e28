//! Animation canvas pane
//!
//! Replays a recorded frame onto a ratatui [`Canvas`]. The logical canvas is
//! 500 × 350 with `y` growing downwards; ratatui's canvas grows upwards, so
//! every `y` is flipped on the way in. Terminals have no alpha channel, so
//! translucent colours are composited over the frame background first, and
//! filled shapes become horizontal hatching dense enough to read as solid
//! under the Braille marker.

use crate::render::{
    Align, Bounds, DrawList, Paint, Point, Rgba, Stroke, Surface, TextStyle, CANVAS_HEIGHT,
    CANVAS_WIDTH,
};
use crate::ui::theme::{to_color, UiTheme};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders,
    },
    Frame,
};

/// Vertical distance between fill hatch lines, in logical units
const FILL_SPACING: f64 = 2.0;

/// Segments used to approximate an ellipse outline
const ELLIPSE_SEGMENTS: usize = 48;

struct Label {
    x: f64,
    y: f64,
    text: String,
    color: Color,
}

/// [`Surface`] that turns drawing calls into canvas lines and labels
pub struct CanvasPainter {
    backdrop: Rgba,
    /// Logical width of one terminal column
    char_width: f64,
    lines: Vec<CanvasLine>,
    labels: Vec<Label>,
}

impl CanvasPainter {
    /// `columns` is the inner width of the pane in terminal cells
    pub fn new(columns: u16) -> Self {
        CanvasPainter {
            backdrop: Rgba::WHITE,
            char_width: CANVAS_WIDTH / f64::from(columns.max(1)),
            lines: Vec::new(),
            labels: Vec::new(),
        }
    }

    pub fn from_frame(frame: &DrawList, columns: u16) -> Self {
        let mut painter = CanvasPainter::new(columns);
        frame.replay(&mut painter);
        painter
    }

    pub fn backdrop(&self) -> Rgba {
        self.backdrop
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn label_texts(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(|label| label.text.as_str())
    }

    fn color(&self, color: Rgba) -> Color {
        to_color(color.over(self.backdrop))
    }

    fn segment(&mut self, from: Point, to: Point, color: Color) {
        self.lines.push(CanvasLine::new(
            from.0,
            CANVAS_HEIGHT - from.1,
            to.0,
            CANVAS_HEIGHT - to.1,
            color,
        ));
    }

    fn outline(&mut self, points: &[Point], stroke: Stroke) {
        let color = self.color(stroke.color);
        for (i, &from) in points.iter().enumerate() {
            let to = points[(i + 1) % points.len()];
            self.segment(from, to, color);
        }
    }

    /// Even-odd scanline fill of a closed polygon
    fn fill(&mut self, points: &[Point], fill: Rgba) {
        if points.len() < 3 {
            return;
        }
        let color = self.color(fill);
        let (top, bottom) = points
            .iter()
            .fold((f64::MAX, f64::MIN), |(lo, hi), p| (lo.min(p.1), hi.max(p.1)));

        let mut y = top;
        while y <= bottom {
            let mut crossings: Vec<f64> = Vec::new();
            for (i, &(x1, y1)) in points.iter().enumerate() {
                let (x2, y2) = points[(i + 1) % points.len()];
                if (y1 <= y && y < y2) || (y2 <= y && y < y1) {
                    crossings.push(x1 + (y - y1) / (y2 - y1) * (x2 - x1));
                }
            }
            crossings.sort_by(|a, b| a.total_cmp(b));
            for pair in crossings.chunks_exact(2) {
                self.segment((pair[0], y), (pair[1], y), color);
            }
            y += FILL_SPACING;
        }
    }

    fn shape(&mut self, points: &[Point], paint: Paint) {
        if let Some(fill) = paint.fill {
            self.fill(points, fill);
        }
        if let Some(stroke) = paint.stroke {
            self.outline(points, stroke);
        }
    }
}

impl Surface for CanvasPainter {
    fn background(&mut self, color: Rgba) {
        self.backdrop = color.over(Rgba::WHITE);
        self.lines.clear();
        self.labels.clear();
    }

    fn rect(&mut self, bounds: Bounds, paint: Paint) {
        let Bounds {
            x,
            y,
            width,
            height,
        } = bounds;
        let corners = [(x, y), (x + width, y), (x + width, y + height), (x, y + height)];
        self.shape(&corners, paint);
    }

    fn ellipse(&mut self, center: Point, width: f64, height: f64, paint: Paint) {
        let (rx, ry) = (width / 2.0, height / 2.0);
        let points: Vec<Point> = (0..ELLIPSE_SEGMENTS)
            .map(|i| {
                let angle = i as f64 / ELLIPSE_SEGMENTS as f64 * std::f64::consts::TAU;
                (center.0 + rx * angle.cos(), center.1 + ry * angle.sin())
            })
            .collect();
        self.shape(&points, paint);
    }

    fn polygon(&mut self, points: &[Point], paint: Paint) {
        self.shape(points, paint);
    }

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) {
        let color = self.color(stroke.color);
        self.segment(from, to, color);
    }

    fn text(&mut self, at: Point, content: &str, style: TextStyle) {
        let width = content.chars().count() as f64 * self.char_width;
        let x = match style.align {
            Align::Left => at.0,
            Align::Center => at.0 - width / 2.0,
            Align::Right => at.0 - width,
        };
        self.labels.push(Label {
            x: x.clamp(0.0, CANVAS_WIDTH),
            y: CANVAS_HEIGHT - at.1,
            text: content.to_string(),
            color: self.color(style.color),
        });
    }
}

/// Render the animation pane
pub fn render_canvas_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    drawing: &DrawList,
    theme: &UiTheme,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused));

    let painter = CanvasPainter::from_frame(drawing, area.width.saturating_sub(2));
    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .background_color(to_color(painter.backdrop()))
        .x_bounds([0.0, CANVAS_WIDTH])
        .y_bounds([0.0, CANVAS_HEIGHT])
        .paint(|ctx| {
            for line in &painter.lines {
                ctx.draw(line);
            }
            ctx.layer();
            for label in &painter.labels {
                ctx.print(
                    label.x,
                    label.y,
                    Span::styled(
                        label.text.clone(),
                        Style::default().fg(label.color).add_modifier(Modifier::BOLD),
                    ),
                );
            }
        });

    frame.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_y_axis_is_flipped() {
        let mut painter = CanvasPainter::new(100);
        painter.line((0.0, 0.0), (10.0, 50.0), Stroke::new(Rgba::gray(0), 1.0));

        let line = &painter.lines[0];
        assert_eq!(line.y1, CANVAS_HEIGHT);
        assert_eq!(line.y2, CANVAS_HEIGHT - 50.0);
    }

    #[test]
    fn test_background_resets_frame() {
        let mut painter = CanvasPainter::new(100);
        painter.text((10.0, 10.0), "old", TextStyle::centered(Rgba::gray(0), 12.0));
        painter.background(Rgba::rgb(10, 20, 30));

        assert_eq!(painter.line_count(), 0);
        assert_eq!(painter.label_texts().count(), 0);
        assert_eq!(painter.backdrop(), Rgba::rgb(10, 20, 30));
    }

    #[test]
    fn test_filled_rect_is_hatched() {
        let mut painter = CanvasPainter::new(100);
        painter.rect(Bounds::new(0.0, 0.0, 20.0, 10.0), Paint::filled(Rgba::rgb(255, 0, 0)));

        // one hatch per FILL_SPACING rows, no outline
        assert!(painter.line_count() >= 5);
        assert!(painter
            .lines
            .iter()
            .all(|line| line.color == Color::Rgb(255, 0, 0)));
    }

    #[test]
    fn test_translucent_colours_are_composited() {
        let mut painter = CanvasPainter::new(100);
        painter.background(Rgba::gray(0));
        painter.line(
            (0.0, 0.0),
            (1.0, 1.0),
            Stroke::new(Rgba::rgb(255, 0, 0).with_alpha(128), 1.0),
        );
        assert_eq!(painter.lines[0].color, Color::Rgb(128, 0, 0));
    }

    #[test]
    fn test_centered_text_is_shifted_left() {
        let mut painter = CanvasPainter::new(50);
        painter.text((250.0, 100.0), "abcd", TextStyle::centered(Rgba::gray(0), 12.0));

        let label = &painter.labels[0];
        assert_eq!(label.x, 250.0 - 2.0 * (CANVAS_WIDTH / 50.0));
        assert_eq!(label.y, CANVAS_HEIGHT - 100.0);
    }
}
