//! Loop animations
//!
//! `for-loop` and `while-loop` draw the same kind of flow diagram and derive
//! everything from a [`LoopShape`]: the for loop spends three steps per
//! iteration, the while loop two. `loop-comparison` is a fixed four-stage
//! side-by-side table.

use super::{lines, stage_message, stage_status};
use crate::animation::draw::{
    caption, draw_arrow, draw_background, draw_legend, draw_multiline, draw_node, draw_title,
    NodeState,
};
use crate::animation::kind::DEFAULT_ITERATIONS;
use crate::animation::palette::{ACTIVE_HIGHLIGHT, INACTIVE};
use crate::animation::{
    ensure_step, Animation, AnimationConfig, AnimationKind, CodeFocus, DisplayInfo, LoopPhase,
    LoopShape, Palette, MAX_CONFIGURED_COUNT,
};
use crate::errors::AnimationError;
use crate::render::{Bounds, Paint, Point, Rgba, Stroke, Surface, TextStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Node {
    Init,
    Condition,
    Body,
    Increment,
}

/// Node lit up for a phase, `None` before the loop starts
fn active_node(phase: LoopPhase, step: usize) -> Option<Node> {
    match phase {
        LoopPhase::Init if step == 0 => None,
        LoopPhase::Init => Some(Node::Init),
        LoopPhase::Condition { .. } | LoopPhase::Done { .. } => Some(Node::Condition),
        LoopPhase::Body { .. } => Some(Node::Body),
        LoopPhase::Increment { .. } => Some(Node::Increment),
    }
}

fn arrow_color(active: Option<Node>, from: Node) -> Rgba {
    if active == Some(from) {
        ACTIVE_HIGHLIGHT
    } else {
        INACTIVE
    }
}

fn condition_log(bound: usize, counter: usize) -> String {
    format!(
        "Condition: (i < {bound}) → ({counter} < {bound}) = {}",
        counter < bound
    )
}

fn loop_status(phase: LoopPhase, step: usize) -> String {
    match phase {
        LoopPhase::Init if step == 0 => "Ready".to_string(),
        LoopPhase::Init => "Initializing (i = 0)".to_string(),
        LoopPhase::Condition { iteration, .. } => format!("Checking condition (i = {iteration})"),
        LoopPhase::Body { iteration } => format!("Running body (i = {iteration})"),
        LoopPhase::Increment { iteration } => {
            format!("Incrementing (i = {iteration} → {})", iteration + 1)
        }
        LoopPhase::Done { .. } => "Completed".to_string(),
    }
}

/// Shared frame for both loop flow diagrams
struct Diagram<'a> {
    palette: &'a Palette,
    title: &'a str,
    nodes: Vec<(Node, Bounds, String)>,
    arrows: Vec<(Point, Point, Node)>,
}

impl Diagram<'_> {
    fn draw(&self, surface: &mut dyn Surface, shape: LoopShape, step: usize) {
        let p = self.palette;
        draw_background(surface, p);
        draw_title(surface, p, self.title);

        let phase = shape.phase(step);
        let active = active_node(phase, step);

        for (node, bounds, text) in &self.nodes {
            let is_active = active == Some(*node);
            let state = NodeState {
                active: is_active,
                condition: if is_active && *node == Node::Condition {
                    phase.condition_result()
                } else {
                    None
                },
            };
            draw_node(surface, p, *bounds, text, state);
        }

        for (from, to, source) in &self.arrows {
            draw_arrow(surface, *from, *to, arrow_color(active, *source));
        }

        let (width, _) = surface.size();
        if step > shape.init_cost {
            caption(
                surface,
                (width / 2.0, 280.0),
                &format!("i = {}", phase.counter()),
                p.warning,
                18.0,
            );
        }
        if phase.is_done() {
            caption(surface, (width / 2.0, 255.0), "loop exits", p.danger, 12.0);
        }
        draw_legend(surface, p);
    }
}

/// `for (int i = 0; i < n; i++)` as a flow diagram
#[derive(Debug, Clone)]
pub struct ForLoopAnimation {
    palette: &'static Palette,
    shape: LoopShape,
}

impl ForLoopAnimation {
    pub fn new(palette: &'static Palette, config: &AnimationConfig) -> Self {
        let bound = config
            .max_iterations
            .unwrap_or(DEFAULT_ITERATIONS)
            .min(MAX_CONFIGURED_COUNT);
        ForLoopAnimation {
            palette,
            shape: LoopShape::for_loop(bound),
        }
    }

    pub fn shape(&self) -> LoopShape {
        self.shape
    }

    fn diagram(&self) -> Diagram<'static> {
        let bound = self.shape.bound;
        Diagram {
            palette: self.palette,
            title: "For Loop - Flow Diagram",
            nodes: vec![
                (
                    Node::Init,
                    Bounds::centered(80.0, 90.0, 120.0, 60.0),
                    "Init\n(i = 0)".to_string(),
                ),
                (
                    Node::Condition,
                    Bounds::centered(280.0, 90.0, 120.0, 60.0),
                    format!("Condition\n(i < {bound} ?)"),
                ),
                (
                    Node::Body,
                    Bounds::centered(280.0, 180.0, 140.0, 60.0),
                    "Body\nprintf(\"i=%d\", i)".to_string(),
                ),
                (
                    Node::Increment,
                    Bounds::centered(80.0, 180.0, 120.0, 60.0),
                    "Increment\n(i++)".to_string(),
                ),
            ],
            arrows: vec![
                ((140.0, 90.0), (220.0, 90.0), Node::Init),
                ((280.0, 120.0), (280.0, 150.0), Node::Condition),
                ((210.0, 180.0), (140.0, 180.0), Node::Body),
                ((140.0, 160.0), (220.0, 110.0), Node::Increment),
            ],
        }
    }
}

impl Animation for ForLoopAnimation {
    fn kind(&self) -> AnimationKind {
        AnimationKind::ForLoop
    }

    fn max_steps(&self) -> usize {
        self.shape.last_step()
    }

    fn render(&self, surface: &mut dyn Surface, step: usize) -> Result<(), AnimationError> {
        ensure_step(self.kind(), step, self.max_steps())?;
        self.diagram().draw(surface, self.shape, step);
        Ok(())
    }

    fn info(&self, step: usize) -> Result<DisplayInfo, AnimationError> {
        ensure_step(self.kind(), step, self.max_steps())?;
        let phase = self.shape.phase(step);
        let value = if step <= self.shape.init_cost {
            "i = -".to_string()
        } else {
            format!("i = {}", phase.counter())
        };
        Ok(DisplayInfo::new(
            value,
            loop_status(phase, step),
            phase.counter(),
        ))
    }

    fn log_message(&self, step: usize) -> Result<String, AnimationError> {
        ensure_step(self.kind(), step, self.max_steps())?;
        let bound = self.shape.bound;
        Ok(match self.shape.phase(step) {
            LoopPhase::Init if step == 0 => String::new(),
            LoopPhase::Init => "Init: i = 0, loop started".to_string(),
            LoopPhase::Condition { iteration, .. } => condition_log(bound, iteration),
            LoopPhase::Done { iteration } => condition_log(bound, iteration),
            LoopPhase::Body { iteration } => {
                format!("Body: printf(\"i=%d\", i) executed (i={iteration})")
            }
            LoopPhase::Increment { iteration } => format!("Increment: i++ → i={}", iteration + 1),
        })
    }

    fn code_listing(&self) -> Vec<String> {
        vec![
            format!("for (int i = 0; i < {}; i++) {{", self.shape.bound),
            "    printf(\"i=%d\\n\", i);".to_string(),
            "}".to_string(),
        ]
    }

    fn code_focus(&self, step: usize) -> Option<CodeFocus> {
        match self.shape.phase(step) {
            LoopPhase::Init if step == 0 => None,
            LoopPhase::Init | LoopPhase::Increment { .. } => Some(CodeFocus::line(1)),
            LoopPhase::Condition { holds, .. } => Some(CodeFocus::condition(1, holds)),
            LoopPhase::Done { .. } => Some(CodeFocus::condition(1, false)),
            LoopPhase::Body { .. } => Some(CodeFocus::line(2)),
        }
    }
}

/// `while (i < n) { ...; i++; }` as a flow diagram
#[derive(Debug, Clone)]
pub struct WhileLoopAnimation {
    palette: &'static Palette,
    shape: LoopShape,
}

impl WhileLoopAnimation {
    pub fn new(palette: &'static Palette, config: &AnimationConfig) -> Self {
        let bound = config
            .max_iterations
            .unwrap_or(DEFAULT_ITERATIONS)
            .min(MAX_CONFIGURED_COUNT);
        WhileLoopAnimation {
            palette,
            shape: LoopShape::while_loop(bound),
        }
    }

    pub fn shape(&self) -> LoopShape {
        self.shape
    }

    fn diagram(&self) -> Diagram<'static> {
        let bound = self.shape.bound;
        Diagram {
            palette: self.palette,
            title: "While Loop - Flow Diagram",
            nodes: vec![
                (
                    Node::Init,
                    Bounds::centered(100.0, 90.0, 120.0, 60.0),
                    "Init\n(i = 0)".to_string(),
                ),
                (
                    Node::Condition,
                    Bounds::centered(300.0, 90.0, 120.0, 60.0),
                    format!("Condition\n(i < {bound} ?)"),
                ),
                (
                    Node::Body,
                    Bounds::centered(300.0, 180.0, 120.0, 70.0),
                    "Body\nprintf(\"i=%d\", i)\ni++".to_string(),
                ),
            ],
            arrows: vec![
                ((160.0, 90.0), (240.0, 90.0), Node::Init),
                ((300.0, 120.0), (300.0, 145.0), Node::Condition),
                ((240.0, 190.0), (180.0, 125.0), Node::Body),
            ],
        }
    }
}

impl Animation for WhileLoopAnimation {
    fn kind(&self) -> AnimationKind {
        AnimationKind::WhileLoop
    }

    fn max_steps(&self) -> usize {
        self.shape.last_step()
    }

    fn render(&self, surface: &mut dyn Surface, step: usize) -> Result<(), AnimationError> {
        ensure_step(self.kind(), step, self.max_steps())?;
        self.diagram().draw(surface, self.shape, step);
        Ok(())
    }

    fn info(&self, step: usize) -> Result<DisplayInfo, AnimationError> {
        ensure_step(self.kind(), step, self.max_steps())?;
        let phase = self.shape.phase(step);
        let value = if step == 0 {
            "i = -".to_string()
        } else {
            format!("i = {}", phase.counter())
        };
        Ok(DisplayInfo::new(
            value,
            loop_status(phase, step),
            phase.counter(),
        ))
    }

    fn log_message(&self, step: usize) -> Result<String, AnimationError> {
        ensure_step(self.kind(), step, self.max_steps())?;
        let bound = self.shape.bound;
        Ok(match self.shape.phase(step) {
            LoopPhase::Init | LoopPhase::Increment { .. } => String::new(),
            LoopPhase::Condition { iteration, .. } => condition_log(bound, iteration),
            LoopPhase::Done { iteration } => condition_log(bound, iteration),
            LoopPhase::Body { iteration } => format!(
                "Body: printf(\"i=%d\", i) and i++ executed (i={iteration} → {})",
                iteration + 1
            ),
        })
    }

    fn code_listing(&self) -> Vec<String> {
        vec![
            "int i = 0;".to_string(),
            format!("while (i < {}) {{", self.shape.bound),
            "    printf(\"i=%d\\n\", i);".to_string(),
            "    i++;".to_string(),
            "}".to_string(),
        ]
    }

    fn code_focus(&self, step: usize) -> Option<CodeFocus> {
        match self.shape.phase(step) {
            LoopPhase::Init | LoopPhase::Increment { .. } => None,
            LoopPhase::Condition { holds, .. } => Some(CodeFocus::condition(2, holds)),
            LoopPhase::Done { .. } => Some(CodeFocus::condition(2, false)),
            LoopPhase::Body { .. } => Some(CodeFocus {
                lines: vec![3, 4],
                condition: None,
            }),
        }
    }
}

struct Comparison {
    topic: &'static str,
    for_side: &'static str,
    while_side: &'static str,
}

const COMPARISONS: [Comparison; 4] = [
    Comparison {
        topic: "Initialization",
        for_side: "for (int i = 0; i < 5; i++)",
        while_side: "int i = 0;\nwhile (i < 5)",
    },
    Comparison {
        topic: "Structure",
        for_side: "All control in one line",
        while_side: "Control spread over lines",
    },
    Comparison {
        topic: "Update",
        for_side: "Increment in the header",
        while_side: "Manual increment (i++)",
    },
    Comparison {
        topic: "When to use",
        for_side: "Known number of iterations",
        while_side: "Until a condition changes",
    },
];

/// `for` and `while` side by side, one aspect per step
#[derive(Debug, Clone)]
pub struct LoopComparisonAnimation {
    palette: &'static Palette,
}

impl LoopComparisonAnimation {
    const STAGES: [&'static str; 5] = [
        "Ready",
        "Comparing initialization",
        "Comparing structure",
        "Comparing updates",
        "Comparing use cases",
    ];
    const MESSAGES: [&'static str; 5] = [
        "",
        "for keeps its control in one line, while spreads it out",
        "for offers a more compact structure",
        "while gives more flexible control over the update",
        "Use for with a known count, while for an open-ended condition",
    ];

    pub fn new(palette: &'static Palette) -> Self {
        LoopComparisonAnimation { palette }
    }
}

impl Animation for LoopComparisonAnimation {
    fn kind(&self) -> AnimationKind {
        AnimationKind::LoopComparison
    }

    fn max_steps(&self) -> usize {
        COMPARISONS.len()
    }

    fn render(&self, surface: &mut dyn Surface, step: usize) -> Result<(), AnimationError> {
        ensure_step(self.kind(), step, self.max_steps())?;
        let p = self.palette;
        draw_background(surface, p);
        draw_title(surface, p, "For vs While Loop");

        let (width, height) = surface.size();
        let mid = width / 2.0;
        caption(surface, (mid / 2.0, 55.0), "FOR LOOP", p.text, 16.0);
        caption(surface, (mid + mid / 2.0, 55.0), "WHILE LOOP", p.text, 16.0);
        surface.line((mid, 70.0), (mid, height - 30.0), Stroke::new(p.text, 2.0));

        // Earlier aspects stay on screen above the current one
        for (idx, row) in COMPARISONS.iter().enumerate().take(step) {
            let y = 85.0 + idx as f64 * 62.0;
            let current = idx + 1 == step;
            let alpha = if current { 150 } else { 70 };

            let left = Bounds::new(20.0, y, mid - 40.0, 50.0);
            let right = Bounds::new(mid + 20.0, y, mid - 40.0, 50.0);
            surface.rect(left, Paint::filled(p.secondary.with_alpha(alpha)));
            surface.rect(right, Paint::filled(p.success.with_alpha(alpha)));
            let style = TextStyle::centered(p.text, 12.0);
            draw_multiline(surface, left.center(), row.for_side, style);
            draw_multiline(surface, right.center(), row.while_side, style);

            let topic_color = if current { p.warning } else { INACTIVE };
            caption(surface, (mid, y - 6.0), row.topic, topic_color, 12.0);
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
        lines(&[
            "for (int i = 0; i < 5; i++) {",
            "    printf(\"%d\\n\", i);",
            "}",
            "",
            "int i = 0;",
            "while (i < 5) {",
            "    printf(\"%d\\n\", i);",
            "    i++;",
            "}",
        ])
    }

    fn code_focus(&self, step: usize) -> Option<CodeFocus> {
        let lines = match step {
            1 => vec![1, 5, 6],
            2 => vec![1, 6],
            3 => vec![1, 8],
            4 => vec![1, 6],
            _ => return None,
        };
        Some(CodeFocus {
            lines,
            condition: None,
        })
    }
}
