//! A [`Surface`] that records what would have been drawn.
//!
//! Each primitive is stored with the full [`DrawState`] in effect when it was
//! issued, so tests can check world-space placement, style, and stack
//! balance without rasterizing anything.

use glam::DVec2;

use crate::color::Color;
use crate::surface::{DrawState, Path, StateStack, Surface};

/// A primitive issued on a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Clear(Color),
    Circle { center: DVec2, radius: f64 },
    Ellipse { center: DVec2, radii: DVec2 },
    Rect { origin: DVec2, size: DVec2 },
    Line { from: DVec2, to: DVec2 },
    Shape(Path),
}

/// A recorded primitive plus the state it was drawn with.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub primitive: Primitive,
    pub state: DrawState,
}

impl DrawCommand {
    /// World-space position of the primitive's anchor point (center, origin,
    /// line start, or first path point).
    pub fn world_anchor(&self) -> DVec2 {
        let local = match &self.primitive {
            Primitive::Clear(_) => DVec2::ZERO,
            Primitive::Circle { center, .. } | Primitive::Ellipse { center, .. } => *center,
            Primitive::Rect { origin, .. } => *origin,
            Primitive::Line { from, .. } => *from,
            Primitive::Shape(path) => path
                .segments()
                .iter()
                .find_map(|segment| match segment {
                    crate::surface::PathSegment::MoveTo(p) => Some(*p),
                    _ => None,
                })
                .unwrap_or(DVec2::ZERO),
        };
        self.state.transform.transform_point2(local)
    }
}

#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    stack: StateStack,
    commands: Vec<DrawCommand>,
    max_depth: usize,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            stack: StateStack::new(),
            commands: Vec::new(),
            max_depth: 0,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Current number of unmatched pushes.
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Deepest nesting reached so far.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// State that the next primitive would be drawn with.
    pub fn state(&self) -> &DrawState {
        self.stack.current()
    }

    /// Forgets recorded commands, keeping the current state.
    pub fn reset(&mut self) {
        self.commands.clear();
        self.max_depth = self.stack.depth();
    }

    fn record(&mut self, primitive: Primitive) {
        self.commands.push(DrawCommand {
            primitive,
            state: *self.stack.current(),
        });
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self, color: Color) {
        self.record(Primitive::Clear(color));
    }

    fn set_fill(&mut self, color: Option<Color>) {
        self.stack.current_mut().fill = color;
    }

    fn set_stroke(&mut self, color: Option<Color>) {
        self.stack.current_mut().stroke = color;
    }

    fn set_stroke_width(&mut self, width: f64) {
        self.stack.current_mut().stroke_width = width;
    }

    fn circle(&mut self, center: DVec2, radius: f64) {
        self.record(Primitive::Circle { center, radius });
    }

    fn ellipse(&mut self, center: DVec2, radii: DVec2) {
        self.record(Primitive::Ellipse { center, radii });
    }

    fn rect(&mut self, origin: DVec2, size: DVec2) {
        self.record(Primitive::Rect { origin, size });
    }

    fn line(&mut self, from: DVec2, to: DVec2) {
        self.record(Primitive::Line { from, to });
    }

    fn shape(&mut self, path: &Path) {
        self.record(Primitive::Shape(path.clone()));
    }

    fn push(&mut self) {
        self.stack.push();
        self.max_depth = self.max_depth.max(self.stack.depth());
    }

    fn pop(&mut self) {
        self.stack.pop();
    }

    fn translate(&mut self, offset: DVec2) {
        self.stack.translate(offset);
    }

    fn rotate(&mut self, angle: f64) {
        self.stack.rotate(angle);
    }

    fn scale(&mut self, factor: DVec2) {
        self.stack.scale(factor);
    }
}
