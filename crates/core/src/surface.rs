//! Immediate-mode render surface contract.
//!
//! The engine only needs a small capability set from whatever it draws on:
//! fill/stroke state, a handful of primitives, curve-defined shapes, and an
//! affine transform stack with push/pop. [`Surface`] is that set. Backends
//! (recording, tiny-skia raster, browser 2D canvas) implement it.
//!
//! [`scoped`] opens a local coordinate frame that is popped when the returned
//! guard drops, whatever happens in between.

use std::ops::{Deref, DerefMut};

use glam::{DAffine2, DVec2};

use crate::color::Color;

/// One segment of a curve-defined [`Path`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(DVec2),
    LineTo(DVec2),
    QuadTo { control: DVec2, end: DVec2 },
    CubicTo { control1: DVec2, control2: DVec2, end: DVec2 },
    Close,
}

/// An arbitrary shape built from line and bezier segments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, p: DVec2) -> Self {
        self.segments.push(PathSegment::MoveTo(p));
        self
    }

    pub fn line_to(mut self, p: DVec2) -> Self {
        self.segments.push(PathSegment::LineTo(p));
        self
    }

    pub fn quad_to(mut self, control: DVec2, end: DVec2) -> Self {
        self.segments.push(PathSegment::QuadTo { control, end });
        self
    }

    pub fn cubic_to(mut self, control1: DVec2, control2: DVec2, end: DVec2) -> Self {
        self.segments.push(PathSegment::CubicTo {
            control1,
            control2,
            end,
        });
        self
    }

    pub fn close(mut self) -> Self {
        self.segments.push(PathSegment::Close);
        self
    }

    /// Closed polygon through `points`. Empty input gives an empty path.
    pub fn polygon(points: impl IntoIterator<Item = DVec2>) -> Self {
        let mut points = points.into_iter();
        let Some(first) = points.next() else {
            return Self::new();
        };
        points
            .fold(Self::new().move_to(first), |path, p| path.line_to(p))
            .close()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// The drawing capabilities the engine and its figures rely on.
///
/// Coordinates are in the current local frame. `fill`/`stroke` of `None`
/// disable filling/stroking for subsequent primitives. `push` saves the
/// transform and style; `pop` restores the most recent save.
pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    /// Fills the whole surface with `color`, ignoring the current transform.
    fn clear(&mut self, color: Color);

    fn set_fill(&mut self, color: Option<Color>);
    fn set_stroke(&mut self, color: Option<Color>);
    fn set_stroke_width(&mut self, width: f64);

    fn circle(&mut self, center: DVec2, radius: f64);
    fn ellipse(&mut self, center: DVec2, radii: DVec2);
    fn rect(&mut self, origin: DVec2, size: DVec2);
    fn line(&mut self, from: DVec2, to: DVec2);
    fn shape(&mut self, path: &Path);

    fn push(&mut self);
    fn pop(&mut self);

    fn translate(&mut self, offset: DVec2);
    fn rotate(&mut self, angle: f64);
    fn scale(&mut self, factor: DVec2);
}

/// Guard for a local frame opened by [`scoped`]. Pops on drop.
pub struct ScopedFrame<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
}

/// Pushes a new frame on `surface` and returns a guard that pops it when
/// dropped, including during unwinding.
pub fn scoped<S: Surface + ?Sized>(surface: &mut S) -> ScopedFrame<'_, S> {
    surface.push();
    ScopedFrame { surface }
}

impl<S: Surface + ?Sized> Deref for ScopedFrame<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        &*self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for ScopedFrame<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        &mut *self.surface
    }
}

impl<S: Surface + ?Sized> Drop for ScopedFrame<'_, S> {
    fn drop(&mut self) {
        self.surface.pop();
    }
}

/// Transform and style in effect at one point of a drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawState {
    pub transform: DAffine2,
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            transform: DAffine2::IDENTITY,
            fill: Some(Color::WHITE),
            stroke: Some(Color::BLACK),
            stroke_width: 1.0,
        }
    }
}

/// Current [`DrawState`] plus the saved states below it.
///
/// Shared bookkeeping for backends that do not have a native save/restore.
/// Popping with nothing saved is tolerated and logged; the current state is
/// kept.
#[derive(Debug, Clone, Default)]
pub struct StateStack {
    current: DrawState,
    saved: Vec<DrawState>,
}

impl StateStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &DrawState {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut DrawState {
        &mut self.current
    }

    /// Number of unmatched pushes.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    pub fn push(&mut self) {
        self.saved.push(self.current);
    }

    pub fn pop(&mut self) {
        match self.saved.pop() {
            Some(state) => self.current = state,
            None => log::warn!("pop without matching push; keeping current draw state"),
        }
    }

    pub fn translate(&mut self, offset: DVec2) {
        self.current.transform = self.current.transform * DAffine2::from_translation(offset);
    }

    pub fn rotate(&mut self, angle: f64) {
        self.current.transform = self.current.transform * DAffine2::from_angle(angle);
    }

    pub fn scale(&mut self, factor: DVec2) {
        self.current.transform = self.current.transform * DAffine2::from_scale(factor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn assert_close(a: DVec2, b: DVec2) {
        assert!(a.abs_diff_eq(b, 1e-9), "expected {b}, got {a}");
    }

    #[test]
    fn polygon_closes_path() {
        let path = Path::polygon([DVec2::ZERO, DVec2::X, DVec2::Y]);
        assert_eq!(path.segments().len(), 4);
        assert_eq!(path.segments()[0], PathSegment::MoveTo(DVec2::ZERO));
        assert_eq!(path.segments()[3], PathSegment::Close);
    }

    #[test]
    fn polygon_of_nothing_is_empty() {
        assert!(Path::polygon(std::iter::empty()).is_empty());
    }

    #[test]
    fn builder_records_curves() {
        let path = Path::new()
            .move_to(DVec2::ZERO)
            .quad_to(DVec2::X, DVec2::Y)
            .cubic_to(DVec2::X, DVec2::Y, DVec2::ONE)
            .close();
        assert!(matches!(path.segments()[1], PathSegment::QuadTo { .. }));
        assert!(matches!(path.segments()[2], PathSegment::CubicTo { .. }));
    }

    #[test]
    fn transforms_compose_translate_rotate_scale() {
        let mut stack = StateStack::new();
        stack.translate(DVec2::new(100.0, 50.0));
        stack.rotate(FRAC_PI_2);
        stack.scale(DVec2::splat(2.0));
        let p = stack.current().transform.transform_point2(DVec2::new(1.0, 0.0));
        // scale -> (2, 0), rotate 90° -> (0, 2), translate -> (100, 52)
        assert_close(p, DVec2::new(100.0, 52.0));
    }

    #[test]
    fn push_pop_restores_transform_and_style() {
        let mut stack = StateStack::new();
        stack.current_mut().fill = None;
        stack.push();
        stack.translate(DVec2::new(5.0, 5.0));
        stack.current_mut().fill = Some(Color::BLACK);
        stack.current_mut().stroke_width = 4.0;
        assert_eq!(stack.depth(), 1);
        stack.pop();
        assert_eq!(stack.depth(), 0);
        assert_eq!(stack.current().transform, DAffine2::IDENTITY);
        assert_eq!(stack.current().fill, None);
        assert_eq!(stack.current().stroke_width, 1.0);
    }

    #[test]
    fn unbalanced_pop_keeps_current_state() {
        let mut stack = StateStack::new();
        stack.translate(DVec2::new(3.0, 4.0));
        stack.pop();
        assert_close(
            stack.current().transform.translation,
            DVec2::new(3.0, 4.0),
        );
        assert_eq!(stack.depth(), 0);
    }
}
