//! CPU raster backend for [`Surface`], built on a tiny-skia pixmap.
//!
//! Transform and style bookkeeping lives in a [`StateStack`]; every primitive
//! becomes a tiny-skia path drawn with the current affine transform, filled
//! and then stroked according to the current style.

use circle_art_core::error::EngineError;
use circle_art_core::surface::{DrawState, Path, PathSegment, StateStack, Surface};
use circle_art_core::Color;
use glam::{DAffine2, DVec2};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

pub struct RasterSurface {
    pixmap: Pixmap,
    stack: StateStack,
}

impl RasterSurface {
    /// Allocates a transparent pixmap of `width` × `height` pixels.
    pub fn new(width: u32, height: u32) -> Result<Self, EngineError> {
        let pixmap = Pixmap::new(width, height).ok_or(EngineError::InvalidDimensions)?;
        Ok(Self {
            pixmap,
            stack: StateStack::new(),
        })
    }

    pub fn pixel_width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn pixel_height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Straight-alpha RGBA8 pixels, row-major.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect()
    }

    /// Straight-alpha color of one pixel, or `None` outside the pixmap.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::rgba8(c.red(), c.green(), c.blue(), c.alpha()))
    }

    fn paint_path(&mut self, path: Option<tiny_skia::Path>, fill: bool) {
        let Some(path) = path else {
            return;
        };
        let state = *self.stack.current();
        let transform = convert_transform(state.transform);
        if fill {
            if let Some(color) = state.fill {
                let paint = solid_paint(color);
                self.pixmap
                    .fill_path(&path, &paint, FillRule::Winding, transform, None);
            }
        }
        if let Some(color) = state.stroke {
            let paint = solid_paint(color);
            let stroke = Stroke {
                width: state.stroke_width as f32,
                ..Default::default()
            };
            self.pixmap
                .stroke_path(&path, &paint, &stroke, transform, None);
        }
    }

    pub fn state(&self) -> &DrawState {
        self.stack.current()
    }
}

impl Surface for RasterSurface {
    fn width(&self) -> f64 {
        f64::from(self.pixmap.width())
    }

    fn height(&self) -> f64 {
        f64::from(self.pixmap.height())
    }

    fn clear(&mut self, color: Color) {
        self.pixmap.fill(convert_color(color));
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
        let path = PathBuilder::from_circle(center.x as f32, center.y as f32, radius as f32);
        self.paint_path(path, true);
    }

    fn ellipse(&mut self, center: DVec2, radii: DVec2) {
        if radii.x <= 0.0 || radii.y <= 0.0 {
            return;
        }
        let corner = center - radii;
        let size = radii * 2.0;
        let path = Rect::from_xywh(corner.x as f32, corner.y as f32, size.x as f32, size.y as f32)
            .and_then(PathBuilder::from_oval);
        self.paint_path(path, true);
    }

    fn rect(&mut self, origin: DVec2, size: DVec2) {
        let path = Rect::from_xywh(origin.x as f32, origin.y as f32, size.x as f32, size.y as f32)
            .map(PathBuilder::from_rect);
        self.paint_path(path, true);
    }

    fn line(&mut self, from: DVec2, to: DVec2) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.x as f32, from.y as f32);
        pb.line_to(to.x as f32, to.y as f32);
        self.paint_path(pb.finish(), false);
    }

    fn shape(&mut self, path: &Path) {
        self.paint_path(convert_path(path), true);
    }

    fn push(&mut self) {
        self.stack.push();
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

fn solid_paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(convert_color(color));
    paint.anti_alias = true;
    paint
}

fn convert_color(color: Color) -> tiny_skia::Color {
    let [r, g, b, a] = color.to_rgba8();
    tiny_skia::Color::from_rgba8(r, g, b, a)
}

fn convert_transform(t: DAffine2) -> Transform {
    let m = t.matrix2;
    Transform::from_row(
        m.x_axis.x as f32,
        m.x_axis.y as f32,
        m.y_axis.x as f32,
        m.y_axis.y as f32,
        t.translation.x as f32,
        t.translation.y as f32,
    )
}

fn convert_path(path: &Path) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for segment in path.segments() {
        match *segment {
            PathSegment::MoveTo(p) => pb.move_to(p.x as f32, p.y as f32),
            PathSegment::LineTo(p) => pb.line_to(p.x as f32, p.y as f32),
            PathSegment::QuadTo { control, end } => {
                pb.quad_to(control.x as f32, control.y as f32, end.x as f32, end.y as f32)
            }
            PathSegment::CubicTo {
                control1,
                control2,
                end,
            } => pb.cubic_to(
                control1.x as f32,
                control1.y as f32,
                control2.x as f32,
                control2.y as f32,
                end.x as f32,
                end.y as f32,
            ),
            PathSegment::Close => pb.close(),
        }
    }
    pb.finish()
}
