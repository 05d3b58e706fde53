use vello_cpu::kurbo::Shape as _;

use crate::{
    foundation::core::{Affine, Canvas, LineCap, Point, Rgba8, Vec2},
    foundation::error::{LineCircleError, LineCircleResult},
    render::{pipeline::FrameRGBA, surface::Surface},
};

#[derive(Clone, Copy, Debug)]
struct DrawState {
    transform: Affine,
    stroke_color: Rgba8,
    stroke_width: f64,
    cap: LineCap,
    fill_color: Rgba8,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            stroke_color: Rgba8::opaque(0, 0, 0),
            stroke_width: 1.0,
            cap: LineCap::Butt,
            fill_color: Rgba8::opaque(0, 0, 0),
        }
    }
}

/// Raster surface backed by `vello_cpu`.
///
/// Draw calls accumulate until [`CpuSurface::readback`] rasterizes them into a frame and clears
/// the pending scene.
pub struct CpuSurface {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
    state: DrawState,
    stack: Vec<DrawState>,
}

impl CpuSurface {
    pub fn new(canvas: Canvas) -> LineCircleResult<Self> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| LineCircleError::render("surface width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| LineCircleError::render("surface height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(LineCircleError::render("surface must be at least 1x1"));
        }

        Ok(Self {
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
            pixmap: vello_cpu::Pixmap::new(width, height),
            state: DrawState::default(),
            stack: Vec::new(),
        })
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: u32::from(self.width),
            height: u32::from(self.height),
        }
    }

    /// Rasterize everything drawn since the last readback.
    pub fn readback(&mut self) -> FrameRGBA {
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.pixmap);
        self.ctx = vello_cpu::RenderContext::new(self.width, self.height);
        self.state = DrawState::default();
        self.stack.clear();

        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    fn apply_stroke(&mut self) {
        let cap = match self.state.cap {
            LineCap::Butt => vello_cpu::kurbo::Cap::Butt,
            LineCap::Round => vello_cpu::kurbo::Cap::Round,
            LineCap::Square => vello_cpu::kurbo::Cap::Square,
        };
        self.ctx
            .set_stroke(vello_cpu::kurbo::Stroke::new(self.state.stroke_width).with_caps(cap));
        self.ctx.set_paint(color_to_cpu(self.state.stroke_color));
        self.ctx.set_transform(affine_to_cpu(self.state.transform));
    }
}

impl Surface for CpuSurface {
    fn fill_background(&mut self, color: Rgba8) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(color_to_cpu(color));
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        ));
    }

    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        if let Some(prev) = self.stack.pop() {
            self.state = prev;
        }
    }

    fn translate(&mut self, offset: Vec2) {
        self.state.transform = self.state.transform * Affine::translate(offset);
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.state.transform = self.state.transform * Affine::scale_non_uniform(sx, sy);
    }

    fn set_stroke(&mut self, color: Rgba8, width: f64, cap: LineCap) {
        self.state.stroke_color = color;
        self.state.stroke_width = width;
        self.state.cap = cap;
    }

    fn set_fill(&mut self, color: Rgba8) {
        self.state.fill_color = color;
    }

    fn stroke_line(&mut self, from: Point, to: Point) {
        self.apply_stroke();
        let mut path = vello_cpu::kurbo::BezPath::new();
        path.move_to(point_to_cpu(from));
        path.line_to(point_to_cpu(to));
        self.ctx.stroke_path(&path);
    }

    fn fill_circle(&mut self, center: Point, radius: f64) {
        self.ctx.set_transform(affine_to_cpu(self.state.transform));
        self.ctx.set_paint(color_to_cpu(self.state.fill_color));
        let circle = vello_cpu::kurbo::Circle::new(point_to_cpu(center), radius);
        self.ctx.fill_path(&circle.to_path(0.1));
    }
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}
