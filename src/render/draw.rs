use crate::{
    foundation::core::{Canvas, LineCap, Point, Rgba8},
    foundation::math::phase_scale,
    render::surface::Surface,
};

/// Number of mirrored line lanes per node.
pub const LANES: usize = 2;

/// Fixed geometry shared by every node of a chain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeLayout {
    /// Horizontal distance between node centres.
    pub gap: f64,
    /// Line length and full circle radius.
    pub size: f64,
    pub line_width: f64,
    pub center_y: f64,
    pub color: Rgba8,
}

impl NodeLayout {
    /// Divide the canvas width into `nodes + 1` slots, nodes sitting on the slot boundaries.
    pub fn new(
        canvas: Canvas,
        nodes: usize,
        stroke_factor: f64,
        size_factor: f64,
        color: Rgba8,
    ) -> Self {
        let w = canvas.width_f64();
        let h = canvas.height_f64();
        let gap = w / (nodes as f64 + 1.0);
        Self {
            gap,
            size: gap / size_factor,
            line_width: w.min(h) / stroke_factor,
            center_y: h / 2.0,
            color,
        }
    }

    pub fn node_center(&self, index: usize) -> Point {
        Point::new(self.gap * (index as f64 + 1.0), self.center_y)
    }
}

/// Draw one node at progress `scale`: the first half retracts both lines into the centre,
/// the second half grows the circle.
pub fn draw_node(surface: &mut dyn Surface, layout: &NodeLayout, index: usize, scale: f64) {
    let sc0 = phase_scale(scale, 0, 2);
    let sc1 = phase_scale(scale, 1, 2);
    let size = layout.size;

    surface.save();
    surface.set_stroke(layout.color, layout.line_width, LineCap::Round);
    surface.set_fill(layout.color);
    surface.translate(layout.node_center(index).to_vec2());

    let line_len = size * (1.0 - sc0);
    for lane in 0..LANES {
        if line_len <= 0.0 {
            break;
        }
        surface.save();
        surface.scale(1.0, 1.0 - 2.0 * lane as f64);
        surface.stroke_line(Point::ZERO, Point::new(0.0, -line_len));
        surface.restore();
    }

    let radius = size * sc1;
    if radius > 0.0 {
        surface.fill_circle(Point::ZERO, radius);
    }

    surface.restore();
}

#[cfg(test)]
#[path = "../../tests/unit/render/draw.rs"]
mod tests;
