//! Drawing: the surface abstraction, node geometry and the CPU rasterizer.

/// `vello_cpu` raster surface.
pub mod cpu;
/// Line and circle geometry for a single node.
pub mod draw;
/// Full-frame redraw.
pub mod pipeline;
/// Canvas-style drawing primitives and a recording implementation.
pub mod surface;
