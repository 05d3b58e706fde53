use crate::{
    animation::animator::Clock,
    foundation::core::Rgba8,
    render::{draw::NodeLayout, surface::Surface},
    sequence::controller::SequenceController,
    stage::config::StageConfig,
};

/// Rasterized frame. `data` is tightly packed RGBA8, row-major.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Everything a redraw needs besides the controller itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderSettings {
    pub back_color: Rgba8,
    pub layout: NodeLayout,
}

impl RenderSettings {
    pub fn from_config(cfg: &StageConfig) -> Self {
        Self {
            back_color: cfg.back_color,
            layout: NodeLayout::new(
                cfg.canvas,
                cfg.nodes,
                cfg.stroke_factor,
                cfg.size_factor,
                cfg.fore_color,
            ),
        }
    }
}

/// Full-surface redraw: clear to the background, then paint the chain from the cursor back.
#[tracing::instrument(skip_all, fields(cursor = controller.cursor()))]
pub fn render_frame<C: Clock>(
    controller: &SequenceController<C>,
    surface: &mut dyn Surface,
    settings: &RenderSettings,
) {
    surface.fill_background(settings.back_color);
    controller
        .chain()
        .draw(surface, controller.cursor(), &settings.layout);
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
