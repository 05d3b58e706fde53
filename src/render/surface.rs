use crate::foundation::core::{LineCap, Point, Rgba8, Vec2};

/// Immediate-mode 2D drawing primitives, in the style of a canvas context.
///
/// Transforms accumulate onto the current matrix; `save`/`restore` push and pop the matrix
/// together with the stroke and fill styles.
pub trait Surface {
    /// Fill the whole surface, ignoring the current transform.
    fn fill_background(&mut self, color: Rgba8);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn scale(&mut self, sx: f64, sy: f64);

    fn set_stroke(&mut self, color: Rgba8, width: f64, cap: LineCap);
    fn set_fill(&mut self, color: Rgba8);

    fn stroke_line(&mut self, from: Point, to: Point);
    fn fill_circle(&mut self, center: Point, radius: f64);
}

/// One call observed by a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillBackground(Rgba8),
    Save,
    Restore,
    Translate(Vec2),
    Scale { sx: f64, sy: f64 },
    SetStroke {
        color: Rgba8,
        width: f64,
        cap: LineCap,
    },
    SetFill(Rgba8),
    StrokeLine { from: Point, to: Point },
    FillCircle { center: Point, radius: f64 },
}

/// Surface that only records the calls made on it.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn circles(&self) -> impl Iterator<Item = (Point, f64)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillCircle { center, radius } => Some((*center, *radius)),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::StrokeLine { from, to } => Some((*from, *to)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn fill_background(&mut self, color: Rgba8) {
        self.commands.push(DrawCommand::FillBackground(color));
    }

    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, offset: Vec2) {
        self.commands.push(DrawCommand::Translate(offset));
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.commands.push(DrawCommand::Scale { sx, sy });
    }

    fn set_stroke(&mut self, color: Rgba8, width: f64, cap: LineCap) {
        self.commands
            .push(DrawCommand::SetStroke { color, width, cap });
    }

    fn set_fill(&mut self, color: Rgba8) {
        self.commands.push(DrawCommand::SetFill(color));
    }

    fn stroke_line(&mut self, from: Point, to: Point) {
        self.commands.push(DrawCommand::StrokeLine { from, to });
    }

    fn fill_circle(&mut self, center: Point, radius: f64) {
        self.commands
            .push(DrawCommand::FillCircle { center, radius });
    }
}
