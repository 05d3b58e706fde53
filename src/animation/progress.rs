/// Default progress increment applied per tick.
pub const DEFAULT_STEP: f64 = 0.02;

/// Sweep direction: `Forward` is `+1`, `Backward` is `-1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// Progress of a single node.
///
/// `direction == None` means the node is at rest and `scale == checkpoint`.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressState {
    scale: f64,
    direction: Option<Direction>,
    checkpoint: f64,
    step: f64,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self::new(DEFAULT_STEP)
    }
}

impl ProgressState {
    pub fn new(step: f64) -> Self {
        Self {
            scale: 0.0,
            direction: None,
            checkpoint: 0.0,
            step,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn checkpoint(&self) -> f64 {
        self.checkpoint
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn is_idle(&self) -> bool {
        self.direction.is_none()
    }

    /// Move `scale` one step. Once it has travelled more than a full unit away from the
    /// checkpoint it snaps onto the next unit boundary, goes idle and fires `on_complete`.
    pub fn advance(&mut self, on_complete: impl FnOnce()) {
        let Some(dir) = self.direction else {
            return;
        };

        self.scale += self.step * dir.sign();
        if (self.scale - self.checkpoint).abs() > 1.0 {
            self.scale = self.checkpoint + dir.sign();
            self.direction = None;
            self.checkpoint = self.scale;
            on_complete();
        }
    }

    /// Begin a sweep away from the current resting value: forward from 0, backward from 1.
    /// Does nothing while a sweep is already in flight.
    pub fn start(&mut self, on_started: impl FnOnce()) {
        if self.direction.is_some() {
            return;
        }

        // dir = 1 - 2 * checkpoint
        self.direction = Some(if 1.0 - 2.0 * self.checkpoint > 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        });
        on_started();
    }

    /// Abandon an in-flight sweep and fall back to the checkpoint.
    pub(crate) fn cancel(&mut self) {
        self.direction = None;
        self.scale = self.checkpoint;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/progress.rs"]
mod tests;
