use std::{path::Path, time::Duration};

use crate::{
    animation::progress::DEFAULT_STEP,
    foundation::core::{Canvas, Rgba8},
    foundation::error::{LineCircleError, LineCircleResult},
};

/// Fixed visual and timing constants of a stage. `Default` is the stock look.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StageConfig {
    pub canvas: Canvas,
    pub nodes: usize,
    /// Progress increment per tick.
    pub step: f64,
    /// Tick period in milliseconds.
    pub delay_ms: u64,
    /// Line width is `min(width, height) / stroke_factor`.
    pub stroke_factor: f64,
    /// Node size is `gap / size_factor`.
    pub size_factor: f64,
    pub fore_color: Rgba8,
    pub back_color: Rgba8,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 800,
                height: 600,
            },
            nodes: 5,
            step: DEFAULT_STEP,
            delay_ms: 30,
            stroke_factor: 90.0,
            size_factor: 2.9,
            fore_color: Rgba8::opaque(0x21, 0x96, 0xF3),
            back_color: Rgba8::opaque(0xBD, 0xBD, 0xBD),
        }
    }
}

impl StageConfig {
    pub fn validate(&self) -> LineCircleResult<()> {
        Canvas::new(self.canvas.width, self.canvas.height)?;
        if self.nodes == 0 {
            return Err(LineCircleError::validation("nodes must be >= 1"));
        }
        if !(self.step.is_finite() && self.step > 0.0 && self.step <= 1.0) {
            return Err(LineCircleError::validation(format!(
                "step must be in (0, 1], got {}",
                self.step
            )));
        }
        if (1.0 / self.step).ceil() >= f64::from(u32::MAX) {
            return Err(LineCircleError::validation(format!(
                "step {} is too small: a sweep would exceed {} ticks",
                self.step,
                u32::MAX
            )));
        }
        if self.delay_ms == 0 {
            return Err(LineCircleError::validation("delay_ms must be > 0"));
        }
        for (name, v) in [
            ("stroke_factor", self.stroke_factor),
            ("size_factor", self.size_factor),
        ] {
            if !(v.is_finite() && v > 0.0) {
                return Err(LineCircleError::validation(format!(
                    "{name} must be a positive finite number, got {v}"
                )));
            }
        }
        Ok(())
    }

    pub fn period(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn from_json_str(s: &str) -> LineCircleResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| LineCircleError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_json_pretty(&self) -> LineCircleResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| LineCircleError::serde(e.to_string()))
    }

    pub fn load(path: &Path) -> LineCircleResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            LineCircleError::Other(
                anyhow::Error::new(e).context(format!("read config '{}'", path.display())),
            )
        })?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/config.rs"]
mod tests;
