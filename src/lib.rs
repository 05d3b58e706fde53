//! linecircle animates a row of "line-to-circle" nodes, one node at a time, on tap.
//!
//! Every node owns a progress scalar. A tap starts the node under the cursor; timer ticks advance
//! it until it crosses a full unit, at which point the cursor steps to the neighbouring node and
//! the timer stops. At either end of the chain the sweep direction flips and the cursor stays, so
//! the next taps walk the chain back.
//!
//! # Pipeline overview
//!
//! 1. **Dispatch**: `Event::{Tap, Tick}` → [`SequenceController::handle`] → [`Outcome`]
//! 2. **Redraw** (when [`Outcome::needs_redraw`], or on every tick if the host likes):
//!    [`render_frame`] fills the background and draws the chain from the cursor back to node 0
//! 3. **Rasterize** (optional): [`CpuSurface::readback`] → [`FrameRGBA`]
//!
//! Ticks come from a [`Clock`]: [`ThreadClock`] for real time, [`ManualClock`] for tests and
//! scripted sessions.
#![forbid(unsafe_code)]

mod chain;
mod foundation;
mod sequence;
mod stage;

pub mod animation;
pub mod render;

pub use animation::animator::{Animator, Clock, DEFAULT_PERIOD, ManualClock, ThreadClock};
pub use animation::progress::{DEFAULT_STEP, Direction, ProgressState};
pub use chain::node::{Node, NodeChain};
pub use foundation::core::{Affine, Canvas, LineCap, Point, Rgba8, Vec2};
pub use foundation::error::{LineCircleError, LineCircleResult};
pub use foundation::math::{clamped_scale, phase_scale};
pub use render::cpu::CpuSurface;
pub use render::draw::{LANES, NodeLayout, draw_node};
pub use render::pipeline::{FrameRGBA, RenderSettings, render_frame};
pub use render::surface::{DrawCommand, RecordingSurface, Surface};
pub use sequence::controller::{ControllerState, Event, Outcome, SequenceController};
pub use sequence::session::{drive_to_rest, tap_and_settle, ticks_per_sweep};
pub use stage::config::StageConfig;
