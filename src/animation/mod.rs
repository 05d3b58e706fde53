//! Per-node progress and the timer that drives it.

/// Repeating ticker over a swappable clock.
pub mod animator;
/// Single-node progress value, direction and checkpoint.
pub mod progress;
