//! Tap/tick state machine over the node chain.

pub(crate) mod controller;
pub(crate) mod session;
