use crate::{
    animation::{
        animator::{Animator, Clock},
        progress::Direction,
    },
    chain::node::NodeChain,
    foundation::error::LineCircleResult,
    stage::config::StageConfig,
};

/// Input delivered to the controller: a user tap or a timer tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Event {
    Tap,
    Tick,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Running,
}

/// What a single [`SequenceController::handle`] call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Tap while running, or a tick while idle.
    Ignored,
    /// The cursor node began a sweep.
    Started { node: usize, direction: Direction },
    /// Progress moved but the sweep is not finished.
    Ticked,
    /// The sweep finished; `cursor` is the new cursor. `exhausted` means the chain end was hit,
    /// the cursor stayed put and the chain direction flipped.
    Completed { cursor: usize, exhausted: bool },
}

impl Outcome {
    /// Whether the host should redraw the surface.
    pub fn needs_redraw(self) -> bool {
        matches!(self, Self::Started { .. } | Self::Completed { .. })
    }
}

/// Cursor over a [`NodeChain`] plus the animator that drives the cursor node.
#[derive(Debug)]
pub struct SequenceController<C: Clock> {
    chain: NodeChain,
    cursor: usize,
    direction: Direction,
    animator: Animator<C>,
}

impl<C: Clock> SequenceController<C> {
    pub fn new(chain: NodeChain, animator: Animator<C>) -> Self {
        Self {
            chain,
            cursor: 0,
            direction: Direction::Forward,
            animator,
        }
    }

    pub fn from_config(cfg: &StageConfig, clock: C) -> LineCircleResult<Self> {
        cfg.validate()?;
        let chain = NodeChain::new(cfg.nodes, cfg.step)?;
        Ok(Self::new(chain, Animator::new(clock, cfg.period())))
    }

    pub fn chain(&self) -> &NodeChain {
        &self.chain
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn animator(&self) -> &Animator<C> {
        &self.animator
    }

    pub fn state(&self) -> ControllerState {
        if self.animator.is_running() {
            ControllerState::Running
        } else {
            ControllerState::Idle
        }
    }

    pub fn handle(&mut self, event: Event) -> LineCircleResult<Outcome> {
        match event {
            Event::Tap => self.on_tap(),
            Event::Tick => Ok(self.on_tick()),
        }
    }

    fn on_tap(&mut self) -> LineCircleResult<Outcome> {
        let cursor = self.cursor;
        let state = self.chain.state_mut(cursor);
        let mut started = false;
        state.start(|| started = true);
        let Some(direction) = state.direction().filter(|_| started) else {
            tracing::trace!(cursor, "tap ignored while running");
            return Ok(Outcome::Ignored);
        };

        if let Err(e) = self.animator.start() {
            self.chain.state_mut(cursor).cancel();
            return Err(e);
        }
        tracing::debug!(cursor, ?direction, "sweep started");
        Ok(Outcome::Started {
            node: cursor,
            direction,
        })
    }

    fn on_tick(&mut self) -> Outcome {
        if !self.animator.is_running() {
            return Outcome::Ignored;
        }

        let mut completed = false;
        self.chain
            .state_mut(self.cursor)
            .advance(|| completed = true);
        if !completed {
            tracing::trace!(
                cursor = self.cursor,
                scale = self.chain.state(self.cursor).scale(),
                "tick"
            );
            return Outcome::Ticked;
        }

        let mut exhausted = false;
        let from = self.cursor;
        self.cursor = self
            .chain
            .get_next(from, self.direction, || exhausted = true);
        if exhausted {
            self.direction = self.direction.flipped();
            tracing::debug!(cursor = from, direction = ?self.direction, "chain end reached, direction flipped");
        }
        self.animator.stop();
        tracing::debug!(from, to = self.cursor, "sweep completed");

        Outcome::Completed {
            cursor: self.cursor,
            exhausted,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/controller.rs"]
mod tests;
