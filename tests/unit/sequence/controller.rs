use std::time::Duration;

use super::*;
use crate::{
    animation::animator::{DEFAULT_PERIOD, ManualClock},
    foundation::error::LineCircleError,
};

fn controller(nodes: usize) -> SequenceController<ManualClock> {
    let chain = NodeChain::new(nodes, 0.02).unwrap();
    SequenceController::new(chain, Animator::new(ManualClock::new(), DEFAULT_PERIOD))
}

fn tick_until_complete(c: &mut SequenceController<ManualClock>) -> Outcome {
    for _ in 0..100 {
        let out = c.handle(Event::Tick).unwrap();
        if let Outcome::Completed { .. } = out {
            return out;
        }
        assert_eq!(out, Outcome::Ticked);
    }
    panic!("sweep never completed");
}

struct BrokenClock;

impl Clock for BrokenClock {
    fn start(&mut self, _period: Duration) -> LineCircleResult<()> {
        Err(LineCircleError::animation("no scheduler"))
    }

    fn stop(&mut self) {}
}

#[test]
fn starts_idle_at_node_zero_going_forward() {
    let c = controller(5);
    assert_eq!(c.state(), ControllerState::Idle);
    assert_eq!(c.cursor(), 0);
    assert_eq!(c.direction(), Direction::Forward);
    assert_eq!(c.chain().active_count(), 0);
}

#[test]
fn tap_starts_once() {
    let mut c = controller(5);
    assert_eq!(
        c.handle(Event::Tap).unwrap(),
        Outcome::Started {
            node: 0,
            direction: Direction::Forward,
        }
    );
    assert_eq!(c.state(), ControllerState::Running);

    c.handle(Event::Tick).unwrap();
    let scale = c.chain().state(0).scale();
    assert_eq!(c.handle(Event::Tap).unwrap(), Outcome::Ignored);
    assert_eq!(c.chain().state(0).scale(), scale);
    assert_eq!(c.animator().clock().starts(), 1);
}

#[test]
fn ticks_while_idle_are_ignored() {
    let mut c = controller(3);
    assert_eq!(c.handle(Event::Tick).unwrap(), Outcome::Ignored);
    assert_eq!(c.chain().state(0).scale(), 0.0);
}

#[test]
fn completion_moves_cursor_and_stops_animator() {
    let mut c = controller(3);
    c.handle(Event::Tap).unwrap();
    let out = tick_until_complete(&mut c);
    assert_eq!(
        out,
        Outcome::Completed {
            cursor: 1,
            exhausted: false,
        }
    );
    assert!(out.needs_redraw());
    assert_eq!(c.state(), ControllerState::Idle);
    assert!(!c.animator().clock().is_running());
    assert_eq!(c.chain().state(0).checkpoint(), 1.0);

    // A late tick from the timer does not touch the new cursor.
    assert_eq!(c.handle(Event::Tick).unwrap(), Outcome::Ignored);
    assert_eq!(c.chain().state(1).scale(), 0.0);
}

#[test]
fn single_node_chain_flips_in_place() {
    let mut c = controller(1);
    c.handle(Event::Tap).unwrap();
    assert_eq!(
        tick_until_complete(&mut c),
        Outcome::Completed {
            cursor: 0,
            exhausted: true,
        }
    );
    assert_eq!(c.direction(), Direction::Backward);

    assert_eq!(
        c.handle(Event::Tap).unwrap(),
        Outcome::Started {
            node: 0,
            direction: Direction::Backward,
        }
    );
    assert_eq!(
        tick_until_complete(&mut c),
        Outcome::Completed {
            cursor: 0,
            exhausted: true,
        }
    );
    assert_eq!(c.direction(), Direction::Forward);
    assert_eq!(c.chain().state(0).checkpoint(), 0.0);
}

#[test]
fn clock_failure_leaves_node_at_rest() {
    let chain = NodeChain::new(2, 0.02).unwrap();
    let mut c = SequenceController::new(chain, Animator::new(BrokenClock, DEFAULT_PERIOD));
    let err = c.handle(Event::Tap).unwrap_err();
    assert!(matches!(err, LineCircleError::Animation(_)));
    assert!(c.chain().state(0).is_idle());
    assert_eq!(c.state(), ControllerState::Idle);
}

#[test]
fn from_config_rejects_empty_chain() {
    let cfg = StageConfig {
        nodes: 0,
        ..StageConfig::default()
    };
    assert!(matches!(
        SequenceController::from_config(&cfg, ManualClock::new()),
        Err(LineCircleError::Validation(_))
    ));
}

#[test]
fn from_config_uses_configured_period() {
    let cfg = StageConfig {
        delay_ms: 16,
        ..StageConfig::default()
    };
    let mut c = SequenceController::from_config(&cfg, ManualClock::new()).unwrap();
    c.handle(Event::Tap).unwrap();
    assert_eq!(
        c.animator().clock().period(),
        Some(Duration::from_millis(16))
    );
}

#[test]
fn ignored_and_ticked_do_not_request_redraw() {
    assert!(!Outcome::Ignored.needs_redraw());
    assert!(!Outcome::Ticked.needs_redraw());
    assert!(
        Outcome::Started {
            node: 0,
            direction: Direction::Forward,
        }
        .needs_redraw()
    );
}
