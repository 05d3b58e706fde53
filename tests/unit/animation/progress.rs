use super::*;

fn run_to_completion(p: &mut ProgressState) -> u32 {
    let mut ticks = 0;
    let mut done = false;
    while !done {
        ticks += 1;
        assert!(ticks < 1_000, "sweep never completed");
        p.advance(|| done = true);
    }
    ticks
}

#[test]
fn idle_advance_is_a_noop() {
    let mut p = ProgressState::default();
    let mut fired = false;
    p.advance(|| fired = true);
    assert!(!fired);
    assert_eq!(p.scale(), 0.0);
    assert!(p.is_idle());
}

#[test]
fn start_from_zero_goes_forward() {
    let mut p = ProgressState::default();
    let mut started = 0;
    p.start(|| started += 1);
    assert_eq!(started, 1);
    assert_eq!(p.direction(), Some(Direction::Forward));
}

#[test]
fn second_start_is_ignored_while_running() {
    let mut p = ProgressState::default();
    let mut started = 0;
    p.start(|| started += 1);
    p.advance(|| {});
    let before = p.clone();
    p.start(|| started += 1);
    assert_eq!(started, 1);
    assert_eq!(p, before);
}

#[test]
fn forward_sweep_snaps_to_one_and_fires_once() {
    let mut p = ProgressState::default();
    p.start(|| {});
    let ticks = run_to_completion(&mut p);
    assert_eq!(ticks, 50);
    assert_eq!(p.scale(), 1.0);
    assert_eq!(p.checkpoint(), 1.0);
    assert!(p.is_idle());

    let mut fired = false;
    p.advance(|| fired = true);
    assert!(!fired);
    assert_eq!(p.scale(), 1.0);
}

#[test]
fn start_from_one_goes_backward_and_returns_to_zero() {
    let mut p = ProgressState::default();
    p.start(|| {});
    run_to_completion(&mut p);

    p.start(|| {});
    assert_eq!(p.direction(), Some(Direction::Backward));
    let ticks = run_to_completion(&mut p);
    assert_eq!(ticks, 50);
    assert_eq!(p.scale(), 0.0);
    assert_eq!(p.checkpoint(), 0.0);
}

#[test]
fn overshoot_is_bounded_by_one_step() {
    let mut p = ProgressState::new(0.3);
    p.start(|| {});
    let mut max_seen: f64 = 0.0;
    let mut done = false;
    while !done {
        p.advance(|| done = true);
        max_seen = max_seen.max(p.scale());
    }
    assert!(max_seen <= 1.0 + 0.3);
    assert_eq!(p.scale(), 1.0);
}

#[test]
fn direction_helpers() {
    assert_eq!(Direction::Forward.sign(), 1.0);
    assert_eq!(Direction::Backward.sign(), -1.0);
    assert_eq!(Direction::Forward.flipped(), Direction::Backward);
    assert_eq!(Direction::Backward.flipped().flipped(), Direction::Backward);
}
