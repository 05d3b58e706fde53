use crate::{
    animation::animator::Clock,
    foundation::error::{LineCircleError, LineCircleResult},
    sequence::controller::{Event, Outcome, SequenceController},
};

/// Feed ticks until the animator stops. `on_tick` sees the controller after every tick.
///
/// Returns the number of ticks dispatched. Fails if the sweep has not settled after
/// `max_ticks`, leaving the controller mid-sweep.
#[tracing::instrument(skip(controller, on_tick), fields(cursor = controller.cursor()))]
pub fn drive_to_rest<C: Clock>(
    controller: &mut SequenceController<C>,
    max_ticks: u32,
    mut on_tick: impl FnMut(&SequenceController<C>, Outcome) -> LineCircleResult<()>,
) -> LineCircleResult<u32> {
    let mut ticks = 0u32;
    while controller.animator().is_running() {
        if ticks >= max_ticks {
            return Err(LineCircleError::animation(format!(
                "sweep on node {} did not settle within {max_ticks} ticks",
                controller.cursor()
            )));
        }
        let outcome = controller.handle(Event::Tick)?;
        ticks += 1;
        on_tick(&*controller, outcome)?;
    }
    Ok(ticks)
}

/// Tap once and run the resulting sweep to completion. Returns the tap outcome and the
/// completion outcome (`None` when the tap was ignored).
pub fn tap_and_settle<C: Clock>(
    controller: &mut SequenceController<C>,
    max_ticks: u32,
) -> LineCircleResult<(Outcome, Option<Outcome>)> {
    let tap = controller.handle(Event::Tap)?;
    let mut last = None;
    drive_to_rest(controller, max_ticks, |_, outcome| {
        if matches!(outcome, Outcome::Completed { .. }) {
            last = Some(outcome);
        }
        Ok(())
    })?;
    Ok((tap, last))
}

/// Upper bound on the ticks one sweep can take for a given step, saturating at `u32::MAX`.
pub fn ticks_per_sweep(step: f64) -> u32 {
    // `as` saturates for out-of-range floats.
    ((1.0 / step).ceil() as u32).saturating_add(1)
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/session.rs"]
mod tests;
