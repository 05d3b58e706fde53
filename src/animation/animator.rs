use std::{
    sync::mpsc::{self, RecvTimeoutError},
    thread::JoinHandle,
    time::Duration,
};

use crate::foundation::error::{LineCircleError, LineCircleResult};

/// Default tick period.
pub const DEFAULT_PERIOD: Duration = Duration::from_millis(30);

/// Host scheduler primitive behind the [`Animator`].
///
/// A running clock delivers ticks to the host on its own schedule; the animator only decides
/// when it runs.
pub trait Clock {
    fn start(&mut self, period: Duration) -> LineCircleResult<()>;
    fn stop(&mut self);
}

/// Repeating ticker guarded by a running flag so every start is paired with exactly one stop.
#[derive(Debug)]
pub struct Animator<C: Clock> {
    clock: C,
    period: Duration,
    running: bool,
}

impl<C: Clock> Animator<C> {
    pub fn new(clock: C, period: Duration) -> Self {
        Self {
            clock,
            period,
            running: false,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Returns `true` if this call started the clock.
    pub fn start(&mut self) -> LineCircleResult<bool> {
        if self.running {
            return Ok(false);
        }
        self.clock.start(self.period)?;
        self.running = true;
        Ok(true)
    }

    /// Returns `true` if this call stopped the clock.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        self.clock.stop();
        true
    }
}

/// Deterministic clock that never ticks by itself; the caller feeds ticks by hand.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ManualClock {
    running: bool,
    period: Option<Duration>,
    starts: u32,
    stops: u32,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn period(&self) -> Option<Duration> {
        self.period
    }

    pub fn starts(&self) -> u32 {
        self.starts
    }

    pub fn stops(&self) -> u32 {
        self.stops
    }
}

impl Clock for ManualClock {
    fn start(&mut self, period: Duration) -> LineCircleResult<()> {
        self.running = true;
        self.period = Some(period);
        self.starts += 1;
        Ok(())
    }

    fn stop(&mut self) {
        self.running = false;
        self.stops += 1;
    }
}

struct Worker {
    stop_tx: mpsc::Sender<()>,
    handle: JoinHandle<()>,
}

/// Clock backed by a background thread that sends `msg` into `tx` once per period.
///
/// The thread is joined on [`Clock::stop`] and on drop. Ticks already queued in the channel when
/// the clock stops are still delivered, so consumers must tolerate a stale tick.
pub struct ThreadClock<M: Clone + Send + 'static> {
    tx: mpsc::Sender<M>,
    msg: M,
    worker: Option<Worker>,
}

impl<M: Clone + Send + 'static> ThreadClock<M> {
    pub fn new(tx: mpsc::Sender<M>, msg: M) -> Self {
        Self {
            tx,
            msg,
            worker: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }
}

impl<M: Clone + Send + 'static> Clock for ThreadClock<M> {
    fn start(&mut self, period: Duration) -> LineCircleResult<()> {
        if self.worker.is_some() {
            return Ok(());
        }

        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let tx = self.tx.clone();
        let msg = self.msg.clone();
        let handle = std::thread::Builder::new()
            .name("linecircle-clock".to_string())
            .spawn(move || {
                loop {
                    match stop_rx.recv_timeout(period) {
                        Err(RecvTimeoutError::Timeout) => {
                            if tx.send(msg.clone()).is_err() {
                                break;
                            }
                        }
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
            })
            .map_err(|e| LineCircleError::animation(format!("spawn clock thread: {e}")))?;

        tracing::trace!(?period, "clock thread started");
        self.worker = Some(Worker { stop_tx, handle });
        Ok(())
    }

    fn stop(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };
        let _ = worker.stop_tx.send(());
        if worker.handle.join().is_err() {
            tracing::warn!("clock thread panicked");
        }
        tracing::trace!("clock thread stopped");
    }
}

impl<M: Clone + Send + 'static> Drop for ThreadClock<M> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/animator.rs"]
mod tests;
