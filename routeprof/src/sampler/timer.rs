//! The recurring sample timer
//!
//! One timer exists per process. The host reactor offers no repeating
//! primitive — a timer runs once and must be registered again — so the
//! timer re-arms itself from its own fire. That re-arm is unconditional
//! unless the process is shutting down: a missed re-arm silently stops all
//! future sampling, so nothing fallible (in particular the collector) may
//! sit between a fire and the re-arm decision.
//!
//! The state machine is synchronous and reactor-agnostic; [`SampleTimer::run`]
//! wires it to the Tokio clock and a `watch`-channel shutdown signal.

use std::time::Duration;

use log::{debug, error, info};
use tokio::sync::watch;

use crate::domain::IntervalMs;

use super::collector::Collector;

/// Whether a callback is currently pending in the reactor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Unarmed,
    Armed,
}

/// What a fire decided about the timer's future.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireOutcome {
    /// Re-registered for another period
    Rearmed,
    /// Shutdown observed; terminal
    Disarmed,
}

/// Process-global recurring sample timer.
///
/// Owned by the process-lifecycle object rather than living in module
/// state; re-arming is a method on the owned value.
#[derive(Debug)]
pub struct SampleTimer<C> {
    interval: IntervalMs,
    state: TimerState,
    fires: u64,
    rearms: u64,
    collector: C,
}

impl<C: Collector> SampleTimer<C> {
    /// Create the timer in the `Unarmed` state.
    pub fn new(interval: IntervalMs, collector: C) -> Self {
        Self { interval, state: TimerState::Unarmed, fires: 0, rearms: 0, collector }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Total fires so far.
    pub fn fires(&self) -> u64 {
        self.fires
    }

    /// Total re-arms so far (equals fires while no shutdown is observed).
    pub fn rearms(&self) -> u64 {
        self.rearms
    }

    pub fn period(&self) -> Duration {
        self.interval.to_duration()
    }

    /// Arm the timer; returns the delay until the first fire.
    pub fn arm(&mut self) -> Duration {
        self.state = TimerState::Armed;
        info!("sample timer armed (period {})", self.interval);
        self.period()
    }

    /// One fire of the timer callback.
    ///
    /// Runs the collector, logging and swallowing any failure, then makes
    /// the re-arm decision from `shutting_down` alone — collector failure
    /// never prevents re-arming.
    pub fn fire(&mut self, shutting_down: bool) -> FireOutcome {
        debug_assert!(self.state == TimerState::Armed, "fired while unarmed");
        self.fires += 1;

        if let Err(e) = self.collector.collect() {
            error!("sample collection failed: {e}");
        }

        if shutting_down {
            self.state = TimerState::Unarmed;
            FireOutcome::Disarmed
        } else {
            self.rearms += 1;
            debug!("sample timer re-armed (fire #{})", self.fires);
            FireOutcome::Rearmed
        }
    }

    /// Cancel an armed timer without firing it; terminal.
    pub fn disarm(&mut self) {
        self.state = TimerState::Unarmed;
    }

    /// Drive the timer on the current-thread reactor until shutdown.
    ///
    /// Each pass sleeps one period, fires, and re-arms unless `shutdown`
    /// has signalled `true` (or the sender is gone). Returns the final
    /// timer so the host can inspect its counters.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) -> Self {
        let mut delay = self.arm();
        loop {
            tokio::select! {
                () = tokio::time::sleep(delay) => {
                    let shutting_down = *shutdown.borrow();
                    match self.fire(shutting_down) {
                        FireOutcome::Rearmed => delay = self.period(),
                        FireOutcome::Disarmed => break,
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        self.disarm();
                        break;
                    }
                }
            }
        }
        info!("sample timer disarmed after {} fires", self.fires);
        self
    }
}
