//! Spin animation: cycles the remaining names on a deadline schedule.
//!
//! The animator owns no thread or timer. The event loop calls [`Animator::poll`]
//! with the current instant; the animator answers with the frame to show or
//! the one-time completion event.

use std::time::{Duration, Instant};

use crate::constants::{
    DEFAULT_BASE_INTERVAL_MS, DEFAULT_FINAL_SPIN_MS, DEFAULT_SPIN_MS, MIN_TICK_MS,
};
use crate::error::PickerError;

/// Timing parameters of a spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinTiming {
    /// Tick interval for a single name; divided by the number of names.
    pub base_interval: Duration,
    /// Total duration when more than one name remains.
    pub spin: Duration,
    /// Total duration when exactly one name remains.
    pub final_spin: Duration,
}

impl Default for SpinTiming {
    fn default() -> Self {
        Self {
            base_interval: Duration::from_millis(DEFAULT_BASE_INTERVAL_MS),
            spin: Duration::from_millis(DEFAULT_SPIN_MS),
            final_spin: Duration::from_millis(DEFAULT_FINAL_SPIN_MS),
        }
    }
}

impl SpinTiming {
    /// Build timings from millisecond values.
    #[must_use]
    pub fn from_millis(base_interval: u64, spin: u64, final_spin: u64) -> Self {
        Self {
            base_interval: Duration::from_millis(base_interval),
            spin: Duration::from_millis(spin),
            final_spin: Duration::from_millis(final_spin),
        }
    }

    /// Interval between frames: faster the more names there are.
    #[must_use]
    pub fn tick_interval(&self, names: usize) -> Duration {
        let divisor = u32::try_from(names.max(1)).unwrap_or(u32::MAX);
        (self.base_interval / divisor).max(Duration::from_millis(MIN_TICK_MS))
    }

    /// Total duration of a spin over `names` names.
    #[must_use]
    pub fn duration(&self, names: usize) -> Duration {
        if names == 1 {
            self.final_spin
        } else {
            self.spin
        }
    }
}

/// Output of [`Animator::poll`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimationEvent {
    /// A new name should be displayed.
    Frame(String),
    /// The spin has run its full duration. Emitted exactly once per spin.
    Finished,
}

#[derive(Debug)]
struct ActiveSpin {
    names: Vec<String>,
    started: Instant,
    tick: Duration,
    ends: Instant,
    shown: Option<u128>,
}

/// Deadline-driven spin animation. At most one spin runs at a time.
#[derive(Debug, Default)]
pub struct Animator {
    timing: SpinTiming,
    active: Option<ActiveSpin>,
}

impl Animator {
    #[must_use]
    pub fn new(timing: SpinTiming) -> Self {
        Self {
            timing,
            active: None,
        }
    }

    #[must_use]
    pub fn timing(&self) -> SpinTiming {
        self.timing
    }

    #[must_use]
    pub fn is_spinning(&self) -> bool {
        self.active.is_some()
    }

    /// Start spinning over `names` at `now`.
    ///
    /// Fails with [`PickerError::AlreadySpinning`] while another spin is active.
    pub fn spin(&mut self, names: &[String], now: Instant) -> Result<(), PickerError> {
        if self.active.is_some() {
            return Err(PickerError::AlreadySpinning);
        }
        let tick = self.timing.tick_interval(names.len());
        let duration = self.timing.duration(names.len());
        tracing::debug!(names = names.len(), ?tick, ?duration, "spin started");
        self.active = Some(ActiveSpin {
            names: names.to_vec(),
            started: now,
            tick,
            ends: now + duration,
            shown: None,
        });
        Ok(())
    }

    /// Stop the active spin without emitting [`AnimationEvent::Finished`].
    ///
    /// Returns whether a spin was running.
    pub fn cancel(&mut self) -> bool {
        let was_spinning = self.active.take().is_some();
        if was_spinning {
            tracing::debug!("spin cancelled");
        }
        was_spinning
    }

    /// Advance the animation to `now`.
    ///
    /// Returns `None` when nothing changed since the previous poll.
    pub fn poll(&mut self, now: Instant) -> Option<AnimationEvent> {
        let spin = self.active.as_mut()?;
        if now >= spin.ends {
            self.active = None;
            return Some(AnimationEvent::Finished);
        }
        if spin.names.is_empty() {
            return None;
        }
        // The first frame appears one tick after the start.
        let ticks = now.saturating_duration_since(spin.started).as_nanos() / spin.tick.as_nanos();
        let frame = ticks.checked_sub(1)?;
        if spin.shown == Some(frame) {
            return None;
        }
        spin.shown = Some(frame);
        let len = spin.names.len() as u128;
        let index = usize::try_from(frame % len).unwrap_or(0);
        Some(AnimationEvent::Frame(spin.names[index].clone()))
    }

    /// Instant at which the next poll can produce an event.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        let spin = self.active.as_ref()?;
        let next_tick = match spin.shown {
            Some(frame) => frame + 2,
            None => 1,
        };
        let offset = spin
            .tick
            .checked_mul(u32::try_from(next_tick).unwrap_or(u32::MAX))
            .unwrap_or(Duration::MAX);
        Some(
            spin.started
                .checked_add(offset)
                .map_or(spin.ends, |t| t.min(spin.ends)),
        )
    }
}
