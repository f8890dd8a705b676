//! Playback over a finished step sequence
//!
//! [`Playback`] owns one immutable `Vec<AlgorithmStep>` and a cursor into it.
//! Stepping, seeking and auto-play are plain index arithmetic; nothing here
//! calls back into the generator. Swapping in a new sequence with
//! [`Playback::replace`] resets the cursor in the same call, so a cursor is
//! never left pointing into a sequence it was not created for.

use crate::trace::AlgorithmStep;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Slowest auto-play interval
pub const MAX_INTERVAL: Duration = Duration::from_millis(4000);

/// Fastest auto-play interval
pub const MIN_INTERVAL: Duration = Duration::from_millis(50);

/// Default auto-play interval
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(800);

/// Navigation failures reported back to the UI
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("already at the first step")]
    AtStart,

    #[error("already at the last step")]
    AtEnd,

    #[error("step {index} is out of range (0..{len})")]
    OutOfRange { index: usize, len: usize },
}

/// Cursor, play state and timer over one step sequence
#[derive(Debug, Clone)]
pub struct Playback {
    steps: Vec<AlgorithmStep>,
    position: usize,
    playing: bool,
    interval: Duration,
    last_tick: Instant,
}

impl Playback {
    pub fn new(steps: Vec<AlgorithmStep>) -> Self {
        Self::with_interval(steps, DEFAULT_INTERVAL)
    }

    pub fn with_interval(steps: Vec<AlgorithmStep>, interval: Duration) -> Self {
        Playback {
            steps,
            position: 0,
            playing: false,
            interval: interval.clamp(MIN_INTERVAL, MAX_INTERVAL),
            last_tick: Instant::now(),
        }
    }

    /// Discard the current sequence and start over on a new one
    pub fn replace(&mut self, steps: Vec<AlgorithmStep>) {
        self.steps = steps;
        self.position = 0;
        self.playing = false;
    }

    /// Step under the cursor, `None` only for an empty sequence
    pub fn current(&self) -> Option<&AlgorithmStep> {
        self.steps.get(self.position)
    }

    pub fn steps(&self) -> &[AlgorithmStep] {
        &self.steps
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.steps.len()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn step_forward(&mut self) -> Result<(), PlaybackError> {
        if self.is_at_end() {
            return Err(PlaybackError::AtEnd);
        }
        self.position += 1;
        Ok(())
    }

    pub fn step_backward(&mut self) -> Result<(), PlaybackError> {
        if self.is_at_start() {
            return Err(PlaybackError::AtStart);
        }
        self.position -= 1;
        Ok(())
    }

    /// Step forward up to `n` times; returns how many steps were taken
    pub fn step_forward_by(&mut self, n: usize) -> usize {
        let remaining = self.steps.len().saturating_sub(self.position + 1);
        let taken = n.min(remaining);
        self.position += taken;
        taken
    }

    pub fn seek(&mut self, index: usize) -> Result<(), PlaybackError> {
        if index >= self.steps.len() {
            return Err(PlaybackError::OutOfRange {
                index,
                len: self.steps.len(),
            });
        }
        self.position = index;
        Ok(())
    }

    pub fn rewind(&mut self) {
        self.position = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.position = self.steps.len().saturating_sub(1);
    }

    /// Toggle auto-play. Starting at the end rewinds first; returns the new state.
    pub fn toggle_play(&mut self, now: Instant) -> bool {
        self.playing = !self.playing;
        if self.playing {
            if self.is_at_end() {
                self.rewind();
            }
            self.last_tick = now;
        }
        self.playing
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval.clamp(MIN_INTERVAL, MAX_INTERVAL);
    }

    /// Halve the interval
    pub fn faster(&mut self) {
        self.set_interval(self.interval / 2);
    }

    /// Double the interval
    pub fn slower(&mut self) {
        self.set_interval(self.interval * 2);
    }

    /// Advance one step if playing and the interval has elapsed. Playback
    /// stops on its own at the last step. Returns true if the cursor moved.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.playing || now.saturating_duration_since(self.last_tick) < self.interval {
            return false;
        }
        self.last_tick = now;
        let moved = self.step_forward().is_ok();
        if self.is_at_end() {
            self.playing = false;
        }
        moved
    }
}
