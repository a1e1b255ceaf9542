use std::time::Duration;

use super::constants::{TYPING_INITIAL_DELAY, TYPING_TICK};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingTiming {
    pub initial_delay: Duration,
    pub tick: Duration,
}

impl Default for TypingTiming {
    fn default() -> Self {
        Self {
            initial_delay: TYPING_INITIAL_DELAY,
            tick: TYPING_TICK,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypingState {
    pub revealed_text: String,
    pub is_complete: bool,
}

/// Character-by-character reveal of a fixed string.
///
/// The first state (empty prefix) is produced when the initial delay
/// elapses; every tick after that reveals one more character. Once the full
/// string is visible the typewriter is complete and `step` stops yielding.
#[derive(Clone, Debug)]
pub struct Typewriter {
    target: String,
    // Byte offset of the end of each prefix, `boundaries[k]` = k chars shown.
    boundaries: Vec<usize>,
    revealed: usize,
}

impl Typewriter {
    pub fn new(target: impl Into<String>) -> Self {
        let target = target.into();
        let boundaries = prefix_boundaries(&target);
        Self {
            target,
            boundaries,
            revealed: 0,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Number of characters in the target.
    pub fn len(&self) -> usize {
        self.boundaries.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn revealed_text(&self) -> &str {
        &self.target[..self.boundaries[self.revealed]]
    }

    pub fn is_complete(&self) -> bool {
        self.revealed == self.len()
    }

    pub fn state(&self) -> TypingState {
        TypingState {
            revealed_text: self.revealed_text().to_string(),
            is_complete: self.is_complete(),
        }
    }

    /// Reveal one more character. Returns `None` once complete; no further
    /// ticks should be scheduled after that.
    pub fn step(&mut self) -> Option<TypingState> {
        if self.is_complete() {
            return None;
        }
        self.revealed += 1;
        Some(self.state())
    }

    /// Start over from the empty prefix, optionally with a new target.
    pub fn restart(&mut self, target: Option<String>) {
        if let Some(t) = target {
            self.boundaries = prefix_boundaries(&t);
            self.target = t;
        }
        self.revealed = 0;
    }

    /// Every state in order, starting with the empty prefix.
    pub fn states(&self) -> impl Iterator<Item = TypingState> + '_ {
        (0..=self.len()).map(move |k| TypingState {
            revealed_text: self.target[..self.boundaries[k]].to_string(),
            is_complete: k == self.len(),
        })
    }

    /// State at `elapsed` since mount, or `None` before the initial delay.
    pub fn state_at(&self, elapsed: Duration, timing: &TypingTiming) -> Option<TypingState> {
        let since_start = elapsed.checked_sub(timing.initial_delay)?;
        let ticks = if timing.tick.is_zero() {
            self.len()
        } else {
            (since_start.as_nanos() / timing.tick.as_nanos()) as usize
        };
        let k = ticks.min(self.len());
        Some(TypingState {
            revealed_text: self.target[..self.boundaries[k]].to_string(),
            is_complete: k == self.len(),
        })
    }

    /// Elapsed time at which the full string becomes visible.
    pub fn total_duration(&self, timing: &TypingTiming) -> Duration {
        timing.initial_delay + timing.tick * self.len() as u32
    }
}

fn prefix_boundaries(target: &str) -> Vec<usize> {
    let mut out = Vec::with_capacity(target.len() + 1);
    out.push(0);
    out.extend(target.char_indices().skip(1).map(|(i, _)| i));
    if !target.is_empty() {
        out.push(target.len());
    }
    out
}
