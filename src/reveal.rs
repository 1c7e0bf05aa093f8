//! Reveal Timing
//!
//! One-shot reveal latch, stagger schedule and typewriter frames.

/// Fires once, on the first visible observation with something to reveal
#[derive(Debug, Clone, Default)]
pub struct RevealLatch {
    fired: bool,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the per-item delays the first time `visible` is true.
    /// Every later call returns `None`.
    pub fn trigger(&mut self, visible: bool, count: usize, step_ms: u32) -> Option<Vec<u32>> {
        if self.fired || !visible {
            return None;
        }
        self.fired = true;
        Some(stagger_delays(count, step_ms))
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

/// Delay for item `i` is `i * step_ms`
pub fn stagger_delays(count: usize, step_ms: u32) -> Vec<u32> {
    (0..count as u32).map(|i| i.saturating_mul(step_ms)).collect()
}

/// Successive prefixes of `text`, one more character each, ending
/// with the full text. Splits on char boundaries.
pub fn typewriter_frames(text: &str) -> Vec<&str> {
    let mut frames = vec![""];
    frames.extend(
        text.char_indices()
            .map(|(i, c)| &text[..i + c.len_utf8()]),
    );
    frames
}
