// --- File: crates/hotelier_calendar/src/random.rs ---
//! Random draws for simulated availability.

use ring::rand::{SecureRandom, SystemRandom};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::error;

/// Uniform draws in `[0, 1)`.
pub trait RandomSource: Send + Sync {
    fn next_unit(&self) -> f64;
}

/// Draws from the operating system generator.
pub struct SystemRandomSource {
    rng: SystemRandom,
}

impl SystemRandomSource {
    pub fn new() -> Self {
        Self {
            rng: SystemRandom::new(),
        }
    }
}

impl Default for SystemRandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemRandomSource {
    fn next_unit(&self) -> f64 {
        let mut buf = [0u8; 8];
        if self.rng.fill(&mut buf).is_err() {
            // Only the midpoint is returned; simulated data stays plausible
            error!("System random generator failed, using 0.5");
            return 0.5;
        }
        // Top 53 bits give every representable step in [0, 1)
        (u64::from_le_bytes(buf) >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Replays a fixed list of draws, wrapping around at the end.
#[derive(Debug)]
pub struct FixedSequence {
    values: Vec<f64>,
    cursor: AtomicUsize,
}

impl FixedSequence {
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Always returns `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for FixedSequence {
    fn next_unit(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let idx = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.values[idx % self.values.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_random_stays_in_unit_interval() {
        let source = SystemRandomSource::new();
        for _ in 0..1000 {
            let value = source.next_unit();
            assert!((0.0..1.0).contains(&value), "Out of range: {}", value);
        }
    }

    #[test]
    fn test_fixed_sequence_wraps() {
        let source = FixedSequence::new(vec![0.1, 0.9]);
        assert_eq!(source.next_unit(), 0.1);
        assert_eq!(source.next_unit(), 0.9);
        assert_eq!(source.next_unit(), 0.1);
    }

    #[test]
    fn test_empty_sequence_yields_zero() {
        let source = FixedSequence::new(Vec::new());
        assert_eq!(source.next_unit(), 0.0);
    }
}
