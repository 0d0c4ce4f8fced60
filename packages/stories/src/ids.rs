//! Synthetic identifiers for podcast items, which carry none in the feed.

use rand::Rng;

/// Source of story ids.
pub trait IdSource {
    /// Produce the next id. Ids must be unique within one parse call.
    fn next_id(&mut self) -> String;
}

/// Clock-seeded hexadecimal ids.
///
/// The seed is the current time in milliseconds times 1000 plus a random
/// offset below 1000; each id is the hex form of the seed plus a running
/// counter, so ids from one source never repeat.
#[derive(Debug, Clone)]
pub struct ClockIdSource {
    seed: u64,
    counter: u64,
}

impl ClockIdSource {
    /// Create a source seeded from the wall clock.
    #[must_use]
    pub fn new() -> Self {
        let millis = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_default();
        let jitter: u64 = rand::rng().random_range(0..1000);
        Self::with_seed(millis.saturating_mul(1000).saturating_add(jitter))
    }

    /// Create a source with a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self { seed, counter: 0 }
    }
}

impl Default for ClockIdSource {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for ClockIdSource {
    fn next_id(&mut self) -> String {
        let id = self.seed.wrapping_add(self.counter);
        self.counter += 1;
        format!("{id:x}")
    }
}

/// Deterministic ids `1`, `2`, `3`, … in hex.
#[derive(Debug, Clone, Default)]
pub struct SequentialIdSource {
    next: u64,
}

impl SequentialIdSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIdSource {
    fn next_id(&mut self) -> String {
        self.next += 1;
        format!("{:x}", self.next)
    }
}
