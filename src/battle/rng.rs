use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform draws in `[0, 1)` for turn resolution.
///
/// `reason` names what the draw decides ("accuracy", "damage variance", ...)
/// so scripted sources can report which draw ran out.
pub trait BattleRng {
    fn next_unit(&mut self, reason: &str) -> f64;
}

/// Draw in `[0, 100)`.
pub fn roll_percent(rng: &mut dyn BattleRng, reason: &str) -> f64 {
    rng.next_unit(reason) * 100.0
}

/// Percent chance check. `chance >= 100` always succeeds and `0` always
/// fails, neither consuming a draw.
pub fn chance(rng: &mut dyn BattleRng, percent: u8, reason: &str) -> bool {
    match percent {
        0 => false,
        p if p >= 100 => true,
        p => roll_percent(rng, reason) < f64::from(p),
    }
}

/// Damage variance in `[-0.2, 0.2)`.
pub fn variance(rng: &mut dyn BattleRng) -> f64 {
    rng.next_unit("damage variance") * 0.4 - 0.2
}

/// Uniform integer in `min..=max`.
pub fn turns_between(rng: &mut dyn BattleRng, min: u8, max: u8, reason: &str) -> u8 {
    let span = f64::from(max.saturating_sub(min)) + 1.0;
    let offset = (rng.next_unit(reason) * span).floor() as u8;
    min.saturating_add(offset.min(max.saturating_sub(min)))
}

/// Uniform index in `0..len`. `len` must be non-zero.
pub fn pick_index(rng: &mut dyn BattleRng, len: usize, reason: &str) -> usize {
    let index = (rng.next_unit(reason) * len as f64).floor() as usize;
    index.min(len.saturating_sub(1))
}

/// Scripted draws for deterministic tests.
#[derive(Debug, Clone)]
pub struct TurnRng {
    outcomes: Vec<f64>,
    index: usize,
}

impl TurnRng {
    pub fn new_for_test(outcomes: Vec<f64>) -> Self {
        Self { outcomes, index: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.outcomes.len() - self.index
    }
}

impl BattleRng for TurnRng {
    fn next_unit(&mut self, reason: &str) -> f64 {
        if self.index >= self.outcomes.len() {
            panic!(
                "TurnRng exhausted! Tried to get a value for: '{}'. Need more random values.",
                reason
            );
        }
        let outcome = self.outcomes[self.index];

        #[cfg(test)]
        println!("[RNG] Consumed {} for: {}", outcome, reason);

        self.index += 1;
        outcome
    }
}

/// Production adapter over any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandRng<R: Rng = StdRng> {
    inner: R,
}

impl<R: Rng> RandRng<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl RandRng<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> BattleRng for RandRng<R> {
    fn next_unit(&mut self, reason: &str) -> f64 {
        let value: f64 = self.inner.random();
        tracing::trace!(reason, value, "rng draw");
        value
    }
}
