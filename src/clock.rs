// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Zoo Economy Engine - Injected Environment (clock, gender coin flip)

use rand::{Rng, RngCore};

use crate::types::{Gender, Timestamp};

// ─── Clock ───────────────────────────────────────────────────────────────────

/// Source of "now" for elapsed-interval computations.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// Host wall clock. Not available in the browser build, where the caller
/// passes `Date.now()` and the engine wraps it in a [`FixedClock`].
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(not(target_arch = "wasm32"))]
impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let ms = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0);
        Timestamp::from_millis(ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Timestamp);

impl FixedClock {
    pub fn at_millis(ms: i64) -> Self {
        Self(Timestamp::from_millis(ms))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}

// ─── Gender source ───────────────────────────────────────────────────────────

/// Unweighted coin flip used when a baby evolves.
pub trait GenderSource {
    fn next_gender(&mut self) -> Gender;
}

/// Coin flip backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngGenderSource<R: RngCore> {
    rng: R,
}

impl<R: RngCore> RngGenderSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore> GenderSource for RngGenderSource<R> {
    fn next_gender(&mut self) -> Gender {
        if self.rng.gen_bool(0.5) { Gender::Female } else { Gender::Male }
    }
}

/// Always yields the same gender.
#[derive(Debug, Clone, Copy)]
pub struct FixedGender(pub Gender);

impl GenderSource for FixedGender {
    fn next_gender(&mut self) -> Gender {
        self.0
    }
}

/// Female, male, female, ... Handy for seeding balanced pairs.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlternatingGenders {
    flips: u64,
}

impl GenderSource for AlternatingGenders {
    fn next_gender(&mut self) -> Gender {
        self.flips += 1;
        if self.flips % 2 == 1 { Gender::Female } else { Gender::Male }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn fixed_clock_reports_its_instant() {
        assert_eq!(FixedClock::at_millis(42).now(), Timestamp(42));
    }

    #[test]
    fn seeded_source_is_reproducible() {
        let mut a = RngGenderSource::new(ChaCha8Rng::seed_from_u64(7));
        let mut b = RngGenderSource::new(ChaCha8Rng::seed_from_u64(7));
        let xs: Vec<Gender> = (0..32).map(|_| a.next_gender()).collect();
        let ys: Vec<Gender> = (0..32).map(|_| b.next_gender()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn seeded_source_yields_both_genders() {
        let mut src = RngGenderSource::new(ChaCha8Rng::seed_from_u64(1));
        let females = (0..1000)
            .filter(|_| src.next_gender() == Gender::Female)
            .count();
        assert!((400..=600).contains(&females), "females = {}", females);
    }

    #[test]
    fn alternating_source_alternates() {
        let mut src = AlternatingGenders::default();
        assert_eq!(src.next_gender(), Gender::Female);
        assert_eq!(src.next_gender(), Gender::Male);
        assert_eq!(src.next_gender(), Gender::Female);
    }
}
