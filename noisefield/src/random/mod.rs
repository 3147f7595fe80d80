use std::{
    sync::atomic::{AtomicU64, Ordering},
    time,
};

use enum_dispatch::enum_dispatch;
use legacy_rand::LegacyRand;
use xoroshiro128::Xoroshiro;

pub mod legacy_rand;
pub mod xoroshiro128;

static SEED_UNIQUIFIER: AtomicU64 = AtomicU64::new(8682522807148012u64);

/// A fresh seed mixed from a process-wide uniquifier and the wall clock.
pub fn get_seed() -> u64 {
    let seed = SEED_UNIQUIFIER
        .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |val| {
            Some(val.wrapping_mul(1181783497276652981u64))
        })
        .unwrap_or_else(|val| val);

    let nanos = time::SystemTime::now()
        .duration_since(time::SystemTime::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .unwrap_or_default();

    let nano_upper = (nanos >> 8) as u64;
    let nano_lower = nanos as u64;
    seed ^ nano_upper ^ nano_lower
}

#[enum_dispatch(RandomImpl)]
pub enum RandomGenerator {
    Xoroshiro(Xoroshiro),
    Legacy(LegacyRand),
}

#[enum_dispatch]
pub trait RandomImpl {
    fn next_i32(&mut self) -> i32;

    fn next_i64(&mut self) -> i64;

    /// Uniform in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    fn skip(&mut self, count: i32) {
        for _ in 0..count {
            self.next_i64();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        RandomGenerator, RandomImpl, get_seed, legacy_rand::LegacyRand, xoroshiro128::Xoroshiro,
    };

    #[test]
    fn dispatch_matches_inner() {
        let mut direct = Xoroshiro::from_seed(77);
        let mut dispatched = RandomGenerator::Xoroshiro(Xoroshiro::from_seed(77));
        for _ in 0..16 {
            assert_eq!(direct.next_i64(), dispatched.next_i64());
        }

        let mut direct = LegacyRand::from_seed(77);
        let mut dispatched = RandomGenerator::Legacy(LegacyRand::from_seed(77));
        for _ in 0..16 {
            assert_eq!(direct.next_f64(), dispatched.next_f64());
        }
    }

    #[test]
    fn skip_discards_longs() {
        let mut skipped = Xoroshiro::from_seed(9);
        skipped.skip(3);

        let mut stepped = Xoroshiro::from_seed(9);
        for _ in 0..3 {
            stepped.next_i64();
        }

        assert_eq!(skipped.next_i64(), stepped.next_i64());
    }

    #[test]
    fn fresh_seeds_differ() {
        assert_ne!(get_seed(), get_seed());
    }
}
