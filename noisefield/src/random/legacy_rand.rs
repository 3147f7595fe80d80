use super::RandomImpl;

const MULTIPLIER: u64 = 0x5DEECE66D;
const ADDEND: u64 = 0xB;
const MASK: u64 = (1 << 48) - 1;

/// `2^-53`, the spacing of doubles in `[0.5, 1)`.
const DOUBLE_UNIT: f64 = 1f64 / (1u64 << 53) as f64;

/// The 48-bit linear congruential generator behind `java.util.Random`.
pub struct LegacyRand {
    seed: u64,
}

impl LegacyRand {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed: (seed ^ MULTIPLIER) & MASK,
        }
    }

    fn next(&mut self, bits: u64) -> i32 {
        debug_assert!(bits <= 32);
        self.seed = self.seed.wrapping_mul(MULTIPLIER).wrapping_add(ADDEND) & MASK;
        (self.seed >> (48 - bits)) as i32
    }
}

impl RandomImpl for LegacyRand {
    fn next_i32(&mut self) -> i32 {
        self.next(32)
    }

    fn next_i64(&mut self) -> i64 {
        let high = self.next(32) as i64;
        let low = self.next(32) as i64;
        (high << 32).wrapping_add(low)
    }

    fn next_f64(&mut self) -> f64 {
        let high = self.next(26) as i64;
        let low = self.next(27) as i64;
        ((high << 27) + low) as f64 * DOUBLE_UNIT
    }
}

#[cfg(test)]
mod test {
    use crate::random::RandomImpl;

    use super::LegacyRand;

    #[test]
    fn next_i32() {
        let mut rand = LegacyRand::from_seed(513513513);
        assert_eq!(rand.next_i32(), -1302745855);
    }

    #[test]
    fn next_f64_in_unit_interval() {
        let mut rand = LegacyRand::from_seed(0);
        for _ in 0..10_000 {
            let value = rand.next_f64();
            assert!((0f64..1f64).contains(&value));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut first = LegacyRand::from_seed(42);
        let mut second = LegacyRand::from_seed(42);
        for _ in 0..64 {
            assert_eq!(first.next_i64(), second.next_i64());
        }
    }
}
