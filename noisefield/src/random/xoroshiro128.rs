use super::RandomImpl;

const GOLDEN_RATIO_64: u64 = 0x9E3779B97F4A7C15;
const SILVER_RATIO_64: u64 = 0x6A09E667F3BCC909;

const DOUBLE_UNIT: f64 = 1f64 / (1u64 << 53) as f64;

/// xoroshiro128++ seeded the way Minecraft's `XoroshiroRandomSource` expands a 64-bit seed.
pub struct Xoroshiro {
    lo: u64,
    hi: u64,
}

fn mix_stafford_13(z: u64) -> u64 {
    let z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    let z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

impl Xoroshiro {
    fn new(lo: u64, hi: u64) -> Self {
        // An all-zero state never leaves zero
        if (lo | hi) == 0 {
            return Self {
                lo: GOLDEN_RATIO_64,
                hi: SILVER_RATIO_64,
            };
        }
        Self { lo, hi }
    }

    pub fn from_seed(seed: u64) -> Self {
        let lo = seed ^ SILVER_RATIO_64;
        let hi = lo.wrapping_add(GOLDEN_RATIO_64);
        Self::new(mix_stafford_13(lo), mix_stafford_13(hi))
    }

    fn next_random(&mut self) -> u64 {
        let l = self.lo;
        let mut m = self.hi;
        let n = l.wrapping_add(m).rotate_left(17).wrapping_add(l);
        m ^= l;
        self.lo = l.rotate_left(49) ^ m ^ (m << 21);
        self.hi = m.rotate_left(28);
        n
    }

    fn next_bits(&mut self, bits: u64) -> u64 {
        self.next_random() >> (64 - bits)
    }
}

impl RandomImpl for Xoroshiro {
    fn next_i32(&mut self) -> i32 {
        self.next_random() as i32
    }

    fn next_i64(&mut self) -> i64 {
        self.next_random() as i64
    }

    fn next_f64(&mut self) -> f64 {
        self.next_bits(53) as f64 * DOUBLE_UNIT
    }
}

#[cfg(test)]
mod test {
    use crate::random::RandomImpl;

    use super::{Xoroshiro, mix_stafford_13};

    #[test]
    fn next_i32() {
        let mut rand = Xoroshiro::from_seed(5);
        assert_eq!(rand.next_i32(), -1678727252);

        let mut rand = Xoroshiro::from_seed(513513513);
        assert_eq!(rand.next_i32(), 404174895);
    }

    #[test]
    fn stafford_mix_of_zero() {
        assert_eq!(mix_stafford_13(0), 0);
    }

    #[test]
    fn zero_state_is_replaced() {
        let mut rand = Xoroshiro::new(0, 0);
        assert_ne!(rand.next_i64(), 0);
    }

    #[test]
    fn next_f64_in_unit_interval() {
        let mut rand = Xoroshiro::from_seed(1);
        for _ in 0..10_000 {
            let value = rand.next_f64();
            assert!((0f64..1f64).contains(&value));
        }
    }
}
