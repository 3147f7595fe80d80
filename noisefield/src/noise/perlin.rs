use std::convert::Infallible;

use crate::{
    math::{fade, lerp3},
    random::{RandomImpl, xoroshiro128::Xoroshiro},
    seed::Seed,
};

use super::GRADIENTS;

/// Classic three dimensional gradient noise over a seeded permutation table.
///
/// The table is filled once from 256 draws of a random source and never changes
/// afterwards, so every query is a pure function of its coordinates. The field
/// repeats every 256 units along each axis and is exactly zero on the integer
/// lattice.
#[derive(Clone, PartialEq, Eq)]
pub struct NoiseField {
    /// The 256 seeded entries followed by a copy of themselves, so that a wrapped
    /// cell coordinate plus a one cell offset plus an entry never needs wrapping again.
    perm: [u8; 512],
}

impl NoiseField {
    /// Builds a field from a source of values in `[0, 1)`, drawing exactly 256 of them.
    ///
    /// Each draw becomes `floor(draw * 256) & 255`. Values outside `[0, 1)` are
    /// reduced the same way instead of being rejected.
    pub fn new<F>(mut source: F) -> Self
    where
        F: FnMut() -> f64,
    {
        match Self::try_new(|| Ok::<f64, Infallible>(source())) {
            Ok(field) => field,
            Err(never) => match never {},
        }
    }

    /// Like [`NoiseField::new`], but stops at the first draw that fails and hands
    /// that error back untouched.
    pub fn try_new<F, E>(mut source: F) -> Result<Self, E>
    where
        F: FnMut() -> Result<f64, E>,
    {
        let mut perm = [0u8; 512];
        for entry in &mut perm[..256] {
            *entry = Self::table_entry(source()?);
        }

        let (seeded, mirror) = perm.split_at_mut(256);
        mirror.copy_from_slice(seeded);

        Ok(Self { perm })
    }

    pub fn from_random<R: RandomImpl>(random: &mut R) -> Self {
        Self::new(|| random.next_f64())
    }

    pub fn from_seed(seed: Seed) -> Self {
        log::debug!("building noise field for seed {}", seed.0 as i64);
        Self::from_random(&mut Xoroshiro::from_seed(seed.0))
    }

    #[inline]
    fn table_entry(draw: f64) -> u8 {
        ((draw * 256f64).floor() as i64 & 255) as u8
    }

    #[inline]
    fn perm(&self, index: usize) -> usize {
        self.perm[index] as usize
    }

    /// Hashes a wrapped lattice corner into `GRADIENTS`.
    #[inline]
    fn gradient_index(&self, x: usize, y: usize, z: usize) -> usize {
        self.perm(x + self.perm(y + self.perm(z))) % GRADIENTS.len()
    }

    #[inline]
    fn grad(&self, x: usize, y: usize, z: usize, dx: f64, dy: f64, dz: f64) -> f64 {
        GRADIENTS[self.gradient_index(x, y, z)].dot(dx, dy, dz)
    }

    /// Samples the field. Non-finite coordinates give an unspecified value.
    #[allow(clippy::many_single_char_names)]
    pub fn noise(&self, x: f64, y: f64, z: f64) -> f64 {
        let x_floor = x.floor();
        let y_floor = y.floor();
        let z_floor = z.floor();

        let fx = x - x_floor;
        let fy = y - y_floor;
        let fz = z - z_floor;

        // Two's complement AND keeps negative cells in range, same as floored mod 256
        let i = (x_floor as i64 & 255) as usize;
        let j = (y_floor as i64 & 255) as usize;
        let k = (z_floor as i64 & 255) as usize;

        let n000 = self.grad(i, j, k, fx, fy, fz);
        let n100 = self.grad(i + 1, j, k, fx - 1f64, fy, fz);
        let n010 = self.grad(i, j + 1, k, fx, fy - 1f64, fz);
        let n110 = self.grad(i + 1, j + 1, k, fx - 1f64, fy - 1f64, fz);
        let n001 = self.grad(i, j, k + 1, fx, fy, fz - 1f64);
        let n101 = self.grad(i + 1, j, k + 1, fx - 1f64, fy, fz - 1f64);
        let n011 = self.grad(i, j + 1, k + 1, fx, fy - 1f64, fz - 1f64);
        let n111 = self.grad(i + 1, j + 1, k + 1, fx - 1f64, fy - 1f64, fz - 1f64);

        lerp3(
            fade(fx),
            fade(fy),
            fade(fz),
            n000,
            n100,
            n010,
            n110,
            n001,
            n101,
            n011,
            n111,
        )
    }
}

impl Default for NoiseField {
    fn default() -> Self {
        Self::new(rand::random::<f64>)
    }
}

impl std::fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseField")
            .field("permutation", &&self.perm[..8])
            .finish_non_exhaustive()
    }
}
