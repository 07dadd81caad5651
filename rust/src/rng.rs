use std::time::{SystemTime, UNIX_EPOCH};

use rand_core::{impls, Error, RngCore, SeedableRng};

/// Xorshift32 generator (shift triple 13, 17, 5).
///
/// Each worker owns exactly one instance. A zero state is a fixed point of the
/// shift sequence, so seeds must come through [`SeedSource::seed_for`] or be
/// chosen non-zero by the caller.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    #[inline(always)]
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

impl RngCore for XorShift32 {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        XorShift32::next_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for XorShift32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

/// Draws a value in `min..=max` by modulo reduction.
///
/// Widths that do not divide 2^32 carry a slight bias toward low values; for a
/// width of 4 the division is exact. `min <= max` and a width that fits in a
/// `u32` are checked by `SimulationConfig::validate`.
#[inline(always)]
pub fn sample<R: RngCore + ?Sized>(rng: &mut R, min: u32, max: u32) -> u32 {
    debug_assert!(min <= max, "inverted sample range {min}..={max}");
    min + rng.next_u32() % (max - min + 1)
}

/// Where a worker's seed comes from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum SeedSource {
    /// Wall-clock seconds plus the worker index. Workers started within the
    /// same second get consecutive seeds.
    #[default]
    Clock,
    /// A fixed base plus the worker index; reproducible runs.
    Fixed(u32),
}

impl SeedSource {
    pub fn seed_for(&self, worker: usize) -> u32 {
        let base = match *self {
            SeedSource::Clock => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs() as u32)
                .unwrap_or(1),
            SeedSource::Fixed(base) => base,
        };
        match base.wrapping_add(worker as u32) {
            0 => 1,
            seed => seed,
        }
    }
}
