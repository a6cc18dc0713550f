use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;


/// A source of uniformly distributed die faces.
///
/// Every [`rand::Rng`] is a `RandomSource`, so tests and callers can pass any
/// generator they already own. [`DiceRng`] covers the two cases the crate
/// itself needs: reproducible seeded rolls and unseeded ones.
pub trait RandomSource {
    /// Returns a value in `low..=high`, each equally likely.
    fn between(&mut self, low: u16, high: u16) -> u16;
}

impl<R: Rng> RandomSource for R {
    fn between(&mut self, low: u16, high: u16) -> u16 {
        self.random_range(low..=high)
    }
}


/// The generator used for a single roll.
///
/// A seeded `DiceRng` runs ChaCha8, whose output stream is fixed for a given
/// seed on every platform. An unseeded one is seeded from the operating system.
///
/// # Examples
/// ```
/// use dice_roller::{DiceRng, RandomSource};
///
/// let mut a = DiceRng::seeded(42);
/// let mut b = DiceRng::seeded(42);
/// assert_eq!(a.between(1, 20), b.between(1, 20));
/// ```
#[derive(Debug, Clone)]
pub enum DiceRng {
    /// Reproducible stream derived from a caller supplied seed.
    Seeded(ChaCha8Rng),
    /// Non reproducible stream seeded from OS entropy.
    Entropy(StdRng)
}

impl DiceRng {
    /// Picks [`DiceRng::seeded`] when a seed is given, [`DiceRng::from_entropy`] otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy()
        }
    }

    /// ChaCha8 stream for `seed`.
    pub fn seeded(seed: u64) -> Self {
        DiceRng::Seeded(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Fresh generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        DiceRng::Entropy(StdRng::from_os_rng())
    }

    /// `true` if the same seed would reproduce this generator's output.
    pub fn is_deterministic(&self) -> bool {
        matches!(self, DiceRng::Seeded(_))
    }
}

impl RngCore for DiceRng {
    fn next_u32(&mut self) -> u32 {
        match self {
            DiceRng::Seeded(rng) => rng.next_u32(),
            DiceRng::Entropy(rng) => rng.next_u32()
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            DiceRng::Seeded(rng) => rng.next_u64(),
            DiceRng::Entropy(rng) => rng.next_u64()
        }
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        match self {
            DiceRng::Seeded(rng) => rng.fill_bytes(dst),
            DiceRng::Entropy(rng) => rng.fill_bytes(dst)
        }
    }
}
