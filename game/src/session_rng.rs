use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG owned by a session. Every random decision in a match goes
/// through this so a session can be replayed from its seed.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform draw in [1, 100], compared against difficulty percentages.
    pub fn percent_roll(&mut self) -> u32 {
        self.rng.random_range(1..=100)
    }

    pub fn coin_flip(&mut self) -> bool {
        self.rng.random()
    }

    /// Uniform index into a collection of `len` items, None when empty.
    pub fn choose_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.rng.random_range(0..len))
    }

    /// Seed for an RNG handed to a worker task, drawn from this stream so
    /// the whole session stays reproducible.
    pub fn derive_seed(&mut self) -> u64 {
        self.rng.random()
    }
}
