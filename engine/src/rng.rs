use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct GameRng {
    rng: StdRng,
    seed: u64,
}

impl GameRng {
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

    pub fn random_bool(&mut self) -> bool {
        self.rng.random()
    }

    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }

        let index = self.rng.random_range(0..items.len());
        items.get(index)
    }
}
