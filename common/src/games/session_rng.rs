use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Seeded source of randomness for one console run. Every random move goes
/// through it, so a fixed seed replays the same games.
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
        Self::new(rand::rng().random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform pick from `items`; `None` when empty.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_produces_same_sequence() {
        let mut first = SessionRng::new(42);
        let mut second = SessionRng::new(42);

        let items: Vec<usize> = (0..9).collect();
        let a: Vec<usize> = (0..16).filter_map(|_| first.choose(&items).copied()).collect();
        let b: Vec<usize> = (0..16).filter_map(|_| second.choose(&items).copied()).collect();

        assert_eq!(a, b);
        assert_eq!(first.seed(), 42);
    }

    #[test]
    fn test_choose_from_empty_slice_is_none() {
        let mut rng = SessionRng::from_random();
        let empty: [u8; 0] = [];
        assert_eq!(rng.choose(&empty), None);
    }

    #[test]
    fn test_choose_returns_member() {
        let mut rng = SessionRng::new(1);
        let items = [3, 5, 8];
        for _ in 0..50 {
            let picked = rng.choose(&items).unwrap();
            assert!(items.contains(picked));
        }
    }
}
