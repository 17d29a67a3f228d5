use super::traits::Sampler;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Visits every index once per epoch in a shuffled order.
///
/// The generator is seeded, so the sequence of epoch permutations is
/// reproducible for a given seed. Each call to `indices` advances the
/// generator and yields a new permutation.
#[derive(Debug, Clone)]
pub struct RandomSampler {
    rng: StdRng,
}

impl RandomSampler {
    pub fn new(seed: u64) -> Self {
        RandomSampler {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Sampler for RandomSampler {
    fn indices(&mut self, dataset_len: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..dataset_len).collect();
        indices.shuffle(&mut self.rng);
        indices
    }
}

#[cfg(test)]
#[path = "random_sampler_test.rs"]
mod tests;
