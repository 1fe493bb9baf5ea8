use rand::distr::{Bernoulli, Distribution};

use crate::error::{BanditError, Result};

/// An environment the sampler can play against.
///
/// Note: `play` takes `dyn rand::RngCore` instead of a generic parameter so
/// that `&dyn Environment` stays usable. Synthetic and data-backed
/// environments can both implement it.
pub trait Environment {
    /// Number of arms available to play.
    fn n_arms(&self) -> usize;

    /// Play `arm` once and return the observed reward, 0 or 1.
    ///
    /// Implementations must fail with [`BanditError::InvalidArm`] when
    /// `arm >= self.n_arms()`.
    fn play(&self, arm: usize, rng: &mut dyn rand::RngCore) -> Result<u8>;
}

/// A simulated multi-armed bandit with Bernoulli rewards.
///
/// Each arm pays 1 with its configured success rate and 0 otherwise. Plays
/// are independent draws; the bandit holds no mutable state.
#[derive(Clone, Debug)]
pub struct Bandit {
    success_rates: Vec<f64>,
    arms: Vec<Bernoulli>,
}

impl Bandit {
    /// Creates a bandit with one arm per success rate
    pub fn new<I>(success_rates: I) -> Result<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let success_rates: Vec<f64> = success_rates.into_iter().collect();

        if success_rates.is_empty() {
            return Err(BanditError::InvalidArgument {
                message: "a bandit needs at least one arm".to_string(),
            });
        }

        let arms = success_rates
            .iter()
            .enumerate()
            .map(|(arm, &rate)| {
                Bernoulli::new(rate).map_err(|_| BanditError::InvalidProbability { arm, rate })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            success_rates,
            arms,
        })
    }

    /// Gets the configured success rates, in arm order
    pub fn success_rates(&self) -> &[f64] {
        &self.success_rates
    }

    /// Gets the success rate of a single arm
    pub fn success_rate(&self, arm: usize) -> Result<f64> {
        self.success_rates
            .get(arm)
            .copied()
            .ok_or(BanditError::InvalidArm {
                arm,
                n_arms: self.n_arms(),
            })
    }

    /// Index of the arm with the highest success rate (lowest index on ties)
    pub fn best_arm(&self) -> usize {
        argmax(&self.success_rates)
    }

    /// Success rate of [`Bandit::best_arm`]
    pub fn best_rate(&self) -> f64 {
        self.success_rates[self.best_arm()]
    }
}

impl Environment for Bandit {
    fn n_arms(&self) -> usize {
        self.success_rates.len()
    }

    fn play(&self, arm: usize, rng: &mut dyn rand::RngCore) -> Result<u8> {
        let dist = self.arms.get(arm).ok_or(BanditError::InvalidArm {
            arm,
            n_arms: self.n_arms(),
        })?;
        Ok(u8::from(dist.sample(rng)))
    }
}

/// Index of the largest value; the lowest index wins ties
pub(crate) fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &value) in values.iter().enumerate().skip(1) {
        if value > values[best] {
            best = i;
        }
    }
    best
}
