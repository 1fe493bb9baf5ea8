//! Beta posterior bookkeeping for Bernoulli arms.

use rand::Rng;
use rand_distr::{Beta, Distribution};

use crate::error::{BanditError, Result};

/// Parameters of a Beta(a, b) posterior over one arm's success rate.
///
/// `a` counts successes plus one and `b` counts failures plus one, so a
/// fresh arm starts at the uniform prior Beta(1, 1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BetaParams {
    pub a: f64,
    pub b: f64,
}

impl Default for BetaParams {
    fn default() -> Self {
        Self { a: 1.0, b: 1.0 }
    }
}

impl BetaParams {
    /// Sample an estimated success rate from Beta(a, b)
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64> {
        let dist = Beta::new(self.a, self.b).map_err(|e| BanditError::Distribution {
            message: format!("Beta({}, {}): {e}", self.a, self.b),
        })?;
        Ok(dist.sample(rng))
    }

    /// Posterior mean, a / (a + b)
    pub fn mean(&self) -> f64 {
        self.a / (self.a + self.b)
    }

    /// Number of rewards folded into these parameters
    pub fn observations(&self) -> f64 {
        self.a + self.b - 2.0
    }

    /// Fold in one success or failure
    pub fn observe(&mut self, success: bool) {
        if success {
            self.a += 1.0;
        } else {
            self.b += 1.0;
        }
    }
}

/// The belief table: one [`BetaParams`] per arm, in arm order.
#[derive(Clone, Debug, PartialEq)]
pub struct BeliefState {
    arms: Vec<BetaParams>,
}

impl BeliefState {
    /// Uniform prior for `n_arms` arms
    pub fn uniform(n_arms: usize) -> Self {
        Self {
            arms: vec![BetaParams::default(); n_arms],
        }
    }

    /// Number of arms tracked
    pub fn n_arms(&self) -> usize {
        self.arms.len()
    }

    /// Parameters of every arm, in arm order
    pub fn arms(&self) -> &[BetaParams] {
        &self.arms
    }

    /// Parameters of a single arm
    pub fn get(&self, arm: usize) -> Option<&BetaParams> {
        self.arms.get(arm)
    }

    /// Draw one estimate per arm, in arm order
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<f64>> {
        self.arms.iter().map(|params| params.sample(rng)).collect()
    }

    /// Fold a reward into the posterior of `arm`; other arms are untouched
    ///
    /// Only 0 and 1 are rewards; anything else is rejected and leaves the
    /// table unchanged.
    pub fn observe(&mut self, arm: usize, outcome: u8) -> Result<()> {
        let n_arms = self.n_arms();
        let params = self
            .arms
            .get_mut(arm)
            .ok_or(BanditError::InvalidArm { arm, n_arms })?;
        let success = match outcome {
            0 => false,
            1 => true,
            reward => return Err(BanditError::InvalidReward { arm, reward }),
        };
        params.observe(success);
        Ok(())
    }

    /// Sum of a + b over all arms
    pub fn total(&self) -> f64 {
        self.arms.iter().map(|p| p.a + p.b).sum()
    }

    /// Posterior means, in arm order
    pub fn means(&self) -> Vec<f64> {
        self.arms.iter().map(BetaParams::mean).collect()
    }
}
