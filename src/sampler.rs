use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, trace};

use crate::bandit::{Environment, argmax};
use crate::belief::BeliefState;
use crate::error::{BanditError, Result};
use crate::trace::Trace;

/// Thompson sampling driver for Bernoulli bandits
///
/// Each trial draws an estimate from every arm's Beta posterior, plays the
/// arm with the highest draw and folds the observed reward back into that
/// arm's posterior. As posteriors sharpen, play shifts from exploration to
/// exploitation of the arms most likely to pay.
///
/// The sampler only carries configuration. Belief state and the random
/// generator live for the duration of a single run, so runs never share
/// randomness.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThompsonSampler {
    seed: Option<u64>,
}

impl ThompsonSampler {
    /// Creates an unseeded sampler; every run draws fresh OS entropy
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sampler whose runs are reproducible for a given seed
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Create a new builder for constructing a sampler
    pub fn builder() -> SamplerBuilder {
        SamplerBuilder::default()
    }

    /// Gets the configured seed
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Run `n_trials` rounds against `env` with this sampler's generator
    ///
    /// Two runs with the same seed, environment and trial count produce
    /// identical traces.
    pub fn run<E>(&self, env: &E, n_trials: usize) -> Result<Trace>
    where
        E: Environment + ?Sized,
    {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        debug!(seeded = self.seed.is_some(), "starting thompson sampling run");
        self.run_with_rng(env, n_trials, &mut rng)
    }

    /// Run `n_trials` rounds against `env`, drawing all randomness from `rng`
    ///
    /// Both the posterior draws and the environment's plays consume `rng`.
    pub fn run_with_rng<E, R>(&self, env: &E, n_trials: usize, rng: &mut R) -> Result<Trace>
    where
        E: Environment + ?Sized,
        R: rand::RngCore,
    {
        let n_arms = env.n_arms();
        if n_arms == 0 {
            return Err(BanditError::InvalidArgument {
                message: "cannot sample from an environment with no arms".to_string(),
            });
        }

        debug!(n_arms, n_trials, "running trials");

        let mut beliefs = BeliefState::uniform(n_arms);
        let mut history = Trace::with_capacity(n_arms, n_trials);

        for t in 0..n_trials {
            let estimates = beliefs.sample(rng)?;
            let arm = argmax(&estimates);
            let outcome = env.play(arm, rng)?;
            if outcome > 1 {
                return Err(BanditError::InvalidReward {
                    arm,
                    reward: outcome,
                });
            }
            trace!(trial = t, arm, outcome, "trial complete");

            // Snapshot is taken before the update so the trace holds the
            // state each decision was made from.
            history.record(beliefs.clone(), arm, outcome);
            beliefs.observe(arm, outcome)?;
        }

        debug!(
            n_trials,
            total_reward = history.total_reward(),
            "thompson sampling run finished"
        );
        Ok(history)
    }
}

/// Builder for creating samplers with a fluent API
#[derive(Clone, Debug, Default)]
pub struct SamplerBuilder {
    seed: Option<u64>,
}

impl SamplerBuilder {
    /// Seed the sampler's generator; `0` is a valid seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the sampler
    pub fn build(self) -> ThompsonSampler {
        ThompsonSampler { seed: self.seed }
    }
}

/// Thompson-sample `env` for `n_trials` rounds.
///
/// Returns the pre-decision belief snapshot and the played arm of every
/// trial. Pass `Some(seed)` for a reproducible run.
///
/// # Examples
///
/// ```
/// use bayes_bandit::{Bandit, run};
///
/// let bandit = Bandit::new(vec![0.1, 0.2, 0.3]).unwrap();
/// let trace = run(&bandit, 10, Some(1)).unwrap();
/// assert_eq!(trace.shape(), (10, 3, 2));
/// ```
pub fn run<E>(env: &E, n_trials: usize, seed: Option<u64>) -> Result<Trace>
where
    E: Environment + ?Sized,
{
    ThompsonSampler { seed }.run(env, n_trials)
}
