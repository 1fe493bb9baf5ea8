//! bayes-bandit: Thompson sampling for Bernoulli multi-armed bandits.
//!
//! A [`Bandit`] simulates a row of slot machines, each paying 1 with a fixed
//! but unknown success rate. The [`ThompsonSampler`] plays it for a fixed
//! number of trials, keeping a Beta posterior per arm: every trial it draws
//! one estimate per arm, plays the arm with the highest draw and updates that
//! arm's posterior with the observed reward.
//!
//! # Quick Start
//!
//! ```
//! use bayes_bandit::prelude::*;
//!
//! let bandit = Bandit::new(vec![0.1, 0.2, 0.3]).unwrap();
//!
//! // One-shot, reproducible run
//! let trace = run(&bandit, 100, Some(1)).unwrap();
//! assert_eq!(trace.shape(), (100, 3, 2));
//!
//! // Or configure a sampler once and reuse it
//! let sampler = ThompsonSampler::builder().seed(1).build();
//! assert_eq!(sampler.run(&bandit, 100).unwrap(), trace);
//!
//! // Belief history with a in [.., .., 0] and b in [.., .., 1]
//! let ab = trace.belief_array();
//! let arms = trace.played_array();
//! assert_eq!(ab.shape(), &[100, 3, 2]);
//! assert_eq!(arms.len(), 100);
//! ```

mod bandit;
mod belief;
mod error;
mod sampler;
mod trace;

pub use bandit::{Bandit, Environment};
pub use belief::{BeliefState, BetaParams};
pub use error::{BanditError, Result};
pub use sampler::{SamplerBuilder, ThompsonSampler, run};
pub use trace::Trace;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{
        Bandit, BanditError, BeliefState, BetaParams, Environment, Result, ThompsonSampler,
        Trace, run,
    };
}
