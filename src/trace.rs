//! History of a Thompson sampling run.

use ndarray::{Array1, Array3};

use crate::bandit::{Bandit, Environment};
use crate::belief::BeliefState;
use crate::error::{BanditError, Result};

/// Upper bound on slots reserved before a run; longer runs grow as they go.
const MAX_RESERVED_TRIALS: usize = 1 << 16;

/// Record of every trial in one run.
///
/// `beliefs[t]` is the belief table as it stood *before* trial `t` was played,
/// i.e. the state that decision was made from. The update that follows the
/// last trial is not kept.
#[derive(Clone, Debug, PartialEq)]
pub struct Trace {
    n_arms: usize,
    beliefs: Vec<BeliefState>,
    arms: Vec<usize>,
    outcomes: Vec<u8>,
}

impl Trace {
    pub(crate) fn with_capacity(n_arms: usize, n_trials: usize) -> Self {
        let n_trials = n_trials.min(MAX_RESERVED_TRIALS);
        Self {
            n_arms,
            beliefs: Vec::with_capacity(n_trials),
            arms: Vec::with_capacity(n_trials),
            outcomes: Vec::with_capacity(n_trials),
        }
    }

    pub(crate) fn record(&mut self, snapshot: BeliefState, arm: usize, outcome: u8) {
        self.beliefs.push(snapshot);
        self.arms.push(arm);
        self.outcomes.push(outcome);
    }

    /// Number of trials recorded
    pub fn n_trials(&self) -> usize {
        self.arms.len()
    }

    /// Number of arms of the environment that was played
    pub fn n_arms(&self) -> usize {
        self.n_arms
    }

    /// Shape of the belief history, `(n_trials, n_arms, 2)`
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.n_trials(), self.n_arms, 2)
    }

    /// Pre-decision belief snapshots, one per trial
    pub fn beliefs(&self) -> &[BeliefState] {
        &self.beliefs
    }

    /// Arm played at each trial
    pub fn played_arms(&self) -> &[usize] {
        &self.arms
    }

    /// Reward observed at each trial
    pub fn outcomes(&self) -> &[u8] {
        &self.outcomes
    }

    /// Split into the belief history and the played-arm history
    pub fn into_parts(self) -> (Vec<BeliefState>, Vec<usize>) {
        (self.beliefs, self.arms)
    }

    /// Belief history as an `(n_trials, n_arms, 2)` array
    ///
    /// `a` is stored at `[t, arm, 0]` and `b` at `[t, arm, 1]`.
    pub fn belief_array(&self) -> Array3<f64> {
        Array3::from_shape_fn(self.shape(), |(t, arm, k)| {
            let params = self.beliefs[t].arms()[arm];
            if k == 0 { params.a } else { params.b }
        })
    }

    /// Played-arm history as an `(n_trials,)` array
    pub fn played_array(&self) -> Array1<usize> {
        Array1::from(self.arms.clone())
    }

    /// How often each arm was played
    pub fn play_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.n_arms];
        for &arm in &self.arms {
            counts[arm] += 1;
        }
        counts
    }

    /// Sum of observed rewards
    pub fn total_reward(&self) -> u64 {
        self.outcomes.iter().map(|&o| u64::from(o)).sum()
    }

    /// Expected reward lost against always playing the best arm of `bandit`
    ///
    /// Fails with [`BanditError::InvalidArgument`] when `bandit` does not
    /// have the same number of arms as the environment that was played.
    pub fn cumulative_regret(&self, bandit: &Bandit) -> Result<f64> {
        if bandit.n_arms() != self.n_arms {
            return Err(BanditError::InvalidArgument {
                message: format!(
                    "trace has {} arms but the bandit has {}",
                    self.n_arms,
                    bandit.n_arms()
                ),
            });
        }
        let rates = bandit.success_rates();
        let best = bandit.best_rate();
        Ok(self.arms.iter().map(|&arm| best - rates[arm]).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sample_trace() -> Trace {
        let mut trace = Trace::with_capacity(2, 3);
        let mut state = BeliefState::uniform(2);
        for (arm, outcome) in [(0, 1), (1, 0), (0, 1)] {
            trace.record(state.clone(), arm, outcome);
            state.observe(arm, outcome).unwrap();
        }
        trace
    }

    #[test]
    fn test_shape_and_accessors() {
        let trace = sample_trace();
        assert_eq!(trace.shape(), (3, 2, 2));
        assert_eq!(trace.played_arms(), &[0, 1, 0]);
        assert_eq!(trace.outcomes(), &[1, 0, 1]);
        assert_eq!(trace.play_counts(), vec![2, 1]);
        assert_eq!(trace.total_reward(), 2);
    }

    #[test]
    fn test_belief_array_layout() {
        let array = sample_trace().belief_array();
        assert_eq!(array.shape(), &[3, 2, 2]);

        // t = 0 is the uniform prior
        assert!(array.index_axis(ndarray::Axis(0), 0).iter().all(|&v| v == 1.0));
        // arm 0 won at t = 0, arm 1 lost at t = 1
        assert_eq!(array[[1, 0, 0]], 2.0);
        assert_eq!(array[[2, 1, 1]], 2.0);
        assert_eq!(array[[2, 1, 0]], 1.0);
    }

    #[test]
    fn test_played_array() {
        let played = sample_trace().played_array();
        assert_eq!(played.shape(), &[3]);
        assert_eq!(played.to_vec(), vec![0, 1, 0]);
    }

    #[test]
    fn test_into_parts() {
        let (beliefs, arms) = sample_trace().into_parts();
        assert_eq!(beliefs.len(), 3);
        assert_eq!(arms, vec![0, 1, 0]);
    }

    #[test]
    fn test_cumulative_regret() {
        let bandit = Bandit::new(vec![0.2, 0.6]).unwrap();
        let regret = sample_trace().cumulative_regret(&bandit).unwrap();
        assert_abs_diff_eq!(regret, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_cumulative_regret_arm_mismatch() {
        let mut trace = Trace::with_capacity(4, 2);
        trace.record(BeliefState::uniform(4), 3, 1);
        trace.record(BeliefState::uniform(4), 2, 0);

        let bandit = Bandit::new(vec![0.5, 0.5]).unwrap();
        assert!(matches!(
            trace.cumulative_regret(&bandit),
            Err(BanditError::InvalidArgument { .. })
        ));

        let bandit = Bandit::new(vec![0.1, 0.2, 0.3, 0.4, 0.5]).unwrap();
        assert!(trace.cumulative_regret(&bandit).is_err());
    }

    #[test]
    fn test_reservation_is_capped() {
        let trace = Trace::with_capacity(2, usize::MAX);
        assert_eq!(trace.n_trials(), 0);
        assert!(trace.arms.capacity() <= MAX_RESERVED_TRIALS);
        assert!(trace.beliefs.capacity() <= MAX_RESERVED_TRIALS);
    }

    #[test]
    fn test_empty_trace() {
        let trace = Trace::with_capacity(3, 0);
        assert_eq!(trace.shape(), (0, 3, 2));
        assert_eq!(trace.belief_array().shape(), &[0, 3, 2]);
        assert_eq!(trace.played_array().len(), 0);
        assert_eq!(trace.play_counts(), vec![0, 0, 0]);
    }
}
