use bayes_bandit::prelude::*;
use rand::SeedableRng;

#[test]
fn test_bandit_attributes() {
    let success_rates = vec![0.1, 0.2, 0.3];
    let bandit = Bandit::new(success_rates.clone()).unwrap();

    assert_eq!(bandit.success_rates(), success_rates.as_slice());
    assert_eq!(bandit.n_arms(), success_rates.len());
}

#[test]
fn test_valid_arms_return_zero_or_one() {
    let bandit = Bandit::new(vec![0.1, 0.2, 0.3]).unwrap();
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);

    assert!((0..bandit.n_arms()).all(|arm| {
        let outcome = bandit.play(arm, &mut rng).unwrap();
        outcome == 0 || outcome == 1
    }));
}

#[test]
fn test_invalid_arm_is_rejected() {
    let bandit = Bandit::new(vec![0.1, 0.2, 0.3]).unwrap();
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);

    let result = bandit.play(3, &mut rng);
    assert!(matches!(
        result,
        Err(BanditError::InvalidArm { arm: 3, n_arms: 3 })
    ));

    if let Err(e) = result {
        assert!(e.to_string().contains("0 to 2"));
    }
}

#[test]
fn test_bandit_as_trait_object() {
    let bandit = Bandit::new(vec![0.5, 0.5]).unwrap();
    let env: &dyn Environment = &bandit;

    let trace = run(env, 20, Some(8)).unwrap();
    assert_eq!(trace.n_arms(), 2);
    assert_eq!(trace.n_trials(), 20);
}
