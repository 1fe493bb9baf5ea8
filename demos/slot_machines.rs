use bayes_bandit::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("Thompson Sampling on a Row of Slot Machines\n");
    println!("{}", "=".repeat(60));

    let success_rates = vec![0.3, 0.5, 0.8, 0.4];
    let bandit = Bandit::new(success_rates.clone())?;

    println!("True success rates:");
    for (arm, rate) in success_rates.iter().enumerate() {
        println!("  Arm {}: {:.2}", arm, rate);
    }
    println!(
        "\nBest arm: Arm {} ({:.2})\n",
        bandit.best_arm(),
        bandit.best_rate()
    );
    println!("{}", "=".repeat(60));

    let n_trials = 1000;
    let sampler = ThompsonSampler::builder().seed(42).build();
    let trace = sampler.run(&bandit, n_trials)?;

    let counts = trace.play_counts();
    let last = trace
        .beliefs()
        .last()
        .cloned()
        .unwrap_or_else(|| BeliefState::uniform(bandit.n_arms()));

    println!("\nAfter {} trials:", n_trials);
    for (arm, params) in last.arms().iter().enumerate() {
        println!(
            "  Arm {}: played {:4} times, posterior Beta({:.0}, {:.0}), mean {:.3}",
            arm,
            counts[arm],
            params.a,
            params.b,
            params.mean()
        );
    }

    println!("\nTotal reward: {}", trace.total_reward());
    println!("Cumulative regret: {:.2}", trace.cumulative_regret(&bandit)?);

    // Show how the posteriors sharpened over time
    println!("\nPosterior means by trial:");
    for t in [0, 10, 100, n_trials - 1] {
        let means: Vec<String> = trace.beliefs()[t]
            .means()
            .iter()
            .map(|m| format!("{:.2}", m))
            .collect();
        println!("  t = {:4}: [{}]", t, means.join(", "));
    }

    Ok(())
}
