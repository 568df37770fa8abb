//! Statistical behaviour of the Metropolis-Hastings sampler on the
//! normal-likelihood / Cauchy-prior posterior.
use approx::assert_relative_eq;
use bayeswalk::prelude::*;
use bayeswalk::stats::mh::acceptance_prob;
use bayeswalk::stats::NormalCauchyTarget;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;

const Y: [f64; 10] = [1.2, 1.4, -0.5, 0.3, 0.9, 2.3, 1.0, 0.1, 1.3, 1.9];
const N: usize = 10;
// 9.9 / 10
const YBAR: f64 = 0.99;

/// Posterior mean of the target by trapezoidal quadrature on a wide grid
fn quadrature_posterior_mean() -> f64 {
    let target = NormalCauchyTarget::new(N, YBAR);
    let (lo, hi, n_steps) = (-5.0_f64, 7.0_f64, 120_000_usize);
    let h = (hi - lo) / n_steps as f64;

    let (mut z, mut m) = (0.0, 0.0);
    for i in 0..=n_steps {
        let mu = (i as f64).mul_add(h, lo);
        let w = if i == 0 || i == n_steps { 0.5 } else { 1.0 };
        let f = target.ln_f(mu).exp() * w;
        z += f;
        m += f * mu;
    }
    m / z
}

fn acceptance_rate(cand_sd: f64, seed: u64) -> f64 {
    let mut rng = Xoshiro256Plus::seed_from_u64(seed);
    let config = MhConfig::new().n_iters(10_000).cand_sd(cand_sd);
    run_mh(N, YBAR, &config, &mut rng)
        .unwrap()
        .acceptance_rate()
}

#[test]
fn sample_mean_of_the_data_is_ybar() {
    assert_relative_eq!(bayeswalk::utils::mean(&Y), YBAR, epsilon = 1E-12);
}

#[test]
fn trace_length_equals_iterations() {
    let mut rng = Xoshiro256Plus::seed_from_u64(1);
    for n_iters in [1, 2, 100, 1_000, 4_321] {
        let config = MhConfig::new().n_iters(n_iters);
        let output = run_mh_on_data(&Y, &config, &mut rng).unwrap();
        assert_eq!(output.trace.len(), n_iters);
    }
}

#[test]
fn acceptance_probability_is_bounded_along_a_chain() {
    let target = NormalCauchyTarget::new(N, YBAR);
    let mut rng = Xoshiro256Plus::seed_from_u64(2);
    let config = MhConfig::new().n_iters(500).mu_init(30.0);
    let output = run_mh(N, YBAR, &config, &mut rng).unwrap();

    let draws = output.trace.draws();
    for w in draws.windows(2) {
        for (a, b) in [(w[0], w[1]), (w[1], w[0]), (w[0], 1E8)] {
            let p = acceptance_prob(target.ln_f(b) - target.ln_f(a));
            assert!((0.0..=1.0).contains(&p));
        }
    }
}

#[test]
fn retained_mean_is_near_posterior_mean() {
    let posterior_mean = quadrature_posterior_mean();
    // The Cauchy prior shrinks the posterior mean toward zero
    assert!(posterior_mean > 0.85 && posterior_mean < YBAR);

    let mut rng = Xoshiro256Plus::seed_from_u64(1337);
    let config = MhConfig::new().n_iters(1_000).mu_init(0.0).cand_sd(0.9);
    let output = run_mh_on_data(&Y, &config, &mut rng).unwrap();

    let retained = output.trace.burned(100);
    assert_eq!(retained.len(), 900);
    assert!(
        (retained.mean() - posterior_mean).abs() < 0.3,
        "retained mean {} vs posterior mean {}",
        retained.mean(),
        posterior_mean
    );
}

#[test]
fn acceptance_rate_decreases_with_proposal_sd() {
    let small = acceptance_rate(0.05, 11);
    let mid = acceptance_rate(0.9, 11);
    let large = acceptance_rate(3.0, 11);

    assert!(small >= mid && mid >= large, "{small} {mid} {large}");
    assert!(small > 0.5, "{small}");
    assert!((0.23..=0.5).contains(&mid), "{mid}");
    assert!(large < 0.23, "{large}");
}

#[test]
fn far_initialization_converges_to_the_same_mean() {
    let config = MhConfig::new().n_iters(1_000).cand_sd(0.9);

    let mut rng = Xoshiro256Plus::seed_from_u64(21);
    let near = run_mh(N, YBAR, &config.clone().mu_init(0.0), &mut rng).unwrap();
    let far = run_mh(N, YBAR, &config.mu_init(30.0), &mut rng).unwrap();

    // The far chain starts well away from the posterior mass
    assert!(far.trace.draws()[0] > 25.0);

    let near_mean = near.trace.burned(500).mean();
    let far_mean = far.trace.burned(500).mean();
    assert!(
        (near_mean - far_mean).abs() < 0.3,
        "near {near_mean} vs far {far_mean}"
    );
}

#[test]
fn seeded_runs_are_reproducible() {
    let config = MhConfig::new().n_iters(250);

    let mut rng_a = Xoshiro256Plus::seed_from_u64(8);
    let mut rng_b = Xoshiro256Plus::seed_from_u64(8);

    let a = run_mh_on_data(&Y, &config, &mut rng_a).unwrap();
    let b = run_mh_on_data(&Y, &config, &mut rng_b).unwrap();
    assert_eq!(a, b);

    let mut rng_c = Xoshiro256Plus::seed_from_u64(9);
    let c = run_mh_on_data(&Y, &config, &mut rng_c).unwrap();
    assert_ne!(a.trace, c.trace);
}

#[test]
fn rejected_iterations_repeat_the_previous_draw() {
    let mut rng = Xoshiro256Plus::seed_from_u64(4);
    let config = MhConfig::new().n_iters(2_000).cand_sd(3.0);
    let output = run_mh(N, YBAR, &config, &mut rng).unwrap();

    let draws = output.trace.draws();
    let n_moves = draws.windows(2).filter(|w| w[0] != w[1]).count();
    // The first draw moved away from mu_init only if it was accepted
    let first_moved = usize::from(draws[0] != 0.0);
    assert_eq!(n_moves + first_moved, output.n_accepted);
}
