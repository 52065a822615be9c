use approx::assert_abs_diff_eq;
use celestial_nutation::nutation::{
    apply_precession_rate_adjustment, compute_nutation, fast_nutation, NutationIAU2000A,
    NutationModel, NutationResult,
};
use celestial_nutation::test_helpers::assert_ulp_le;
use celestial_nutation::utils::jd_to_centuries;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn unadjusted_series_matches_sofa_nut00a() {
    init_logging();
    // SOFA t_sofa_c test case for iauNut00a(2400000.5, 53736.0).
    let t = jd_to_centuries(2400000.5, 53736.0);
    let raw = NutationIAU2000A::new().compute_unadjusted(t);
    assert_abs_diff_eq!(raw.delta_psi, -0.9630909107115518e-5, epsilon = 1e-13);
    assert_abs_diff_eq!(raw.delta_eps, 0.4063239174001678e-4, epsilon = 1e-13);
}

#[test]
fn model_selection_rule() {
    init_logging();
    assert_eq!(NutationModel::select(0.5, true), NutationModel::Fast);
    assert_eq!(NutationModel::select(1.5, true), NutationModel::Iau2000A);
    for t in [-2.0, -0.5, 0.0, 0.5, 2.0] {
        assert_eq!(NutationModel::select(t, false), NutationModel::Iau2000A);
    }

    assert_eq!(compute_nutation(0.5, true), fast_nutation(0.5));
    assert_eq!(compute_nutation(1.5, true), NutationIAU2000A::new().compute(1.5));
    assert_eq!(compute_nutation(-0.5, false), NutationIAU2000A::new().compute(-0.5));
}

#[test]
fn fast_and_full_models_differ() {
    let t = 0.5;
    assert_ne!(compute_nutation(t, true), compute_nutation(t, false));
}

#[test]
fn secular_adjustment_is_exact() {
    let nut = NutationIAU2000A::new();
    for t in [-1.2, 0.0, 0.37, 2.5] {
        let raw = nut.compute_unadjusted(t);
        let adjusted = nut.compute(t);
        assert_ulp_le(
            adjusted.delta_psi,
            raw.delta_psi + raw.delta_psi * (0.4697e-6 - 2.7774e-6 * t),
            0,
            "delta_psi adjustment",
        );
        assert_ulp_le(
            adjusted.delta_eps,
            raw.delta_eps - raw.delta_eps * (2.7774e-6 * t),
            0,
            "delta_eps adjustment",
        );
        // Algebraic form of the same correction.
        assert_abs_diff_eq!(
            adjusted.delta_psi,
            raw.delta_psi * (1.0 + 4.697e-7 - 2.7774e-6 * t),
            epsilon = 1e-18
        );
        assert_abs_diff_eq!(
            adjusted.delta_eps,
            raw.delta_eps * (1.0 - 2.7774e-6 * t),
            epsilon = 1e-18
        );
    }
}

#[test]
fn adjustment_of_zero_is_zero() {
    let zero = apply_precession_rate_adjustment(NutationResult::default(), 3.0);
    assert_eq!(zero, NutationResult::default());
}

#[test]
fn nutation_amplitudes_are_physical() {
    for i in -20..=20 {
        let t = f64::from(i) * 0.1;
        let full = compute_nutation(t, false);
        assert!(full.delta_psi_arcsec().abs() < 20.0, "dpsi at t={}", t);
        assert!(full.delta_eps_arcsec().abs() < 11.0, "deps at t={}", t);
    }
}

#[test]
fn full_model_is_smooth_over_a_day() {
    // Nutation changes by well under 0.1" per day.
    let t0 = jd_to_centuries(2460000.5, 0.0);
    let t1 = jd_to_centuries(2460000.5, 1.0);
    let a = compute_nutation(t0, false);
    let b = compute_nutation(t1, false);
    assert!((a.delta_psi_arcsec() - b.delta_psi_arcsec()).abs() < 0.1);
    assert!((a.delta_eps_arcsec() - b.delta_eps_arcsec()).abs() < 0.1);
}

#[test]
fn concurrent_evaluation_is_deterministic() {
    let expected = compute_nutation(0.42, false);
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| compute_nutation(0.42, false)))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
