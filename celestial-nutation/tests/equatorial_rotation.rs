use approx::assert_abs_diff_eq;
use celestial_nutation::nutation::{nutation_matrix, EquatorialNutation};
use celestial_nutation::obliquity::{MeanObliquityIAU1980, MeanObliquityIAU2006, ObliquityModel};
use celestial_nutation::test_helpers::assert_vector_near;
use celestial_nutation::{
    compute_nutation, nutate_ecliptic, nutate_equatorial, NutationDirection, NutationSettings,
    ObliquityKind, RotationMatrix3, Vector, VectorKind,
};

fn positions() -> [Vector; 4] {
    [
        Vector::rectangular(1.0, 0.0, 0.0),
        Vector::rectangular(-0.3, 0.4, 0.866),
        Vector::rectangular(1.5e8, -2.0e7, 6.0e6),
        Vector::spherical(1.0, 4.5, -1.1),
    ]
}

// --- Rotation consistency ---

#[test]
fn forward_then_inverse_is_identity() {
    for &(t, fast) in &[(0.0, true), (0.5, true), (-0.9, true), (1.5, true), (0.3, false)] {
        for v in positions() {
            let apparent = nutate_equatorial(t, fast, &v, NutationDirection::MeanToTrue);
            let back = nutate_equatorial(t, fast, &apparent, NutationDirection::TrueToMean);
            let tolerance = 1e-14 * v.normalize();
            assert_vector_near(&back, &v, tolerance, "mean -> true -> mean");
        }
    }
}

#[test]
fn rotation_preserves_length() {
    for v in positions() {
        let out = nutate_equatorial(0.2, false, &v, NutationDirection::MeanToTrue);
        assert_eq!(out.kind(), VectorKind::Rectangular);
        assert_abs_diff_eq!(out.normalize(), v.normalize(), epsilon = 1e-14 * v.normalize());
    }
}

#[test]
fn boolean_direction_flag() {
    let v = Vector::rectangular(0.1, 0.9, -0.2);
    assert_eq!(
        nutate_equatorial(0.1, true, &v, true),
        nutate_equatorial(0.1, true, &v, NutationDirection::MeanToTrue)
    );
    assert_eq!(
        nutate_equatorial(0.1, true, &v, false),
        nutate_equatorial(0.1, true, &v, NutationDirection::TrueToMean)
    );
}

// --- Matrix ---

#[test]
fn nutation_matrix_is_orthonormal() {
    let cases = [
        (0.0, 0.0, 0.0),
        (-6.75e-5, -2.8e-5, 0.40909),
        (1.0e-4, 5.0e-5, 0.4),
        (0.7, -0.3, 0.9),
        (-3.0, 2.0, -1.5),
    ];
    for (dpsi, deps, eps) in cases {
        let m = nutation_matrix(dpsi, deps, eps);
        let product = m.transpose() * m;
        assert!(
            product.max_difference(&RotationMatrix3::identity()) < 1e-14,
            "case {:?}",
            (dpsi, deps, eps)
        );
        assert_abs_diff_eq!(m.determinant(), 1.0, epsilon = 1e-14);
    }
}

#[test]
fn true_pole_in_mean_frame() {
    // The true pole seen from the mean frame is displaced by about
    // Δψ·sin ε along x and Δε along y.
    let t = 0.15;
    let nut = compute_nutation(t, false);
    let eps = MeanObliquityIAU2006.mean_obliquity(t);

    let pole = nutate_equatorial(t, false, &Vector::z_axis(), NutationDirection::TrueToMean);
    let [x, y, z] = pole.to_array();
    assert_abs_diff_eq!(
        x,
        nut.delta_psi.sin() * (eps + nut.delta_eps).sin(),
        epsilon = 1e-15
    );
    assert_abs_diff_eq!(y, nut.delta_eps, epsilon = 1e-9);
    assert_abs_diff_eq!(z, 1.0, epsilon = 1e-8);
}

// --- Obliquity provider ---

#[test]
fn obliquity_provider_is_used() {
    let t = 0.6;
    let v = Vector::rectangular(0.2, 0.3, 0.93);

    let with_1980 = EquatorialNutation::new(MeanObliquityIAU1980, false);
    let nut = compute_nutation(t, false);
    let expected = nutation_matrix(
        nut.delta_psi,
        nut.delta_eps,
        MeanObliquityIAU1980.mean_obliquity(t),
    ) * v;
    assert_eq!(with_1980.apply(t, &v, NutationDirection::MeanToTrue), expected);

    let fixed = EquatorialNutation::new(|_t: f64| 0.4, false);
    let expected = nutation_matrix(nut.delta_psi, nut.delta_eps, 0.4) * v;
    assert_eq!(fixed.apply(t, &v, NutationDirection::MeanToTrue), expected);
}

#[test]
fn settings_select_obliquity_and_model() {
    let settings = NutationSettings {
        use_fast_model: false,
        obliquity: ObliquityKind::Iau1980,
    };
    let v = Vector::rectangular(-0.5, 0.5, 0.7071);
    let from_settings = settings.build().apply(0.3, &v, NutationDirection::MeanToTrue);
    let direct =
        EquatorialNutation::new(MeanObliquityIAU1980, false).apply(0.3, &v, NutationDirection::MeanToTrue);
    assert_eq!(from_settings, direct);
}

// --- Ecliptic ---

#[test]
fn ecliptic_nutation_shifts_longitude_only() {
    let t = -0.4;
    let dpsi = compute_nutation(t, true).delta_psi;
    let mean = Vector::spherical(2.0, 0.25, -0.1);

    let apparent = nutate_ecliptic(t, true, &mean, NutationDirection::MeanToTrue);
    let [r, lon, lat] = apparent.to_spherical().components();
    assert_abs_diff_eq!(r, 2.0, epsilon = 1e-14);
    assert_abs_diff_eq!(lon, 0.25 + dpsi, epsilon = 1e-14);
    assert_abs_diff_eq!(lat, -0.1, epsilon = 1e-14);

    let back = nutate_ecliptic(t, true, &apparent, NutationDirection::TrueToMean);
    assert_vector_near(&back, &mean, 1e-14, "ecliptic round trip");
}

// --- Serialization ---

#[cfg(feature = "serde")]
#[test]
fn settings_and_values_serialize() {
    let settings = NutationSettings::default();
    let json = serde_json::to_string(&settings).unwrap();
    assert_eq!(json, r#"{"use_fast_model":true,"obliquity":"iau2006"}"#);
    let parsed: NutationSettings = serde_json::from_str(r#"{"obliquity":"iau1980"}"#).unwrap();
    assert_eq!(parsed.obliquity, ObliquityKind::Iau1980);
    assert!(parsed.use_fast_model);

    let v = Vector::spherical(1.0, 0.5, 0.25);
    let json = serde_json::to_string(&v).unwrap();
    assert!(json.contains(r#""kind":"spherical""#));
    let back: Vector = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v);

    let nut = compute_nutation(0.1, false);
    let back: celestial_nutation::NutationResult =
        serde_json::from_str(&serde_json::to_string(&nut).unwrap()).unwrap();
    assert_eq!(back, nut);
}
