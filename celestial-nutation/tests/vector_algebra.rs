use approx::{assert_abs_diff_eq, assert_relative_eq};
use celestial_nutation::constants::{HALF_PI, QUARTER_PI, SQRT2, TWOPI};
use celestial_nutation::test_helpers::assert_vector_near;
use celestial_nutation::{AstroError, RotationMatrix3, Vector, VectorKind};

fn sample_vectors() -> Vec<Vector> {
    vec![
        Vector::rectangular(1.0, 0.0, 0.0),
        Vector::rectangular(0.0, -2.5, 0.0),
        Vector::rectangular(0.0, 0.0, -7.0),
        Vector::rectangular(-1.0, -1.0, -1.0),
        Vector::rectangular(3.2e8, -1.1e8, 4.0e7),
        Vector::rectangular(-4.0e-9, 2.0e-9, 1.0e-9),
        Vector::rectangular(0.577, 0.577, 0.577),
    ]
}

// --- Conversion ---

#[test]
fn rectangular_spherical_round_trip() {
    for v in sample_vectors() {
        let back = v.to_spherical().to_rectangular();
        let scale = v.normalize();
        assert_vector_near(&back, &v, 1e-14 * scale, "round trip");
    }
}

#[test]
fn spherical_invariants_hold_after_conversion() {
    for v in sample_vectors() {
        let [r, phi, theta] = v.to_spherical().components();
        assert!(r >= 0.0);
        assert!((0.0..TWOPI).contains(&phi), "phi = {}", phi);
        assert!((-HALF_PI..=HALF_PI).contains(&theta), "theta = {}", theta);
        assert_relative_eq!(r, v.normalize(), max_relative = 1e-15);
    }
}

#[test]
fn literal_conversions() {
    let x = Vector::rectangular(1.0, 0.0, 0.0).to_spherical();
    assert_eq!(x.components(), [1.0, 0.0, 0.0]);

    let [r, phi, theta] = Vector::rectangular(0.0, 1.0, 0.0).to_spherical().components();
    assert_eq!(r, 1.0);
    assert_abs_diff_eq!(phi, HALF_PI, epsilon = 1e-15);
    assert_eq!(theta, 0.0);

    let [r, phi, theta] = Vector::rectangular(0.0, 0.0, 1.0).to_spherical().components();
    assert_eq!(r, 1.0);
    assert_eq!(phi, 0.0);
    assert_abs_diff_eq!(theta, HALF_PI, epsilon = 1e-15);

    let [r, phi, theta] = Vector::rectangular(1.0, 1.0, 0.0).to_spherical().components();
    assert_abs_diff_eq!(r, SQRT2, epsilon = 1e-15);
    assert_abs_diff_eq!(phi, QUARTER_PI, epsilon = 1e-15);
    assert_eq!(theta, 0.0);
}

#[test]
fn conversion_to_own_kind_is_identity() {
    let s = Vector::spherical(3.0, 0.4, -0.2);
    assert_eq!(s.convert(VectorKind::Spherical), s);
    let r = Vector::rectangular(3.0, 0.4, -0.2);
    assert_eq!(r.convert(VectorKind::Rectangular), r);
}

#[test]
fn representation_names_parse() {
    let kind: VectorKind = "SPHERICAL".parse().unwrap();
    assert_eq!(Vector::x_axis().convert(kind).kind(), VectorKind::Spherical);

    match "polar".parse::<VectorKind>() {
        Err(AstroError::UnsupportedRepresentation { requested }) => assert_eq!(requested, "polar"),
        other => panic!("unexpected result: {:?}", other),
    }
}

// --- Algebra ---

#[test]
fn dot_cross_normalize_literals() {
    let x = Vector::rectangular(1.0, 0.0, 0.0);
    let y = Vector::rectangular(0.0, 1.0, 0.0);
    assert_eq!(x.dot(&y), 0.0);
    assert_eq!(x.cross(&y), Vector::rectangular(0.0, 0.0, 1.0));
    assert_eq!(Vector::rectangular(3.0, 4.0, 0.0).normalize(), 5.0);
    assert_eq!(Vector::zeros().normalize(), 0.0);
}

#[test]
fn arithmetic_is_representation_independent() {
    let a = Vector::rectangular(0.3, -1.2, 2.0);
    let b = Vector::rectangular(-0.7, 0.1, 0.4);
    let (sa, sb) = (a.to_spherical(), b.to_spherical());

    assert_vector_near(&(sa + sb), &(a + b), 1e-14, "add");
    assert_vector_near(&(sa - b), &(a - b), 1e-14, "sub");
    assert_vector_near(&(sa * 2.5), &(a * 2.5), 1e-14, "scale");
    assert_vector_near(&(sa.cross(&sb)), &(a.cross(&b)), 1e-14, "cross");
    assert_abs_diff_eq!(sa.dot(&sb), a.dot(&b), epsilon = 1e-14);
    assert_eq!((sa + sb).kind(), VectorKind::Rectangular);
}

#[test]
fn cross_product_is_orthogonal() {
    let a = Vector::rectangular(1.5, -2.0, 0.25);
    let b = Vector::spherical(2.0, 2.1, -0.4);
    let c = a.cross(&b);
    assert_abs_diff_eq!(c.dot(&a), 0.0, epsilon = 1e-14);
    assert_abs_diff_eq!(c.dot(&b), 0.0, epsilon = 1e-14);
}

#[test]
fn compound_assignment_matches_binary_ops() {
    let a = Vector::spherical(1.0, 0.3, 0.1);
    let b = Vector::rectangular(0.5, 0.5, -0.5);

    let mut sum = a;
    sum += b;
    assert_eq!(sum, a + b);

    let mut quotient = a;
    quotient /= 4.0;
    assert_eq!(quotient, a / 4.0);

    let mut cross = a;
    cross.cross_assign(&b);
    assert_eq!(cross, a.cross(&b));

    let mut m = RotationMatrix3::identity();
    m.rotate_x(0.4);
    let mut rotated = a;
    rotated *= m;
    assert_eq!(rotated, m * a);
}

#[test]
fn zero_scalar_division_yields_infinities() {
    let v = Vector::rectangular(2.0, -3.0, 1.0) / 0.0;
    assert!(v.to_array().iter().all(|c| c.is_infinite()));
}

#[test]
fn checked_component_access() {
    let mut v = Vector::spherical(2.0, 0.0, 0.0);
    assert_abs_diff_eq!(v.get(0).unwrap(), 2.0, epsilon = 1e-15);
    assert!(matches!(
        v.get(3),
        Err(AstroError::IndexOutOfBounds { index: 3, .. })
    ));

    v.set(1, 4.0).unwrap();
    assert_eq!(v.kind(), VectorKind::Rectangular);
    assert_eq!(v[1], 4.0);
    assert!(matches!(
        v.set(7, 1.0),
        Err(AstroError::IndexOutOfBounds { index: 7, .. })
    ));
}
