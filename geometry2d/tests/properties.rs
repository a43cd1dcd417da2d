use approx::relative_eq;
use geometry2d::{angle_between, signed_angle_between, Coord, Degrees, Radians, Vec2d, TWO_PI};
use proptest::prelude::*;

// Two angle values in [0, 2π) that agree up to the wrap at 2π
fn same_direction(a: Coord, b: Coord) -> bool {
    let d = (a - b).abs();
    d < 1e-9 || TWO_PI - d < 1e-9
}

fn vector() -> impl Strategy<Value = Vec2d> {
    (-1e3..1e3f64, -1e3..1e3f64).prop_map(|(x, y)| Vec2d::new(x, y))
}

fn non_null_vector() -> impl Strategy<Value = Vec2d> {
    vector().prop_filter("vector too short", |v| v.length() > 1e-3)
}

proptest! {
    #[test]
    fn normalized_angles_stay_in_range(value in -1e6..1e6f64) {
        let angle = Radians::new(value);
        prop_assert!(angle.value() >= 0.0);
        prop_assert!(angle.value() < TWO_PI);
    }

    #[test]
    fn normalization_is_idempotent(value in -1e6..1e6f64) {
        let angle = Radians::new(value);
        prop_assert_eq!(Radians::new(angle.value()).value(), angle.value());
    }

    #[test]
    fn degrees_survive_a_trip_through_radians(value in 0.0..359.9f64) {
        let degrees = Degrees::new(value).unwrap();
        let back = Degrees::from(Radians::from(degrees));
        prop_assert!(relative_eq!(back.value(), value, epsilon = 1e-9));
    }

    #[test]
    fn radians_survive_a_trip_through_degrees(value in 0.0..TWO_PI) {
        let radians = Radians::new(value);
        let back = Radians::from(Degrees::from(radians));
        prop_assert!(same_direction(back.value(), radians.value()));
    }

    #[test]
    fn rotation_is_undone_by_the_opposite_rotation(v in vector(), degrees in -720.0..720.0f64) {
        let back = v.rotated(degrees).rotated(-degrees);
        prop_assert!(relative_eq!(back, v, epsilon = 1e-7));
    }

    #[test]
    fn rotation_preserves_length(v in vector(), degrees in -720.0..720.0f64) {
        prop_assert!(relative_eq!(v.rotated(degrees).length(), v.length(), epsilon = 1e-7));
    }

    #[test]
    fn parallel_vectors_have_no_angle_between(v in non_null_vector(), k in 0.01..100.0f64) {
        prop_assert_eq!(angle_between(v, v * k), Radians::ZERO);
        prop_assert!(angle_between(v, v * k).value() <= angle_between(v, -v).value());
    }

    #[test]
    fn angle_between_is_scale_invariant(a in non_null_vector(), b in non_null_vector(), k in 0.01..100.0f64) {
        let unscaled = angle_between(a, b).value();
        let scaled = angle_between(a * k, b).value();
        prop_assert!((unscaled - scaled).abs() < 1e-9);
    }

    #[test]
    fn sweeps_are_antisymmetric(a in non_null_vector(), b in non_null_vector()) {
        let forward = a.angle_to(b);
        let backward = b.angle_to(a);
        prop_assert!(same_direction(backward.value(), (-forward).value()));
    }

    #[test]
    fn signed_angles_are_antisymmetric(a in non_null_vector(), b in non_null_vector()) {
        // Opposite vectors sit on the ±π seam, where both sides report π
        prop_assume!(a.cross(b).abs() > 1e-6);
        prop_assert_eq!(signed_angle_between(a, b), -signed_angle_between(b, a));
    }

    #[test]
    fn rescaled_vectors_have_the_requested_norm(v in non_null_vector(), norm in 0.0..1e3f64) {
        let scaled = v.scaled_to_norm(norm).unwrap();
        prop_assert!(relative_eq!(scaled.length(), norm, epsilon = 1e-9, max_relative = 1e-12));
    }

    #[test]
    fn serde_round_trip_is_exact(v in vector(), value in -1e3..1e3f64) {
        let json = serde_json::to_string(&v).unwrap();
        let back: Vec2d = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back.x.to_bits(), v.x.to_bits());
        prop_assert_eq!(back.y.to_bits(), v.y.to_bits());

        let angle = Radians::new(value);
        let json = serde_json::to_string(&angle).unwrap();
        let back: Radians = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back.value().to_bits(), angle.value().to_bits());
    }
}
