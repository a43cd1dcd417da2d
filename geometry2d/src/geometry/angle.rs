//--------------------------------------------------------------------
// angle.rs
//--------------------------------------------------------------------
// Provides the two angle representations: radians (canonical,
// normalized to [0, 2π)) and degrees (input/output only)
//--------------------------------------------------------------------

use approx::relative_eq;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use super::*;
use crate::error::{GeometryError, Result};
use crate::log::{debug, warn};
use CoordM::consts::{FRAC_PI_2, PI};

const THREE_HALVES_PI: Coord = 3.0 * FRAC_PI_2;

/// Anything that represents a rotation.
pub trait Angle {
    /// The angle expressed in radians.
    fn radians(&self) -> Coord;

    fn cos(&self) -> Coord { self.radians().cos() }
    fn sin(&self) -> Coord { self.radians().sin() }
}

/// An angle in radians, always normalized to `[0, 2π)`.
///
/// Comparison and hashing look at the value rounded to
/// [`DIGITS_FOR_CMP`] decimal digits, so two angles that differ only by
/// floating point noise compare equal. Rounding buckets values, which
/// keeps `Eq`, `Ord` and `Hash` consistent with each other.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(from = "Coord", into = "Coord")]
pub struct Radians { value: Coord }

impl Radians {
    pub const ZERO: Radians = Radians { value: 0.0 };
    pub const HALF_PI: Radians = Radians { value: FRAC_PI_2 };
    pub const PI: Radians = Radians { value: PI };
    pub const THREE_HALVES_PI: Radians = Radians { value: THREE_HALVES_PI };

    /// Builds an angle from any real value, reducing it into `[0, 2π)`.
    /// Non-finite input yields a NaN angle; use [`Radians::try_new`] to reject it.
    pub fn new(value: Coord) -> Radians {
        if !value.is_finite() {
            warn!(value, "non-finite angle normalizes to NaN");
        }

        let value = value.normalize_angle();
        debug_assert!(!(value < 0.0 || value >= TWO_PI), "angle {} escaped [0, 2π)", value);
        Radians { value }
    }

    pub fn try_new(value: Coord) -> Result<Radians> {
        if value.is_finite() { Ok(Radians::new(value)) }
        else {
            debug!(value, "rejected non-finite angle");
            Err(GeometryError::Coercion { reason: format!("{} is not a finite number", value) })
        }
    }

    /// Coerces another angle or a raw scalar (taken as radians) into a [`Radians`].
    pub fn create_from(other: impl Into<AngleOperand>) -> Result<Radians> {
        match other.into() {
            AngleOperand::Radians(r) => Ok(r),
            AngleOperand::Degrees(d) => Ok(Radians::from_degrees(&d)),
            AngleOperand::Scalar(v) => Radians::try_new(v),
        }
    }

    /// Accepts a value in `[-π, π]` and maps negative values to `2π + value`.
    pub fn from_signed(value: Coord) -> Result<Radians> {
        if !(value >= -PI && value <= PI) {
            return Err(GeometryError::range("signed radians", value, -PI, PI));
        }

        if value >= 0.0 { Ok(Radians::new(value)) }
        else { Ok(Radians::new(TWO_PI + value)) }
    }

    pub fn from_degrees(degrees: &Degrees) -> Radians { Radians::new(degrees.value.to_radians()) }

    pub fn random() -> Radians { Radians::random_with(&mut rand::thread_rng()) }

    pub fn random_with<R: rand::Rng>(rng: &mut R) -> Radians {
        Radians::new(rng.gen_range(0.0..TWO_PI))
    }

    pub fn randomly_mutate(&mut self) { *self = Radians::random(); }

    pub fn value(&self) -> Coord { self.value }

    pub fn eq_with_digits(&self, other: &Radians, digits: i32) -> bool {
        self.value.round_to_digits(digits) == other.value.round_to_digits(digits)
    }

    pub fn checked_add(&self, other: impl Into<AngleOperand>) -> Result<Radians> {
        Ok(*self + Radians::create_from(other)?)
    }

    pub fn checked_sub(&self, other: impl Into<AngleOperand>) -> Result<Radians> {
        Ok(*self - Radians::create_from(other)?)
    }

    fn cmp_key(&self) -> OrderedFloat<Coord> { OrderedFloat(self.value.round_to_digits(DIGITS_FOR_CMP)) }
}

impl Angle for Radians {
    fn radians(&self) -> Coord { self.value }
}

/// Operands accepted by [`Radians::create_from`].
#[derive(Copy, Clone, Debug)]
pub enum AngleOperand {
    Radians(Radians),
    Degrees(Degrees),
    Scalar(Coord),
}

impl From<Radians> for AngleOperand {
    fn from(r: Radians) -> AngleOperand { AngleOperand::Radians(r) }
}

impl From<Degrees> for AngleOperand {
    fn from(d: Degrees) -> AngleOperand { AngleOperand::Degrees(d) }
}

impl From<Coord> for AngleOperand {
    fn from(v: Coord) -> AngleOperand { AngleOperand::Scalar(v) }
}

impl From<Coord> for Radians {
    fn from(value: Coord) -> Radians { Radians::new(value) }
}

impl From<Radians> for Coord {
    fn from(r: Radians) -> Coord { r.value }
}

impl From<Degrees> for Radians {
    fn from(d: Degrees) -> Radians { Radians::from_degrees(&d) }
}

impl PartialEq for Radians {
    fn eq(&self, other: &Radians) -> bool { self.cmp_key() == other.cmp_key() }
}

impl Eq for Radians {}

impl PartialOrd for Radians {
    fn partial_cmp(&self, other: &Radians) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Ord for Radians {
    fn cmp(&self, other: &Radians) -> Ordering { self.cmp_key().cmp(&other.cmp_key()) }
}

impl Hash for Radians {
    fn hash<H: Hasher>(&self, state: &mut H) { self.cmp_key().hash(state) }
}

impl<R: Into<Radians>> Add<R> for Radians {
    type Output = Radians;
    fn add(self, rhs: R) -> Radians { Radians::new(self.value + rhs.into().value) }
}

impl<R: Into<Radians>> Sub<R> for Radians {
    type Output = Radians;
    fn sub(self, rhs: R) -> Radians { Radians::new(self.value - rhs.into().value) }
}

impl<R: Into<Radians>> AddAssign<R> for Radians {
    fn add_assign(&mut self, rhs: R) { *self = *self + rhs; }
}

impl<R: Into<Radians>> SubAssign<R> for Radians {
    fn sub_assign(&mut self, rhs: R) { *self = *self - rhs; }
}

impl Neg for Radians {
    type Output = Radians;
    fn neg(self) -> Radians { Radians::new(-self.value) }
}

impl std::fmt::Display for Radians {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let landmark = |v: Coord| relative_eq!(self.value, v, max_relative = 1e-9);

        if landmark(FRAC_PI_2) { write!(f, "π/2 ({:.4} rad)", self.value) }
        else if landmark(PI) { write!(f, "π ({:.4} rad)", self.value) }
        else if landmark(THREE_HALVES_PI) { write!(f, "3π/2 ({:.4} rad)", self.value) }
        else { write!(f, "{:.3} rad", self.value) }
    }
}

/// An angle in degrees, constrained to `[0, 360]`.
///
/// Degrees never take part in composition: they are converted to
/// [`Radians`] first.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Coord", into = "Coord")]
pub struct Degrees { value: Coord }

impl Degrees {
    pub fn new(value: Coord) -> Result<Degrees> {
        if value >= 0.0 && value <= 360.0 { Ok(Degrees { value }) }
        else { Err(GeometryError::range("degrees", value, 0.0, 360.0)) }
    }

    // A normalized radians value always maps inside [0, 360]
    pub fn from_radians(radians: &Radians) -> Degrees { Degrees { value: radians.value.to_degrees() } }

    pub fn value(&self) -> Coord { self.value }
}

impl Angle for Degrees {
    fn radians(&self) -> Coord { self.value.to_radians() }
}

impl TryFrom<Coord> for Degrees {
    type Error = GeometryError;
    fn try_from(value: Coord) -> Result<Degrees> { Degrees::new(value) }
}

impl From<Degrees> for Coord {
    fn from(d: Degrees) -> Coord { d.value }
}

impl From<Radians> for Degrees {
    fn from(r: Radians) -> Degrees { Degrees::from_radians(&r) }
}

impl std::fmt::Display for Degrees {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}°", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn radians_are_normalized_on_construction() {
        assert_relative_eq!(Radians::new(5.0 * PI).value(), PI, epsilon = 1e-12);
        assert_relative_eq!(Radians::new(-FRAC_PI_2).value(), THREE_HALVES_PI, epsilon = 1e-12);
        assert_eq!(Radians::new(TWO_PI).value(), 0.0);
        assert_eq!(Radians::new(-TWO_PI).value(), 0.0);
    }

    #[test]
    fn non_finite_values_are_rejected_by_try_new() {
        assert!(Radians::try_new(1.0).is_ok());
        assert!(matches!(Radians::try_new(Coord::NAN), Err(GeometryError::Coercion { .. })));
        assert!(matches!(Radians::try_new(Coord::INFINITY), Err(GeometryError::Coercion { .. })));
    }

    #[test]
    fn degrees_must_lie_in_range() {
        assert_eq!(Degrees::new(0.0).map(|d| d.value()), Ok(0.0));
        assert_eq!(Degrees::new(360.0).map(|d| d.value()), Ok(360.0));
        assert!(matches!(Degrees::new(-0.5), Err(GeometryError::Range { .. })));
        assert!(matches!(Degrees::new(360.5), Err(GeometryError::Range { .. })));
        assert!(Degrees::new(Coord::NAN).is_err());
    }

    #[test]
    fn conversion_between_representations() {
        assert_relative_eq!(Degrees::from_radians(&Radians::HALF_PI).value(), 90.0, epsilon = 1e-9);
        assert_relative_eq!(Degrees::from(Radians::THREE_HALVES_PI).value(), 270.0, epsilon = 1e-9);

        let d = Degrees::new(135.0).unwrap();
        assert_eq!(Radians::from(d), Radians::new(3.0 * PI / 4.0));
        assert_relative_eq!(d.cos(), Radians::from(d).cos(), epsilon = 1e-12);
        assert_relative_eq!(d.sin(), (3.0 * PI / 4.0).sin(), epsilon = 1e-12);
    }

    #[test]
    fn round_trips_between_representations() {
        for &value in &[0.0, 0.25, FRAC_PI_2, PI, 5.5, TWO_PI - 1e-12] {
            let r = Radians::new(value);
            let back = Radians::from_degrees(&Degrees::from_radians(&r));
            let gap = (back.value() - r.value()).abs();
            assert!(gap < 1e-9 || TWO_PI - gap < 1e-9, "{} came back as {}", value, back.value());
        }

        // just under a full turn folds to zero on the way back
        let near_full_turn = Radians::new(TWO_PI - 1e-15);
        let back = Radians::from(Degrees::from(near_full_turn));
        assert!(back.value() < 1e-9 || TWO_PI - back.value() < 1e-9);

        for &value in &[0.0, 45.0, 180.0, 359.5] {
            let back = Degrees::from(Radians::from(Degrees::new(value).unwrap()));
            assert_relative_eq!(back.value(), value, epsilon = 1e-9);
        }
    }

    #[test]
    fn signed_radians_map_negatives_upwards() {
        assert_eq!(Radians::from_signed(-FRAC_PI_2).unwrap(), Radians::THREE_HALVES_PI);
        assert_eq!(Radians::from_signed(FRAC_PI_2).unwrap(), Radians::HALF_PI);
        assert_eq!(Radians::from_signed(PI).unwrap(), Radians::PI);
        assert_eq!(Radians::from_signed(-PI).unwrap(), Radians::PI);
        assert!(matches!(Radians::from_signed(3.5), Err(GeometryError::Range { .. })));
        assert!(matches!(Radians::from_signed(-3.5), Err(GeometryError::Range { .. })));
    }

    #[test]
    fn comparison_rounds_to_three_digits() {
        assert_eq!(Radians::new(1.0), Radians::new(1.0001));
        assert_ne!(Radians::new(1.0), Radians::new(1.002));
        assert!(Radians::new(1.0) < Radians::new(1.01));
        assert!(Radians::new(1.0) <= Radians::new(1.0004));
        assert!(Radians::new(2.0) > Radians::new(1.0));

        assert!(Radians::new(1.0).eq_with_digits(&Radians::new(1.04), 1));
        assert!(!Radians::new(1.0).eq_with_digits(&Radians::new(1.0001), 4));

        let set: HashSet<Radians> = [1.0, 1.0001, 1.0002, 2.0].iter().map(|&v| Radians::new(v)).collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn composition_wraps_around() {
        let mut a = Radians::THREE_HALVES_PI;
        assert_eq!(a + Radians::PI, Radians::HALF_PI);
        assert_eq!(a - TWO_PI, a);

        a += PI;
        assert_eq!(a, Radians::HALF_PI);
        a -= Radians::PI;
        assert_eq!(a, Radians::THREE_HALVES_PI);
        a += Degrees::new(45.0).unwrap();
        assert_eq!(a, Radians::new(7.0 * PI / 4.0));

        assert_eq!(-Radians::HALF_PI, Radians::THREE_HALVES_PI);
        assert_eq!(-Radians::ZERO, Radians::ZERO);
    }

    #[test]
    fn coercion_accepts_angles_and_scalars() {
        assert_eq!(Radians::create_from(Radians::PI).unwrap(), Radians::PI);
        assert_eq!(Radians::create_from(PI).unwrap(), Radians::PI);
        assert_eq!(Radians::create_from(Degrees::new(180.0).unwrap()).unwrap(), Radians::PI);
        assert!(Radians::create_from(Coord::NAN).is_err());

        assert_eq!(Radians::PI.checked_add(FRAC_PI_2).unwrap(), Radians::THREE_HALVES_PI);
        assert_eq!(Radians::PI.checked_sub(FRAC_PI_2).unwrap(), Radians::HALF_PI);
        assert!(matches!(Radians::PI.checked_add(Coord::INFINITY), Err(GeometryError::Coercion { .. })));
    }

    #[test]
    fn random_angles_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let a = Radians::random_with(&mut rng);
            assert!(a.value() >= 0.0 && a.value() < TWO_PI);
        }

        let mut a = Radians::random();
        a.randomly_mutate();
        assert!(a.value() >= 0.0 && a.value() < TWO_PI);
    }

    #[test]
    fn display_recognizes_landmarks() {
        assert_eq!(Radians::HALF_PI.to_string(), "π/2 (1.5708 rad)");
        assert_eq!(Radians::PI.to_string(), "π (3.1416 rad)");
        assert_eq!(Radians::THREE_HALVES_PI.to_string(), "3π/2 (4.7124 rad)");
        assert_eq!(Radians::new(1.0).to_string(), "1.000 rad");
        assert_eq!(Degrees::new(45.0).unwrap().to_string(), "45.00°");
    }

    #[test]
    fn serde_keeps_the_raw_value() {
        let json = serde_json::to_string(&Radians::new(1.25)).unwrap();
        assert_eq!(json, "1.25");
        let back: Radians = serde_json::from_str("-1.5707963267948966").unwrap();
        assert_eq!(back, Radians::THREE_HALVES_PI);

        let d: Degrees = serde_json::from_str("90.0").unwrap();
        assert_eq!(d.value(), 90.0);
        assert!(serde_json::from_str::<Degrees>("400.0").is_err());
    }
}
