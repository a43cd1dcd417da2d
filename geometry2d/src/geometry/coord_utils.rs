//--------------------------------------------------------------------
// coord_utils.rs
//--------------------------------------------------------------------
// Provides utilities to work with the coordinate class
//--------------------------------------------------------------------

use super::*;
use CoordM::consts::PI;

pub const TWO_PI: Coord = 2.0 * PI;
pub const EPSILON: Coord = 1.0 / 32768.0;
pub const EPSILON2: Coord = EPSILON * EPSILON;

/// Number of decimal digits kept when comparing angles.
pub const DIGITS_FOR_CMP: i32 = 3;

// Some utility functions for Coord
// trait used only for implementation
pub trait Geometry where Self: Sized {
    fn normalize_angle(self) -> Self;
    fn round_to_digits(self, digits: i32) -> Self;

    fn roughly_zero(self) -> bool;
    fn roughly_zero_squared(self) -> bool;
    fn roughly_equals(self, other: Self) -> bool;
}

impl Geometry for Coord {
    // Negative values are reflected, so -2π lands on 2π; fold that back to 0
    fn normalize_angle(self) -> Coord {
        let reduced = self.abs() % TWO_PI;
        let value = if self < 0.0 { TWO_PI - reduced } else { reduced };
        if value >= TWO_PI { 0.0 } else { value }
    }

    fn round_to_digits(self, digits: i32) -> Coord {
        let scale = (10.0 as Coord).powi(digits);
        (self * scale).round() / scale
    }

    fn roughly_zero(self) -> bool { self > -EPSILON && self < EPSILON }
    fn roughly_zero_squared(self) -> bool { self > -EPSILON2 && self < EPSILON2 }
    fn roughly_equals(self, other: Self) -> bool { (self - other).roughly_zero() }
}
