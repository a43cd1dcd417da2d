//--------------------------------------------------------------------
// vec2d.rs
//--------------------------------------------------------------------
// Provides a two-element vector class
//--------------------------------------------------------------------

use crate::derive_more::*;

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::ops::{Index, IndexMut};

use super::*;
use crate::error::{GeometryError, Result};
use crate::log::debug;
use CoordM::consts::PI;

/// A two-component vector.
///
/// The arithmetic surface (see `vec2d_ops.rs`) works for any component
/// type; length, angles and rotation are defined for `Vec2d<Coord>`.
#[derive(Copy, Clone, Debug, Default, Neg, From, Into, Display, Constructor)]
#[display(fmt = "Vec2d({}, {})", x, y)]
pub struct Vec2d<T = Coord> { pub x: T, pub y: T }

pub const NULL_VECTOR: Vec2d = Vec2d { x: 0.0, y: 0.0 };
pub const X_UNIT_VECTOR: Vec2d = Vec2d { x: 1.0, y: 0.0 };
pub const Y_UNIT_VECTOR: Vec2d = Vec2d { x: 0.0, y: 1.0 };

impl<T: Copy> Vec2d<T> {
    pub fn splat(s: T) -> Vec2d<T> { Vec2d { x: s, y: s } }

    pub fn get(&self, index: usize) -> Result<T> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(GeometryError::Index { index, type_name: "Vec2d" })
        }
    }

    pub fn set(&mut self, index: usize, value: T) -> Result<&mut Self> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            _ => return Err(GeometryError::Index { index, type_name: "Vec2d" })
        }
        Ok(self)
    }

    /// The persisted state of the vector, `[x, y]`.
    pub fn to_state(&self) -> [T; 2] { [self.x, self.y] }
    pub fn from_state([x, y]: [T; 2]) -> Vec2d<T> { Vec2d { x, y } }

    pub fn cast<U: From<T>>(self) -> Vec2d<U> { Vec2d { x: self.x.into(), y: self.y.into() } }

    pub fn pos(self) -> Vec2d<T> { self }
}

impl<T: Copy + PartialEq> Vec2d<T> {
    /// Element-wise comparison against a runtime-sized sequence; any
    /// length other than two never matches.
    pub fn matches_slice(&self, other: &[T]) -> bool {
        match other {
            [x, y] => self.x == *x && self.y == *y,
            _ => false
        }
    }
}

impl Vec2d<Coord> {
    pub fn zero() -> Vec2d { NULL_VECTOR }

    pub fn from_to(from: impl VectorLike, to: impl VectorLike) -> Vec2d {
        let (fx, fy) = from.components();
        let (tx, ty) = to.components();
        Vec2d::new(tx - fx, ty - fy)
    }

    pub fn origin_to(pt: impl VectorLike) -> Vec2d { pt.to_vec2d() }

    /// The unit vector pointing at `angle`.
    pub fn from_angle(angle: impl Angle) -> Vec2d { Vec2d::new(angle.cos(), angle.sin()) }

    pub fn is_null(&self) -> bool { self.x == 0.0 && self.y == 0.0 }
    pub fn is_zero(&self) -> bool { self.is_null() }

    pub fn dot(&self, other: impl VectorLike) -> Coord {
        let (x, y) = other.components();
        self.x * x + self.y * y
    }

    pub fn cross(&self, other: impl VectorLike) -> Coord {
        let (x, y) = other.components();
        self.x * y - self.y * x
    }

    pub fn length_squared(&self) -> Coord { self.x * self.x + self.y * self.y }
    pub fn length(&self) -> Coord { self.length_squared().sqrt() }

    /// Rescales the vector to `length`, keeping its direction.
    pub fn set_length(&mut self, length: Coord) -> Result<&mut Self> {
        let current = self.length();
        if current == 0.0 {
            if length == 0.0 { return Ok(self); }
            debug!(length, "refusing to rescale a null vector");
            return Err(GeometryError::domain("rescaling"));
        }

        self.x *= length / current;
        self.y *= length / current;
        Ok(self)
    }

    /// Makes the vector unit length and returns the length it had.
    /// A null vector is left untouched.
    pub fn normalize_return_length(&mut self) -> Coord {
        let length = self.length();
        if length != 0.0 {
            self.x /= length;
            self.y /= length;
        }
        length
    }

    pub fn normalized(&self) -> Vec2d {
        let mut v = *self;
        v.normalize_return_length();
        v
    }

    pub fn scaled_to_norm(&self, norm: Coord) -> Result<Vec2d> {
        if !(norm >= 0.0) {
            return Err(GeometryError::range("norm", norm, 0.0, CoordM::INFINITY));
        }

        let mut v = *self;
        v.set_length(norm)?;
        Ok(v)
    }

    pub fn perpendicular(&self) -> Vec2d { Vec2d::new(-self.y, self.x) }
    pub fn perpendicular_normal(&self) -> Vec2d { self.perpendicular().normalized() }

    // Rotation
    pub fn rotate(&mut self, degrees: Coord) -> &mut Self {
        self.rotate_radians(Radians::new(degrees.to_radians()))
    }

    pub fn rotated(&self, degrees: Coord) -> Vec2d {
        let mut v = *self;
        v.rotate(degrees);
        v
    }

    pub fn rotate_radians(&mut self, angle: impl Angle) -> &mut Self {
        let (cos, sin) = (angle.cos(), angle.sin());
        let x = self.x * cos - self.y * sin;
        let y = self.x * sin + self.y * cos;
        self.x = x;
        self.y = y;
        self
    }

    pub fn rotated_radians(&self, angle: impl Angle) -> Vec2d {
        let mut v = *self;
        v.rotate_radians(angle);
        v
    }

    /// Angle from the positive X axis in degrees, in `(-180, 180]`.
    /// The null vector has angle 0.
    pub fn angle(&self) -> Coord {
        if self.length_squared() == 0.0 {
            debug!("angle of a null vector taken as 0");
            return 0.0;
        }
        signed_angle_between(X_UNIT_VECTOR, *self).to_degrees()
    }

    /// Lays the vector along the positive X axis at its current length,
    /// then rotates it to `degrees`.
    pub fn set_angle(&mut self, degrees: Coord) -> &mut Self {
        self.x = self.length();
        self.y = 0.0;
        self.rotate(degrees)
    }

    pub fn angle_with_positive_x_axis(&self) -> Radians {
        if self.x == 0.0 {
            if self.y == 0.0 { Radians::ZERO }
            else if self.y > 0.0 { Radians::HALF_PI }
            else { Radians::THREE_HALVES_PI }
        } else {
            let value = (self.y / self.x).atan();
            if self.x < 0.0 { Radians::new(value + PI) }
            else { Radians::new(value + TWO_PI) }
        }
    }

    /// The sweep that takes this vector's direction to `other`'s.
    pub fn angle_to(&self, other: impl VectorLike) -> Radians {
        other.to_vec2d().angle_with_positive_x_axis() - self.angle_with_positive_x_axis()
    }

    /// Signed angle to `other` in degrees, in `(-180, 180]`.
    pub fn angle_between_degrees(&self, other: impl VectorLike) -> Coord {
        signed_angle_between(*self, other).to_degrees()
    }

    pub fn distance_squared(&self, other: impl VectorLike) -> Coord {
        let (x, y) = other.components();
        (self.x - x) * (self.x - x) + (self.y - y) * (self.y - y)
    }

    pub fn distance(&self, other: impl VectorLike) -> Coord { self.distance_squared(other).sqrt() }

    /// Vector projection onto `other`.
    pub fn projection(&self, other: impl VectorLike) -> Result<Vec2d> {
        let other = other.to_vec2d();
        let other_length_squared = other.length_squared();
        if other_length_squared == 0.0 {
            return Err(GeometryError::domain("projection"));
        }

        Ok(other * (self.dot(other) / other_length_squared))
    }

    /// Linear interpolation; `t` outside `[0, 1]` extrapolates.
    pub fn interpolate_to(&self, other: impl VectorLike, t: Coord) -> Vec2d {
        let (x, y) = other.components();
        Vec2d::new(self.x + (x - self.x) * t, self.y + (y - self.y) * t)
    }

    /// Coordinates of this vector in the (not necessarily orthonormal)
    /// basis spanned by `x_axis` and `y_axis`.
    pub fn convert_to_basis(&self, x_axis: impl VectorLike, y_axis: impl VectorLike) -> Result<Vec2d> {
        let (x_axis, y_axis) = (x_axis.to_vec2d(), y_axis.to_vec2d());
        if x_axis.is_null() || y_axis.is_null() {
            return Err(GeometryError::domain("basis conversion"));
        }

        Ok(Vec2d::new(self.dot(x_axis) / x_axis.length_squared(), self.dot(y_axis) / y_axis.length_squared()))
    }

    pub fn roughly_zero(&self) -> bool { self.length_squared().roughly_zero_squared() }
    pub fn roughly_equals(&self, other: impl VectorLike) -> bool { self.distance_squared(other).roughly_zero_squared() }
}

/// Unsigned angle between the directions of two vectors, in `[0, π]`.
pub fn angle_between(v1: impl VectorLike, v2: impl VectorLike) -> Radians {
    let sweep = v1.to_vec2d().angle_to(v2).value();
    if sweep > PI { Radians::new(TWO_PI - sweep) } else { Radians::new(sweep) }
}

/// Signed angle from `v1` to `v2` in radians, in `(-π, π]`.
pub fn signed_angle_between(v1: impl VectorLike, v2: impl VectorLike) -> Coord {
    let (v1, v2) = (v1.to_vec2d(), v2.to_vec2d());
    let angle = v1.cross(v2).atan2(v1.dot(v2));
    // atan2 gives -π for a negative zero cross product
    if angle == -PI { PI } else { angle }
}

impl<T> Index<usize> for Vec2d<T> {
    type Output = T;
    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("invalid subscript {} to Vec2d", index)
        }
    }
}

impl<T> IndexMut<usize> for Vec2d<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("invalid subscript {} to Vec2d", index)
        }
    }
}

impl<T> From<[T; 2]> for Vec2d<T> {
    fn from([x, y]: [T; 2]) -> Vec2d<T> { Vec2d { x, y } }
}

impl<T> From<Vec2d<T>> for [T; 2] {
    fn from(v: Vec2d<T>) -> [T; 2] { [v.x, v.y] }
}

impl From<Point> for Vec2d<Coord> {
    fn from(p: Point) -> Vec2d { Vec2d::new(p.x, p.y) }
}

impl<'a, T: Copy> TryFrom<&'a [T]> for Vec2d<T> {
    type Error = GeometryError;
    fn try_from(slice: &'a [T]) -> Result<Vec2d<T>> {
        match slice {
            [x, y] => Ok(Vec2d { x: *x, y: *y }),
            _ => Err(GeometryError::ShapeMismatch { expected: 2, found: slice.len() })
        }
    }
}

// Persisted as the bare pair [x, y]
impl<T: Serialize> Serialize for Vec2d<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        (&self.x, &self.y).serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Vec2d<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Vec2d<T>, D::Error> {
        <(T, T)>::deserialize(deserializer).map(Vec2d::from)
    }
}

impl AbsDiffEq for Vec2d<Coord> {
    type Epsilon = Coord;

    fn default_epsilon() -> Coord { Coord::default_epsilon() }

    fn abs_diff_eq(&self, other: &Vec2d, epsilon: Coord) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Vec2d<Coord> {
    fn default_max_relative() -> Coord { Coord::default_max_relative() }

    fn relative_eq(&self, other: &Vec2d, epsilon: Coord, max_relative: Coord) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative) && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}
