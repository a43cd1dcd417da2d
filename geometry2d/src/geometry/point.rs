//--------------------------------------------------------------------
// point.rs
//--------------------------------------------------------------------
// Provides a point class, a plain coordinate carrier
//--------------------------------------------------------------------

use crate::derive_more::*;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::ops::Index;

use super::*;
use crate::error::{GeometryError, Result};

#[derive(Copy, Clone, Debug, Default, Add, Sub, Mul, Div, AddAssign, SubAssign, MulAssign, DivAssign,
    Neg, From, Into, Display, Constructor, Serialize, Deserialize)]
#[display(fmt = "({:.2}, {:.2})", x, y)]
pub struct Point { pub x: Coord, pub y: Coord }

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn as_tuple(&self) -> (Coord, Coord) { (self.x, self.y) }

    pub fn get(&self, index: usize) -> Result<Coord> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(GeometryError::Index { index, type_name: "Point" })
        }
    }

    /// Distance from the origin.
    pub fn length(&self) -> Coord { self.x.hypot(self.y) }
    pub fn distance_to(&self, other: Point) -> Coord { (*self - other).length() }

    pub fn move_to(&mut self, x: Coord, y: Coord) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn slide_xy(&mut self, dx: Coord, dy: Coord) -> &mut Self {
        self.x += dx;
        self.y += dy;
        self
    }

    pub fn translate_following(&mut self, v: impl VectorLike) -> &mut Self {
        let (dx, dy) = v.components();
        self.slide_xy(dx, dy)
    }

    /// Rotates counter-clockwise about the origin, y pointing up.
    /// In y-down screen space the same call turns clockwise.
    pub fn rotate(&self, angle: impl Angle) -> Point {
        Vec2d::origin_to(*self).rotated_radians(angle).into()
    }

    pub fn rotate_about(&self, center: Point, angle: impl Angle) -> Point {
        (*self - center).rotate(angle) + center
    }

    /// The point with both coordinates rounded to the nearest integer.
    pub fn rounded(&self) -> Point { Point::new(self.x.round(), self.y.round()) }

    pub fn midpoint(a: Point, b: Point) -> Point { (a + b) / 2.0 }

    fn key(&self) -> (OrderedFloat<Coord>, OrderedFloat<Coord>) {
        (OrderedFloat(self.x), OrderedFloat(self.y))
    }
}

impl From<Vec2d<Coord>> for Point {
    fn from(v: Vec2d) -> Point { Point::new(v.x, v.y) }
}

impl Index<usize> for Point {
    type Output = Coord;
    fn index(&self, index: usize) -> &Coord {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("invalid subscript {} to Point", index)
        }
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Point) -> bool { self.key() == other.key() }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) { self.key().hash(state) }
}
