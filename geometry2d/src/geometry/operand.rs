//--------------------------------------------------------------------
// operand.rs
//--------------------------------------------------------------------
// Provides the closed set of shapes a vector operator accepts on
// its other side, and the "vector-like" capability used by the
// geometric operations
//--------------------------------------------------------------------

use super::*;
use crate::error::GeometryError;

/// The right-hand side of a component-wise vector operation: either a
/// scalar broadcast to both components, or a pair of components.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Operand<T> {
    Scalar(T),
    Pair(T, T),
}

impl<T: Copy> Operand<T> {
    /// The values applied to x and y respectively.
    pub fn components(self) -> (T, T) {
        match self {
            Operand::Scalar(s) => (s, s),
            Operand::Pair(x, y) => (x, y),
        }
    }
}

impl<T> From<Vec2d<T>> for Operand<T> {
    fn from(v: Vec2d<T>) -> Operand<T> { Operand::Pair(v.x, v.y) }
}

impl<T> From<(T, T)> for Operand<T> {
    fn from((x, y): (T, T)) -> Operand<T> { Operand::Pair(x, y) }
}

impl<T> From<[T; 2]> for Operand<T> {
    fn from([x, y]: [T; 2]) -> Operand<T> { Operand::Pair(x, y) }
}

impl From<Point> for Operand<Coord> {
    fn from(p: Point) -> Operand<Coord> { Operand::Pair(p.x, p.y) }
}

// Slices only know their length at runtime, so they are checked here
impl<'a, T: Copy> TryFrom<&'a [T]> for Operand<T> {
    type Error = GeometryError;
    fn try_from(slice: &'a [T]) -> Result<Operand<T>, GeometryError> {
        match slice {
            [x, y] => Ok(Operand::Pair(*x, *y)),
            _ => Err(GeometryError::ShapeMismatch { expected: 2, found: slice.len() }),
        }
    }
}

macro_rules! scalar_operands {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand<$t> {
                fn from(s: $t) -> Operand<$t> { Operand::Scalar(s) }
            }
        )*
    }
}

scalar_operands!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Anything exposing two numeric components that geometric operations
/// can read as a vector.
pub trait VectorLike {
    fn components(&self) -> (Coord, Coord);

    fn to_vec2d(&self) -> Vec2d {
        let (x, y) = self.components();
        Vec2d::new(x, y)
    }
}

impl VectorLike for Vec2d<Coord> {
    fn components(&self) -> (Coord, Coord) { (self.x, self.y) }
}

impl VectorLike for Point {
    fn components(&self) -> (Coord, Coord) { (self.x, self.y) }
}

impl VectorLike for (Coord, Coord) {
    fn components(&self) -> (Coord, Coord) { *self }
}

impl VectorLike for [Coord; 2] {
    fn components(&self) -> (Coord, Coord) { (self[0], self[1]) }
}

impl<V: VectorLike + ?Sized> VectorLike for &V {
    fn components(&self) -> (Coord, Coord) { (**self).components() }
}
