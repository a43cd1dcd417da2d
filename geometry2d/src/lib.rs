//--------------------------------------------------------------------
// lib.rs
//--------------------------------------------------------------------
// Declaration of all modules occurs here
//--------------------------------------------------------------------

extern crate approx;
extern crate derive_more;
extern crate ordered_float;

pub mod error;
mod log;
mod geometry;

pub use error::{GeometryError, Result};
pub use geometry::{Coord, CoordM, Geometry, TWO_PI, EPSILON, EPSILON2, DIGITS_FOR_CMP};
pub use geometry::{Angle, AngleOperand, Radians, Degrees};
pub use geometry::{Operand, VectorLike};
pub use geometry::{Vec2d, NULL_VECTOR, X_UNIT_VECTOR, Y_UNIT_VECTOR, angle_between, signed_angle_between};
pub use geometry::{Point, Rect, CoordinatesDirection};
