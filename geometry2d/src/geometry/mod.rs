//--------------------------------------------------------------------
// geometry.rs
//--------------------------------------------------------------------
// Provides the geometric primitives of the crate
//--------------------------------------------------------------------

mod coord_utils;
mod angle;
mod operand;
mod vec2d;
mod vec2d_ops;
mod point;
mod rect;

pub type Coord = f64;
pub use std::f64 as CoordM;

pub use coord_utils::*;
pub use angle::*;
pub use operand::*;
pub use vec2d::*;
pub use point::*;
pub use rect::*;
