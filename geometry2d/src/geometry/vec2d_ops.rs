//--------------------------------------------------------------------
// vec2d_ops.rs
//--------------------------------------------------------------------
// Provides the component-wise operator set of Vec2d: the other side
// of every operator may be a vector, a pair, an array or a scalar
//--------------------------------------------------------------------

use std::ops::*;

use super::*;

// Use a simplifier macro to implement every binary operator, its
// compound-assignment form and the pair/array-on-the-left forms
macro_rules! componentwise_ops {
    ($($op:ident :: $method:ident, $assign_op:ident :: $assign_method:ident);*) => {
        $(
            impl<T, R> $op<R> for Vec2d<T> where T: $op<Output = T> + Copy, R: Into<Operand<T>> {
                type Output = Vec2d<T>;
                fn $method(self, rhs: R) -> Vec2d<T> {
                    let (x, y) = rhs.into().components();
                    Vec2d::new(self.x.$method(x), self.y.$method(y))
                }
            }

            impl<T, R> $assign_op<R> for Vec2d<T> where T: $op<Output = T> + Copy, R: Into<Operand<T>> {
                fn $assign_method(&mut self, rhs: R) { *self = (*self).$method(rhs); }
            }

            impl<T> $op<Vec2d<T>> for (T, T) where T: $op<Output = T> + Copy {
                type Output = Vec2d<T>;
                fn $method(self, rhs: Vec2d<T>) -> Vec2d<T> {
                    Vec2d::new(self.0.$method(rhs.x), self.1.$method(rhs.y))
                }
            }

            impl<T> $op<Vec2d<T>> for [T; 2] where T: $op<Output = T> + Copy {
                type Output = Vec2d<T>;
                fn $method(self, rhs: Vec2d<T>) -> Vec2d<T> {
                    Vec2d::new(self[0].$method(rhs.x), self[1].$method(rhs.y))
                }
            }
        )*
    }
}

componentwise_ops! {
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
    Rem::rem, RemAssign::rem_assign;
    Shl::shl, ShlAssign::shl_assign;
    Shr::shr, ShrAssign::shr_assign;
    BitAnd::bitand, BitAndAssign::bitand_assign;
    BitOr::bitor, BitOrAssign::bitor_assign;
    BitXor::bitxor, BitXorAssign::bitxor_assign
}

// Scalars on the left have to be spelled out per primitive type
macro_rules! reflected_scalar_ops {
    ([$($op:ident :: $method:ident),*] for $ts:tt) => {
        $( reflected_scalar_ops!(@op $op :: $method, $ts); )*
    };
    (@op $op:ident :: $method:ident, [$($t:ty),*]) => {
        $(
            impl $op<Vec2d<$t>> for $t {
                type Output = Vec2d<$t>;
                fn $method(self, rhs: Vec2d<$t>) -> Vec2d<$t> {
                    Vec2d::new(self.$method(rhs.x), self.$method(rhs.y))
                }
            }
        )*
    };
}

reflected_scalar_ops!([Add::add, Sub::sub, Mul::mul, Div::div, Rem::rem]
    for [f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize]);
reflected_scalar_ops!([Shl::shl, Shr::shr, BitAnd::bitand, BitOr::bitor, BitXor::bitxor]
    for [i8, i16, i32, i64, isize, u8, u16, u32, u64, usize]);

// Inverting a vector negates it; this is not a bitwise complement
impl<T: Neg<Output = T>> Not for Vec2d<T> {
    type Output = Vec2d<T>;
    fn not(self) -> Vec2d<T> { -self }
}

// Equal only to another pair of components; a scalar never matches
impl<T, R> PartialEq<R> for Vec2d<T> where T: PartialEq + Copy, R: Into<Operand<T>> + Copy {
    fn eq(&self, other: &R) -> bool {
        match (*other).into() {
            Operand::Pair(x, y) => self.x == x && self.y == y,
            Operand::Scalar(_) => false
        }
    }
}

// Floor division per component type: floats floor the quotient, signed
// integers round towards negative infinity unlike `/`, unsigned ones
// already do
macro_rules! float_floor_div { ($a:expr, $b:expr) => { ($a / $b).floor() } }
macro_rules! signed_floor_div {
    ($a:expr, $b:expr) => {{
        let (a, b) = ($a, $b);
        let q = a / b;
        if a % b != 0 && ((a < 0) != (b < 0)) { q - 1 } else { q }
    }}
}
macro_rules! unsigned_floor_div { ($a:expr, $b:expr) => { $a / $b } }

// `//` and `divmod` with their reflected and in-place forms. The `r*`
// methods take the left-hand side as argument, so `v.rfloor_div(7)`
// reads as `7 // v`
macro_rules! floor_ops {
    ($floor_div:ident for $($t:ty),*) => {
        $(
            impl Vec2d<$t> {
                pub fn floor_div(self, rhs: impl Into<Operand<$t>>) -> Vec2d<$t> {
                    let (x, y) = rhs.into().components();
                    Vec2d::new($floor_div!(self.x, x), $floor_div!(self.y, y))
                }

                pub fn floor_div_assign(&mut self, rhs: impl Into<Operand<$t>>) -> &mut Self {
                    *self = self.floor_div(rhs);
                    self
                }

                pub fn rfloor_div(self, lhs: impl Into<Operand<$t>>) -> Vec2d<$t> {
                    Vec2d::from(lhs.into().components()).floor_div(self)
                }

                /// Floor quotient and remainder, with `q * rhs + r == self`.
                /// The remainder takes the sign of `rhs`, unlike `%`.
                pub fn divmod(self, rhs: impl Into<Operand<$t>>) -> (Vec2d<$t>, Vec2d<$t>) {
                    let rhs = Vec2d::from(rhs.into().components());
                    let quotient = self.floor_div(rhs);
                    (quotient, self - quotient * rhs)
                }

                pub fn rdivmod(self, lhs: impl Into<Operand<$t>>) -> (Vec2d<$t>, Vec2d<$t>) {
                    Vec2d::from(lhs.into().components()).divmod(self)
                }
            }
        )*
    }
}

floor_ops!(float_floor_div for f32, f64);
floor_ops!(signed_floor_div for i8, i16, i32, i64, isize);
floor_ops!(unsigned_floor_div for u8, u16, u32, u64, usize);

macro_rules! float_ops {
    ($($t:ty),*) => {
        $(
            impl Vec2d<$t> {
                pub fn abs(self) -> Vec2d<$t> { Vec2d::new(self.x.abs(), self.y.abs()) }

                pub fn pow(self, rhs: impl Into<Operand<$t>>) -> Vec2d<$t> {
                    let (x, y) = rhs.into().components();
                    Vec2d::new(self.x.powf(x), self.y.powf(y))
                }

                pub fn pow_assign(&mut self, rhs: impl Into<Operand<$t>>) -> &mut Self {
                    *self = self.pow(rhs);
                    self
                }

                /// `lhs ** self`: the receiver holds the exponents.
                pub fn rpow(self, lhs: impl Into<Operand<$t>>) -> Vec2d<$t> {
                    Vec2d::from(lhs.into().components()).pow(self)
                }
            }
        )*
    }
}

float_ops!(f32, f64);

// Integer powers take non-negative `u32` exponents, as the primitive `pow` does
macro_rules! int_ops {
    ($abs:ident for $($t:ty),*) => {
        $(
            impl Vec2d<$t> {
                pub fn abs(self) -> Vec2d<$t> { Vec2d::new($abs!(self.x), $abs!(self.y)) }

                pub fn pow(self, exp: impl Into<Operand<u32>>) -> Vec2d<$t> {
                    let (x, y) = exp.into().components();
                    Vec2d::new(self.x.pow(x), self.y.pow(y))
                }

                pub fn pow_assign(&mut self, exp: impl Into<Operand<u32>>) -> &mut Self {
                    *self = self.pow(exp);
                    self
                }
            }
        )*
    }
}

macro_rules! signed_abs { ($a:expr) => { $a.abs() } }
macro_rules! unsigned_abs { ($a:expr) => { $a } }

int_ops!(signed_abs for i8, i16, i32, i64, isize);
int_ops!(unsigned_abs for u8, u16, u32, u64, usize);
