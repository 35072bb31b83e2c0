//! Generic trigonometric functions, dispatched per float type at compile time.
//!
//! Each operation is its own trait, so a new scalar type can opt into exactly
//! the operations it supports. The free functions are the generic entry points.

pub mod acos;
pub mod asin;
pub mod atan;
pub mod cos;
pub mod sin;
pub mod tan;

pub use acos::{acos, Acos};
pub use asin::{asin, Asin};
pub use atan::{atan, atan2, Atan, Atan2};
pub use cos::{cos, Cos};
pub use sin::{sin, Sin};
pub use tan::{tan, Tan};

/// Every trig operation [`Angle`](crate::angle::Angle) needs from its scalar.
pub trait Trig
: Sin
+ Cos
+ Tan
+ Asin
+ Acos
+ Atan
+ Atan2
{}

impl<T: Sin + Cos + Tan + Asin + Acos + Atan + Atan2> Trig for T {}
