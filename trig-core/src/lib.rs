//! Unit-safe angles over generic trigonometric dispatch.
//!
//! Provides:
//! - [`trig`]: `sin`, `asin` and siblings, each resolved per float type at compile time
//! - [`Angle`]: a magnitude tagged with its unit (degrees, radians or turns), so angles in
//!   different units cannot be mixed without an explicit conversion

pub mod angle;
pub mod error;
pub mod trig;

// Re-export key types for external use
pub use angle::{Angle, AngleScalar, AngleUnit, Deg, Degrees, Rad, Radians, Turn, Turns, UnitKind};
pub use error::UnitError;
pub use trig::{acos, asin, atan, atan2, cos, sin, tan, Trig};
