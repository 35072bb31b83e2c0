use std::fmt::{Debug, Display};

use num_traits::{Float, FloatConst};

use crate::trig::Trig;

/// Storage type of an [`Angle`](super::Angle): a float with every trig operation registered.
///
/// `c180`/`c360` are the degree constants; radians come from [`FloatConst`].
pub trait AngleScalar
: Float
+ FloatConst
+ Trig
+ Debug
+ Display
{
    fn c180() -> Self;
    fn c360() -> Self;
}

impl AngleScalar for f32 {
    fn c180() -> f32 {
        180.
    }
    fn c360() -> f32 {
        360.
    }
}

impl AngleScalar for f64 {
    fn c180() -> f64 {
        180.
    }
    fn c360() -> f64 {
        360.
    }
}
