pub trait Atan {
    fn atan(&self) -> Self;
}

/// Four-quadrant arctangent of `self / x`; `self` is the y coordinate.
pub trait Atan2 {
    fn atan2(&self, x: &Self) -> Self;
}

pub fn atan<T: Atan>(v: T) -> T {
    Atan::atan(&v)
}

pub fn atan2<T: Atan2>(y: T, x: T) -> T {
    Atan2::atan2(&y, &x)
}

impl Atan for f32 {
    fn atan(&self) -> f32 {
        f32::atan(*self)
    }
}

impl Atan for f64 {
    fn atan(&self) -> f64 {
        f64::atan(*self)
    }
}

impl Atan2 for f32 {
    fn atan2(&self, x: &f32) -> f32 {
        f32::atan2(*self, *x)
    }
}

impl Atan2 for f64 {
    fn atan2(&self, x: &f64) -> f64 {
        f64::atan2(*self, *x)
    }
}
