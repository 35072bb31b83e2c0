pub trait Asin {
    fn asin(&self) -> Self;
}

/// Arcsine of `v`, in radians. NaN outside `[-1, 1]`, as the underlying routine defines it.
pub fn asin<T: Asin>(v: T) -> T {
    Asin::asin(&v)
}

impl Asin for f32 {
    fn asin(&self) -> f32 {
        f32::asin(*self)
    }
}

impl Asin for f64 {
    fn asin(&self) -> f64 {
        f64::asin(*self)
    }
}
