pub trait Sin {
    fn sin(&self) -> Self;
}

/// Sine of `v` (in radians), using the implementation registered for `T`.
pub fn sin<T: Sin>(v: T) -> T {
    Sin::sin(&v)
}

impl Sin for f32 {
    fn sin(&self) -> f32 {
        f32::sin(*self)
    }
}

impl Sin for f64 {
    fn sin(&self) -> f64 {
        f64::sin(*self)
    }
}
