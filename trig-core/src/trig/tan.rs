pub trait Tan {
    fn tan(&self) -> Self;
}

pub fn tan<T: Tan>(v: T) -> T {
    Tan::tan(&v)
}

impl Tan for f32 {
    fn tan(&self) -> f32 {
        f32::tan(*self)
    }
}

impl Tan for f64 {
    fn tan(&self) -> f64 {
        f64::tan(*self)
    }
}
