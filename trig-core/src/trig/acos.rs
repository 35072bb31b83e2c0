pub trait Acos {
    fn acos(&self) -> Self;
}

pub fn acos<T: Acos>(v: T) -> T {
    Acos::acos(&v)
}

impl Acos for f32 {
    fn acos(&self) -> f32 {
        f32::acos(*self)
    }
}

impl Acos for f64 {
    fn acos(&self) -> f64 {
        f64::acos(*self)
    }
}
