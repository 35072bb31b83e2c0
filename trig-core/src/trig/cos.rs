pub trait Cos {
    fn cos(&self) -> Self;
}

pub fn cos<T: Cos>(v: T) -> T {
    Cos::cos(&v)
}

impl Cos for f32 {
    fn cos(&self) -> f32 {
        f32::cos(*self)
    }
}

impl Cos for f64 {
    fn cos(&self) -> f64 {
        f64::cos(*self)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_3, PI};

    use approx::assert_relative_eq;
    use test_log::test;

    use super::*;

    #[test]
    fn matches_std_bitwise() {
        for v in [0., -0., 0.3, -1., 7.25, 1e-300, PI] {
            assert_eq!(cos(v).to_bits(), f64::cos(v).to_bits());
            let f = v as f32;
            assert_eq!(cos(f).to_bits(), f32::cos(f).to_bits());
        }
    }

    #[test]
    fn known_values() {
        assert_eq!(cos(0f32), 1.);
        assert_relative_eq!(cos(PI), -1.);
        assert_relative_eq!(cos(FRAC_PI_3), 0.5, epsilon = 1e-15);
    }

    #[test]
    fn non_finite() {
        assert!(cos(f32::NAN).is_nan());
        assert!(cos(f64::INFINITY).is_nan());
    }
}
