use std::fmt::{self, Debug, Display, Formatter};

use super::{Angle, AngleScalar, AngleUnit};

/// Magnitude followed by the unit symbol (`90°`, `1.5 rad`, `0.25 turn`); honors `{:.N}`.
impl<U: AngleUnit, S: AngleScalar> Display for Angle<U, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*}{}", precision, self.value, U::KIND.symbol()),
            None => write!(f, "{}{}", self.value, U::KIND.symbol()),
        }
    }
}

impl<U: AngleUnit, S: AngleScalar> Debug for Angle<U, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Angle<{}>({:?})", U::KIND, self.value)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use crate::angle::{Deg, Rad, Turn};

    #[test]
    fn display() {
        assert_eq!(Deg::new(90.).to_string(), "90°");
        assert_eq!(Rad::new(1.5).to_string(), "1.5 rad");
        assert_eq!(Turn::new(0.25f32).to_string(), "0.25 turn");
        assert_eq!(format!("{:.1}", Deg::new(90.)), "90.0°");
        assert_eq!(format!("{:.3}", Rad::new(std::f64::consts::PI)), "3.142 rad");
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", Deg::new(90.)), "Angle<degrees>(90.0)");
        assert_eq!(format!("{:?}", Turn::new(-0.5f32)), "Angle<turns>(-0.5)");
    }
}
