//! Approximate comparison of same-unit angles, delegating to the scalar's `approx` impls.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use log::debug;

use super::{Angle, AngleScalar, AngleUnit};

impl<U: AngleUnit, S: AngleScalar + AbsDiffEq<Epsilon = S>> AbsDiffEq for Angle<U, S> {
    type Epsilon = S;
    fn default_epsilon() -> S {
        S::default_epsilon()
    }
    fn abs_diff_eq(&self, other: &Self, epsilon: S) -> bool {
        let rv = self.value.abs_diff_eq(&other.value, epsilon);
        if !rv {
            debug!("abs_diff_eq: {} vs {} {} (epsilon {})", self.value, other.value, U::KIND, epsilon);
        }
        rv
    }
}

impl<U: AngleUnit, S: AngleScalar + RelativeEq<Epsilon = S>> RelativeEq for Angle<U, S> {
    fn default_max_relative() -> S {
        S::default_max_relative()
    }
    fn relative_eq(&self, other: &Self, epsilon: S, max_relative: S) -> bool {
        let rv = self.value.relative_eq(&other.value, epsilon, max_relative);
        if !rv {
            debug!(
                "relative_eq: {} vs {} {} (epsilon {}, max_relative {})",
                self.value, other.value, U::KIND, epsilon, max_relative,
            );
        }
        rv
    }
}

impl<U: AngleUnit, S: AngleScalar + UlpsEq<Epsilon = S>> UlpsEq for Angle<U, S> {
    fn default_max_ulps() -> u32 {
        S::default_max_ulps()
    }
    fn ulps_eq(&self, other: &Self, epsilon: S, max_ulps: u32) -> bool {
        let rv = self.value.ulps_eq(&other.value, epsilon, max_ulps);
        if !rv {
            debug!("ulps_eq: {} vs {} {} (max_ulps {})", self.value, other.value, U::KIND, max_ulps);
        }
        rv
    }
}
