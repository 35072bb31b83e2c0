use std::{iter::Sum, ops::{Add, Div, Mul, Neg, Rem, Sub}};

use super::{Angle, AngleScalar, AngleUnit};

impl<U: AngleUnit, S: AngleScalar> Add for Angle<U, S> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Angle::new(self.value + rhs.value)
    }
}

impl<U: AngleUnit, S: AngleScalar> Sub for Angle<U, S> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Angle::new(self.value - rhs.value)
    }
}

impl<U: AngleUnit, S: AngleScalar> Neg for Angle<U, S> {
    type Output = Self;
    fn neg(self) -> Self {
        Angle::new(-self.value)
    }
}

impl<U: AngleUnit, S: AngleScalar> Mul<S> for Angle<U, S> {
    type Output = Self;
    fn mul(self, rhs: S) -> Self {
        Angle::new(self.value * rhs)
    }
}

impl<U: AngleUnit> Mul<Angle<U, f32>> for f32 {
    type Output = Angle<U, f32>;
    fn mul(self, rhs: Angle<U, f32>) -> Angle<U, f32> {
        Angle::new(self * rhs.value)
    }
}

impl<U: AngleUnit> Mul<Angle<U, f64>> for f64 {
    type Output = Angle<U, f64>;
    fn mul(self, rhs: Angle<U, f64>) -> Angle<U, f64> {
        Angle::new(self * rhs.value)
    }
}

impl<U: AngleUnit, S: AngleScalar> Div<S> for Angle<U, S> {
    type Output = Self;
    fn div(self, rhs: S) -> Self {
        Angle::new(self.value / rhs)
    }
}

/// Ratio of two same-unit angles; the unit cancels.
impl<U: AngleUnit, S: AngleScalar> Div for Angle<U, S> {
    type Output = S;
    fn div(self, rhs: Self) -> S {
        self.value / rhs.value
    }
}

impl<U: AngleUnit, S: AngleScalar> Rem<S> for Angle<U, S> {
    type Output = Self;
    fn rem(self, rhs: S) -> Self {
        Angle::new(self.value % rhs)
    }
}

impl<U: AngleUnit, S: AngleScalar> Sum for Angle<U, S> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Angle::zero(), |a, b| a + b)
    }
}

impl<'a, U: AngleUnit, S: AngleScalar> Sum<&'a Angle<U, S>> for Angle<U, S> {
    fn sum<I: Iterator<Item = &'a Angle<U, S>>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
