//! Unit-tagged angles.
//!
//! An [`Angle<U, S>`] stores one magnitude of type `S`, always read in unit `U`. Arithmetic is
//! only defined between angles of the same unit; moving between units goes through
//! [`Angle::to`] (or one of its shorthands).

use std::marker::PhantomData;

use crate::trig;

pub mod fmt;
pub mod ops;
pub mod scalar;
pub mod tolerance;
pub mod unit;

pub use scalar::AngleScalar;
pub use unit::{AngleUnit, Degrees, Radians, Turns, UnitKind};

pub type Deg<S = f64> = Angle<Degrees, S>;
pub type Rad<S = f64> = Angle<Radians, S>;
pub type Turn<S = f64> = Angle<Turns, S>;

pub struct Angle<U, S> {
    value: S,
    unit: PhantomData<U>,
}

impl<U, S> Angle<U, S> {
    /// Wrap `value`, already expressed in `U`. Stored verbatim: no validation or wrapping.
    pub const fn new(value: S) -> Self {
        Angle { value, unit: PhantomData }
    }
}

impl<U: AngleUnit, S: AngleScalar> Angle<U, S> {
    pub fn value(self) -> S {
        self.value
    }

    pub fn unit(self) -> UnitKind {
        U::KIND
    }

    pub fn zero() -> Self {
        Self::new(S::zero())
    }

    pub fn full_turn() -> Self {
        Self::new(U::KIND.per_turn())
    }

    pub fn half_turn() -> Self {
        Self::new(U::KIND.per_turn::<S>() / two())
    }

    pub fn quarter_turn() -> Self {
        Self::new(U::KIND.per_turn::<S>() / (two::<S>() * two()))
    }

    /// Re-express this angle in unit `V`.
    ///
    /// Degrees <-> turns is exact up to a single rounding; any pair involving radians picks up
    /// rounding error from π.
    pub fn to<V: AngleUnit>(self) -> Angle<V, S> {
        Angle::new(UnitKind::convert(self.value, U::KIND, V::KIND))
    }

    pub fn to_degrees(self) -> Angle<Degrees, S> {
        self.to()
    }

    pub fn to_radians(self) -> Angle<Radians, S> {
        self.to()
    }

    pub fn to_turns(self) -> Angle<Turns, S> {
        self.to()
    }

    pub fn sin(self) -> S {
        trig::sin(self.to_radians().value)
    }

    pub fn cos(self) -> S {
        trig::cos(self.to_radians().value)
    }

    pub fn tan(self) -> S {
        trig::tan(self.to_radians().value)
    }

    pub fn sin_cos(self) -> (S, S) {
        let rad = self.to_radians().value;
        (trig::sin(rad), trig::cos(rad))
    }

    /// Angle whose sine is `v`. NaN outside `[-1, 1]`.
    pub fn asin(v: S) -> Self {
        Angle::<Radians, S>::new(trig::asin(v)).to()
    }

    /// Angle whose cosine is `v`. NaN outside `[-1, 1]`.
    pub fn acos(v: S) -> Self {
        Angle::<Radians, S>::new(trig::acos(v)).to()
    }

    pub fn atan(v: S) -> Self {
        Angle::<Radians, S>::new(trig::atan(v)).to()
    }

    /// Direction of the point `(x, y)`, in `(-half turn, half turn]`.
    pub fn atan2(y: S, x: S) -> Self {
        Angle::<Radians, S>::new(trig::atan2(y, x)).to()
    }

    pub fn abs(self) -> Self {
        Self::new(self.value.abs())
    }

    /// Wrap into `[0, full turn)`. Non-finite magnitudes become NaN.
    pub fn normalized(self) -> Self {
        let full = U::KIND.per_turn::<S>();
        let r = self.value % full;
        let r = if r < S::zero() { r + full } else { r };
        // `r + full` can round up to exactly `full`; also drops the sign of -0
        if r >= full || r.is_zero() {
            Self::zero()
        } else {
            Self::new(r)
        }
    }

    /// Wrap into `(-half turn, half turn]`. Non-finite magnitudes become NaN.
    pub fn normalized_signed(self) -> Self {
        let full = U::KIND.per_turn::<S>();
        let r = self.normalized().value;
        if r > full / two() {
            Self::new(r - full)
        } else {
            Self::new(r)
        }
    }
}

fn two<S: AngleScalar>() -> S {
    S::one() + S::one()
}

impl<U, S: Clone> Clone for Angle<U, S> {
    fn clone(&self) -> Self {
        Angle::new(self.value.clone())
    }
}

impl<U, S: Copy> Copy for Angle<U, S> {}

impl<U: AngleUnit, S: AngleScalar> Default for Angle<U, S> {
    fn default() -> Self {
        Self::zero()
    }
}

/// Exact comparison of magnitudes; see [`tolerance`] for approximate comparison.
impl<U, S: PartialEq> PartialEq for Angle<U, S> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<U, S: PartialOrd> PartialOrd for Angle<U, S> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.value.partial_cmp(&other.value)
    }
}
