use std::{fmt::Debug, hash::Hash, str::FromStr};

use log::debug;

use crate::error::UnitError;

use super::scalar::AngleScalar;

/// Compile-time unit tag of an [`Angle`](super::Angle).
pub trait AngleUnit
: Copy
+ Debug
+ Default
+ Eq
+ Hash
+ Send
+ Sync
+ 'static
{
    const KIND: UnitKind;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Degrees;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Radians;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Turns;

impl AngleUnit for Degrees {
    const KIND: UnitKind = UnitKind::Degrees;
}

impl AngleUnit for Radians {
    const KIND: UnitKind = UnitKind::Radians;
}

impl AngleUnit for Turns {
    const KIND: UnitKind = UnitKind::Turns;
}

/// Runtime name of an angle unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, derive_more::Display)]
pub enum UnitKind {
    #[display(fmt = "degrees")]
    Degrees,
    #[display(fmt = "radians")]
    Radians,
    #[display(fmt = "turns")]
    Turns,
}

impl UnitKind {
    /// Suffix used when displaying a magnitude in this unit.
    pub fn symbol(self) -> &'static str {
        match self {
            UnitKind::Degrees => "°",
            UnitKind::Radians => " rad",
            UnitKind::Turns => " turn",
        }
    }

    /// Magnitude of one full revolution in this unit.
    pub fn per_turn<S: AngleScalar>(self) -> S {
        match self {
            UnitKind::Degrees => S::c360(),
            UnitKind::Radians => S::TAU(),
            UnitKind::Turns => S::one(),
        }
    }

    /// Rescale `value` from one unit to another.
    ///
    /// Degrees <-> turns multiplies before dividing, so it is a single correctly-rounded
    /// operation. Pairs involving radians scale by one precomputed ratio, which cannot overflow
    /// unless the result does.
    pub fn convert<S: AngleScalar>(value: S, from: UnitKind, to: UnitKind) -> S {
        match (from, to) {
            _ if from == to => value,
            (UnitKind::Degrees, UnitKind::Turns) | (UnitKind::Turns, UnitKind::Degrees) => {
                value * to.per_turn() / from.per_turn()
            }
            _ => value * (to.per_turn::<S>() / from.per_turn::<S>()),
        }
    }
}

impl FromStr for UnitKind {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.is_empty() {
            return Err(UnitError::Empty);
        }
        match name.to_lowercase().as_str() {
            "deg" | "degree" | "degrees" | "°" => Ok(UnitKind::Degrees),
            "rad" | "radian" | "radians" => Ok(UnitKind::Radians),
            "turn" | "turns" | "rev" | "revolution" | "revolutions" => Ok(UnitKind::Turns),
            _ => {
                debug!("unrecognized angle unit: {:?}", s);
                Err(UnitError::Unknown(s.to_string()))
            }
        }
    }
}
