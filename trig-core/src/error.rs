#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UnitError {
    #[error("Empty angle unit name")]
    Empty,

    #[error("Unrecognized angle unit: {0:?} (expected degrees, radians, or turns)")]
    Unknown(String),
}
