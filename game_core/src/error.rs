use thiserror::Error;

/// Broken world invariants surfaced while stepping the simulation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("no ball entity in the world")]
    MissingBall,

    #[error("expected exactly one ball entity, found {0}")]
    MultipleBalls(usize),

    #[error("entity does not exist")]
    NoSuchEntity,
}

impl From<hecs::NoSuchEntity> for SimError {
    fn from(_: hecs::NoSuchEntity) -> Self {
        SimError::NoSuchEntity
    }
}
