use thiserror::Error;

use crate::DestinationKind;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum NavError {
    /// The id is not in the dataset (or, for a room, its building is not).
    #[error("no {kind} with id {id:?} to navigate to")]
    UnresolvedDestination { kind: DestinationKind, id: String },
}

pub type NavResult<T> = Result<T, NavError>;
