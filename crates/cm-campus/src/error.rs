use thiserror::Error;

/// Errors produced while building or loading a campus dataset.
#[derive(Debug, Error)]
pub enum CampusError {
    #[error("duplicate place id {0:?}")]
    DuplicatePlace(String),

    #[error("duplicate room id {0:?}")]
    DuplicateRoom(String),

    #[error("room {room:?} references unknown building {building:?}")]
    UnknownBuilding { room: String, building: String },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CampusResult<T> = Result<T, CampusError>;
