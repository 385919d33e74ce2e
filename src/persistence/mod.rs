use crate::grid::{GridError, ScheduleGrid};
use serde_json::Error as SerdeJsonError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum PersistenceError {
    Serialization(SerdeJsonError),
    Io(io::Error),
    Grid(GridError),
    MalformedDocument(String),
    NotFound,
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::Serialization(err) => write!(f, "serialization error: {err}"),
            PersistenceError::Io(err) => write!(f, "io error: {err}"),
            PersistenceError::Grid(err) => write!(f, "grid error: {err}"),
            PersistenceError::MalformedDocument(msg) => write!(f, "malformed document: {msg}"),
            PersistenceError::NotFound => write!(f, "schedule file not found"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<SerdeJsonError> for PersistenceError {
    fn from(value: SerdeJsonError) -> Self {
        Self::Serialization(value)
    }
}

impl From<io::Error> for PersistenceError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<GridError> for PersistenceError {
    fn from(value: GridError) -> Self {
        Self::Grid(value)
    }
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Storage backends the UI shell saves to and loads from. `load_grid`
/// reports a backend with nothing stored yet as `Ok(None)`.
pub trait ScheduleStore {
    fn save_grid(&self, grid: &ScheduleGrid) -> PersistenceResult<()>;
    fn load_grid(&self) -> PersistenceResult<Option<ScheduleGrid>>;
}

pub mod file;

pub use file::{
    DEFAULT_DATA_PATH, JsonFileStore, grid_from_json, grid_to_json, load_grid_from_json,
    save_grid_to_json,
};
