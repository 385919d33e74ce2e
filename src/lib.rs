pub mod entry;
pub mod grid;
pub mod persistence;

pub use entry::Entry;
pub use grid::{DEFAULT_CAPACITY, GridError, ScheduleGrid};
pub use persistence::{
    DEFAULT_DATA_PATH, JsonFileStore, PersistenceError, PersistenceResult, ScheduleStore,
    grid_from_json, grid_to_json, load_grid_from_json, save_grid_to_json,
};
