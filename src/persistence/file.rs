use super::{PersistenceError, PersistenceResult, ScheduleStore};
use crate::entry::Entry;
use crate::grid::{DEFAULT_CAPACITY, ScheduleGrid};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where the tray widget historically kept its data, relative to the
/// application directory.
pub const DEFAULT_DATA_PATH: &str = "UserData/GalaData.json";

#[derive(Serialize, Deserialize)]
struct GalaDocument {
    gala_items: Vec<Entry>,
}

impl GalaDocument {
    fn from_grid(grid: &ScheduleGrid) -> Self {
        Self {
            gala_items: grid.entries(),
        }
    }

    fn apply_to(self, grid: &mut ScheduleGrid) -> PersistenceResult<()> {
        for item in self.gala_items {
            grid.set(item.row, item.time.as_deref(), item.description.as_deref())?;
        }
        Ok(())
    }
}

/// Render the grid as a `gala_items` document. Empty rows are skipped; the
/// output is pretty-printed with the 4-space indent the original tool wrote.
pub fn grid_to_json(grid: &ScheduleGrid) -> PersistenceResult<String> {
    let document = GalaDocument::from_grid(grid);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    document.serialize(&mut serializer)?;
    // serde_json always emits valid UTF-8
    String::from_utf8(buf)
        .map_err(|err| PersistenceError::Io(io::Error::new(io::ErrorKind::InvalidData, err)))
}

/// Apply a `gala_items` document to `grid`. Rows the document does not
/// mention keep their current value; callers wanting a clean load must
/// `clear()` first. Duplicate rows apply in document order, last write wins.
pub fn grid_from_json(grid: &mut ScheduleGrid, text: &str) -> PersistenceResult<()> {
    let document: GalaDocument = serde_json::from_str(text)
        .map_err(|err| PersistenceError::MalformedDocument(err.to_string()))?;
    document.apply_to(grid)
}

/// Write the grid to `path`, creating parent directories as needed.
pub fn save_grid_to_json<P: AsRef<Path>>(grid: &ScheduleGrid, path: P) -> PersistenceResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = grid_to_json(grid)?;
    fs::write(path, json)?;
    Ok(())
}

/// Read `path` and apply its document to `grid`. A missing file is reported
/// as `NotFound`; a file that is not UTF-8 text as `MalformedDocument`.
pub fn load_grid_from_json<P: AsRef<Path>>(grid: &mut ScheduleGrid, path: P) -> PersistenceResult<()> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(PersistenceError::NotFound);
    }
    let bytes = fs::read(path)?;
    let text = String::from_utf8(bytes)
        .map_err(|err| PersistenceError::MalformedDocument(err.to_string()))?;
    grid_from_json(grid, &text)
}

/// JSON-file backend for the tray widget's one data file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    capacity: usize,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Store whose loaded grids use a custom row capacity.
    pub fn with_capacity<P: Into<PathBuf>>(path: P, capacity: usize) -> Self {
        Self {
            path: path.into(),
            capacity,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_PATH)
    }
}

impl ScheduleStore for JsonFileStore {
    fn save_grid(&self, grid: &ScheduleGrid) -> PersistenceResult<()> {
        save_grid_to_json(grid, &self.path)
    }

    fn load_grid(&self) -> PersistenceResult<Option<ScheduleGrid>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let mut grid = ScheduleGrid::with_capacity(self.capacity);
        load_grid_from_json(&mut grid, &self.path)?;
        Ok(Some(grid))
    }
}
