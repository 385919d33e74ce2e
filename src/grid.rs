use crate::entry::Entry;
use std::fmt;

/// Row capacity of the tray widget's table.
pub const DEFAULT_CAPACITY: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    OutOfRange { row: i32, capacity: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfRange { row, capacity } => {
                write!(f, "row {row} is out of range for a grid of {capacity} rows")
            }
        }
    }
}

impl std::error::Error for GridError {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Slot {
    time: Option<String>,
    description: Option<String>,
}

impl Slot {
    fn is_empty(&self) -> bool {
        self.time.is_none() && self.description.is_none()
    }
}

/// Fixed-capacity two-column table state. Rows are addressed by their
/// position; a row with both fields unset counts as empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleGrid {
    slots: Vec<Slot>,
}

impl Default for ScheduleGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleGrid {
    /// Create an empty grid with the default row capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty grid with a custom row capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![Slot::default(); capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Read one row. `Ok(None)` means the slot is empty.
    pub fn get(&self, row: i32) -> Result<Option<Entry>, GridError> {
        let idx = self.index_for(row)?;
        let slot = &self.slots[idx];
        if slot.is_empty() {
            return Ok(None);
        }
        Ok(Some(Entry::new(
            row,
            slot.time.clone(),
            slot.description.clone(),
        )))
    }

    /// Overwrite one row in full. There is no partial-field update; passing
    /// `None` for both fields empties the slot.
    pub fn set(
        &mut self,
        row: i32,
        time: Option<&str>,
        description: Option<&str>,
    ) -> Result<(), GridError> {
        let idx = self.index_for(row)?;
        self.slots[idx] = Slot {
            time: time.map(String::from),
            description: description.map(String::from),
        };
        Ok(())
    }

    /// Reset every slot to empty.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = Slot::default();
        }
    }

    /// All non-empty rows in ascending order. This is what gets persisted.
    pub fn entries(&self) -> Vec<Entry> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| !slot.is_empty())
            .map(|(row, slot)| Entry::new(row as i32, slot.time.clone(), slot.description.clone()))
            .collect()
    }

    fn index_for(&self, row: i32) -> Result<usize, GridError> {
        let capacity = self.slots.len();
        if row < 0 || row as usize >= capacity {
            return Err(GridError::OutOfRange { row, capacity });
        }
        Ok(row as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_has_default_capacity_and_no_entries() {
        let grid = ScheduleGrid::new();
        assert_eq!(grid.capacity(), DEFAULT_CAPACITY);
        assert!(grid.entries().is_empty());
    }

    #[test]
    fn setting_both_fields_to_none_empties_the_slot() {
        let mut grid = ScheduleGrid::with_capacity(3);
        grid.set(1, Some("Fri 3:00 pm"), Some("Standup")).unwrap();
        assert!(grid.get(1).unwrap().is_some());

        grid.set(1, None, None).unwrap();
        assert_eq!(grid.get(1).unwrap(), None);
        assert!(grid.entries().is_empty());
    }

    #[test]
    fn entry_rows_match_slot_positions() {
        let mut grid = ScheduleGrid::with_capacity(5);
        grid.set(4, None, Some("Last row")).unwrap();
        grid.set(2, Some("Sat 8:30 am"), None).unwrap();

        let rows: Vec<i32> = grid.entries().iter().map(|e| e.row).collect();
        assert_eq!(rows, vec![2, 4]);
    }
}
