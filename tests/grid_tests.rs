use gala_core::{DEFAULT_CAPACITY, Entry, GridError, ScheduleGrid};

#[test]
fn new_grid_is_empty_with_default_capacity() {
    let grid = ScheduleGrid::new();
    assert_eq!(grid.capacity(), DEFAULT_CAPACITY);
    assert!(grid.entries().is_empty());
    for row in 0..DEFAULT_CAPACITY as i32 {
        assert_eq!(grid.get(row).unwrap(), None);
    }
}

#[test]
fn set_then_get_returns_the_entry() {
    let mut grid = ScheduleGrid::new();
    grid.set(3, Some("Tues 1:00 pm"), Some("Team sync")).unwrap();

    let entry = grid.get(3).unwrap().expect("row 3 populated");
    assert_eq!(
        entry,
        Entry::new(3, Some("Tues 1:00 pm".into()), Some("Team sync".into()))
    );
}

#[test]
fn set_overwrites_the_whole_slot() {
    let mut grid = ScheduleGrid::new();
    grid.set(0, Some("Mon 9:00 am"), Some("Planning")).unwrap();
    grid.set(0, None, Some("Planning moved")).unwrap();

    let entry = grid.get(0).unwrap().expect("row 0 populated");
    assert_eq!(entry.time, None);
    assert_eq!(entry.description, Some("Planning moved".to_string()));
}

#[test]
fn set_out_of_range_row_is_rejected() {
    let mut grid = ScheduleGrid::new();
    let err = grid.set(20, Some("x"), Some("y")).unwrap_err();
    assert_eq!(
        err,
        GridError::OutOfRange {
            row: 20,
            capacity: 20
        }
    );
}

#[test]
fn get_negative_row_is_rejected() {
    let grid = ScheduleGrid::new();
    let err = grid.get(-1).unwrap_err();
    assert_eq!(
        err,
        GridError::OutOfRange {
            row: -1,
            capacity: 20
        }
    );
}

#[test]
fn clear_resets_every_slot() {
    let mut grid = ScheduleGrid::with_capacity(4);
    for row in 0..4 {
        grid.set(row, Some("Wed 2:00 pm"), None).unwrap();
    }

    grid.clear();

    assert!(grid.entries().is_empty());
    for row in 0..4 {
        assert_eq!(grid.get(row).unwrap(), None);
    }
}

#[test]
fn entries_skip_empty_rows_and_ascend() {
    let mut grid = ScheduleGrid::new();
    grid.set(7, None, Some("Water plants")).unwrap();
    grid.set(2, Some("Sun 10:00 am"), Some("Brunch")).unwrap();

    let entries = grid.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].row, 2);
    assert_eq!(entries[1].row, 7);
    assert!(entries.iter().all(|e| !e.is_empty()));
}
