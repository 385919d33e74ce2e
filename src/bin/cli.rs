use gala_core::{DEFAULT_DATA_PATH, JsonFileStore, ScheduleGrid, ScheduleStore};
use std::io::{self, Write};

fn non_empty(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

fn render_grid_as_text_table(grid: &ScheduleGrid) -> String {
    let headers = ["row", "time", "description"];

    let mut rows: Vec<[String; 3]> = Vec::with_capacity(grid.capacity());
    for row in 0..grid.capacity() as i32 {
        let (time, description) = match grid.get(row) {
            Ok(Some(entry)) => (
                entry.time.unwrap_or_default(),
                entry.description.unwrap_or_default(),
            ),
            _ => (String::new(), String::new()),
        };
        rows.push([row.to_string(), time, description]);
    }

    // Compute column widths
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for cells in &rows {
        for (ci, cell) in cells.iter().enumerate() {
            if cell.len() > widths[ci] {
                widths[ci] = cell.len();
            }
        }
    }

    // Build horizontal separator
    let mut sep = String::new();
    sep.push('+');
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    // Build output
    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');

    // Header
    out.push('|');
    for (i, name) in headers.iter().enumerate() {
        out.push(' ');
        out.push_str(name);
        let pad = widths[i] - name.len();
        if pad > 0 {
            out.push_str(&" ".repeat(pad));
        }
        out.push(' ');
        out.push('|');
    }
    out.push('\n');
    out.push_str(&sep);
    out.push('\n');

    // Rows
    for cells in &rows {
        out.push('|');
        for (ci, cell) in cells.iter().enumerate() {
            out.push(' ');
            out.push_str(cell);
            let pad = widths[ci].saturating_sub(cell.len());
            if pad > 0 {
                out.push_str(&" ".repeat(pad));
            }
            out.push(' ');
            out.push('|');
        }
        out.push('\n');
    }

    out.push_str(&sep);
    out.push('\n');
    out
}

fn print_help() {
    println!(
        "Commands:\n  help                             Show this help\n  show                             Show the schedule table\n  set <row> <time> | <description>\n                                   Overwrite one row; leave a side of the\n                                   '|' blank to unset that field, both blank\n                                   to empty the row\n  clear                            Reset every row\n  save [path]                      Write the table to disk\n  load [path]                      Replace the table with the saved file\n  info                             Show time text examples\n  quit|exit                        Exit\nDefault path: {DEFAULT_DATA_PATH}"
    );
}

fn print_info() {
    println!(
        "Examples\nTues 1:00 pm | Fri 3:00 pm | Sat 8:30 am\n\nValid days\nMon | Tues | Wed | Thurs | Fri | Sat | Sun\n\nValid times\n12:00 am ... 11:59 pm"
    );
}

fn main() {
    let mut grid = ScheduleGrid::new();

    println!("Gala Schedule (CLI) - type 'help' for commands\n");
    println!("{}", render_grid_as_text_table(&grid));

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "help" => {
                print_help();
            }
            "quit" | "exit" => break,
            "show" => {
                println!("{}", render_grid_as_text_table(&grid));
            }
            "set" => {
                let row_s = parts.next();
                let rest: Vec<&str> = parts.collect();
                match (row_s, !rest.is_empty()) {
                    (Some(row_s), true) => {
                        let row: i32 = match row_s.parse() {
                            Ok(v) => v,
                            Err(_) => {
                                println!("Invalid row");
                                continue;
                            }
                        };
                        let rest = rest.join(" ");
                        match rest.split_once('|') {
                            Some((time_part, desc_part)) => {
                                match grid.set(row, non_empty(time_part), non_empty(desc_part)) {
                                    Ok(_) => println!(
                                        "Row {} set.\n{}",
                                        row,
                                        render_grid_as_text_table(&grid)
                                    ),
                                    Err(e) => println!("Error: {}", e),
                                }
                            }
                            None => println!("Usage: set <row> <time> | <description>"),
                        }
                    }
                    _ => println!("Usage: set <row> <time> | <description>"),
                }
            }
            "clear" => {
                grid.clear();
                println!("{}", render_grid_as_text_table(&grid));
            }
            "save" => {
                let path = parts.next().unwrap_or(DEFAULT_DATA_PATH);
                let store = JsonFileStore::new(path);
                match store.save_grid(&grid) {
                    Ok(_) => println!("Saved to {}", store.path().display()),
                    Err(e) => println!("Error: {}", e),
                }
            }
            "load" => {
                let path = parts.next().unwrap_or(DEFAULT_DATA_PATH);
                let store = JsonFileStore::new(path);
                match store.load_grid() {
                    Ok(Some(loaded)) => {
                        grid = loaded;
                        println!("{}", render_grid_as_text_table(&grid));
                    }
                    Ok(None) => println!("No saved schedule at {}", store.path().display()),
                    Err(e) => println!("Error: {}", e),
                }
            }
            "info" => {
                print_info();
            }
            _ => {
                println!("Unknown command. Type 'help'.");
            }
        }
    }
}
