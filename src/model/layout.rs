// src/model/layout.rs
//
// Fixed 18-column periodic table: periods 1-7, a spacer row, then the
// lanthanide and actinide rows.

pub const COLUMNS: usize = 18;
pub const ROWS: usize = 10;

/// Row index of the spacer between the main table and the f-block rows.
pub const SPACER_ROW: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    Empty,
    Element(u32),
    /// `*` placeholder pointing at the lanthanide row.
    LanthanideMarker,
    /// `**` placeholder pointing at the actinide row.
    ActinideMarker,
}

impl GridCell {
    pub fn marker_label(&self) -> Option<&'static str> {
        match self {
            GridCell::LanthanideMarker => Some("*"),
            GridCell::ActinideMarker => Some("**"),
            _ => None,
        }
    }
}

pub type Layout = [[GridCell; COLUMNS]; ROWS];

/// Builds the table layout.
pub fn layout() -> Layout {
    let mut grid = [[GridCell::Empty; COLUMNS]; ROWS];

    // Period 1
    grid[0][0] = GridCell::Element(1);
    grid[0][17] = GridCell::Element(2);

    // Periods 2-3: s-block on the left, p-block on the right
    for (row, first) in [(1usize, 3u32), (2, 11)] {
        grid[row][0] = GridCell::Element(first);
        grid[row][1] = GridCell::Element(first + 1);
        for col in 12..COLUMNS {
            grid[row][col] = GridCell::Element(first + 2 + (col as u32 - 12));
        }
    }

    // Periods 4-5 are fully populated
    for (row, first) in [(3usize, 19u32), (4, 37)] {
        for col in 0..COLUMNS {
            grid[row][col] = GridCell::Element(first + col as u32);
        }
    }

    // Periods 6-7 with the f-block pulled out
    for (row, first, resume, marker) in [
        (5usize, 55u32, 72u32, GridCell::LanthanideMarker),
        (6, 87, 104, GridCell::ActinideMarker),
    ] {
        grid[row][0] = GridCell::Element(first);
        grid[row][1] = GridCell::Element(first + 1);
        grid[row][2] = marker;
        for col in 3..COLUMNS {
            grid[row][col] = GridCell::Element(resume + (col as u32 - 3));
        }
    }

    // f-block rows
    for (row, first, marker) in [
        (8usize, 57u32, GridCell::LanthanideMarker),
        (9, 89, GridCell::ActinideMarker),
    ] {
        grid[row][2] = marker;
        for col in 3..COLUMNS {
            grid[row][col] = GridCell::Element(first + (col as u32 - 3));
        }
    }

    grid
}

/// Row/column of an atomic number inside [`layout`].
pub fn position_of(atomic_number: u32) -> Option<(usize, usize)> {
    let grid = layout();
    for (r, row) in grid.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            if *cell == GridCell::Element(atomic_number) {
                return Some((r, c));
            }
        }
    }
    None
}

/// Label shown to the left of a row ("1".."7", "6*", "7*", or nothing).
pub fn row_label(row: usize) -> Option<String> {
    match row {
        0..=6 => Some((row + 1).to_string()),
        8 => Some("6*".to_string()),
        9 => Some("7*".to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_element_appears_once() {
        let grid = layout();
        let mut seen = vec![0u32; 119];
        for row in grid.iter() {
            for cell in row.iter() {
                if let GridCell::Element(n) = cell {
                    seen[*n as usize] += 1;
                }
            }
        }
        assert_eq!(seen[0], 0);
        for n in 1..=118 {
            assert_eq!(seen[n], 1, "element {} placed {} times", n, seen[n]);
        }
    }

    #[test]
    fn test_known_positions() {
        assert_eq!(position_of(1), Some((0, 0)));
        assert_eq!(position_of(2), Some((0, 17)));
        assert_eq!(position_of(5), Some((1, 12)));
        assert_eq!(position_of(18), Some((2, 17)));
        assert_eq!(position_of(72), Some((5, 3)));
        assert_eq!(position_of(57), Some((8, 3)));
        assert_eq!(position_of(71), Some((8, 17)));
        assert_eq!(position_of(103), Some((9, 17)));
        assert_eq!(position_of(118), Some((6, 17)));
        assert_eq!(position_of(119), None);
    }

    #[test]
    fn test_markers_and_spacer() {
        let grid = layout();
        assert_eq!(grid[5][2], GridCell::LanthanideMarker);
        assert_eq!(grid[8][2], GridCell::LanthanideMarker);
        assert_eq!(grid[6][2], GridCell::ActinideMarker);
        assert_eq!(grid[9][2].marker_label(), Some("**"));
        assert!(grid[SPACER_ROW].iter().all(|c| *c == GridCell::Empty));
        assert_eq!(row_label(SPACER_ROW), None);
        assert_eq!(row_label(8).as_deref(), Some("6*"));
    }
}
