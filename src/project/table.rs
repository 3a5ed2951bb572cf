//! Sparse constant/comment tables
//!
//! A project carries two sparse mappings from `(column, row)` to a string:
//! constant names and comments on them. The key space is bounded to 20
//! columns by 65536 rows, and splits into historical bands (see
//! [`Band`]) that entered the format at different revisions.

use std::collections::BTreeMap;
use std::ops::Range;

/// Total number of table columns.
pub const TABLE_COLS: u32 = 20;

/// Total number of table rows.
pub const TABLE_ROWS: u32 = 0x10000;

/// Columns covered by the format's oldest table section.
pub const BASE_COLS: u32 = 10;

/// Rows covered by the format's oldest table section.
pub const BASE_ROWS: u32 = 256;

/// A table coordinate.
///
/// The derived ordering is `(col, row)` lexicographic — exactly the
/// column-major scan order the band codec encodes in, so iterating a
/// [`SparseTable`] visits cells in stream order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub col: u32,
    pub row: u32,
}

impl Cell {
    /// Create a cell coordinate.
    ///
    /// Panics if the coordinate lies outside the table's key space; cells
    /// out there never exist in any file.
    pub fn new(col: u32, row: u32) -> Self {
        assert!(
            col < TABLE_COLS && row < TABLE_ROWS,
            "cell ({}, {}) outside the {}x{} table",
            col,
            row,
            TABLE_COLS,
            TABLE_ROWS
        );
        Cell { col, row }
    }
}

/// A rectangular sub-range of the table key space.
///
/// Each band was introduced at a specific format revision and is written
/// as one dense presence-flag scan. Encoder and decoder must agree on the
/// exact boundaries per band, which is why they are named constants here
/// rather than an iteration convention:
///
/// | band         | columns  | rows         | since |
/// |--------------|----------|--------------|-------|
/// | `BASE`       | [0, 10)  | [0, 256)     | v3    |
/// | `UPPER_ROWS` | [0, 10)  | [256, 65536) | v6    |
/// | `UPPER_COLS` | [10, 20) | [0, 65536)   | v8    |
/// | `FULL`       | [0, 20)  | [0, 65536)   | v10   |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Band {
    pub cols: Range<u32>,
    pub rows: Range<u32>,
}

/// Oldest band: cols [0, 10), rows [0, 256).
pub const BAND_BASE: Band = Band {
    cols: 0..BASE_COLS,
    rows: 0..BASE_ROWS,
};

/// Row extension: cols [0, 10), rows [256, 65536).
pub const BAND_UPPER_ROWS: Band = Band {
    cols: 0..BASE_COLS,
    rows: BASE_ROWS..TABLE_ROWS,
};

/// Column extension: cols [10, 20), rows [0, 65536).
pub const BAND_UPPER_COLS: Band = Band {
    cols: BASE_COLS..TABLE_COLS,
    rows: 0..TABLE_ROWS,
};

/// The full key space, used by the comment table.
pub const BAND_FULL: Band = Band {
    cols: 0..TABLE_COLS,
    rows: 0..TABLE_ROWS,
};

impl Band {
    /// All cells of this band in column-major order (outer loop over
    /// columns, inner over rows) — the order the format stores them in.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cols
            .clone()
            .flat_map(move |col| self.rows.clone().map(move |row| Cell { col, row }))
    }

    /// Whether `cell` lies inside this band.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cols.contains(&cell.col) && self.rows.contains(&cell.row)
    }

    /// Number of cells in this band.
    pub fn len(&self) -> usize {
        self.cols.len() * self.rows.len()
    }
}

/// Sparse `(column, row) → string` mapping over the bounded key space.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SparseTable {
    cells: BTreeMap<Cell, String>,
}

impl SparseTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a cell value.
    pub fn get(&self, col: u32, row: u32) -> Option<&str> {
        self.cells.get(&Cell { col, row }).map(String::as_str)
    }

    /// Set a cell value. Panics on out-of-range coordinates (see
    /// [`Cell::new`]).
    pub fn set(&mut self, col: u32, row: u32, value: impl Into<String>) {
        self.cells.insert(Cell::new(col, row), value.into());
    }

    /// Remove a cell, returning its previous value.
    pub fn remove(&mut self, col: u32, row: u32) -> Option<String> {
        self.cells.remove(&Cell { col, row })
    }

    /// Number of populated cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell is populated.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Populated cells in column-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, &str)> {
        self.cells.iter().map(|(&cell, v)| (cell, v.as_str()))
    }
}
