//! Addressing of keys on the fixed 6x22 matrix exposed by the keyboard.

use std::collections::HashMap;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Rows in the hardware matrix
pub const GRID_ROWS: usize = 6;
/// Columns in the hardware matrix
pub const GRID_COLS: usize = 22;

/// A static grid table as written in source. `None` marks a position with no
/// key on it.
pub type GridTable = [[Option<&'static str>; GRID_COLS]; GRID_ROWS];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPosition {
    pub row: usize,
    pub col: usize,
}

impl GridPosition {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// The editable form of a grid, as stored in a layout file.
///
/// ```ron
/// GridLayout(
///     name: "qwertz",
///     rows: [
///         [None, Some("esc"), None, Some("f1"), ...],
///         ...
///     ],
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GridLayout {
    pub name: String,
    pub rows: Vec<Vec<Option<String>>>,
}

impl GridLayout {
    pub fn from_table(name: &str, table: &GridTable) -> Self {
        Self {
            name: name.to_owned(),
            rows: table
                .iter()
                .map(|row| row.iter().map(|k| k.map(str::to_owned)).collect())
                .collect(),
        }
    }
}

/// Lookup from key identifier to its fixed position in the matrix. Built once
/// and never mutated.
#[derive(Debug, Clone)]
pub struct KeyGrid {
    name: String,
    /// Row-major, `GRID_ROWS * GRID_COLS` long
    cells: Vec<Option<String>>,
    positions: HashMap<String, GridPosition>,
}

impl KeyGrid {
    /// Scan every cell of the layout and index the populated ones. The layout
    /// must be exactly 6x22 and no key may appear twice.
    pub fn new(layout: GridLayout) -> Result<Self> {
        if layout.rows.len() != GRID_ROWS {
            return Err(Error::MalformedGrid(format!(
                "{}: expected {GRID_ROWS} rows, found {}",
                layout.name,
                layout.rows.len()
            )));
        }

        let mut cells = Vec::with_capacity(GRID_ROWS * GRID_COLS);
        let mut positions = HashMap::new();
        for (row, keys) in layout.rows.into_iter().enumerate() {
            if keys.len() != GRID_COLS {
                return Err(Error::MalformedGrid(format!(
                    "{}: row {row} has {} columns, expected {GRID_COLS}",
                    layout.name,
                    keys.len()
                )));
            }
            for (col, key) in keys.into_iter().enumerate() {
                if let Some(key) = &key {
                    if key.is_empty() {
                        return Err(Error::MalformedGrid(format!(
                            "{}: empty key name at ({row}, {col})",
                            layout.name
                        )));
                    }
                    let pos = GridPosition::new(row, col);
                    if let Some(prev) = positions.insert(key.clone(), pos) {
                        return Err(Error::MalformedGrid(format!(
                            "{}: key {key:?} is at both ({}, {}) and ({row}, {col})",
                            layout.name, prev.row, prev.col
                        )));
                    }
                }
                cells.push(key);
            }
        }
        debug!("Key grid {} has {} keys", layout.name, positions.len());

        Ok(Self {
            name: layout.name,
            cells,
            positions,
        })
    }

    pub fn from_table(name: &str, table: &GridTable) -> Result<Self> {
        Self::new(GridLayout::from_table(name, table))
    }

    /// Read a `GridLayout` in RON format
    pub fn from_file(path: &Path) -> Result<Self> {
        let buf = std::fs::read_to_string(path)
            .map_err(|e| Error::IoPath(path.to_string_lossy().to_string(), e))?;
        if buf.is_empty() {
            return Err(Error::IoPath(
                path.to_string_lossy().to_string(),
                std::io::ErrorKind::InvalidData.into(),
            ));
        }
        Self::new(ron::from_str::<GridLayout>(&buf)?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position_of(&self, key: &str) -> Result<GridPosition> {
        self.positions
            .get(key)
            .copied()
            .ok_or_else(|| Error::UnknownKey(key.to_owned()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    /// The key at a position, `None` for empty or out of range positions
    pub fn key_at(&self, pos: GridPosition) -> Option<&str> {
        if pos.row >= GRID_ROWS || pos.col >= GRID_COLS {
            return None;
        }
        self.cells[pos.row * GRID_COLS + pos.col].as_deref()
    }

    /// All keys, row by row
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().filter_map(|k| k.as_deref())
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl TryFrom<GridLayout> for KeyGrid {
    type Error = Error;

    fn try_from(layout: GridLayout) -> Result<Self> {
        Self::new(layout)
    }
}
