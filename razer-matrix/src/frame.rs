//! The colour state of the whole matrix and its encoding for the
//! `matrix_custom_frame` attribute.
//!
//! Each row goes out as a full width run:
//!
//! ```text
//! | row | start col (0) | end col (21) | R G B x 22 |
//! ```
//!
//! Six of those back to back make a frame of [`FRAME_LEN`] bytes.

use std::iter::FusedIterator;

use crate::colour::Colour;
use crate::error::Result;
use crate::grid::{GridPosition, GRID_COLS, GRID_ROWS};
use crate::keyboard::MatrixLayout;

/// Bytes per encoded row: row index, start and end column, then RGB per column
pub const FRAME_ROW_LEN: usize = 3 + GRID_COLS * 3;
/// Bytes in a full frame
pub const FRAME_LEN: usize = GRID_ROWS * FRAME_ROW_LEN;

/// Every cell of the 6x22 matrix, including positions with no key on them.
#[derive(Debug, Clone)]
pub struct ColourFrame<'a> {
    layout: &'a MatrixLayout,
    cells: [[Colour; GRID_COLS]; GRID_ROWS],
}

impl<'a> ColourFrame<'a> {
    pub fn new(default: Colour, layout: &'a MatrixLayout) -> Self {
        Self {
            layout,
            cells: [[default; GRID_COLS]; GRID_ROWS],
        }
    }

    pub fn layout(&self) -> &'a MatrixLayout {
        self.layout
    }

    /// Colour a single key. The frame is left untouched if the key is unknown.
    pub fn set_key(&mut self, key: &str, colour: Colour) -> Result<()> {
        let pos = self.layout.grid().position_of(key)?;
        self.cells[pos.row][pos.col] = colour;
        Ok(())
    }

    /// Colour a zone if `target` names one, otherwise the key called `target`
    pub fn set(&mut self, target: &str, colour: Colour) -> Result<()> {
        for pos in self.layout.resolve(target)? {
            self.cells[pos.row][pos.col] = colour;
        }
        Ok(())
    }

    /// Apply `(colour, targets)` pairs in order, later pairs overwriting
    /// earlier ones where they overlap. Every target is resolved before any
    /// cell changes, so an unknown target leaves the frame as it was.
    pub fn apply_colouring<I, T, S>(&mut self, colouring: I) -> Result<()>
    where
        I: IntoIterator<Item = (Colour, T)>,
        T: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut resolved: Vec<(Colour, Vec<GridPosition>)> = Vec::new();
        for (colour, targets) in colouring {
            let mut positions = Vec::new();
            for target in targets {
                positions.extend(self.layout.resolve(target.as_ref())?);
            }
            resolved.push((colour, positions));
        }

        for (colour, positions) in resolved {
            for pos in positions {
                self.cells[pos.row][pos.col] = colour;
            }
        }
        Ok(())
    }

    pub fn colour_of(&self, key: &str) -> Result<Colour> {
        let pos = self.layout.grid().position_of(key)?;
        Ok(self.cells[pos.row][pos.col])
    }

    pub fn cell(&self, pos: GridPosition) -> Option<Colour> {
        self.cells.get(pos.row)?.get(pos.col).copied()
    }

    pub fn fill(&mut self, colour: Colour) {
        self.cells = [[colour; GRID_COLS]; GRID_ROWS];
    }

    /// Out of range rows are ignored
    pub fn set_row(&mut self, row: usize, colour: Colour) {
        if let Some(cells) = self.cells.get_mut(row) {
            *cells = [colour; GRID_COLS];
        }
    }

    /// Out of range columns are ignored
    pub fn set_column(&mut self, col: usize, colour: Colour) {
        if col >= GRID_COLS {
            return;
        }
        for row in self.cells.iter_mut() {
            row[col] = colour;
        }
    }

    pub fn rows(&self) -> &[[Colour; GRID_COLS]; GRID_ROWS] {
        &self.cells
    }

    /// The encoded frame. Each call starts a fresh pass over the current
    /// cells.
    pub fn frame(&self) -> FrameBytes<'_> {
        FrameBytes {
            cells: &self.cells,
            pos: 0,
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.frame().collect()
    }
}

/// Frames compare by colour only
impl PartialEq for ColourFrame<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for ColourFrame<'_> {}

impl From<&ColourFrame<'_>> for Vec<u8> {
    fn from(frame: &ColourFrame<'_>) -> Self {
        frame.to_bytes()
    }
}

/// Byte iterator over an encoded [`ColourFrame`], always [`FRAME_LEN`] long.
#[derive(Debug, Clone)]
pub struct FrameBytes<'f> {
    cells: &'f [[Colour; GRID_COLS]; GRID_ROWS],
    pos: usize,
}

impl Iterator for FrameBytes<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.pos >= FRAME_LEN {
            return None;
        }
        let row = self.pos / FRAME_ROW_LEN;
        let byte = match self.pos % FRAME_ROW_LEN {
            0 => row as u8,
            1 => 0,
            2 => (GRID_COLS - 1) as u8,
            n => {
                let n = n - 3;
                self.cells[row][n / 3].rgb()[n % 3]
            }
        };
        self.pos += 1;
        Some(byte)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = FRAME_LEN - self.pos;
        (left, Some(left))
    }
}

impl ExactSizeIterator for FrameBytes<'_> {}

impl FusedIterator for FrameBytes<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::{BLUE, GREEN, RED, WHITE};

    fn layout() -> MatrixLayout {
        MatrixLayout::qwertz().unwrap()
    }

    #[test]
    fn frame_is_always_full_length() {
        let layout = layout();
        let mut frame = ColourFrame::new(GREEN, &layout);
        assert_eq!(frame.frame().len(), FRAME_LEN);
        assert_eq!(frame.to_bytes().len(), 414);

        frame.set("letters", RED).unwrap();
        frame.set_key("esc", BLUE).unwrap();
        assert_eq!(frame.to_bytes().len(), 414);

        let mut bytes = frame.frame();
        assert!(bytes.nth(100).is_some());
        assert_eq!(bytes.len(), 414 - 101);
        assert_eq!(bytes.by_ref().count(), 414 - 101);
        assert_eq!(bytes.next(), None);
    }

    #[test]
    fn row_headers() {
        let layout = layout();
        let mut frame = ColourFrame::new(WHITE, &layout);
        frame.set("fx", RED).unwrap();
        let bytes = frame.to_bytes();
        for r in 0..GRID_ROWS {
            assert_eq!(bytes[69 * r], r as u8);
            assert_eq!(bytes[69 * r + 1], 0);
            assert_eq!(bytes[69 * r + 2], 21);
        }
    }

    #[test]
    fn reserialize_is_identical() {
        let layout = layout();
        let mut frame = ColourFrame::new(GREEN, &layout);
        frame.set("arrows", BLUE).unwrap();
        let first: Vec<u8> = frame.frame().collect();
        let second: Vec<u8> = frame.frame().collect();
        assert_eq!(first, second);

        // Reflects the current cells, not a snapshot
        frame.set_key("up", RED).unwrap();
        assert_ne!(frame.to_bytes(), first);
    }

    #[test]
    fn green_frame_with_red_f1() {
        let layout = layout();
        let mut frame = ColourFrame::new(GREEN, &layout);
        frame.set("f1", RED).unwrap();
        let bytes = frame.to_bytes();

        assert_eq!(bytes[0], 0x00);
        assert_eq!(bytes[1], 0x00);
        assert_eq!(bytes[2], 0x15);

        let f1 = layout.grid().position_of("f1").unwrap();
        for (r, row) in bytes.chunks(FRAME_ROW_LEN).enumerate() {
            for (c, rgb) in row[3..].chunks(3).enumerate() {
                if (r, c) == (f1.row, f1.col) {
                    assert_eq!(rgb, [255, 0, 0]);
                } else {
                    assert_eq!(rgb, [0, 255, 0], "cell ({r}, {c})");
                }
            }
        }
    }

    #[test]
    fn last_write_wins() {
        let layout = layout();
        let mut frame = ColourFrame::new(GREEN, &layout);
        frame.set_key("5", RED).unwrap();
        frame.set("digits", BLUE).unwrap();
        assert_eq!(frame.colour_of("5").unwrap(), BLUE);

        let mut frame = ColourFrame::new(GREEN, &layout);
        frame
            .apply_colouring([(RED, vec!["digits", "q"]), (BLUE, vec!["5"])])
            .unwrap();
        assert_eq!(frame.colour_of("5").unwrap(), BLUE);
        assert_eq!(frame.colour_of("6").unwrap(), RED);
        assert_eq!(frame.colour_of("q").unwrap(), RED);
        assert_eq!(frame.colour_of("w").unwrap(), GREEN);
    }

    #[test]
    fn zone_matches_individual_keys() {
        let layout = layout();
        let mut by_zone = ColourFrame::new(GREEN, &layout);
        by_zone.set("digits", RED).unwrap();

        let mut by_key = ColourFrame::new(GREEN, &layout);
        let mut keys = layout.zones().zone("digits").unwrap().to_vec();
        keys.reverse();
        for k in &keys {
            by_key.set_key(k, RED).unwrap();
        }
        assert_eq!(by_zone, by_key);
        assert_eq!(by_zone.to_bytes(), by_key.to_bytes());
    }

    #[test]
    fn unknown_key_leaves_frame_unchanged() {
        let layout = layout();
        let mut frame = ColourFrame::new(GREEN, &layout);
        frame.set_key("q", BLUE).unwrap();
        let before = frame.clone();

        assert!(matches!(
            frame.set_key("no-such-key", RED),
            Err(Error::UnknownKey(_))
        ));
        assert!(matches!(
            frame.set("no-such-key", RED),
            Err(Error::UnknownKey(_))
        ));
        assert!(matches!(
            frame.apply_colouring([(RED, vec!["letters"]), (BLUE, vec!["no-such-key"])]),
            Err(Error::UnknownKey(_))
        ));
        assert_eq!(frame, before);
        assert!(frame.colour_of("no-such-key").is_err());
    }

    #[test]
    fn rows_and_columns() {
        let layout = layout();
        let mut frame = ColourFrame::new(GREEN, &layout);
        frame.set_row(2, RED);
        frame.set_column(0, BLUE);
        frame.set_row(GRID_ROWS, WHITE);
        frame.set_column(GRID_COLS, WHITE);

        assert_eq!(frame.cell(GridPosition::new(2, 5)), Some(RED));
        assert_eq!(frame.cell(GridPosition::new(2, 0)), Some(BLUE));
        assert_eq!(frame.cell(GridPosition::new(3, 5)), Some(GREEN));
        assert_eq!(frame.cell(GridPosition::new(6, 0)), None);

        frame.fill(WHITE);
        assert!(frame.rows().iter().flatten().all(|c| *c == WHITE));
    }
}
