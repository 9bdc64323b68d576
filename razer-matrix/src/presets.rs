use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::colour::Colour;
use crate::error::Error;
use crate::frame::ColourFrame;
use crate::grid::GRID_COLS;
use crate::keyboard::MatrixLayout;
use crate::RAINBOW;

/// Whole-keyboard patterns that need no key names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Preset {
    /// One rainbow colour per row
    Horizontal,
    /// Rainbow colours repeating across the columns
    Vertical,
}

impl Preset {
    pub fn frame<'a>(&self, layout: &'a MatrixLayout) -> ColourFrame<'a> {
        match self {
            Preset::Horizontal => horizontal(layout),
            Preset::Vertical => vertical(layout),
        }
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "horizontal" => Ok(Preset::Horizontal),
            "vertical" => Ok(Preset::Vertical),
            _ => Err(Error::ParsePreset),
        }
    }
}

pub fn horizontal(layout: &MatrixLayout) -> ColourFrame<'_> {
    let mut frame = ColourFrame::new(Colour::default(), layout);
    for (row, colour) in RAINBOW.iter().enumerate() {
        frame.set_row(row, *colour);
    }
    frame
}

pub fn vertical(layout: &MatrixLayout) -> ColourFrame<'_> {
    let mut frame = ColourFrame::new(Colour::default(), layout);
    for col in 0..GRID_COLS {
        frame.set_column(col, RAINBOW[col % RAINBOW.len()]);
    }
    frame
}
