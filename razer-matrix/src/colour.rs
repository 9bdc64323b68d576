use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// An RGB triple as the keyboard consumes it, one byte per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub struct Colour(pub u8, pub u8, pub u8);

impl Colour {
    /// The channels in wire order
    pub const fn rgb(&self) -> [u8; 3] {
        [self.0, self.1, self.2]
    }
}

impl From<[u8; 3]> for Colour {
    fn from(c: [u8; 3]) -> Self {
        Colour(c[0], c[1], c[2])
    }
}

impl From<Colour> for [u8; 3] {
    fn from(c: Colour) -> Self {
        c.rgb()
    }
}

/// Parses `rrggbb`, with or without a leading `#`
impl FromStr for Colour {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::ParseColour);
        }
        let r = u8::from_str_radix(&s[0..2], 16).or(Err(Error::ParseColour))?;
        let g = u8::from_str_radix(&s[2..4], 16).or(Err(Error::ParseColour))?;
        let b = u8::from_str_radix(&s[4..6], 16).or(Err(Error::ParseColour))?;
        Ok(Colour(r, g, b))
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}
