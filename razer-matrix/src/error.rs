use std::{error, fmt};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// The key identifier has no cell in the grid
    UnknownKey(String),
    /// The grid table is not a valid 6x22 table of unique keys
    MalformedGrid(String),
    ParseColour,
    ParsePreset,
    IoPath(String, std::io::Error),
    Ron(ron::Error),
    RonParse(ron::error::SpannedError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownKey(key) => write!(f, "Unknown key: {key:?}"),
            Error::MalformedGrid(detail) => write!(f, "Malformed key grid: {detail}"),
            Error::ParseColour => write!(f, "Could not parse colour"),
            Error::ParsePreset => write!(f, "Could not parse preset"),
            Error::IoPath(path, io) => write!(f, "IO Error: {path}, {io}"),
            Error::Ron(e) => write!(f, "RON Parse Error: {e}"),
            Error::RonParse(e) => write!(f, "RON Parse Error: {e}"),
        }
    }
}

impl error::Error for Error {}

impl From<ron::Error> for Error {
    fn from(e: ron::Error) -> Self {
        Self::Ron(e)
    }
}

impl From<ron::error::SpannedError> for Error {
    fn from(e: ron::error::SpannedError) -> Self {
        Self::RonParse(e)
    }
}
