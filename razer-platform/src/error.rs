use std::fmt;

pub type Result<T> = std::result::Result<T, PlatformError>;

#[derive(Debug)]
pub enum PlatformError {
    Udev(String, std::io::Error),
    Read(String, std::io::Error),
    Write(String, std::io::Error),
    AttrNotFound(String),
    NoMatrixDevice,
}

impl fmt::Display for PlatformError {
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlatformError::Udev(deets, error) => write!(f, "udev {}: {}", deets, error),
            PlatformError::Read(path, error) => write!(f, "Read {}: {}", path, error),
            PlatformError::Write(path, error) => write!(f, "Write {}: {}", path, error),
            PlatformError::AttrNotFound(deets) => write!(f, "Attribute not found: {}", deets),
            PlatformError::NoMatrixDevice => write!(
                f,
                "No keyboard bound to the razerkbd driver with a lighting matrix"
            ),
        }
    }
}

impl std::error::Error for PlatformError {}
