//! Access to the sysfs attributes the `razerkbd` driver exposes for a
//! keyboard's lighting matrix.

pub mod error;
pub(crate) mod macros;
pub mod matrix_device;

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use error::{PlatformError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Kernel driver the keyboards are bound to
pub const DRIVER_NAME: &str = "razerkbd";

pub fn has_attr(sys_path: &Path, attr_name: &str) -> bool {
    sys_path.join(attr_name).is_file()
}

pub fn read_attr_string(sys_path: &Path, attr_name: &str) -> Result<String> {
    let path = sys_path.join(attr_name);
    if !path.is_file() {
        return Err(PlatformError::AttrNotFound(attr_name.to_owned()));
    }
    let value = std::fs::read_to_string(&path)
        .map_err(|e| PlatformError::Read(path.to_string_lossy().to_string(), e))?;
    Ok(value.trim().to_owned())
}

/// Attributes take raw bytes and must get the whole payload in a single write
pub fn write_attr_bytes(sys_path: &Path, attr_name: &str, values: &[u8]) -> Result<()> {
    let path = sys_path.join(attr_name);
    if !path.is_file() {
        return Err(PlatformError::AttrNotFound(attr_name.to_owned()));
    }
    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(&path)
        .map_err(|e| PlatformError::Write(path.to_string_lossy().to_string(), e))?;
    file.write_all(values)
        .map_err(|e| PlatformError::Write(path.to_string_lossy().to_string(), e))
}
