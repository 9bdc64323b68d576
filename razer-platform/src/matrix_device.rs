use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use razer_matrix::{Colour, MatrixSink, FRAME_LEN};

use crate::error::{PlatformError, Result};
use crate::{attr_bytes, attr_string, has_attr, DRIVER_NAME};

/// Present on every keyboard that has an addressable matrix
pub const MATRIX_EFFECT_STATIC: &str = "matrix_effect_static";

/// The sysfs node of one keyboard bound to `razerkbd`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixDevice {
    path: PathBuf,
}

impl MatrixDevice {
    /// Find the first keyboard bound to `razerkbd` that has a lighting matrix
    pub fn new() -> Result<Self> {
        let mut enumerator = udev::Enumerator::new().map_err(|err| {
            warn!("{}", err);
            PlatformError::Udev("enumerator failed".into(), err)
        })?;

        enumerator.match_subsystem("hid").map_err(|err| {
            warn!("{}", err);
            PlatformError::Udev("match_subsystem failed".into(), err)
        })?;

        for device in enumerator.scan_devices().map_err(|err| {
            warn!("{}", err);
            PlatformError::Udev("scan_devices failed".into(), err)
        })? {
            if device.driver().map_or(true, |d| d != DRIVER_NAME) {
                continue;
            }
            let path = device.syspath();
            if !has_attr(path, MATRIX_EFFECT_STATIC) {
                debug!("Skipping {path:?}, it has no {MATRIX_EFFECT_STATIC}");
                continue;
            }
            info!("Using keyboard at {path:?}");
            return Ok(Self {
                path: path.to_owned(),
            });
        }
        Err(PlatformError::NoMatrixDevice)
    }

    /// Use a known sysfs path, e.g `/sys/bus/hid/drivers/razerkbd/0003:1532:0203.0004`
    pub fn from_path(path: &Path) -> Result<Self> {
        if !has_attr(path, MATRIX_EFFECT_STATIC) {
            return Err(PlatformError::AttrNotFound(format!(
                "{}/{MATRIX_EFFECT_STATIC}",
                path.display()
            )));
        }
        Ok(Self {
            path: path.to_owned(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    attr_string!("device_type", path);

    attr_string!("firmware_version", path);

    attr_bytes!("matrix_effect_static", path);

    attr_bytes!("matrix_custom_frame", path);

    attr_bytes!("matrix_effect_custom", path);
}

impl MatrixSink for MatrixDevice {
    type Error = PlatformError;

    fn write_static_colour(&self, colour: Colour) -> Result<()> {
        debug!("Static colour {colour}");
        self.set_matrix_effect_static(&colour.rgb())
    }

    /// Writes the frame, then switches the keyboard to the custom effect. The
    /// switch is never attempted if the frame write failed.
    fn write_custom_frame(&self, frame: &[u8]) -> Result<()> {
        if frame.len() != FRAME_LEN {
            warn!("Custom frame is {} bytes, expected {FRAME_LEN}", frame.len());
        }
        self.set_matrix_custom_frame(frame)?;
        self.set_matrix_effect_custom(b"1")
    }
}
