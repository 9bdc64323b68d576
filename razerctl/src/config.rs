use std::collections::BTreeMap;
use std::path::PathBuf;

use config_traits::{StdConfig, StdConfigLoad};
use razer_matrix::error::Error;
use razer_matrix::{layouts, Colour, KeyGrid, MatrixLayout, ZoneRegistry, WHITE};
use serde::{Deserialize, Serialize};

use crate::labels::default_label_colours;

const CONFIG_FILE: &str = "razerctl.ron";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// sysfs node of the keyboard, udev is searched when unset
    pub device: Option<PathBuf>,
    /// A `GridLayout` file to use in place of the built-in QWERTZ grid
    pub layout: Option<PathBuf>,
    /// Replaces the built-in zones when set
    pub zones: Option<ZoneRegistry>,
    /// Added on top of the built-in (or replaced) zones, same names win
    pub extra_zones: ZoneRegistry,
    /// Shown on start and when no window label is found
    pub idle_colour: Colour,
    pub label_colours: BTreeMap<u32, Colour>,
    /// Use the one-shot static effect rather than a full custom frame
    pub use_static_effect: bool,
    #[serde(skip)]
    pub dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl StdConfig for Config {
    fn new() -> Self {
        Config {
            device: None,
            layout: None,
            zones: None,
            extra_zones: ZoneRegistry::new(BTreeMap::new()),
            idle_colour: WHITE,
            label_colours: default_label_colours(),
            use_static_effect: false,
            dir: None,
        }
    }

    fn file_name(&self) -> String {
        CONFIG_FILE.to_owned()
    }

    fn config_dir(&self) -> PathBuf {
        if let Some(dir) = &self.dir {
            return dir.clone();
        }
        let mut dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("/etc"));
        dir.push("razerctl");
        dir
    }
}

impl StdConfigLoad for Config {}

impl Config {
    /// Load the grid and zones this config points at. Zones are checked
    /// against the grid here, so a bad config fails before anything is sent to
    /// the keyboard.
    pub fn matrix_layout(&self) -> Result<MatrixLayout, Error> {
        let grid = match &self.layout {
            Some(path) => KeyGrid::from_file(path)?,
            None => layouts::qwertz()?,
        };
        let zones = self
            .zones
            .clone()
            .unwrap_or_default()
            .merge(self.extra_zones.clone());
        MatrixLayout::new(grid, zones)
    }
}
