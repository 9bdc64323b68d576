use log::warn;

use crate::error::{Error, Result};
use crate::grid::{GridPosition, KeyGrid};
use crate::layouts;
use crate::zones::ZoneRegistry;

/// A key grid together with the zones defined over it. Every zone member is
/// checked against the grid on construction, so assigning a zone can never
/// fail half way through.
#[derive(Debug, Clone)]
pub struct MatrixLayout {
    grid: KeyGrid,
    zones: ZoneRegistry,
}

impl MatrixLayout {
    pub fn new(grid: KeyGrid, zones: ZoneRegistry) -> Result<Self> {
        for (name, keys) in zones.iter() {
            for key in keys {
                if !grid.contains(key) {
                    warn!("Zone {name} refers to {key:?} which is not on the {} grid", grid.name());
                    return Err(Error::UnknownKey(key.clone()));
                }
            }
            if grid.contains(name) {
                warn!("Zone {name} shadows the key of the same name");
            }
        }
        Ok(Self { grid, zones })
    }

    /// The built-in QWERTZ grid with the default zones
    pub fn qwertz() -> Result<Self> {
        Self::new(layouts::qwertz()?, ZoneRegistry::default_zones())
    }

    pub fn grid(&self) -> &KeyGrid {
        &self.grid
    }

    pub fn zones(&self) -> &ZoneRegistry {
        &self.zones
    }

    /// Resolve a zone name or key name to the cells it covers
    pub fn resolve(&self, target: &str) -> Result<Vec<GridPosition>> {
        match self.zones.zone(target) {
            Some(keys) => keys.iter().map(|k| self.grid.position_of(k)).collect(),
            None => Ok(vec![self.grid.position_of(target)?]),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::MatrixLayout;
    use crate::error::Error;
    use crate::grid::GridPosition;
    use crate::layouts::qwertz;
    use crate::zones::ZoneRegistry;

    #[test]
    fn default_zones_fit_qwertz() {
        let layout = MatrixLayout::qwertz().unwrap();
        assert_eq!(layout.grid().name(), "qwertz");
    }

    #[test]
    fn zone_with_missing_key_rejected() {
        let zones = ZoneRegistry::new(BTreeMap::from([(
            "bad".to_owned(),
            vec!["q".to_owned(), "nope".to_owned()],
        )]));
        match MatrixLayout::new(qwertz().unwrap(), zones) {
            Err(Error::UnknownKey(k)) => assert_eq!(k, "nope"),
            e => panic!("expected UnknownKey, got {e:?}"),
        }
    }

    #[test]
    fn resolve_prefers_zone() {
        // A zone named like a key wins over the key
        let zones = ZoneRegistry::new(BTreeMap::from([(
            "q".to_owned(),
            vec!["w".to_owned(), "e".to_owned()],
        )]));
        let layout = MatrixLayout::new(qwertz().unwrap(), zones).unwrap();
        assert_eq!(
            layout.resolve("q").unwrap(),
            vec![GridPosition::new(2, 3), GridPosition::new(2, 4)]
        );
        assert_eq!(layout.resolve("t").unwrap(), vec![GridPosition::new(2, 6)]);
        assert!(matches!(layout.resolve("qq"), Err(Error::UnknownKey(_))));
    }
}
