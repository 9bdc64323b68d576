use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Named groups of keys that can be coloured in one go. Zone names are looked
/// up before key names, so a zone shadows a key of the same name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ZoneRegistry(BTreeMap<String, Vec<String>>);

impl Default for ZoneRegistry {
    fn default() -> Self {
        Self::default_zones()
    }
}

impl ZoneRegistry {
    pub fn new(zones: BTreeMap<String, Vec<String>>) -> Self {
        Self(zones)
    }

    /// Letters, arrows, digits, function keys (`fx`) and macro keys (`mx`) of
    /// the QWERTZ layout
    pub fn default_zones() -> Self {
        let chars = |s: &str| s.chars().map(String::from).collect::<Vec<_>>();
        let numbered = |prefix: &str, n: usize| {
            (1..=n)
                .map(|i| format!("{prefix}{i}"))
                .collect::<Vec<_>>()
        };

        Self(BTreeMap::from([
            (
                "letters".to_owned(),
                chars("qwertzuiopasdfghjklyxcvbnm<,.-éàè$"),
            ),
            (
                "arrows".to_owned(),
                ["up", "down", "left", "right"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            ),
            ("digits".to_owned(), chars("1234567890")),
            ("fx".to_owned(), numbered("f", 12)),
            ("mx".to_owned(), numbered("m", 5)),
        ]))
    }

    /// Add the zones of `other`, replacing any with the same name
    pub fn merge(mut self, other: ZoneRegistry) -> Self {
        self.0.extend(other.0);
        self
    }

    /// The members of a zone, `None` if `name` is not a zone
    pub fn zone(&self, name: &str) -> Option<&[String]> {
        self.0.get(name).map(Vec::as_slice)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::ZoneRegistry;

    #[test]
    fn default_zone_members() {
        let zones = ZoneRegistry::default();
        let names: Vec<&str> = zones.names().collect();
        assert_eq!(names, vec!["arrows", "digits", "fx", "letters", "mx"]);

        assert_eq!(zones.zone("digits").unwrap().len(), 10);
        assert_eq!(zones.zone("fx").unwrap().first().unwrap(), "f1");
        assert_eq!(zones.zone("fx").unwrap().last().unwrap(), "f12");
        assert_eq!(zones.zone("mx").unwrap().len(), 5);
        assert_eq!(zones.zone("letters").unwrap().len(), 34);
        assert!(zones
            .zone("letters")
            .unwrap()
            .iter()
            .any(|k| k == "é"));
    }

    #[test]
    fn not_a_zone() {
        let zones = ZoneRegistry::default();
        assert!(zones.zone("f1").is_none());
        assert!(zones.zone("").is_none());
    }

    #[test]
    fn merge_replaces_by_name() {
        let custom = ZoneRegistry::new(BTreeMap::from([
            ("digits".to_owned(), vec!["1".to_owned()]),
            ("wasd".to_owned(), vec!["w".to_owned(), "a".to_owned()]),
        ]));
        let zones = ZoneRegistry::default().merge(custom);
        assert_eq!(zones.zone("digits").unwrap(), ["1".to_owned()]);
        assert_eq!(zones.zone("wasd").unwrap().len(), 2);
        assert!(zones.zone("arrows").is_some());
    }
}
