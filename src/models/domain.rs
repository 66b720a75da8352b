use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::vocab::{AgeGroup, Gender, Interest, Situation, StateInLife};

/// Key of the universal entry that leads every recommendation list
pub const UNIVERSAL_KEY: &str = "mass";

/// Key of the new-parishioner entry, shown only when the visitor said
/// they are new to the parish
pub const WELCOME_KEY: &str = "welcome-committee";

/// Entries merged in when a parent (or a visitor asking for children's
/// ministries) matches nothing
pub const FAMILY_FALLBACK_KEYS: [&str; 5] = [
    "st-edward-school",
    "prep-kids",
    "moms-group",
    "meal-train-provide",
    "totus-tuus-kids",
];

/// Entries guaranteed to an elementary-age visitor with thin results
pub const ELEMENTARY_CORE_KEYS: [&str; 3] = ["st-edward-school", "prep-kids", UNIVERSAL_KEY];

/// Added to the elementary guarantees when interests include fellowship
pub const ELEMENTARY_SCOUTING_KEY: &str = "cub-scouts";

/// A ministry as stored in the catalog
///
/// Empty tag lists mean the ministry is unconstrained on that criterion,
/// never that it matches nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinistryRecord {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub details: String,
    #[serde(rename = "age", alias = "age_groups", default)]
    pub age_groups: Vec<AgeGroup>,
    #[serde(rename = "gender", alias = "genders", default)]
    pub genders: Vec<Gender>,
    #[serde(rename = "state", alias = "states", default)]
    pub states: Vec<StateInLife>,
    #[serde(rename = "interest", alias = "interests", default)]
    pub interests: Vec<Interest>,
    #[serde(rename = "situation", alias = "situations", default)]
    pub situations: Vec<Situation>,
    // Rows written before the flag existed carry no value and are live
    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

// A blank record is live, same as a parsed row with no active flag
impl Default for MinistryRecord {
    fn default() -> Self {
        Self {
            key: String::new(),
            name: String::new(),
            description: String::new(),
            details: String::new(),
            age_groups: Vec::new(),
            genders: Vec::new(),
            states: Vec::new(),
            interests: Vec::new(),
            situations: Vec::new(),
            active: true,
        }
    }
}

impl MinistryRecord {
    /// The value duplicates are collapsed by: the key, or the name for
    /// entries without one
    pub fn identity(&self) -> &str {
        if self.key.is_empty() {
            &self.name
        } else {
            &self.key
        }
    }

    /// True for the synthetic guidance entries the engine fabricates
    pub fn is_placeholder(&self) -> bool {
        self.key.starts_with("__")
    }

    /// Shown when the catalog could not be loaded at all
    pub fn unable_to_load() -> Self {
        Self::placeholder(
            "__unable-to-load",
            "Ministries Temporarily Unavailable",
            "We couldn't load ministry information right now.",
            "Please try again in a few minutes, or contact the parish office at \
             (615) 833-5520 for personal recommendations.",
        )
    }

    /// Shown when the visitor finished the quiz without picking any interests
    pub fn choose_interests() -> Self {
        Self::placeholder(
            "__choose-interests",
            "Please Select Your Interests",
            "Go back and choose at least one interest so we can find the right \
             ministries for you.",
            "Pick as many as you like, or choose \"Show me everything!\" to browse \
             all our ministries.",
        )
    }

    /// Shown when nothing matched and no fallback applied
    pub fn lets_connect() -> Self {
        Self::placeholder(
            "__lets-connect",
            "Let's Connect You!",
            "We have many opportunities that might interest you.",
            "Please contact the parish office at (615) 833-5520 for personalized \
             recommendations, or visit <a href=\"https://stedward.org\" \
             target=\"_blank\">stedward.org</a> to explore all our ministries.",
        )
    }

    fn placeholder(key: &str, name: &str, description: &str, details: &str) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            details: details.to_string(),
            age_groups: vec![],
            genders: vec![],
            states: vec![],
            interests: vec![],
            situations: vec![],
            active: true,
        }
    }
}

/// The full ministry catalog, in the order entries appeared in the source
/// document
///
/// Display order is editorial: the parish staff order the catalog the way
/// they want it read, so insertion order is kept through parsing, lookups
/// and iteration.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<MinistryRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    /// Insert a record, replacing any existing record with the same key
    /// in place so its position is kept
    pub fn insert(&mut self, record: MinistryRecord) {
        if !record.key.is_empty() {
            if let Some(existing) = self.records.iter_mut().find(|r| r.key == record.key) {
                *existing = record;
                return;
            }
        }
        self.records.push(record);
    }

    pub fn get(&self, key: &str) -> Option<&MinistryRecord> {
        self.records.iter().find(|r| r.key == key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MinistryRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a MinistryRecord;
    type IntoIter = std::slice::Iter<'a, MinistryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<MinistryRecord> for Catalog {
    fn from_iter<I: IntoIterator<Item = MinistryRecord>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for record in iter {
            catalog.insert(record);
        }
        catalog
    }
}

impl Extend<MinistryRecord> for Catalog {
    fn extend<I: IntoIterator<Item = MinistryRecord>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.records.len()))?;
        for record in &self.records {
            map.serialize_entry(&record.key, record)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = Catalog;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of ministry key to ministry record")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Catalog, A::Error> {
                let mut catalog = Catalog::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, mut record)) =
                    access.next_entry::<String, MinistryRecord>()?
                {
                    record.key = key;
                    catalog.insert(record);
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}
