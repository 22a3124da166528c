use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::utilities::string_manipulators::normalize_quest_name;

#[derive(Debug, Clone)]
pub struct QuestName {
    pub raw: String,
    pub key: String,
}

impl QuestName {
    pub fn new(raw: &str) -> Self {
        QuestName {
            raw: raw.to_string(),
            key: normalize_quest_name(raw),
        }
    }
}

impl PartialEq for QuestName {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for QuestName {}

impl PartialOrd for QuestName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QuestName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl Hash for QuestName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for QuestName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl Serialize for QuestName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // The key is derived, only the raw name goes on disk
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for QuestName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(QuestName::new(&s))
    }
}
