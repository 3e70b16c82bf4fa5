use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataRecord {
    tags: BTreeMap<String, String>,
}

impl MetadataRecord {
    pub fn new(tags: BTreeMap<String, String>) -> Self {
        Self { tags }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for MetadataRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            tags: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum YearWidth {
    Two,
    #[default]
    Four,
}

impl YearWidth {
    pub(crate) fn chrono_format(self) -> &'static str {
        match self {
            YearWidth::Two => "%y%m%d%H%M%S",
            YearWidth::Four => "%Y%m%d%H%M%S",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamingMode {
    pub include_device: bool,
    pub year_width: YearWidth,
}

impl Default for NamingMode {
    fn default() -> Self {
        Self {
            include_device: true,
            year_width: YearWidth::Four,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DerivedName {
    pub timestamp: String,
    pub device: Option<String>,
}
