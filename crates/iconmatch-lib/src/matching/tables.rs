//! Keyword tables: synonyms per keyword and keyword → icon identifier
//!
//! Both tables deserialize from flat JSON objects keyed by keyword. The
//! synonym table keeps document order because tie-breaking in the matcher
//! depends on it.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Ordered `keyword → [synonym]` table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymTable {
    entries: Vec<(String, Vec<String>)>,
    /// keyword -> position in `entries`
    positions: HashMap<String, usize>,
}

/// A synonym claimed by more than one keyword
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharedSynonym {
    pub synonym: String,
    /// Owning keywords in table order; the first one wins exact matches
    pub keywords: Vec<String>,
}

impl SynonymTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a keyword, or replace its synonyms in place if already present
    pub fn insert<I, S>(&mut self, keyword: impl Into<String>, synonyms: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keyword = keyword.into();
        let synonyms: Vec<String> = synonyms.into_iter().map(Into::into).collect();

        match self.positions.get(&keyword).copied() {
            Some(slot) => self.entries[slot].1 = synonyms,
            None => {
                self.positions.insert(keyword.clone(), self.entries.len());
                self.entries.push((keyword, synonyms));
            }
        }
    }

    /// Builder form of [`SynonymTable::insert`]
    pub fn with<I, S>(mut self, keyword: impl Into<String>, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(keyword, synonyms);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_keyword(&self, keyword: &str) -> bool {
        self.positions.contains_key(keyword)
    }

    pub fn synonyms(&self, keyword: &str) -> Option<&[String]> {
        self.positions
            .get(keyword)
            .map(|&slot| self.entries[slot].1.as_slice())
    }

    /// Keywords in table order
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(k, synonyms)| (k.as_str(), synonyms.as_slice()))
    }

    /// Synonyms (including the keyword itself) owned by more than one keyword.
    ///
    /// Comparison is on the raw strings; `normalize` equivalence is the
    /// matcher's business.
    pub fn overlapping_synonyms(&self) -> Vec<SharedSynonym> {
        let mut owners: Vec<SharedSynonym> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for (keyword, synonyms) in &self.entries {
            let candidates = std::iter::once(keyword).chain(synonyms.iter());
            for candidate in candidates {
                let slot = *index.entry(candidate.as_str()).or_insert_with(|| {
                    owners.push(SharedSynonym {
                        synonym: candidate.clone(),
                        keywords: Vec::new(),
                    });
                    owners.len() - 1
                });
                let keywords = &mut owners[slot].keywords;
                if !keywords.contains(keyword) {
                    keywords.push(keyword.clone());
                }
            }
        }

        owners.retain(|shared| shared.keywords.len() > 1);
        owners
    }
}

impl<K, S> FromIterator<(K, Vec<S>)> for SynonymTable
where
    K: Into<String>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, Vec<S>)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (keyword, synonyms) in iter {
            table.insert(keyword, synonyms);
        }
        table
    }
}

impl Serialize for SynonymTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (keyword, synonyms) in &self.entries {
            map.serialize_entry(keyword, synonyms)?;
        }
        map.end()
    }
}

struct SynonymTableVisitor;

impl<'de> Visitor<'de> for SynonymTableVisitor {
    type Value = SynonymTable;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object mapping keywords to lists of synonyms")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut table = SynonymTable::new();
        while let Some((keyword, synonyms)) = access.next_entry::<String, Vec<String>>()? {
            table.insert(keyword, synonyms);
        }
        Ok(table)
    }
}

impl<'de> Deserialize<'de> for SynonymTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SynonymTableVisitor)
    }
}

/// `keyword → external identifier`; empty identifiers count as unmapped
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconMapping {
    ids: HashMap<String, String>,
}

impl IconMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, keyword: impl Into<String>, external_id: impl Into<String>) {
        self.ids.insert(keyword.into(), external_id.into());
    }

    pub fn with(mut self, keyword: impl Into<String>, external_id: impl Into<String>) -> Self {
        self.insert(keyword, external_id);
        self
    }

    /// Non-empty identifier for `keyword`
    pub fn get(&self, keyword: &str) -> Option<&str> {
        self.ids
            .get(keyword)
            .map(String::as_str)
            .filter(|id| !id.trim().is_empty())
    }

    pub fn is_mapped(&self, keyword: &str) -> bool {
        self.get(keyword).is_some()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for IconMapping {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            ids: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    include!("tables.test.rs");
}
