//! Documentation records produced by the extractor

use std::fmt;
use std::hash::{Hash, Hasher};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use super::member_id::{MemberId, MemberKind};

/// Descriptions keyed by parameter (or type parameter) name, in document order.
/// The first description for a name wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamedDocs {
    entries: Vec<(String, String)>,
}

impl NamedDocs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a description unless the name is already present.
    /// Returns whether the entry was added.
    pub fn insert_first(&mut self, name: impl Into<String>, description: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.entries.push((name, description.into()));
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Written as a JSON object, keys in insertion order
impl Serialize for NamedDocs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// One documented type or member.
///
/// Two records are equal when they have the same kind, owning type and member
/// name; the documentation text is not compared.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentedMember {
    pub kind: MemberKind,
    pub owning_type: String,
    pub member_name: String,
    /// Rewritten summary joined onto one line
    pub summary: String,
    /// Raw text of the remarks element, trimmed, markup not rewritten
    pub remarks: String,
    pub parameters: NamedDocs,
    pub type_parameters: NamedDocs,
    /// Raw text of the returns element, trimmed, markup not rewritten
    pub returns: String,
    /// Rewritten example with block indentation removed, empty when absent
    pub example: String,
}

impl DocumentedMember {
    /// An empty record for the given identity
    pub fn new(id: MemberId) -> Self {
        Self {
            kind: id.kind,
            owning_type: id.owning_type,
            member_name: id.member_name,
            summary: String::new(),
            remarks: String::new(),
            parameters: NamedDocs::new(),
            type_parameters: NamedDocs::new(),
            returns: String::new(),
            example: String::new(),
        }
    }
}

impl PartialEq for DocumentedMember {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.owning_type == other.owning_type
            && self.member_name == other.member_name
    }
}

impl Eq for DocumentedMember {}

impl Hash for DocumentedMember {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.owning_type.hash(state);
        self.member_name.hash(state);
    }
}

impl fmt::Display for DocumentedMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}.{}", self.kind, self.owning_type, self.member_name)
    }
}
