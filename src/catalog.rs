//! Insertion-ordered catalogs of extracted declarations
//!
//! A catalog maps a declaration name to its record. Names are unique; what
//! happens on a second insert under the same name is decided by the caller's
//! [`DuplicatePolicy`], never implicitly.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::warn;

use crate::error::{ExtractionError, Result};
use crate::extractors::base::{ClassRecord, DeclarationKind, EnumRecord};

/// What to do when a name is already present in a catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// Fail with `DuplicateDeclaration` (the whole run aborts)
    #[default]
    Reject,
    /// Replace the earlier record, keeping its catalog position
    Overwrite,
    /// Discard the later record
    KeepFirst,
}

impl FromStr for DuplicatePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "reject" => Ok(DuplicatePolicy::Reject),
            "overwrite" => Ok(DuplicatePolicy::Overwrite),
            "keep-first" => Ok(DuplicatePolicy::KeepFirst),
            other => Err(format!(
                "unknown duplicate policy '{}' (expected reject, overwrite or keep-first)",
                other
            )),
        }
    }
}

/// Outcome of a successful insert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inserted {
    New,
    Replaced,
    Kept,
}

impl Inserted {
    /// Whether the inserted record is now the one in the catalog
    pub fn stored(self) -> bool {
        !matches!(self, Inserted::Kept)
    }
}

/// Records a merge actually stored, discarded duplicates excluded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeCount {
    pub classes: usize,
    pub enums: usize,
}

/// A record that can live in a catalog
pub trait CatalogRecord {
    const KIND: DeclarationKind;

    fn name(&self) -> &str;
}

impl CatalogRecord for ClassRecord {
    const KIND: DeclarationKind = DeclarationKind::Class;

    fn name(&self) -> &str {
        &self.name
    }
}

impl CatalogRecord for EnumRecord {
    const KIND: DeclarationKind = DeclarationKind::Enum;

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog<R> {
    entries: IndexMap<String, R>,
}

impl<R> Default for Catalog<R> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<R: CatalogRecord> Catalog<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its own name, resolving collisions with `policy`
    pub fn insert(&mut self, record: R, policy: DuplicatePolicy, source: &Path) -> Result<Inserted> {
        let name = record.name().to_string();
        if !self.entries.contains_key(&name) {
            self.entries.insert(name, record);
            return Ok(Inserted::New);
        }

        match policy {
            DuplicatePolicy::Reject => Err(duplicate::<R>(name, source)),
            DuplicatePolicy::Overwrite => {
                warn!(
                    "Duplicate {} `{}` in {}: replacing earlier declaration",
                    R::KIND,
                    name,
                    source.display()
                );
                // IndexMap::insert keeps the existing slot for an existing key
                self.entries.insert(name, record);
                Ok(Inserted::Replaced)
            }
            DuplicatePolicy::KeepFirst => {
                warn!(
                    "Duplicate {} `{}` in {}: keeping earlier declaration",
                    R::KIND,
                    name,
                    source.display()
                );
                Ok(Inserted::Kept)
            }
        }
    }

    /// First name in `other` that `insert` would reject, if any
    pub fn first_conflict<'a>(&self, other: &'a Catalog<R>) -> Option<&'a str> {
        other
            .entries
            .keys()
            .find(|name| self.entries.contains_key(name.as_str()))
            .map(String::as_str)
    }

    pub fn get(&self, name: &str) -> Option<&R> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.entries.values()
    }

    pub fn into_records(self) -> impl Iterator<Item = R> {
        self.entries.into_values()
    }
}

fn duplicate<R: CatalogRecord>(name: String, source: &Path) -> ExtractionError {
    ExtractionError::DuplicateDeclaration {
        name,
        kind: R::KIND,
        path: source.to_path_buf(),
    }
}

/// The class and enum catalogs of one input or one whole session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalogs {
    pub classes: Catalog<ClassRecord>,
    pub enums: Catalog<EnumRecord>,
}

impl Catalogs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge another set of catalogs into this one, all or nothing
    ///
    /// Under `Reject` every name is checked before anything is inserted, so a
    /// conflicting input leaves `self` untouched.
    pub fn merge(
        &mut self,
        other: Catalogs,
        policy: DuplicatePolicy,
        source: &Path,
    ) -> Result<MergeCount> {
        if policy == DuplicatePolicy::Reject {
            if let Some(name) = self.classes.first_conflict(&other.classes) {
                return Err(duplicate::<ClassRecord>(name.to_string(), source));
            }
            if let Some(name) = self.enums.first_conflict(&other.enums) {
                return Err(duplicate::<EnumRecord>(name.to_string(), source));
            }
        }

        let mut count = MergeCount::default();
        for record in other.classes.into_records() {
            if self.classes.insert(record, policy, source)?.stored() {
                count.classes += 1;
            }
        }
        for record in other.enums.into_records() {
            if self.enums.insert(record, policy, source)?.stored() {
                count.enums += 1;
            }
        }
        Ok(count)
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.enums.is_empty()
    }
}
