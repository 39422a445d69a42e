//! Two-level category taxonomy: primary categories grouping provider detailed categories.
//!
//! A taxonomy is built once from the ordered source table and never changes
//! afterwards. Hosts build their own with [`CategoryTaxonomy::build`] or share
//! the process-wide [`standard`] instance by reference.

pub mod source;
mod title_case;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::category::CategoryEntry;

pub use source::{parse_rows, SourceRow, STANDARD_SOURCE};
pub use title_case::title_case;

static STANDARD: Lazy<CategoryTaxonomy> =
    Lazy::new(|| CategoryTaxonomy::build(parse_rows(STANDARD_SOURCE)));

/// Taxonomy over the embedded provider table, built on first use.
pub fn standard() -> &'static CategoryTaxonomy {
    &STANDARD
}

#[derive(Debug, Clone)]
struct PrimaryGroup {
    name: String,
    entries: Vec<CategoryEntry>,
}

#[derive(Debug, Clone, Default)]
pub struct CategoryTaxonomy {
    groups: Vec<PrimaryGroup>,
    by_primary: HashMap<String, usize>,
    by_detailed_id: HashMap<String, (usize, usize)>,
}

/// A search result, in taxonomy order.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SearchHit<'a> {
    Primary {
        primary: &'a str,
        name: &'a str,
        details: &'a [CategoryEntry],
    },
    Detailed {
        #[serde(flatten)]
        entry: &'a CategoryEntry,
    },
}

impl SearchHit<'_> {
    pub fn primary(&self) -> &str {
        match self {
            SearchHit::Primary { primary, .. } => primary,
            SearchHit::Detailed { entry } => &entry.primary,
        }
    }
}

/// Flattened row for host-side dropdown filtering.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FlatEntry<'a> {
    Primary {
        primary: &'a str,
        name: &'a str,
        #[serde(rename = "searchText")]
        search_text: String,
    },
    Detailed {
        #[serde(flatten)]
        entry: &'a CategoryEntry,
        #[serde(rename = "searchText")]
        search_text: String,
    },
}

impl CategoryTaxonomy {
    /// Builds the taxonomy from ordered source rows.
    ///
    /// Rows missing a key are skipped. A repeated detailed key keeps its first
    /// occurrence so identifiers stay unique.
    pub fn build<I, R>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<SourceRow>,
    {
        let mut taxonomy = Self::default();
        for row in rows {
            let row = row.into();
            if row.primary_key.is_empty() || row.detailed_key.is_empty() {
                warn!(?row, "skipping category row with a missing key");
                continue;
            }
            if taxonomy.by_detailed_id.contains_key(&row.detailed_key) {
                warn!(detailed_id = %row.detailed_key, "duplicate detailed category ignored");
                continue;
            }
            taxonomy.insert(row);
        }
        debug!(
            primaries = taxonomy.groups.len(),
            detailed = taxonomy.by_detailed_id.len(),
            "category taxonomy built"
        );
        taxonomy
    }

    fn insert(&mut self, row: SourceRow) {
        let primary = title_case(&row.primary_key);
        let prefix = format!("{}_", row.primary_key);
        let detailed_name = title_case(&row.detailed_key.replacen(&prefix, "", 1));
        let entry = CategoryEntry::new(
            primary.clone(),
            row.detailed_key.clone(),
            detailed_name,
            row.description,
        );

        let group_idx = match self.by_primary.get(&primary) {
            Some(idx) => *idx,
            None => {
                self.groups.push(PrimaryGroup {
                    name: primary.clone(),
                    entries: Vec::new(),
                });
                let idx = self.groups.len() - 1;
                self.by_primary.insert(primary, idx);
                idx
            }
        };
        let group = &mut self.groups[group_idx];
        group.entries.push(entry);
        self.by_detailed_id
            .insert(row.detailed_key, (group_idx, group.entries.len() - 1));
    }

    /// Primary category names in lexicographic order.
    pub fn primary_categories(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.groups.iter().map(|group| group.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Detailed entries of `primary` in source order; empty when unknown.
    pub fn detailed_categories(&self, primary: &str) -> &[CategoryEntry] {
        self.by_primary
            .get(primary)
            .map(|idx| self.groups[*idx].entries.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_primary(&self, name: &str) -> bool {
        self.by_primary.contains_key(name)
    }

    /// Looks up a detailed category by its provider code.
    pub fn entry(&self, detailed_id: &str) -> Option<&CategoryEntry> {
        self.by_detailed_id
            .get(detailed_id)
            .map(|(group, pos)| &self.groups[*group].entries[*pos])
    }

    /// Iterates `(primary, entries)` in build order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[CategoryEntry])> + '_ {
        self.groups
            .iter()
            .map(|group| (group.name.as_str(), group.entries.as_slice()))
    }

    pub fn primary_count(&self) -> usize {
        self.groups.len()
    }

    pub fn len(&self) -> usize {
        self.by_detailed_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_detailed_id.is_empty()
    }

    /// Case-insensitive substring search over primary names, detailed names and descriptions.
    ///
    /// Results follow build order with each primary hit ahead of its detailed
    /// hits. There is no ranking; callers truncate as they see fit.
    pub fn search(&self, term: &str) -> Vec<SearchHit<'_>> {
        if term.is_empty() {
            return Vec::new();
        }
        let term = term.to_lowercase();
        let mut hits = Vec::new();
        for (primary, entries) in self.iter() {
            if primary.to_lowercase().contains(&term) {
                hits.push(SearchHit::Primary {
                    primary,
                    name: primary,
                    details: entries,
                });
            }
            hits.extend(
                entries
                    .iter()
                    .filter(|entry| entry.matches(&term))
                    .map(|entry| SearchHit::Detailed { entry }),
            );
        }
        hits
    }

    pub fn flat_entries(&self) -> Vec<FlatEntry<'_>> {
        let mut flat = Vec::with_capacity(self.groups.len() + self.len());
        for (primary, entries) in self.iter() {
            let lowered_primary = primary.to_lowercase();
            flat.push(FlatEntry::Primary {
                primary,
                name: primary,
                search_text: lowered_primary.clone(),
            });
            for entry in entries {
                let search_text = format!(
                    "{} {} {}",
                    lowered_primary,
                    entry.detailed_name.to_lowercase(),
                    entry.description.to_lowercase()
                );
                flat.push(FlatEntry::Detailed { entry, search_text });
            }
        }
        flat
    }
}
