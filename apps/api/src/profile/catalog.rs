//! Profile Content Catalog — read-only content bundles keyed by personality label.
//!
//! `lookup` is total: canonical labels hit their entry, legacy labels resolve
//! through the alias table, and anything else gets the `default` bundle.
//! Duplicate labels in the source table keep last-write-wins semantics but are
//! recorded and logged instead of being overwritten silently.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::profile::classifier::PersonalityType;
use crate::profile::legacy::resolve_label;
use crate::profile::strengths::KeyStrength;

/// Reserved label of the fallback entry.
pub const DEFAULT_LABEL: &str = "default";

const EMBEDDED_CATALOG: &str = include_str!("../../data/profile_catalog.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog JSON is invalid: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog has no 'default' entry")]
    MissingDefault,

    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// ────────────────────────────────────────────────────────────────────────────
// Content model
// ────────────────────────────────────────────────────────────────────────────

/// Prose that is either a single paragraph or a summary with detail bullets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TextBlock {
    Plain { text: String },
    Structured { summary: String, details: Vec<String> },
}

impl TextBlock {
    /// Headline text regardless of shape.
    pub fn summary(&self) -> &str {
        match self {
            TextBlock::Plain { text } => text,
            TextBlock::Structured { summary, .. } => summary,
        }
    }

    fn is_complete(&self) -> bool {
        match self {
            TextBlock::Plain { text } => !text.trim().is_empty(),
            TextBlock::Structured { summary, details } => {
                !summary.trim().is_empty() && details.iter().all(|d| !d.trim().is_empty())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitledItem {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WorkEnvironment {
    Plain { text: String },
    Items { items: Vec<TitledItem> },
}

impl WorkEnvironment {
    fn is_complete(&self) -> bool {
        match self {
            WorkEnvironment::Plain { text } => !text.trim().is_empty(),
            WorkEnvironment::Items { items } => !items.is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoleTypes {
    Names { names: Vec<String> },
    Items { items: Vec<TitledItem> },
}

impl RoleTypes {
    fn is_complete(&self) -> bool {
        match self {
            RoleTypes::Names { names } => !names.is_empty(),
            RoleTypes::Items { items } => !items.is_empty(),
        }
    }
}

/// Precomposed narrative in both voices. `employer` is written with they/their/them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehavioralBlurb {
    pub job_seeker: String,
    pub employer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileContent {
    pub emoji: String,
    pub brief_summary: String,
    pub communication_style: TextBlock,
    pub decision_making_style: TextBlock,
    pub career_motivators: Vec<String>,
    pub work_style_strengths: Vec<String>,
    pub ideal_work_environment: WorkEnvironment,
    pub compatible_role_types: RoleTypes,
    pub job_seeker_key_strengths: Vec<KeyStrength>,
    pub employer_key_strengths: Vec<KeyStrength>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub behavioral_blurb: Option<BehavioralBlurb>,
}

impl ProfileContent {
    /// Every required field is present and non-empty.
    pub fn is_complete(&self) -> bool {
        let strengths_ok = |list: &[KeyStrength]| {
            !list.is_empty()
                && list
                    .iter()
                    .all(|s| !s.title.trim().is_empty() && !s.description.trim().is_empty())
        };

        !self.emoji.is_empty()
            && !self.brief_summary.trim().is_empty()
            && self.communication_style.is_complete()
            && self.decision_making_style.is_complete()
            && !self.career_motivators.is_empty()
            && !self.work_style_strengths.is_empty()
            && self.ideal_work_environment.is_complete()
            && self.compatible_role_types.is_complete()
            && strengths_ok(&self.job_seeker_key_strengths)
            && strengths_ok(&self.employer_key_strengths)
    }
}

/// One row of the serialized catalog table.
#[derive(Debug, Deserialize)]
struct CatalogEntry {
    label: String,
    content: ProfileContent,
}

// ────────────────────────────────────────────────────────────────────────────
// Catalog
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ProfileCatalog {
    /// Keyed by lowercased label.
    entries: HashMap<String, ProfileContent>,
    /// Labels in first-seen order, original casing.
    labels: Vec<String>,
    default: ProfileContent,
    duplicates: Vec<String>,
}

impl ProfileCatalog {
    /// The catalog compiled into the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Loads a replacement catalog from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Builds a catalog from a JSON array of `{ label, content }` rows.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let rows: Vec<CatalogEntry> = serde_json::from_str(json)?;

        let mut entries: HashMap<String, ProfileContent> = HashMap::with_capacity(rows.len());
        let mut labels = Vec::with_capacity(rows.len());
        let mut duplicates = Vec::new();

        for row in rows {
            let key = normalize(&row.label);
            if !row.content.is_complete() {
                warn!("Catalog entry '{}' has empty required fields", row.label);
            }
            if entries.insert(key, row.content).is_some() {
                warn!(
                    "Duplicate catalog label '{}'; later definition replaces the earlier one",
                    row.label
                );
                duplicates.push(row.label);
            } else {
                labels.push(row.label);
            }
        }

        let default = entries
            .remove(DEFAULT_LABEL)
            .ok_or(CatalogError::MissingDefault)?;
        labels.retain(|l| normalize(l) != DEFAULT_LABEL);

        let catalog = Self {
            entries,
            labels,
            default,
            duplicates,
        };

        for missing in catalog.missing_labels() {
            warn!("No catalog entry for '{missing}'; it will use the default content");
        }
        info!(
            "Profile catalog loaded: {} entries, {} duplicate label(s)",
            catalog.entries.len(),
            catalog.duplicates.len()
        );

        Ok(catalog)
    }

    /// Total lookup: exact label, then legacy alias, then the default bundle.
    pub fn lookup(&self, label: &str) -> &ProfileContent {
        self.find(label)
            .or_else(|| resolve_label(label).and_then(|t| self.find(t.label())))
            .unwrap_or(&self.default)
    }

    pub fn lookup_type(&self, personality_type: PersonalityType) -> &ProfileContent {
        self.lookup(personality_type.label())
    }

    /// True when `label` has its own entry (aliases and the default don't count).
    pub fn contains(&self, label: &str) -> bool {
        self.find(label).is_some()
    }

    pub fn default_content(&self) -> &ProfileContent {
        &self.default
    }

    /// Labels that appeared more than once in the source table.
    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }

    /// Canonical labels the classifier can emit that have no entry of their own.
    pub fn missing_labels(&self) -> Vec<PersonalityType> {
        PersonalityType::ALL
            .into_iter()
            .filter(|t| !self.contains(t.label()))
            .collect()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn find(&self, label: &str) -> Option<&ProfileContent> {
        self.entries.get(&normalize(label))
    }
}

fn normalize(label: &str) -> String {
    label.trim().to_lowercase()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn content(summary: &str) -> serde_json::Value {
        json!({
            "emoji": "🧭",
            "briefSummary": summary,
            "communicationStyle": { "kind": "plain", "text": "Direct." },
            "decisionMakingStyle": {
                "kind": "structured",
                "summary": "Data first.",
                "details": ["Gathers facts", "Decides"]
            },
            "careerMotivators": ["Growth"],
            "workStyleStrengths": ["Focus"],
            "idealWorkEnvironment": { "kind": "plain", "text": "Quiet." },
            "compatibleRoleTypes": { "kind": "names", "names": ["Analyst"] },
            "jobSeekerKeyStrengths": [{ "title": "Focus", "description": "You focus." }],
            "employerKeyStrengths": [{ "title": "Focus", "description": "They focus." }]
        })
    }

    fn catalog_json(rows: Vec<(&str, &str)>) -> String {
        let rows: Vec<_> = rows
            .into_iter()
            .map(|(label, summary)| json!({ "label": label, "content": content(summary) }))
            .collect();
        serde_json::to_string(&rows).unwrap()
    }

    #[test]
    fn test_duplicate_label_last_wins_and_is_recorded() {
        let json = catalog_json(vec![
            ("default", "Fallback"),
            ("Quality Guardian", "First"),
            ("Quality Guardian", "Second"),
        ]);
        let catalog = ProfileCatalog::from_json(&json).unwrap();
        assert_eq!(catalog.lookup("Quality Guardian").brief_summary, "Second");
        assert_eq!(catalog.duplicates(), &["Quality Guardian".to_string()]);
        assert_eq!(catalog.labels(), &["Quality Guardian".to_string()]);
    }

    #[test]
    fn test_missing_default_is_an_error() {
        let json = catalog_json(vec![("Results Dynamo", "Fast")]);
        assert!(matches!(
            ProfileCatalog::from_json(&json),
            Err(CatalogError::MissingDefault)
        ));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(
            ProfileCatalog::from_json("{ not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_unknown_label_gets_default() {
        let json = catalog_json(vec![("default", "Fallback"), ("Results Dynamo", "Fast")]);
        let catalog = ProfileCatalog::from_json(&json).unwrap();
        assert_eq!(catalog.lookup("Nonexistent").brief_summary, "Fallback");
        assert_eq!(catalog.lookup("").brief_summary, "Fallback");
        assert!(!catalog.contains("Nonexistent"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let json = catalog_json(vec![("default", "Fallback"), ("Results Dynamo", "Fast")]);
        let catalog = ProfileCatalog::from_json(&json).unwrap();
        assert_eq!(catalog.lookup("  results dynamo ").brief_summary, "Fast");
    }

    #[test]
    fn test_legacy_label_resolves_through_alias() {
        let json = catalog_json(vec![("default", "Fallback"), ("Results Dynamo", "Fast")]);
        let catalog = ProfileCatalog::from_json(&json).unwrap();
        assert_eq!(catalog.lookup("The Rocket Launcher").brief_summary, "Fast");
    }

    #[test]
    fn test_missing_labels_reported() {
        let json = catalog_json(vec![("default", "Fallback"), ("Results Dynamo", "Fast")]);
        let catalog = ProfileCatalog::from_json(&json).unwrap();
        let missing = catalog.missing_labels();
        assert!(!missing.contains(&PersonalityType::ResultsDynamo));
        assert!(missing.contains(&PersonalityType::BalancedProfessional));
        // Missing labels still resolve to the default bundle.
        assert_eq!(
            catalog
                .lookup_type(PersonalityType::BalancedProfessional)
                .brief_summary,
            "Fallback"
        );
    }

    #[test]
    fn test_union_fields_roundtrip_with_kind_tag() {
        let block = TextBlock::Structured {
            summary: "Listens first".to_string(),
            details: vec!["Asks questions".to_string()],
        };
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(value["kind"], "structured");
        assert_eq!(block.summary(), "Listens first");

        let env: WorkEnvironment =
            serde_json::from_value(json!({ "kind": "items", "items": [] })).unwrap();
        assert!(!env.is_complete());
    }

    #[test]
    fn test_from_path_reports_io_error() {
        let err = ProfileCatalog::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    // ── Embedded table ──────────────────────────────────────────────────────

    #[test]
    fn test_embedded_catalog_covers_every_classifier_label() {
        let catalog = ProfileCatalog::embedded().unwrap();
        assert!(
            catalog.missing_labels().is_empty(),
            "Missing: {:?}",
            catalog.missing_labels()
        );
    }

    #[test]
    fn test_embedded_entries_are_complete() {
        let catalog = ProfileCatalog::embedded().unwrap();
        assert!(catalog.default_content().is_complete());
        for t in PersonalityType::ALL {
            let content = catalog.lookup_type(t);
            assert!(content.is_complete(), "{t} has empty fields");
            assert!(content.behavioral_blurb.is_some(), "{t} has no blurb");
        }
    }

    #[test]
    fn test_embedded_catalog_flags_quality_guardian_duplicate() {
        let catalog = ProfileCatalog::embedded().unwrap();
        assert_eq!(catalog.duplicates(), &["Quality Guardian".to_string()]);
    }
}

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;
    use crate::profile::classifier::classify;
    use crate::profile::disc::DiscScore;

    proptest! {
        #[test]
        fn any_label_resolves_to_complete_content(label in "\\PC{0,40}") {
            let catalog = ProfileCatalog::embedded().unwrap();
            prop_assert!(catalog.lookup(&label).is_complete());
        }

        #[test]
        fn classified_labels_are_always_in_catalog(
            r in 0.0f64..=100.0,
            y in 0.0f64..=100.0,
            g in 0.0f64..=100.0,
            b in 0.0f64..=100.0,
        ) {
            let catalog = ProfileCatalog::embedded().unwrap();
            let label = classify(&DiscScore::new(r, y, g, b)).label();
            prop_assert!(catalog.contains(label));
        }
    }
}
