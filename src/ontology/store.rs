//! Ontology store trait and the JSON-backed implementation.

use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::types::{DeviceTag, Polarity};
use crate::{PolisentError, Result};

/// Language tags whose labels are indexed; `None` is an untagged label.
pub const LABEL_LANGS: [Option<&str>; 5] = [Some("kk"), Some("kaz"), Some("ru"), Some("en"), None];

/// Read-only view of an ontology of political actors, organizations and topics.
///
/// Implementations must be cheap to query repeatedly; the matcher calls
/// [`lookup_label`](Self::lookup_label) once per word window.
pub trait OntologyStore: Send + Sync {
    /// Entity ids whose label normalizes to `normalized`.
    fn lookup_label(&self, normalized: &str) -> Vec<String>;

    /// Labels of an entity, deduplicated, in declaration order.
    fn get_labels(&self, entity_id: &str) -> Vec<String>;

    /// Declared polarity of an entity, if any.
    fn get_polarity(&self, entity_id: &str) -> Option<Polarity>;

    /// Rhetorical devices declared for an entity.
    fn get_devices(&self, _entity_id: &str) -> BTreeSet<DeviceTag> {
        BTreeSet::new()
    }
}

/// Lowercase, collapse whitespace runs to one space, trim.
pub fn normalize(s: &str) -> String {
    s.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

fn lang_allowed(lang: Option<&str>) -> bool {
    LABEL_LANGS.contains(&lang)
}

/// Last `#` or `/` segment of an IRI.
fn iri_fragment(iri: &str) -> &str {
    iri.rsplit(['#', '/']).next().unwrap_or(iri)
}

// ============================================================================
// JSON format
// ============================================================================

/// A label, either bare or with a language tag.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LabelEntry {
    Plain(String),
    Tagged {
        value: String,
        #[serde(default)]
        lang: Option<String>,
    },
}

impl LabelEntry {
    pub fn value(&self) -> &str {
        match self {
            Self::Plain(v) | Self::Tagged { value: v, .. } => v,
        }
    }

    pub fn lang(&self) -> Option<&str> {
        match self {
            Self::Plain(_) => None,
            Self::Tagged { lang, .. } => lang.as_deref(),
        }
    }
}

/// One ontology individual.
#[derive(Debug, Clone, Deserialize)]
pub struct EntityRecord {
    pub id: String,
    #[serde(default)]
    pub labels: Vec<LabelEntry>,
    #[serde(default)]
    pub polarity: Option<String>,
    #[serde(default)]
    pub devices: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct OntologyFile {
    entities: Vec<EntityRecord>,
}

// ============================================================================
// JsonOntology
// ============================================================================

/// In-memory ontology loaded from a JSON file:
///
/// ```json
/// {"entities": [{"id": "http://example.org/onto#Amanat",
///                "labels": [{"value": "Аманат", "lang": "kk"}, "Amanat"],
///                "polarity": "оң", "devices": ["уәде"]}]}
/// ```
///
/// The label index is built on first lookup and reused afterwards.
#[derive(Debug, Default)]
pub struct JsonOntology {
    entities: Vec<EntityRecord>,
    by_id: HashMap<String, usize>,
    index: OnceCell<HashMap<String, Vec<String>>>,
}

impl JsonOntology {
    pub fn new(entities: Vec<EntityRecord>) -> Self {
        let by_id = entities
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id.clone(), i))
            .collect();
        Self {
            entities,
            by_id,
            index: OnceCell::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let file: OntologyFile = serde_json::from_str(json)?;
        Ok(Self::new(file.entities))
    }

    /// Load an ontology file; a missing or unreadable file is `OntologyUnavailable`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            PolisentError::OntologyUnavailable(format!("{}: {e}", path.display()))
        })?;
        let ontology = Self::from_json(&content).map_err(|e| {
            PolisentError::OntologyUnavailable(format!("{}: {e}", path.display()))
        })?;
        info!(path = %path.display(), entities = ontology.len(), "ontology loaded");
        Ok(ontology)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    fn entity(&self, id: &str) -> Option<&EntityRecord> {
        self.by_id.get(id).map(|&i| &self.entities[i])
    }

    fn index(&self) -> &HashMap<String, Vec<String>> {
        self.index.get_or_init(|| {
            let mut index: HashMap<String, Vec<String>> = HashMap::new();
            for entity in &self.entities {
                for label in entity.labels.iter().filter(|l| lang_allowed(l.lang())) {
                    let ids = index.entry(normalize(label.value())).or_default();
                    if !ids.contains(&entity.id) {
                        ids.push(entity.id.clone());
                    }
                }
            }
            debug!(keys = index.len(), "ontology label index built");
            index
        })
    }
}

impl OntologyStore for JsonOntology {
    fn lookup_label(&self, normalized: &str) -> Vec<String> {
        self.index().get(normalized).cloned().unwrap_or_default()
    }

    fn get_labels(&self, entity_id: &str) -> Vec<String> {
        let mut labels: Vec<String> = Vec::new();
        if let Some(entity) = self.entity(entity_id) {
            for label in entity.labels.iter().filter(|l| lang_allowed(l.lang())) {
                if !labels.iter().any(|l| l == label.value()) {
                    labels.push(label.value().to_string());
                }
            }
        }
        if labels.is_empty() {
            labels.push(iri_fragment(entity_id).to_string());
        }
        labels
    }

    fn get_polarity(&self, entity_id: &str) -> Option<Polarity> {
        let raw = self.entity(entity_id)?.polarity.as_deref()?;
        match raw.parse() {
            Ok(p) => Some(p),
            Err(_) => {
                debug!(entity_id, polarity = raw, "ignoring unknown polarity");
                None
            }
        }
    }

    fn get_devices(&self, entity_id: &str) -> BTreeSet<DeviceTag> {
        let Some(entity) = self.entity(entity_id) else {
            return BTreeSet::new();
        };
        entity
            .devices
            .iter()
            .filter_map(|d| d.parse::<DeviceTag>().ok())
            .collect()
    }
}
