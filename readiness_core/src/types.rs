//! Core types shared by the scoring, gap and report modules.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::likert::Likert;

/// Default readiness pillars, in report order.
pub const DEFAULT_PILLARS: [&str; 8] = [
    "Strategy",
    "Architecture",
    "Foundation",
    "Ethics",
    "Culture",
    "Capability",
    "Governance",
    "Performance",
];

/// Returns the default pillar names as owned strings.
pub fn default_pillars() -> Vec<String> {
    DEFAULT_PILLARS.iter().map(|p| p.to_string()).collect()
}

/// Stable question identifier.
///
/// The backend hands out both numeric and string ids, so deserialization
/// accepts either. Serialization is always a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for QuestionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for QuestionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for QuestionId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

impl<'de> Deserialize<'de> for QuestionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => Self(s),
            RawId::Number(n) => Self(n.to_string()),
        })
    }
}

/// A questionnaire item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    #[serde(default)]
    pub text: String,
    /// Pillar the question was filed under, when the backend provides it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pillar: Option<String>,
}

impl Question {
    pub fn new(id: impl Into<QuestionId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            pillar: None,
        }
    }

    pub fn with_pillar(mut self, pillar: impl Into<String>) -> Self {
        self.pillar = Some(pillar.into());
        self
    }
}

/// Unvalidated answers as they come from the client.
pub type RawResponses = IndexMap<QuestionId, i64>;

/// Validated answers keyed by question id, in the order they were given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Responses(IndexMap<QuestionId, Likert>);

impl Responses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, returning the previous one if the question was re-answered.
    pub fn insert(&mut self, id: impl Into<QuestionId>, value: Likert) -> Option<Likert> {
        self.0.insert(id.into(), value)
    }

    pub fn remove(&mut self, id: &QuestionId) -> Option<Likert> {
        self.0.shift_remove(id)
    }

    pub fn get(&self, id: &QuestionId) -> Option<Likert> {
        self.0.get(id).copied()
    }

    pub fn contains(&self, id: &QuestionId) -> bool {
        self.0.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, Likert)> {
        self.0.iter().map(|(k, v)| (k, *v))
    }

    pub fn values(&self) -> impl Iterator<Item = Likert> + '_ {
        self.0.values().copied()
    }
}

impl<K: Into<QuestionId>> FromIterator<(K, Likert)> for Responses {
    fn from_iter<I: IntoIterator<Item = (K, Likert)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Score of one pillar, 0..=100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarScore {
    pub pillar_name: String,
    pub score: u8,
    /// Answered questions that fell into this pillar.
    pub answered: usize,
    /// All questions that fell into this pillar.
    pub total: usize,
}
