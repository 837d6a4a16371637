use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a candidate was retrieved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    OfficialSite,
    JobBoard,
    PressRelease,
    Filing,
    Other,
}

impl SourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SourceKind::OfficialSite => "official_site",
            SourceKind::JobBoard => "job_board",
            SourceKind::PressRelease => "press_release",
            SourceKind::Filing => "filing",
            SourceKind::Other => "other",
        }
    }
}

/// One unit of input from the external evidence adapter.
///
/// Already materialized: every downstream stage operates on this fixed
/// value and never re-queries the source, so a recorded candidate stream
/// replays identically. Fields are read-only after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceCandidate {
    source_url: String,
    source_kind: SourceKind,
    raw_excerpt: String,
    retrieved_at: DateTime<Utc>,
    #[serde(default)]
    published_at: Option<DateTime<Utc>>,
}

impl EvidenceCandidate {
    pub fn new(
        source_url: impl Into<String>,
        source_kind: SourceKind,
        raw_excerpt: impl Into<String>,
        retrieved_at: DateTime<Utc>,
    ) -> Self {
        Self {
            source_url: source_url.into(),
            source_kind,
            raw_excerpt: raw_excerpt.into(),
            retrieved_at,
            published_at: None,
        }
    }

    /// Attach the publication date found on the page, if any.
    pub fn with_published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = Some(published_at);
        self
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn source_kind(&self) -> SourceKind {
        self.source_kind
    }

    pub fn raw_excerpt(&self) -> &str {
        &self.raw_excerpt
    }

    pub fn retrieved_at(&self) -> DateTime<Utc> {
        self.retrieved_at
    }

    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.published_at
    }
}
