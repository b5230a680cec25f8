use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

/// One page of a paginated Spotify endpoint.
///
/// `next` is the absolute URL of the following page and is `None` on the
/// last page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// A playlist entry exactly as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaylistItem(pub Value);

impl PlaylistItem {
    /// The nested `track.id`, if present and non-empty.
    ///
    /// Local files and unavailable tracks come back with a null id.
    pub fn track_id(&self) -> Option<String> {
        self.0
            .get("track")
            .and_then(|track| track.get("id"))
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
    }
}

pub type FeatureRecord = Map<String, Value>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioFeaturesResponse {
    pub audio_features: Vec<Option<FeatureRecord>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl User {
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.id)
    }
}

/// Outcome of one feature batch.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub index: usize,
    pub requested: usize,
    pub returned: usize,
    pub error: Option<String>,
}

impl BatchReport {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct Enrichment<R> {
    pub records: Vec<R>,
    pub batches: Vec<BatchReport>,
}

impl<R> Enrichment<R> {
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            batches: Vec::new(),
        }
    }

    pub fn failed_batches(&self) -> impl Iterator<Item = &BatchReport> {
        self.batches.iter().filter(|b| !b.is_ok())
    }
}

#[derive(Tabled)]
pub struct BatchTableRow {
    pub batch: usize,
    pub tracks: usize,
    pub features: usize,
    pub status: String,
}

impl From<&BatchReport> for BatchTableRow {
    fn from(report: &BatchReport) -> Self {
        Self {
            batch: report.index + 1,
            tracks: report.requested,
            features: report.returned,
            status: match &report.error {
                Some(e) => format!("failed: {}", e),
                None => "ok".to_string(),
            },
        }
    }
}
