use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::search::filter::{Country, Stage};
use crate::search::industry::Industry;
use crate::search::range::RangeBucket;

/// Firm identifier as it appears in the catalog: either a JSON number or a string.
///
/// Equality and hashing go through the textual form, so `1` and `"1"` name the same firm.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FirmId {
    Number(i64),
    Text(String),
}

impl FirmId {
    /// Textual key used for equality and as the notes map key.
    pub fn key(&self) -> Cow<'_, str> {
        match self {
            FirmId::Number(n) => Cow::Owned(n.to_string()),
            FirmId::Text(s) => Cow::Borrowed(s.as_str()),
        }
    }
}

impl PartialEq for FirmId {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for FirmId {}

impl Hash for FirmId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for FirmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

/// Path segments stay text; `"1"` still equals `Number(1)` through [`FirmId::key`].
impl From<&str> for FirmId {
    fn from(raw: &str) -> Self {
        FirmId::Text(raw.to_string())
    }
}

impl From<i64> for FirmId {
    fn from(n: i64) -> Self {
        FirmId::Number(n)
    }
}

/// A venture-capital firm from the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Firm {
    pub id: FirmId,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub verticals: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investment_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notable_investments: Option<Vec<String>>,
    /// Catalog fields this crate does not interpret, kept so snapshots stay complete.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Firm {
    pub fn country(&self) -> Country {
        Country::of_location(self.location.as_deref())
    }

    pub fn range_bucket(&self) -> RangeBucket {
        crate::search::range::classify(self.investment_range.as_deref())
    }
}

/// Outcome of the most recent search
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case", tag = "state", content = "message")]
pub enum SearchStatus {
    Idle,
    Loading,
    Ready,
    NoResults(String),
    Failed(String),
}

impl SearchStatus {
    pub fn message(&self) -> Option<&str> {
        match self {
            SearchStatus::NoResults(m) | SearchStatus::Failed(m) => Some(m),
            _ => None,
        }
    }
}

/// Count plus active-filter description shown above the result list
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResultsSummary {
    pub count: usize,
    pub industry: String,
    pub stages: Vec<String>,
    pub countries: Vec<String>,
    pub ranges: Vec<String>,
    pub has_active_filters: bool,
}

/// Search request
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub industry: String,
    #[serde(default)]
    pub free_text: String,
}

/// Snapshot of what the result page shows
#[derive(Debug, Clone, Serialize)]
pub struct ResultsView {
    pub status: SearchStatus,
    pub results: Vec<Firm>,
    pub summary: ResultsSummary,
}

/// Filter dimension addressed by a toggle request
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FilterDimension {
    Stage,
    Country,
    Range,
}

/// Toggle-filter request
#[derive(Debug, Clone, Deserialize)]
pub struct FilterToggleRequest {
    pub dimension: FilterDimension,
    pub value: String,
}

/// Note update request
#[derive(Debug, Clone, Deserialize)]
pub struct NoteRequest {
    pub text: String,
}

/// A firm's note; `editable` is true while the firm is shortlisted
#[derive(Debug, Clone, Serialize)]
pub struct NoteResponse {
    pub id: String,
    pub text: String,
    pub editable: bool,
}

/// Details shown when a firm is opened
#[derive(Debug, Clone, Serialize)]
pub struct FirmDetail {
    pub firm: Firm,
    pub favorited: bool,
    pub note: Option<String>,
}

/// Autosuggest query string
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestParams {
    #[serde(default)]
    pub q: String,
    /// Defaults to `Other`, the only mode with suggestions
    pub industry: Option<String>,
}

/// Favorite toggle response; `applied` is false when the toggle was suppressed
#[derive(Debug, Clone, Serialize)]
pub struct FavoriteResponse {
    pub id: String,
    pub favorited: bool,
    pub applied: bool,
}

/// Login stub state, used for both request and response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginState {
    pub logged_in: bool,
}

/// Fixed option lists for the filter sidebar and industry picker
#[derive(Debug, Clone, Serialize)]
pub struct OptionsResponse {
    pub industries: Vec<&'static str>,
    pub stages: Vec<&'static str>,
    pub countries: Vec<&'static str>,
    pub ranges: Vec<&'static str>,
}

impl OptionsResponse {
    pub fn all() -> Self {
        Self {
            industries: Industry::ALL.iter().map(|i| i.label()).collect(),
            stages: Stage::ALL.iter().map(|s| s.label()).collect(),
            countries: Country::ALL.iter().map(|c| c.label()).collect(),
            ranges: RangeBucket::ALL.iter().map(|r| r.label()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_firm_id_number_and_text_are_equal() {
        assert_eq!(FirmId::Number(7), FirmId::Text("7".to_string()));
        assert_eq!(FirmId::from("7"), FirmId::Number(7));
        assert_eq!(FirmId::from("sequoia"), FirmId::Text("sequoia".to_string()));
    }

    #[test]
    fn test_firm_id_from_str_keeps_leading_zeros() {
        assert_eq!(FirmId::from("007"), FirmId::Text("007".to_string()));
        assert_ne!(FirmId::from("007"), FirmId::Number(7));
        assert_ne!(FirmId::from("+7"), FirmId::Number(7));
    }

    #[test]
    fn test_firm_missing_and_null_verticals_are_empty() {
        let firm: Firm = serde_json::from_str(r#"{"id": 1, "name": "A"}"#).unwrap();
        assert!(firm.verticals.is_empty());
        let firm: Firm = serde_json::from_str(r#"{"id": 1, "verticals": null}"#).unwrap();
        assert!(firm.verticals.is_empty());
    }

    #[test]
    fn test_firm_keeps_unknown_fields() {
        let raw = r#"{"id": "x", "name": "A", "founded": 1999}"#;
        let firm: Firm = serde_json::from_str(raw).unwrap();
        let back = serde_json::to_value(&firm).unwrap();
        assert_eq!(back["founded"], 1999);
        assert_eq!(back["id"], "x");
    }

    #[test]
    fn test_search_status_serializes_with_message() {
        let json = serde_json::to_value(SearchStatus::Failed("boom".to_string())).unwrap();
        assert_eq!(json["state"], "failed");
        assert_eq!(json["message"], "boom");
    }
}
