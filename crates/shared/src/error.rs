use serde::Deserialize;

/// Problem body the backend attaches to failed requests. Every field is
/// optional: an absent `message` is a recognized state, not a parse failure,
/// and callers fall back to their own generic wording.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: Option<u16>,
}
