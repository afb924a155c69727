//! Shared pieces of the wire transcoding boundary: timestamp encoding in
//! both directions and the success/error split every call performs.

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Response;
use shared::error::ErrorBody;
use tracing::debug;

use crate::error::ServiceError;

/// Serializes a typed timestamp to the canonical wire string: millisecond
/// precision with a `Z` suffix. Absent timestamps serialize as `null`.
pub(crate) fn encode_timestamp(value: Option<DateTime<Utc>>) -> Option<String> {
    value.map(|ts| ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Parses a wire timestamp string back to a typed timestamp. Absent and
/// malformed strings both decode to `None`; the original client was equally
/// tolerant of invalid dates.
pub(crate) fn decode_timestamp(value: Option<String>) -> Option<DateTime<Utc>> {
    value.and_then(|raw| {
        DateTime::parse_from_rfc3339(&raw)
            .ok()
            .map(|ts| ts.with_timezone(&Utc))
    })
}

/// Passes 2xx responses through and maps everything else to a typed server
/// error, preserving the problem body's optional message.
pub(crate) async fn check(response: Response) -> Result<Response, ServiceError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let text = response.text().await.unwrap_or_default();
    let body: ErrorBody = serde_json::from_str(&text).unwrap_or_default();
    debug!(%status, message = ?body.message, "request rejected by server");
    Err(ServiceError::Server { status, body })
}
