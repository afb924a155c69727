//! Form primitives shared by the per-entity form services.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Timestamp rendering used inside form fields, the shape a
/// `datetime-local` input produces.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// One editable field: a value plus the required/disabled flags the screens
/// consult. Disabled controls (the id field) keep their value visible but
/// ignore user edits; only `reset` replaces it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormControl<T> {
    value: T,
    required: bool,
    disabled: bool,
}

impl<T> FormControl<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            required: false,
            disabled: false,
        }
    }

    pub fn required(value: T) -> Self {
        Self {
            value,
            required: true,
            disabled: false,
        }
    }

    pub fn disabled(value: T) -> Self {
        Self {
            value,
            required: true,
            disabled: true,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// User-driven edit. Returns false without touching the value when the
    /// control is disabled.
    pub fn set_value(&mut self, value: T) -> bool {
        if self.disabled {
            return false;
        }
        self.value = value;
        true
    }

    /// Programmatic reinitialization; applies to disabled controls too.
    pub fn reset(&mut self, value: T) {
        self.value = value;
    }
}

/// Required-field check for text-ish controls: present and not blank.
pub fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

/// Formats a typed timestamp for a form field.
pub fn format_form_timestamp(value: Option<DateTime<Utc>>) -> Option<String> {
    value.map(|ts| ts.format(DATE_TIME_FORMAT).to_string())
}

/// Parses a form field back to a typed timestamp. Malformed input collapses
/// to `None`; validation of required fields happens separately.
pub fn parse_form_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?;
    NaiveDateTime::parse_from_str(raw, DATE_TIME_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}
