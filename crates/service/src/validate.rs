//! Field-level validation run before any storage call.
//!
//! Checks collect every violation instead of stopping at the first, so a
//! 400 response can name all offending fields at once.

use serde::Serialize;
use std::fmt;

/// A single field-level violation. `field` uses the wire name (camelCase).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}

impl Violation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Implemented by draft payloads; an empty result means the draft may be
/// handed to storage.
pub trait Validate {
    fn validate(&self) -> Vec<Violation>;
}

pub fn require_non_blank(out: &mut Vec<Violation>, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        out.push(Violation::new(field, "must not be blank"));
    }
}

/// Length check in chars; blank values are skipped so they are not reported
/// twice.
pub fn require_len(out: &mut Vec<Violation>, field: &'static str, value: &str, min: usize, max: usize) {
    if value.trim().is_empty() {
        return;
    }
    let len = value.chars().count();
    if len < min || len > max {
        out.push(Violation::new(field, format!("length must be between {} and {}", min, max)));
    }
}

pub fn require_email(out: &mut Vec<Violation>, field: &'static str, value: &str) {
    if !value.trim().is_empty() && !value.contains('@') {
        out.push(Violation::new(field, "must be a valid email address"));
    }
}

pub fn require_url(out: &mut Vec<Violation>, field: &'static str, value: &str) {
    if !value.trim().is_empty() && url::Url::parse(value).is_err() {
        out.push(Violation::new(field, "must be a valid URL"));
    }
}
