//! Manual-entry coercion — raw form text to a `MeasurementRecord`.
//!
//! Coercion never fails. Unparseable fields fall back to their defaults
//! (0 for lengths and fixture counts, the standard 4 for corners) and
//! negative entries clamp to zero, so the engine always receives a
//! well-formed record.

use serde::Deserialize;

use crate::models::measurement::{MeasurementRecord, STANDARD_CORNERS};

/// Raw text fields as submitted by the manual input form. Missing fields
/// deserialize as empty strings and coerce to their defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct ManualEntryForm {
    #[serde(default)]
    pub perimeter: String,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub corners: String,
    #[serde(default)]
    pub chandeliers: String,
    #[serde(default)]
    pub spotlights: String,
}

pub fn coerce(form: &ManualEntryForm) -> MeasurementRecord {
    MeasurementRecord {
        perimeter: parse_length(&form.perimeter),
        area: parse_length(&form.area),
        corners: parse_count_or(&form.corners, STANDARD_CORNERS),
        chandeliers: parse_count_or(&form.chandeliers, 0),
        spotlights: parse_count_or(&form.spotlights, 0),
    }
}

fn parse_length(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value.max(0.0),
        _ => 0.0,
    }
}

fn parse_count_or(raw: &str, default: u32) -> u32 {
    match raw.trim().parse::<i64>() {
        Ok(value) => u32::try_from(value.max(0)).unwrap_or(u32::MAX),
        Err(_) => default,
    }
}
