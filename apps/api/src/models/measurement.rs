use serde::Serialize;

/// Corner count of a standard rectangular room. The first four corners are
/// already covered by the profile tariff; only corners beyond this incur a
/// surcharge.
pub const STANDARD_CORNERS: u32 = 4;

/// Validated numeric description of a room — the sole input to pricing.
///
/// Producers (manual intake coercion, sketch recognition) guarantee every
/// field is non-negative. The engine trusts that and never mutates the
/// record; a new measurement always means a new record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeasurementRecord {
    /// Linear meters of room boundary.
    pub perimeter: f64,
    /// Square meters of ceiling surface.
    pub area: f64,
    /// Count of internal/external corners.
    pub corners: u32,
    /// Ceiling fixtures requiring a central mount.
    pub chandeliers: u32,
    /// Point light fixtures.
    pub spotlights: u32,
}
