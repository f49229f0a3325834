//! Fixed tariff table — one descriptor per billable work category.
//!
//! Each descriptor carries its own quantity rule: `None` means the
//! category is not billed for this room. Conditional emission therefore
//! lives in the table, not in the engine, and the rules are testable as
//! data. The slice order IS the display order of the quote.

use crate::models::measurement::{MeasurementRecord, STANDARD_CORNERS};
use crate::models::quote::Unit;

pub struct Tariff {
    pub label: &'static str,
    pub unit: Unit,
    pub rate: f64,
    quantity: fn(&MeasurementRecord) -> Option<f64>,
}

impl Tariff {
    /// Billable quantity of this category for the given room, or `None`
    /// when the category does not apply.
    pub fn quantity_for(&self, record: &MeasurementRecord) -> Option<f64> {
        (self.quantity)(record)
    }
}

/// The current price list. Rates are in the base currency per unit and
/// must stay compatible with the published pricing.
///
/// Profile and micro-plinth are distinct categories that both bill per
/// linear meter of perimeter, at different rates. The first
/// `STANDARD_CORNERS` corners are covered by the profile rate.
pub const TARIFFS: &[Tariff] = &[
    Tariff {
        label: "Profile installation",
        unit: Unit::LinearMeter,
        rate: 280.0,
        quantity: |record| Some(record.perimeter),
    },
    Tariff {
        label: "Canvas installation",
        unit: Unit::SquareMeter,
        rate: 400.0,
        quantity: |record| Some(record.area),
    },
    Tariff {
        label: "Micro-plinth installation",
        unit: Unit::LinearMeter,
        rate: 100.0,
        quantity: |record| Some(record.perimeter),
    },
    Tariff {
        label: "Extra corner handling",
        unit: Unit::Each,
        rate: 450.0,
        quantity: |record| {
            (record.corners > STANDARD_CORNERS)
                .then(|| f64::from(record.corners - STANDARD_CORNERS))
        },
    },
    Tariff {
        label: "Chandelier mount",
        unit: Unit::Each,
        rate: 1000.0,
        quantity: |record| (record.chandeliers > 0).then(|| f64::from(record.chandeliers)),
    },
    Tariff {
        label: "Spotlight mount",
        unit: Unit::Each,
        rate: 450.0,
        quantity: |record| (record.spotlights > 0).then(|| f64::from(record.spotlights)),
    },
];
