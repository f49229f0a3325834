//! The quote engine — a total, side-effect-free function over a
//! pre-validated measurement record. There is no error path: producers
//! guarantee the record is well-formed and non-negative.

use crate::models::measurement::MeasurementRecord;
use crate::models::quote::{LineItem, Quote};
use crate::pricing::tariffs::TARIFFS;

/// Derives the itemized quote for a room.
///
/// Walks the tariff table in order, emitting a line item for every
/// category whose quantity rule applies, then sums the exact line totals.
/// Categories that do not apply contribute nothing — equivalent to a
/// zero-priced omission.
pub fn compute_quote(record: &MeasurementRecord) -> Quote {
    let items: Vec<LineItem> = TARIFFS
        .iter()
        .filter_map(|tariff| {
            tariff.quantity_for(record).map(|quantity| LineItem {
                label: tariff.label,
                unit: tariff.unit,
                quantity,
                unit_price: tariff.rate,
            })
        })
        .collect();

    let grand_total = items.iter().map(LineItem::line_total).sum();

    Quote { items, grand_total }
}
