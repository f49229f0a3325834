//! Display rendering for quotes.
//!
//! Rounding is a presentation concern: meter quantities show one decimal,
//! piece counts and all monetary amounts show whole units. The underlying
//! `Quote` stays exact.

use serde::Serialize;

use crate::models::quote::{Quote, Unit};

/// One rendered row of the quote table, numbered from 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteRow {
    pub position: usize,
    pub label: String,
    pub unit: String,
    pub quantity: String,
    pub unit_price: String,
    pub line_total: String,
}

/// The read-only quote contract exposed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteView {
    pub rows: Vec<QuoteRow>,
    pub grand_total: String,
}

pub fn render_quote(quote: &Quote) -> QuoteView {
    let rows = quote
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| QuoteRow {
            position: index + 1,
            label: item.label.to_string(),
            unit: item.unit.symbol().to_string(),
            quantity: format_quantity(item.quantity, item.unit),
            unit_price: format_amount(item.unit_price),
            line_total: format_amount(item.line_total()),
        })
        .collect();

    QuoteView {
        rows,
        grand_total: format_amount(quote.grand_total),
    }
}

fn format_quantity(quantity: f64, unit: Unit) -> String {
    match unit {
        Unit::LinearMeter | Unit::SquareMeter => format!("{quantity:.1}"),
        Unit::Each => format!("{quantity:.0}"),
    }
}

fn format_amount(amount: f64) -> String {
    format!("{amount:.0} ₽")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::measurement::MeasurementRecord;
    use crate::pricing::compute_quote;

    fn rendered(perimeter: f64, area: f64, corners: u32, chandeliers: u32, spotlights: u32) -> QuoteView {
        render_quote(&compute_quote(&MeasurementRecord {
            perimeter,
            area,
            corners,
            chandeliers,
            spotlights,
        }))
    }

    #[test]
    fn test_meter_quantities_show_one_decimal() {
        let view = rendered(15.5, 20.0, 4, 0, 0);
        assert_eq!(view.rows[0].quantity, "15.5");
        assert_eq!(view.rows[1].quantity, "20.0");
    }

    #[test]
    fn test_piece_quantities_show_whole_units() {
        let view = rendered(10.0, 12.0, 4, 1, 8);
        let spotlight = view.rows.iter().find(|r| r.label == "Spotlight mount").unwrap();
        assert_eq!(spotlight.quantity, "8");
        assert_eq!(spotlight.unit, "pcs");
    }

    #[test]
    fn test_amounts_carry_currency_marker() {
        let view = rendered(15.5, 20.5, 4, 1, 8);
        assert_eq!(view.rows[0].unit_price, "280 ₽");
        assert_eq!(view.rows[0].line_total, "4340 ₽");
        assert_eq!(view.grand_total, "18690 ₽");
    }

    #[test]
    fn test_rows_numbered_from_one() {
        let view = rendered(10.0, 12.0, 6, 1, 2);
        let positions: Vec<usize> = view.rows.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_zero_quote_renders_zero_amounts() {
        let view = rendered(0.0, 0.0, 0, 0, 0);
        assert_eq!(view.rows.len(), 3);
        assert_eq!(view.rows[0].quantity, "0.0");
        assert_eq!(view.grand_total, "0 ₽");
    }

    #[test]
    fn test_fractional_line_total_rounds_for_display_only() {
        // 10.3 m of plinth at 100 → exactly 1030; 10.3 m of profile at 280
        // → 2884.0000000000005 in binary float, displayed as a whole amount.
        let view = rendered(10.3, 0.0, 4, 0, 0);
        assert_eq!(view.rows[0].line_total, "2884 ₽");
    }
}
