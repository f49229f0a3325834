use serde::Serialize;

/// Billing unit for a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Unit {
    LinearMeter,
    SquareMeter,
    Each,
}

impl Unit {
    /// Short symbol used in rendered quotes.
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::LinearMeter => "m",
            Unit::SquareMeter => "m²",
            Unit::Each => "pcs",
        }
    }
}

/// One priced category of work.
///
/// `quantity` and `unit_price` are exact; rounding happens only when a
/// quote is rendered for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    pub label: &'static str,
    pub unit: Unit,
    pub quantity: f64,
    pub unit_price: f64,
}

impl LineItem {
    /// Derived, never stored: always `quantity × unit_price`.
    pub fn line_total(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

/// An ordered, itemized price breakdown plus its grand total.
///
/// Produced fresh for every measurement record; has no identity and no
/// persistence; discarded on reset. Item order is the display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub items: Vec<LineItem>,
    pub grand_total: f64,
}
