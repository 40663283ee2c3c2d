use num_format::{Locale, ToFormattedString};

use crate::models::day::Currency;
use crate::models::trip::Trip;

/// Total spend across all days, split by currency.
///
/// The secondary (yen) subtotal is converted into the primary currency at
/// the fixed rate, so the grand total is always a ruble figure. The display
/// string keeps the full breakdown whenever any yen spending exists, so the
/// conversion is auditable from the string alone.
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingSummary {
    pub rub_total: u64,
    pub jpy_total: u64,
    /// `round(jpy_total × rate)`.
    pub converted_rub: u64,
    pub grand_total: u64,
    pub rate: f64,
}

impl SpendingSummary {
    /// Display-ready summary, grouped with ru-locale thousands separators.
    #[must_use]
    pub fn display(&self) -> String {
        if self.jpy_total == 0 {
            return format!("Total spent: {} ₽", fmt_grouped(self.grand_total));
        }
        format!(
            "Total spent: {} ₽ ({} ₽ + {} ¥ × {} = {} ₽)",
            fmt_grouped(self.grand_total),
            fmt_grouped(self.rub_total),
            fmt_grouped(self.jpy_total),
            self.rate,
            fmt_grouped(self.converted_rub),
        )
    }
}

/// Computes the two-currency spending aggregate.
///
/// Pure computation, re-run after every mutation that could affect totals.
pub struct BudgetService {
    rate: f64,
}

impl BudgetService {
    /// `rate` is primary units per one secondary unit.
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }

    /// Convert a day amount into the primary currency, rounding to the
    /// nearest integer.
    #[must_use]
    pub fn to_primary(&self, amount: u64, currency: Currency) -> u64 {
        match currency {
            Currency::Rub => amount,
            Currency::Jpy => (amount as f64 * self.rate).round() as u64,
        }
    }

    #[must_use]
    pub fn summarize(&self, trip: &Trip) -> SpendingSummary {
        let mut rub_total = 0u64;
        let mut jpy_total = 0u64;
        for day in &trip.days {
            match day.currency {
                Currency::Rub => rub_total += day.expenses,
                Currency::Jpy => jpy_total += day.expenses,
            }
        }
        let converted_rub = (jpy_total as f64 * self.rate).round() as u64;
        SpendingSummary {
            rub_total,
            jpy_total,
            converted_rub,
            grand_total: rub_total + converted_rub,
            rate: self.rate,
        }
    }
}

/// Integer formatting with ru-locale digit grouping (5000 → "5 000").
#[must_use]
pub fn fmt_grouped(n: u64) -> String {
    n.to_formatted_string(&Locale::ru)
}
