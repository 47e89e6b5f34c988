//! Display formatting for estimates in the two supported currencies.

use serde::{Deserialize, Serialize};

/// Fallback USD → INR rate when no override is configured.
pub const DEFAULT_SECONDARY_RATE: f64 = 83.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurrencySelection {
    /// US dollars, the unit the prediction service answers in.
    #[default]
    Primary,
    /// Indian rupees, converted with a fixed rate.
    Secondary,
}

impl CurrencySelection {
    pub fn code(&self) -> &'static str {
        match self {
            CurrencySelection::Primary => "USD",
            CurrencySelection::Secondary => "INR",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            CurrencySelection::Primary => "$",
            CurrencySelection::Secondary => "₹",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            CurrencySelection::Primary => CurrencySelection::Secondary,
            CurrencySelection::Secondary => CurrencySelection::Primary,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurrencyPresenter {
    secondary_rate: f64,
}

impl Default for CurrencyPresenter {
    fn default() -> Self {
        Self::new(DEFAULT_SECONDARY_RATE)
    }
}

impl CurrencyPresenter {
    /// `secondary_rate` is the number of secondary units per primary unit.
    pub fn new(secondary_rate: f64) -> Self {
        Self { secondary_rate }
    }

    pub fn secondary_rate(&self) -> f64 {
        self.secondary_rate
    }

    /// Formats a raw estimate, or returns `None` when there is nothing to show.
    pub fn format(&self, value: Option<f64>, currency: CurrencySelection) -> Option<String> {
        let value = value.filter(|v| v.is_finite())?;
        let amount = match currency {
            CurrencySelection::Primary => value,
            CurrencySelection::Secondary => value * self.secondary_rate,
        }
        .round();
        let sign = if amount < 0.0 { "-" } else { "" };
        let digits = format!("{:.0}", amount.abs());
        let grouped = match currency {
            CurrencySelection::Primary => group_western(&digits),
            CurrencySelection::Secondary => group_indian(&digits),
        };
        Some(format!("{sign}{}{grouped}", currency.symbol()))
    }
}

/// `1234567` → `1,234,567`
fn group_western(digits: &str) -> String {
    join_chunks(digits, 3)
}

/// `19350000` → `1,93,50,000`
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    format!("{},{tail}", join_chunks(head, 2))
}

fn join_chunks(digits: &str, size: usize) -> String {
    digits
        .as_bytes()
        .rchunks(size)
        .rev()
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
#[path = "currency_test.rs"]
mod tests;
