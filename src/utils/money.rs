//! Whole-unit currency formatting.

use num_format::{Locale, ToFormattedString};

pub const DEFAULT_CURRENCY_SYMBOL: &str = "¥";

/// Formats integer amounts as `{symbol}{grouped digits}` with no decimal part.
///
/// Negative amounts put the sign in front of the symbol: `-¥1,000`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyFormatter {
    symbol: String,
}

impl MoneyFormatter {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn format(&self, amount: i64) -> String {
        let digits = amount.unsigned_abs().to_formatted_string(&Locale::en);
        if amount < 0 {
            format!("-{}{}", self.symbol, digits)
        } else {
            format!("{}{}", self.symbol, digits)
        }
    }
}

impl Default for MoneyFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY_SYMBOL)
    }
}
