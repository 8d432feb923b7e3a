use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    #[default]
    Left,
    Right,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CurrencyConfig {
    pub symbol: String,
    #[serde(default)]
    pub position: SymbolPosition,
    #[serde(default = "default_digits")]
    pub digits: usize,
}

fn default_digits() -> usize {
    2
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            position: SymbolPosition::Left,
            digits: default_digits(),
        }
    }
}

/// Price with currency sign, or an empty string when the price is unknown.
pub fn format_amount(amount: Option<f64>, currency: &CurrencyConfig) -> String {
    let Some(amount) = amount.filter(|a| a.is_finite()) else {
        return String::new();
    };
    let number = format!("{:.*}", currency.digits, amount);
    match currency.position {
        SymbolPosition::Left => format!("{}{}", currency.symbol, number),
        SymbolPosition::Right => format!("{}{}", number, currency.symbol),
    }
}
