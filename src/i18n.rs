/// Translation lookup keyed by the literal English string.
/// Missing keys render as the key itself.
use std::collections::HashMap;
use std::rc::Rc;

use leptos::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct I18n {
    pub direction: Direction,
    entries: Rc<HashMap<String, String>>,
}

impl I18n {
    pub fn new(direction: Direction, entries: HashMap<String, String>) -> Self {
        Self {
            direction,
            entries: Rc::new(entries),
        }
    }

    pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::new(Direction::Ltr, entries)
    }

    /// Parses a flat `{"key": "translation"}` JSON document.
    pub fn from_json(direction: Direction, json: &str) -> Result<Self, serde_json::Error> {
        let entries: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self::new(direction, entries))
    }

    pub fn t(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

/// Current translator from context, or the identity translator.
pub fn use_i18n() -> I18n {
    use_context::<I18n>().unwrap_or_default()
}
