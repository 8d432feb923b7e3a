// src/models/promo.rs
use serde::{Deserialize, Deserializer, Serialize};

/// Landing page "earn with us" section, as delivered by the configuration service.
/// Status flags arrive as `0`/`1` as often as `true`/`false`, hence the lenient parser.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PromoConfig {
    #[serde(default)]
    pub earning_title: Option<String>,
    #[serde(default)]
    pub earning_sub_title: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub earning_seller_status: bool,
    #[serde(default)]
    pub earning_seller_title: Option<String>,
    #[serde(default)]
    pub earning_seller_sub_title: Option<String>,
    #[serde(default)]
    pub earning_seller_button_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub earning_dm_status: bool,
    #[serde(default)]
    pub earning_dm_title: Option<String>,
    #[serde(default)]
    pub earning_dm_sub_title: Option<String>,
    #[serde(default)]
    pub earning_dm_button_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Seller,
    DeliveryMan,
}

impl CardKind {
    /// Route the card's button leads to.
    pub fn route(self) -> &'static str {
        match self {
            CardKind::Seller => "store-registration",
            CardKind::DeliveryMan => "deliveryman-registration",
        }
    }

    pub fn image(self) -> &'static str {
        match self {
            CardKind::Seller => "/assets/seller.svg",
            CardKind::DeliveryMan => "/assets/delivery-man.svg",
        }
    }
}

/// A single call-to-action tile resolved from [`PromoConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct PromoCard {
    pub kind: CardKind,
    pub title: String,
    pub sub_title: String,
    pub action: Option<CardAction>,
}

/// The button of a promo card. Only exists when both the label and the target are non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardAction {
    pub label: String,
    pub route: String,
}

pub const ACTIVE_MARKER: (&str, &str) = ("active", "active");

impl CardAction {
    pub fn new(label: Option<&str>, route: &str) -> Option<Self> {
        let label = label.unwrap_or_default();
        if label.is_empty() || route.is_empty() {
            return None;
        }
        Some(Self {
            label: label.to_string(),
            route: route.to_string(),
        })
    }

    /// Navigation target including the `active=active` marker.
    pub fn href(&self) -> String {
        let (key, value) = ACTIVE_MARKER;
        format!(
            "/{}?{}={}",
            self.route.trim_start_matches('/'),
            urlencoding::encode(key),
            urlencoding::encode(value)
        )
    }
}

impl PromoConfig {
    /// Cards to render, seller first. Disabled cards are left out entirely.
    pub fn cards(&self) -> Vec<PromoCard> {
        let mut cards = Vec::with_capacity(2);
        if self.earning_seller_status {
            cards.push(PromoCard::resolve(
                CardKind::Seller,
                self.earning_seller_title.as_deref(),
                self.earning_seller_sub_title.as_deref(),
                self.earning_seller_button_name.as_deref(),
            ));
        }
        if self.earning_dm_status {
            cards.push(PromoCard::resolve(
                CardKind::DeliveryMan,
                self.earning_dm_title.as_deref(),
                self.earning_dm_sub_title.as_deref(),
                self.earning_dm_button_name.as_deref(),
            ));
        }
        cards
    }
}

impl PromoCard {
    fn resolve(
        kind: CardKind,
        title: Option<&str>,
        sub_title: Option<&str>,
        button: Option<&str>,
    ) -> Self {
        Self {
            kind,
            title: title.unwrap_or_default().to_string(),
            sub_title: sub_title.unwrap_or_default().to_string(),
            action: CardAction::new(button, kind.route()),
        }
    }
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Bool(b)) => b,
        Some(serde_json::Value::Number(n)) => n.as_f64().map_or(false, |n| n != 0.0),
        Some(serde_json::Value::String(s)) => matches!(s.trim(), "1" | "true"),
        _ => false,
    })
}
