//! Development backend: serves canned landing / order data and accepts reviews
//! without storing them.
#[cfg(feature = "ssr")]
use actix_web::{web, HttpResponse};
#[cfg(feature = "ssr")]
use leptos::logging::log;
#[cfg(feature = "ssr")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "ssr")]
use std::path::Path;

#[cfg(feature = "ssr")]
use crate::config::ConfigError;
#[cfg(feature = "ssr")]
use crate::error::{ErrorBody, ErrorEntry};
#[cfg(feature = "ssr")]
use crate::models::order_item::OrderItem;
#[cfg(feature = "ssr")]
use crate::models::promo::PromoConfig;
#[cfg(feature = "ssr")]
use crate::models::review::{Rating, ReviewResponse};

/// Review body as it arrives on the wire. The rating stays untyped so that
/// out-of-range or blank values reach the validation rules instead of failing
/// extraction.
#[cfg(feature = "ssr")]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReviewRequest {
    #[serde(default)]
    pub rating: Option<serde_json::Value>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub delivery_man_id: Option<u64>,
    pub item_id: u64,
    pub order_id: u64,
}

#[cfg(feature = "ssr")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RatingField {
    Missing,
    Invalid,
    Valid,
}

#[cfg(feature = "ssr")]
impl ReviewRequest {
    fn rating_field(&self) -> RatingField {
        let number = match &self.rating {
            None | Some(serde_json::Value::Null) => return RatingField::Missing,
            Some(serde_json::Value::String(s)) if s.trim().is_empty() => return RatingField::Missing,
            Some(serde_json::Value::String(s)) => s.trim().parse::<i64>().ok(),
            Some(serde_json::Value::Number(n)) => n.as_i64(),
            Some(_) => None,
        };
        number
            .and_then(|n| u8::try_from(n).ok())
            .and_then(|n| Rating::new(n).ok())
            .map_or(RatingField::Invalid, |_| RatingField::Valid)
    }
}

#[cfg(feature = "ssr")]
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Fixtures {
    #[serde(default)]
    pub landing: PromoConfig,
    #[serde(default)]
    pub orders: Vec<OrderItem>,
}

#[cfg(feature = "ssr")]
impl Fixtures {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn items_for(&self, order_id: u64) -> Vec<OrderItem> {
        self.orders
            .iter()
            .filter(|item| item.order_id == order_id)
            .cloned()
            .collect()
    }

    /// Server-side acceptance rules for a review. Returns the status and error body on rejection.
    pub fn review_verdict(&self, review: &ReviewRequest) -> Result<ReviewResponse, (u16, ErrorBody)> {
        let known = self
            .orders
            .iter()
            .any(|item| item.order_id == review.order_id && item.item_id == review.item_id);
        if !known {
            return Err((403, error_body("review", "Item not found in this order")));
        }

        let mut errors = Vec::new();
        match review.rating_field() {
            RatingField::Missing => errors.push(entry("rating", "The rating field is required.")),
            RatingField::Invalid => {
                errors.push(entry("rating", "The rating must be between 1 and 5."))
            }
            RatingField::Valid => {}
        }
        if review.comment.as_deref().unwrap_or_default().trim().is_empty() {
            errors.push(entry("comment", "The comment field is required."));
        }
        if !errors.is_empty() {
            return Err((422, ErrorBody { errors }));
        }

        Ok(ReviewResponse {
            message: "Review submitted successfully".to_string(),
        })
    }
}

#[cfg(feature = "ssr")]
fn entry(code: &str, message: &str) -> ErrorEntry {
    ErrorEntry {
        code: code.to_string(),
        message: message.to_string(),
    }
}

#[cfg(feature = "ssr")]
fn error_body(code: &str, message: &str) -> ErrorBody {
    ErrorBody {
        errors: vec![entry(code, message)],
    }
}

#[cfg(feature = "ssr")]
pub async fn get_landing_config(fixtures: web::Data<Fixtures>) -> HttpResponse {
    log!("[API] Serving landing config");
    HttpResponse::Ok().json(&fixtures.landing)
}

#[cfg(feature = "ssr")]
pub async fn get_order_items(
    fixtures: web::Data<Fixtures>,
    order_id: web::Path<u64>,
) -> HttpResponse {
    let order_id = order_id.into_inner();
    let items = fixtures.items_for(order_id);
    log!("[API] Returning {} items for order {}", items.len(), order_id);
    HttpResponse::Ok().json(items)
}

#[cfg(feature = "ssr")]
pub async fn submit_item_review(
    fixtures: web::Data<Fixtures>,
    review: web::Json<ReviewRequest>,
) -> HttpResponse {
    let review = review.into_inner();
    log!(
        "[API] Received review - order: {}, item: {}, rating: {:?}",
        review.order_id,
        review.item_id,
        review.rating
    );

    match fixtures.review_verdict(&review) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err((403, body)) => {
            log!("[API] Rejected review for unknown order item");
            HttpResponse::Forbidden().json(body)
        }
        Err((_, body)) => {
            log!("[API] Review failed validation: {} error(s)", body.errors.len());
            HttpResponse::UnprocessableEntity().json(body)
        }
    }
}
