/// Browser-side calls to the storefront backend.
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::logging::log;
use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::error::{ApiError, ErrorBody};
use crate::models::order_item::OrderItem;
use crate::models::promo::PromoConfig;
use crate::models::review::{ReviewResponse, ReviewSubmission};

pub const REVIEW_SUBMIT_PATH: &str = "/api/v1/items/reviews/submit";
pub const LANDING_PATH: &str = "/api/v1/landing";

/// The remote "submit item review" mutation.
pub trait ReviewMutation {
    fn submit(&self, submission: ReviewSubmission)
        -> LocalBoxFuture<'static, Result<ReviewResponse, ApiError>>;
}

/// Mutation handle the review form picks up from context.
#[derive(Clone)]
pub struct ReviewService(pub Rc<dyn ReviewMutation>);

impl ReviewService {
    pub fn new(mutation: impl ReviewMutation + 'static) -> Self {
        Self(Rc::new(mutation))
    }
}

#[derive(Debug, Clone)]
pub struct HttpReviewClient {
    endpoint: String,
    auth_token: Option<String>,
}

impl HttpReviewClient {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            endpoint: config.endpoint(REVIEW_SUBMIT_PATH),
            auth_token: config.auth_token.clone(),
        }
    }
}

impl ReviewMutation for HttpReviewClient {
    fn submit(
        &self,
        submission: ReviewSubmission,
    ) -> LocalBoxFuture<'static, Result<ReviewResponse, ApiError>> {
        let endpoint = self.endpoint.clone();
        let auth_token = self.auth_token.clone();
        Box::pin(async move {
            log!(
                "[REVIEW] Submitting review for item {} of order {}",
                submission.item_id,
                submission.order_id
            );
            let request = with_auth(Request::post(&endpoint), auth_token.as_deref())
                .json(&submission)
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let response = request
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            decode(response).await
        })
    }
}

fn with_auth(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) if !token.is_empty() => {
            builder.header("Authorization", &format!("Bearer {token}"))
        }
        _ => builder,
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if response.ok() {
        return response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()));
    }
    let status = response.status();
    // Error bodies are best effort; a missing or foreign body still yields the status.
    let body = response.json::<ErrorBody>().await.unwrap_or_default();
    Err(ApiError::Rejected {
        status,
        errors: body.errors,
    })
}

async fn get_json<T: DeserializeOwned>(url: String, config: &AppConfig) -> Result<T, ApiError> {
    let response = with_auth(Request::get(&url), config.auth_token.as_deref())
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

pub async fn fetch_landing_config(config: AppConfig) -> Result<PromoConfig, ApiError> {
    get_json(config.endpoint(LANDING_PATH), &config).await
}

pub async fn fetch_order_items(config: AppConfig, order_id: u64) -> Result<Vec<OrderItem>, ApiError> {
    let path = format!("/api/v1/orders/{order_id}/items");
    get_json(config.endpoint(&path), &config).await
}
