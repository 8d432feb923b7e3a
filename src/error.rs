use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::toaster::Toaster;
use crate::i18n::I18n;

/// One entry of the backend's `{"errors": [...]}` error body.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorEntry {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorBody {
    #[serde(default)]
    pub errors: Vec<ErrorEntry>,
}

/// Failure of a remote call.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server rejected the request with status {status}")]
    Rejected { status: u16, errors: Vec<ErrorEntry> },
    #[error("malformed response: {0}")]
    Decode(String),
}

pub const GENERIC_ERROR_KEY: &str = "Something went wrong";
pub const UNAUTHORIZED_KEY: &str = "Unauthorized";

impl ApiError {
    /// User-facing message: the server's own wording when it sent one,
    /// otherwise a translation key.
    pub fn user_message(&self, i18n: &I18n) -> String {
        match self {
            ApiError::Rejected { status, errors } => {
                match errors.iter().find(|e| !e.message.is_empty()) {
                    Some(entry) => entry.message.clone(),
                    None if *status == 401 => i18n.t(UNAUTHORIZED_KEY),
                    None => i18n.t(GENERIC_ERROR_KEY),
                }
            }
            ApiError::Network(_) | ApiError::Decode(_) => i18n.t(GENERIC_ERROR_KEY),
        }
    }
}

/// Shared error-to-notification translator for every remote mutation.
pub fn on_error_response(err: &ApiError, toaster: &Toaster, i18n: &I18n) {
    leptos::logging::warn!("[API] {}", err);
    toaster.error(err.user_message(i18n));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_server_message_wins() {
        let err = ApiError::Rejected {
            status: 403,
            errors: vec![
                ErrorEntry { code: "review".into(), message: String::new() },
                ErrorEntry { code: "review".into(), message: "Already reviewed".into() },
            ],
        };
        assert_eq!(err.user_message(&I18n::default()), "Already reviewed");
    }

    #[test]
    fn unauthorized_without_body() {
        let err = ApiError::Rejected { status: 401, errors: vec![] };
        assert_eq!(err.user_message(&I18n::default()), UNAUTHORIZED_KEY);
    }

    #[test]
    fn network_failures_are_translated() {
        let i18n = I18n::from_entries([(GENERIC_ERROR_KEY, "Algo salió mal")]);
        let err = ApiError::Network("offline".into());
        assert_eq!(err.user_message(&i18n), "Algo salió mal");
    }
}
