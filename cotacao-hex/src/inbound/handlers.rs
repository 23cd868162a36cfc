//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use cotacao_types::{AppError, BidResponse, Quote, QuoteProvider, QuoteRepository};

use crate::QuoteService;

/// Application state shared across handlers.
pub struct AppState<P: QuoteProvider, R: QuoteRepository> {
    pub service: QuoteService<P, R>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self.0 {
            AppError::Upstream(_) => "Failed to fetch USD-BRL quote",
            AppError::Encoding(e) => {
                tracing::error!("Failed to encode response: {}", e);
                "Failed to encode response"
            }
        };

        (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
    }
}

/// Serializes the response body.
///
/// Runs before any header is written so a failure can still become a clean
/// `500` instead of a half-sent `200`.
pub fn encode_bid(quote: &Quote) -> Result<Vec<u8>, AppError> {
    serde_json::to_vec(&BidResponse::from(quote)).map_err(|e| AppError::Encoding(e.to_string()))
}

/// `GET /cotacao`: latest USD-BRL bid.
#[tracing::instrument(skip(state))]
pub async fn get_cotacao<P: QuoteProvider, R: QuoteRepository>(
    State(state): State<Arc<AppState<P, R>>>,
) -> Result<Response, ApiError> {
    let quote = state.service.current_quote().await?;
    let body = encode_bid(&quote)?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cotacao_types::UpstreamError;

    #[test]
    fn test_encode_bid_keeps_value() {
        let body = encode_bid(&Quote::new("5.4310")).unwrap();
        assert_eq!(body, br#"{"bid":"5.4310"}"#);
    }

    #[test]
    fn test_api_error_is_plain_text_500() {
        let response = ApiError(AppError::Upstream(UpstreamError::Timeout)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/plain"));
    }

    #[test]
    fn test_encoding_error_is_500() {
        let response = ApiError(AppError::Encoding("boom".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
