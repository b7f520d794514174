use anyhow::{anyhow, Context};
use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde_json::Value;

use crate::error::SentiHotelError;
use crate::reject_review;

/// Pulls the review text out of a JSON body of the form `{"review": "..."}`.
///
/// A body that cannot be read or parsed, or is `null`, is a server side
/// failure. Otherwise a missing, non-string or empty `review` is rejected as
/// invalid input.
pub struct ReviewExtractor(pub String);

#[async_trait]
impl<S> FromRequest<S> for ReviewExtractor
where
    S: Send + Sync,
{
    type Rejection = SentiHotelError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .context("Failed to read request body")?;
        let json: Value =
            serde_json::from_slice(&body).context("Request body is not valid JSON")?;
        if json.is_null() {
            return Err(anyhow!("Request body is null").into());
        }

        match json.get("review") {
            Some(Value::String(review)) if !review.is_empty() => {
                Ok(ReviewExtractor(review.clone()))
            }
            Some(Value::String(_)) => reject_review!("Review text is empty"),
            Some(other) => reject_review!("Review is not a string: {}", other),
            None => reject_review!("Review field missing from request body"),
        }
    }
}
