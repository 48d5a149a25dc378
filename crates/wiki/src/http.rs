//! Response helpers shared by both clients.

use serde::de::DeserializeOwned;

use crate::error::WikiError;

/// Ensure the response has a success status code. Returns the response
/// unchanged on success, or a [`WikiError::Status`] with the body text.
pub(crate) async fn ensure_success(
    service: &'static str,
    response: reqwest::Response,
) -> Result<reqwest::Response, WikiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        return Err(WikiError::Status {
            service,
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}

/// Parse a successful JSON response body into the expected type.
pub(crate) async fn parse_json<T: DeserializeOwned>(
    service: &'static str,
    response: reqwest::Response,
) -> Result<T, WikiError> {
    let response = ensure_success(service, response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| WikiError::from_reqwest(service, e))
}
