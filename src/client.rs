//! HTTP client for the unverified-order transaction endpoint.

use crate::error::Result;
use crate::status::{excerpt, UpdateStatus};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::time::Duration;

/// Fixed per-call timeout; exceeding it classifies as `Timeout`.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Serialize)]
struct TransactionPayload<'a> {
    #[serde(rename = "transactionID")]
    transaction_id: &'a str,
}

/// One update call per row. Implementations classify every failure into an
/// [`UpdateStatus`] instead of surfacing transport errors, so the row loop
/// never aborts on a bad response.
#[async_trait]
pub trait UpdateClient: Send + Sync {
    async fn submit(&self, order_code: &str, transaction_id: &str) -> UpdateStatus;
}

/// Real client posting to the order API. Stateless across calls.
pub struct HttpUpdateClient {
    client: Client,
    base_url: String,
    auth_token: Option<String>,
}

impl HttpUpdateClient {
    pub fn new(base_url: impl Into<String>, auth_token: Option<String>) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            auth_token,
        })
    }

    fn endpoint(&self, order_code: &str) -> String {
        format!(
            "{}/api/orders/unverified/code/{}/transactionID/",
            self.base_url, order_code
        )
    }
}

#[async_trait]
impl UpdateClient for HttpUpdateClient {
    async fn submit(&self, order_code: &str, transaction_id: &str) -> UpdateStatus {
        let mut request = self
            .client
            .post(self.endpoint(order_code))
            .header("Content-Type", "application/json")
            .json(&TransactionPayload { transaction_id });

        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }

        match request.send().await {
            Ok(response) => {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                classify_response(status, &body)
            }
            Err(err) => classify_transport_error(&err),
        }
    }
}

/// Map a completed HTTP response onto the status taxonomy.
pub fn classify_response(status: StatusCode, body: &str) -> UpdateStatus {
    match status {
        StatusCode::OK => UpdateStatus::Success,
        StatusCode::UNAUTHORIZED => UpdateStatus::Unauthorized,
        StatusCode::NOT_FOUND => UpdateStatus::NotFound,
        other => UpdateStatus::Other {
            status: other.as_u16(),
            body: excerpt(body),
        },
    }
}

fn classify_transport_error(err: &reqwest::Error) -> UpdateStatus {
    if err.is_timeout() {
        UpdateStatus::Timeout
    } else if err.is_connect() {
        UpdateStatus::ConnectionError
    } else {
        UpdateStatus::Exception(excerpt(&err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_maps_to_success() {
        assert_eq!(
            classify_response(StatusCode::OK, "ignored"),
            UpdateStatus::Success
        );
    }

    #[test]
    fn auth_and_lookup_failures_map_to_their_variants() {
        assert_eq!(
            classify_response(StatusCode::UNAUTHORIZED, ""),
            UpdateStatus::Unauthorized
        );
        assert_eq!(
            classify_response(StatusCode::NOT_FOUND, ""),
            UpdateStatus::NotFound
        );
    }

    #[test]
    fn unexpected_status_keeps_code_and_truncated_body() {
        let body = "b".repeat(250);
        let status = classify_response(StatusCode::INTERNAL_SERVER_ERROR, &body);
        assert_eq!(
            status,
            UpdateStatus::Other {
                status: 500,
                body: "b".repeat(100),
            }
        );
    }

    #[test]
    fn endpoint_addresses_the_order_code() {
        let client = HttpUpdateClient::new("http://localhost:3000", None).unwrap();
        assert_eq!(
            client.endpoint("ORD1"),
            "http://localhost:3000/api/orders/unverified/code/ORD1/transactionID/"
        );
    }

    #[test]
    fn payload_uses_wire_field_name() {
        let payload = TransactionPayload {
            transaction_id: "TX1",
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({"transactionID": "TX1"}));
    }
}
