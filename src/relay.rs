use reqwest::{header, StatusCode};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("relay unreachable: {0}")]
    Network(#[from] reqwest::Error),
    #[error("relay rejected submission with {0}")]
    Rejected(StatusCode),
}

/// Posts one form submission to a third-party relay. Every call is its own attempt.
#[derive(Clone, Debug)]
pub struct RelayClient {
    http: reqwest::Client,
    endpoint: String,
}

impl RelayClient {
    pub fn new(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn submit<T: Serialize + ?Sized>(&self, payload: &T) -> Result<(), RelayError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header(header::ACCEPT, "application/json")
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(RelayError::Rejected(status))
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookingRequest;

    fn booking() -> BookingRequest {
        BookingRequest {
            full_name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            ..Default::default()
        }
    }

    #[actix_web::test]
    async fn accepted_submission() {
        let (base, received) = fake::start();
        let relay = RelayClient::new(reqwest::Client::new(), format!("{base}/ok"));
        relay.submit(&booking()).await.unwrap();

        let bodies = received.all();
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0]["fullName"], "Jane Doe");
    }

    #[actix_web::test]
    async fn non_2xx_is_rejected() {
        let (base, _) = fake::start();
        let relay = RelayClient::new(reqwest::Client::new(), format!("{base}/fail"));
        let err = relay.submit(&booking()).await.unwrap_err();
        assert!(matches!(err, RelayError::Rejected(status) if status == StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[actix_web::test]
    async fn unreachable_is_network_error() {
        let relay = RelayClient::new(reqwest::Client::new(), fake::dead_endpoint());
        let err = relay.submit(&booking()).await.unwrap_err();
        assert!(matches!(err, RelayError::Network(_)));
    }
}
