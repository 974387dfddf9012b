//! HTTP client for the upstream phone-number lookup API.
//!
//! Builds the upstream URL with the server-side credential and a
//! percent-encoded number, issues a single GET, and reports the
//! outcome as an explicit result: parsed JSON with the upstream
//! status, a non-JSON body, or a transport failure.

mod client;
mod error;

pub use client::{LookupClient, LookupReply};
pub use error::LookupError;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_client(mock_server: &MockServer) -> LookupClient {
        LookupClient::new(
            format!("{}/number.php", mock_server.uri()),
            "test-api-key",
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_lookup_success() {
        let mock_server = MockServer::start().await;

        let response_body = serde_json::json!({
            "status": "ok",
            "carrier": "Acme",
            "circle": "CA"
        });

        Mock::given(method("GET"))
            .and(path("/number.php"))
            .and(query_param("key", "test-api-key"))
            .and(query_param("number", "9876543210"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let reply = client.lookup("9876543210").await.unwrap();

        assert_eq!(reply.status, 200);
        assert!(reply.is_success());
        assert_eq!(reply.body, response_body);
    }

    #[tokio::test]
    async fn test_lookup_upstream_error_is_not_a_transport_error() {
        let mock_server = MockServer::start().await;

        let response_body = serde_json::json!({
            "status": "error",
            "message": "not found"
        });

        Mock::given(method("GET"))
            .and(path("/number.php"))
            .respond_with(ResponseTemplate::new(404).set_body_json(&response_body))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let reply = client.lookup("9876543210").await.unwrap();

        assert_eq!(reply.status, 404);
        assert!(!reply.is_success());
        assert_eq!(reply.body, response_body);
    }

    #[tokio::test]
    async fn test_lookup_non_json_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/number.php"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result = client.lookup("9876543210").await;

        assert!(matches!(result, Err(LookupError::NonJson)));
    }

    #[tokio::test]
    async fn test_lookup_non_json_body_on_error_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/number.php"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result = client.lookup("9876543210").await;

        // Non-JSON wins over the upstream status
        assert!(matches!(result, Err(LookupError::NonJson)));
    }

    #[tokio::test]
    async fn test_lookup_transport_failure() {
        // Nothing listens here; connection is refused
        let client = LookupClient::new(
            "http://127.0.0.1:1/number.php",
            "test-api-key",
            Duration::from_secs(5),
        )
        .unwrap();

        let result = client.lookup("9876543210").await;
        assert!(matches!(result, Err(LookupError::Http(_))));
    }

    #[test]
    fn test_client_creation() {
        let client = LookupClient::new(
            "https://xwalletbot.shop/number.php",
            "key",
            Duration::from_secs(30),
        );
        assert!(client.is_ok());
    }
}
