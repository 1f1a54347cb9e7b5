use color_eyre::eyre::{eyre, Result};
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::client::models::{Application, RevisionRecord};
use crate::client::urls::Urls;

#[derive(Debug)]
pub struct ArgoCdClient {
    pub urls: Urls,
    pub http: Client,
}

impl ArgoCdClient {
    /// Fetch an application and return its deployment history, in the order the server lists it.
    ///
    /// A non-success status, or a response that doesn't have the expected
    /// `status.history[].{id, deployedAt, source.kustomize.images}` structure,
    /// fails the whole call. No partial history is returned.
    pub async fn fetch_revision_history(&self, app_name: &str) -> Result<Vec<RevisionRecord>> {
        let url = self.urls.application_url(app_name)?;
        debug!("Fetching data from {}", url);

        let response = match self.http.get(url).send().await {
            Ok(t) => t,
            Err(e) => return Err(eyre!("Request failed: {}", e)),
        };

        let status = response.status();
        if !status.is_success() {
            warn!(app_name = app_name, "HTTP status: {status}");
            return Err(eyre!("HTTP status: {status}"));
        }
        info!(app_name = app_name, "HTTP status: {status}");

        // Get the string value of the response first, so we can point at
        // the offending application in a possible error
        let raw_json = response.text().await?;

        let application: Application = match serde_json::from_str(&raw_json) {
            Ok(t) => t,
            Err(e) => {
                return Err(eyre!(
                    "Failed to read the deployment history of application \"{app_name}\": {e}"
                ));
            }
        };

        debug!(
            app_name = app_name,
            "Found {} revision(s) in the deployment history",
            application.status.history.len()
        );

        Ok(application
            .status
            .history
            .into_iter()
            .map(RevisionRecord::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::models::Token;
    use crate::client::builder::ArgoCdClientBuilder;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    const HISTORY: &str = r#"{
        "status": {
            "history": [
                {"id": 2, "deployedAt": "2024-01-01T00:00:00Z", "source": {"kustomize": {"images": ["app:v2"]}}},
                {"id": 1, "deployedAt": "2023-01-01T00:00:00Z", "source": {"kustomize": {"images": ["app:v1"]}}}
            ]
        }
    }"#;

    fn client(server: &MockServer, token: Option<&Token>) -> ArgoCdClient {
        ArgoCdClientBuilder::new()
            .set_http_headers(token)
            .unwrap()
            .generate_urls(&server.uri())
            .unwrap()
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_revision_history() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/applications/guestbook"))
            .and(header("cookie", "argocd.token=secret"))
            .respond_with(ResponseTemplate::new(200).set_body_string(HISTORY))
            .expect(1)
            .mount(&server)
            .await;

        let history = client(&server, Some(&Token::new("secret")))
            .fetch_revision_history("guestbook")
            .await
            .unwrap();

        assert_eq!(
            history,
            vec![
                RevisionRecord {
                    id: "2".to_string(),
                    deployed_at: "2024-01-01T00:00:00Z".to_string(),
                    images: vec!["app:v2".to_string()],
                },
                RevisionRecord {
                    id: "1".to_string(),
                    deployed_at: "2023-01-01T00:00:00Z".to_string(),
                    images: vec!["app:v1".to_string()],
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_unauthenticated_request_has_no_cookie() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/applications/guestbook"))
            .and(|request: &Request| !request.headers.contains_key("cookie"))
            .respond_with(ResponseTemplate::new(200).set_body_string(HISTORY))
            .expect(1)
            .mount(&server)
            .await;

        let history = client(&server, None).fetch_revision_history("guestbook").await.unwrap();
        assert_eq!(history.len(), 2);
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client(&server, None)
            .fetch_revision_history("guestbook")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "HTTP status: 500 Internal Server Error");
    }

    #[tokio::test]
    async fn test_structural_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status": {"sync": {}}}"#))
            .mount(&server)
            .await;

        let err = client(&server, None)
            .fetch_revision_history("guestbook")
            .await
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("guestbook"), "{message}");
        assert!(message.contains("history"), "{message}");
    }

    #[tokio::test]
    async fn test_connection_failure() {
        // Nothing listens on port 1
        let client = ArgoCdClientBuilder::new()
            .set_http_headers(None)
            .unwrap()
            .generate_urls("http://127.0.0.1:1")
            .unwrap()
            .build()
            .unwrap();

        let err = client.fetch_revision_history("guestbook").await.unwrap_err();
        assert!(err.to_string().starts_with("Request failed"));
    }
}
