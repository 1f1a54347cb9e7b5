use color_eyre::eyre::{eyre, Result};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;
use tracing::debug;

use crate::cli::models::Token;
use crate::client::client::ArgoCdClient;
use crate::client::urls::Urls;

#[derive(Debug)]
pub struct ArgoCdClientBuilder {
    pub headers: Option<HeaderMap>,
    pub urls: Option<Urls>,
}

impl ArgoCdClientBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            headers: None,
            urls: None,
        }
    }

    /// Add default HTTP headers for the client to use in all requests.
    ///
    /// ArgoCD reads the session token from the `argocd.token` cookie. Without
    /// a (non-empty) token the request is sent unauthenticated.
    pub fn set_http_headers(mut self, token: Option<&Token>) -> Result<Self> {
        debug!("Constructing HTTP headers");
        let mut headers = HeaderMap::new();
        headers.insert("Accept", "application/json".parse()?);
        headers.insert("User-Agent", "argocd-rollback-versions".parse()?);
        match token {
            Some(token) if !token.is_empty() => {
                let mut cookie = HeaderValue::from_str(&format!("argocd.token={}", token.expose()))?;
                cookie.set_sensitive(true);
                headers.insert("Cookie", cookie);
            }
            _ => debug!("No token set, requests will be unauthenticated"),
        }
        self.headers = Some(headers);
        Ok(self)
    }

    /// Attach a urls utility struct.
    pub fn generate_urls(mut self, argocd_base_url: &str) -> Result<Self> {
        debug!("Constructing base urls");
        self.urls = Some(Urls::new(argocd_base_url)?);
        Ok(self)
    }

    /// Builds a client with its own connection pool and no cookie store.
    ///
    /// ArgoCD servers commonly run with self-signed certificates, so certificate
    /// validation is disabled. Don't treat the connection as a trust boundary.
    pub fn build(self) -> Result<ArgoCdClient> {
        let (Some(headers), Some(urls)) = (self.headers, self.urls) else {
            return Err(eyre!("All required fields are not set"));
        };

        let http = Client::builder()
            .danger_accept_invalid_certs(true)
            .default_headers(headers)
            .build()?;

        Ok(ArgoCdClient { urls, http })
    }
}

impl Default for ArgoCdClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_init() {
        let builder = ArgoCdClientBuilder::new();
        assert!(builder.headers.is_none());
        assert!(builder.urls.is_none());
    }

    #[test]
    fn test_builder_set_http_headers() {
        let token = Token::new("test");
        let builder = ArgoCdClientBuilder::new().set_http_headers(Some(&token)).unwrap();
        let headers = builder.headers.unwrap();

        for (header_key, header_value) in [
            ("cookie", "argocd.token=test"),
            ("accept", "application/json"),
            ("user-agent", "argocd-rollback-versions"),
        ] {
            assert_eq!(
                headers.get(header_key),
                Some(&HeaderValue::from_str(header_value).unwrap())
            );
        }
        assert!(headers.get("cookie").unwrap().is_sensitive());
        // Remaining attrs should still be none
        assert!(builder.urls.is_none());
    }

    #[test]
    fn test_builder_without_token() {
        for token in [None, Some(Token::new(""))] {
            let builder = ArgoCdClientBuilder::new().set_http_headers(token.as_ref()).unwrap();
            let headers = builder.headers.unwrap();
            assert!(headers.get("cookie").is_none());
            assert!(headers.get("accept").is_some());
        }
    }

    #[test]
    fn test_builder_generate_urls() {
        let builder = ArgoCdClientBuilder::new()
            .generate_urls("https://argocd.example.com")
            .unwrap();
        assert!(builder.urls.is_some());
        assert!(builder.headers.is_none());

        assert!(ArgoCdClientBuilder::new().generate_urls("not a url").is_err());
    }

    #[test]
    fn test_builder_build_naked() {
        assert!(ArgoCdClientBuilder::new().build().is_err());
        assert!(ArgoCdClientBuilder::new()
            .generate_urls("https://argocd.example.com")
            .unwrap()
            .build()
            .is_err());
        assert!(ArgoCdClientBuilder::new()
            .set_http_headers(None)
            .unwrap()
            .build()
            .is_err());
        assert!(ArgoCdClientBuilder::new()
            .generate_urls("https://argocd.example.com")
            .unwrap()
            .set_http_headers(Some(&Token::new("test")))
            .unwrap()
            .build()
            .is_ok());
    }
}
