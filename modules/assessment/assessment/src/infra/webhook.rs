//! Lead webhook delivery over HTTP(S).
//!
//! One POST per submission with a JSON body `{name, email, timestamp}`. Any 2xx
//! status is success; there is no timeout and no retry.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::SecondsFormat;
use http::{Method, Request, Uri, header};
use http_body_util::Full;
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;
use serde::Serialize;
use tracing::debug;

use crate::domain::repo::{DeliveryError, LeadSubmission, LeadWebhook};

pub const DEFAULT_WEBHOOK_URL: &str = "https://hook.us2.make.com/yvwrv9vktgq96amk9c5i8v0u3n6r5fpt";

#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    #[error("TLS initialization failed: {0}")]
    Tls(#[from] rustls::Error),

    #[error("invalid webhook URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: http::uri::InvalidUri,
    },

    #[error("failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to build request: {0}")]
    Request(#[from] http::Error),

    #[error("transport error: {0}")]
    Transport(#[from] hyper_util::client::legacy::Error),

    #[error("webhook responded with status {0}")]
    Status(u16),
}

impl From<WebhookError> for DeliveryError {
    fn from(e: WebhookError) -> Self {
        match e {
            WebhookError::Status(status) => DeliveryError::Rejected(status),
            other => DeliveryError::Transport(other.to_string()),
        }
    }
}

#[derive(Serialize)]
struct WebhookPayload<'a> {
    name: &'a str,
    email: &'a str,
    timestamp: String,
}

impl<'a> From<&'a LeadSubmission> for WebhookPayload<'a> {
    fn from(submission: &'a LeadSubmission) -> Self {
        Self {
            name: &submission.name,
            email: &submission.email,
            timestamp: submission
                .timestamp
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

fn crypto_provider() -> Arc<rustls::crypto::CryptoProvider> {
    rustls::crypto::CryptoProvider::get_default()
        .cloned()
        .unwrap_or_else(|| Arc::new(rustls::crypto::aws_lc_rs::default_provider()))
}

/// [`LeadWebhook`] backed by a pooled hyper client.
#[derive(Clone)]
pub struct HttpLeadWebhook {
    client: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
    uri: Uri,
}

impl HttpLeadWebhook {
    /// Builds a client for `url` with webpki roots. Plain `http` is accepted so
    /// the endpoint can point at a local relay.
    ///
    /// # Errors
    /// Returns [`WebhookError`] if the URL does not parse or TLS setup fails.
    pub fn new(url: &str) -> Result<Self, WebhookError> {
        let uri: Uri = url.parse().map_err(|source| WebhookError::InvalidUrl {
            url: url.to_owned(),
            source,
        })?;

        let https = hyper_rustls::HttpsConnectorBuilder::new()
            .with_provider_and_webpki_roots(crypto_provider())?
            .https_or_http()
            .enable_http1()
            .build();
        let client = Client::builder(TokioExecutor::new()).build::<_, Full<Bytes>>(https);

        Ok(Self { client, uri })
    }

    async fn post(&self, submission: &LeadSubmission) -> Result<(), WebhookError> {
        let body = serde_json::to_vec(&WebhookPayload::from(submission))?;
        let request = Request::builder()
            .method(Method::POST)
            .uri(self.uri.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .body(Full::new(Bytes::from(body)))?;

        let response = self.client.request(request).await?;
        let status = response.status();
        debug!(status = status.as_u16(), "webhook responded");

        if status.is_success() {
            Ok(())
        } else {
            Err(WebhookError::Status(status.as_u16()))
        }
    }
}

#[async_trait]
impl LeadWebhook for HttpLeadWebhook {
    async fn deliver(&self, submission: &LeadSubmission) -> Result<(), DeliveryError> {
        self.post(submission).await.map_err(DeliveryError::from)
    }
}
