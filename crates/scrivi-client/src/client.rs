//! Analysis service trait and its HTTP implementation

use std::time::{Duration, Instant};

use reqwest::header::ACCEPT;
use scrivi_core::AnalysisResult;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::ClientError;
use crate::protocol::{analyse_endpoint, AnalyseRequest};

/// Anything that can turn a draft into an analysis result.
///
/// The TUI and headless mode both go through this trait; tests swap in a
/// canned implementation.
#[trait_variant::make(AnalysisService: Send)]
pub trait LocalAnalysisService {
    /// Analyse `text`. Empty text is sent like any other.
    async fn analyse(&self, text: &str) -> Result<AnalysisResult, ClientError>;
}

/// Analysis service reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpAnalysisClient {
    endpoint: Url,
    http: reqwest::Client,
}

impl HttpAnalysisClient {
    /// Create a client for the service at `base_url`.
    ///
    /// `timeout` of `None` waits indefinitely.
    pub fn new(base_url: &Url, timeout: Option<Duration>) -> Result<Self, ClientError> {
        let endpoint = analyse_endpoint(base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ClientError::Setup)?;

        Ok(Self { endpoint, http })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl AnalysisService for HttpAnalysisClient {
    async fn analyse(&self, text: &str) -> Result<AnalysisResult, ClientError> {
        let url = self.endpoint.to_string();
        let start = Instant::now();

        debug!("POST {} ({} chars)", url, text.chars().count());

        let resp = self
            .http
            .post(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .json(&AnalyseRequest::new(text))
            .send()
            .await
            .map_err(|source| {
                warn!("Analysis request to {} failed: {}", url, source);
                ClientError::Request {
                    url: url.clone(),
                    source,
                }
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|source| ClientError::Request {
            url: url.clone(),
            source,
        })?;

        if !status.is_success() {
            warn!("Analysis service returned {} for {}", status, url);
            return Err(ClientError::status(status.as_u16(), body));
        }

        let result: AnalysisResult = serde_json::from_str(&body).map_err(|e| {
            warn!("Malformed analysis response from {}: {}", url, e);
            ClientError::Malformed(e)
        })?;

        info!(
            "Analysis completed - sentences={}, words={}, duration={}ms",
            result.stats.sentences,
            result.stats.words,
            start.elapsed().as_millis()
        );

        Ok(result)
    }
}
