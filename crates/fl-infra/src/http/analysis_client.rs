use std::time::Duration;

use async_trait::async_trait;
use fl_core::ports::{AnalysisError, AnalysisPort};
use fl_core::{AnalysisRequest, AnalysisResult};
use tracing::{debug, info_span, warn, Instrument};

use super::wire::{parse_error_message, parse_food_analysis, AnalyzeRequestBody};

#[derive(Debug, thiserror::Error)]
pub enum HttpClientError {
    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// [`AnalysisPort`] over a single JSON POST endpoint.
///
/// Response classification:
/// - no response (connect error, timeout) → `Transport`
/// - non-2xx → `Service` with the body's `message` when there is one
/// - 2xx without a usable `data.foodAnalysis` → `NotFood`
pub struct HttpAnalysisClient {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpAnalysisClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, HttpClientError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn transport_error(&self, error: reqwest::Error) -> AnalysisError {
        if error.is_timeout() {
            AnalysisError::Transport(format!("request timed out after {:?}", self.timeout))
        } else {
            AnalysisError::Transport(error.to_string())
        }
    }
}

#[async_trait]
impl AnalysisPort for HttpAnalysisClient {
    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        let span = info_span!("infra.http.analysis_client.analyze", endpoint = %self.endpoint);

        async {
            debug!(mime_type = request.mime_type(), "posting image for analysis");
            let response = self
                .client
                .post(&self.endpoint)
                .json(&AnalyzeRequestBody::from(&request))
                .send()
                .await
                .map_err(|e| self.transport_error(e))?;

            let status = response.status();
            let body = response
                .bytes()
                .await
                .map_err(|e| self.transport_error(e))?;

            if !status.is_success() {
                let message = parse_error_message(&body);
                warn!(status = status.as_u16(), message = ?message, "analysis service returned an error");
                return Err(AnalysisError::Service {
                    status: status.as_u16(),
                    message,
                });
            }

            match parse_food_analysis(&body) {
                Some(result) => {
                    debug!(food = %result.identified_food, "analysis response decoded");
                    Ok(result)
                }
                None => {
                    warn!(status = status.as_u16(), "response carried no food analysis");
                    Err(AnalysisError::NotFood)
                }
            }
        }
        .instrument(span)
        .await
    }
}
