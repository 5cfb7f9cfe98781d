use async_trait::async_trait;

use crate::analysis::AnalysisResult;
use crate::image::AnalysisRequest;
use crate::ports::errors::AnalysisError;

/// Remote food analysis.
///
/// One call sends exactly one request. Implementations must not retry.
#[async_trait]
pub trait AnalysisPort: Send + Sync {
    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResult, AnalysisError>;
}
