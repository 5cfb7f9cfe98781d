//! JSON shapes exchanged with the analysis endpoint.

use fl_core::{AnalysisRequest, AnalysisResult};
use serde::{Deserialize, Serialize};

/// `{ "image": { "inlineData": { "data": "...", "mimeType": "..." } } }`
#[derive(Debug, Serialize)]
pub(crate) struct AnalyzeRequestBody<'a> {
    image: ImageBody<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageBody<'a> {
    inline_data: InlineData<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData<'a> {
    data: &'a str,
    mime_type: &'a str,
}

impl<'a> From<&'a AnalysisRequest> for AnalyzeRequestBody<'a> {
    fn from(request: &'a AnalysisRequest) -> Self {
        Self {
            image: ImageBody {
                inline_data: InlineData {
                    data: request.data_base64(),
                    mime_type: request.mime_type(),
                },
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct SuccessEnvelope {
    data: Option<SuccessData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SuccessData {
    food_analysis: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    message: Option<String>,
}

/// Extracts `data.foodAnalysis` from a 2xx body.
///
/// `None` when the body is not JSON, the path is missing or null, the
/// payload is an empty object, or it does not decode into a recognizable
/// result.
pub(crate) fn parse_food_analysis(body: &[u8]) -> Option<AnalysisResult> {
    let envelope: SuccessEnvelope = serde_json::from_slice(body).ok()?;
    let raw = envelope.data?.food_analysis?;
    if raw.as_object().is_some_and(|fields| fields.is_empty()) {
        return None;
    }
    let result: AnalysisResult = serde_json::from_value(raw).ok()?;
    result.is_recognizable().then_some(result)
}

/// Service-supplied `message` of a non-2xx body, when present and non-blank.
pub(crate) fn parse_error_message(body: &[u8]) -> Option<String> {
    let envelope: ErrorEnvelope = serde_json::from_slice(body).ok()?;
    envelope
        .message
        .map(|message| message.trim().to_string())
        .filter(|message| !message.is_empty())
}
