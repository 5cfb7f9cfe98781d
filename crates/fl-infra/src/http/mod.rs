//! HTTP adapters.

mod analysis_client;
mod wire;

pub use analysis_client::{HttpAnalysisClient, HttpClientError};
