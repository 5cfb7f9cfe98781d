use thiserror::Error;

use crate::capture::CaptureFailure;

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("system data-local directory is unavailable")]
    DataLocalDirUnavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageSourceError {
    #[error("camera permission denied")]
    PermissionDenied,

    #[error("image source device error: {0}")]
    Device(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("analysis service returned {status}")]
    Service {
        status: u16,
        message: Option<String>,
    },

    #[error("response contains no food analysis")]
    NotFood,
}

impl From<ImageSourceError> for CaptureFailure {
    fn from(err: ImageSourceError) -> Self {
        match err {
            ImageSourceError::PermissionDenied => CaptureFailure::PermissionDenied,
            ImageSourceError::Device(detail) => CaptureFailure::DeviceError { detail },
        }
    }
}

impl From<AnalysisError> for CaptureFailure {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::Transport(_) => CaptureFailure::TransportFailure,
            AnalysisError::Service { message, .. } => CaptureFailure::ServiceFailure { message },
            AnalysisError::NotFood => CaptureFailure::NotFood,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::TRANSPORT_FAILURE_MESSAGE;

    #[test]
    fn transport_error_detail_is_replaced_by_generic_message() {
        let failure = CaptureFailure::from(AnalysisError::Transport("connection refused".into()));
        assert_eq!(failure, CaptureFailure::TransportFailure);
        assert_eq!(failure.user_message(), TRANSPORT_FAILURE_MESSAGE);
    }

    #[test]
    fn service_error_keeps_message() {
        let failure = CaptureFailure::from(AnalysisError::Service {
            status: 422,
            message: Some("Image too dark".into()),
        });
        assert_eq!(failure.user_message(), "Image too dark");
    }

    #[test]
    fn image_source_errors_map_to_taxonomy() {
        assert_eq!(
            CaptureFailure::from(ImageSourceError::PermissionDenied),
            CaptureFailure::PermissionDenied
        );
        assert_eq!(
            CaptureFailure::from(ImageSourceError::Device("busy".into())),
            CaptureFailure::DeviceError {
                detail: "busy".into()
            }
        );
    }
}
