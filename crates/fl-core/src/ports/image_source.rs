use async_trait::async_trait;

use crate::image::{ImageOrigin, ImagePayload};
use crate::ports::errors::ImageSourceError;

/// Outcome of an acquisition that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Acquisition {
    Image(ImagePayload),
    /// User dismissed the camera or picker.
    Cancelled,
}

/// Camera capture and library selection capability.
///
/// Implemented by the platform layer; the capture flow only consumes the
/// result contract.
#[async_trait]
pub trait ImageSourcePort: Send + Sync {
    async fn capture_from_camera(&self) -> Result<Acquisition, ImageSourceError>;

    async fn pick_from_library(&self) -> Result<Acquisition, ImageSourceError>;

    /// Acquire from whichever source `origin` names.
    async fn acquire(&self, origin: ImageOrigin) -> Result<Acquisition, ImageSourceError> {
        match origin {
            ImageOrigin::Camera => self.capture_from_camera().await,
            ImageOrigin::Library => self.pick_from_library().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CameraOnly;

    #[async_trait]
    impl ImageSourcePort for CameraOnly {
        async fn capture_from_camera(&self) -> Result<Acquisition, ImageSourceError> {
            Err(ImageSourceError::PermissionDenied)
        }

        async fn pick_from_library(&self) -> Result<Acquisition, ImageSourceError> {
            Ok(Acquisition::Cancelled)
        }
    }

    #[tokio::test]
    async fn acquire_dispatches_on_origin() {
        let source = CameraOnly;

        assert_eq!(
            source.acquire(ImageOrigin::Camera).await,
            Err(ImageSourceError::PermissionDenied)
        );
        assert_eq!(
            source.acquire(ImageOrigin::Library).await,
            Ok(Acquisition::Cancelled)
        );
    }
}
