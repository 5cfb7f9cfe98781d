//! Image acquisition adapters.
//!
//! Both sources hand back JPEG payloads located by a `file://` URI.

mod camera;
mod encode;
mod library;

use async_trait::async_trait;
use fl_core::ports::{Acquisition, ImageSourceError, ImageSourcePort};

pub use camera::{CommandCameraSource, OUTPUT_PLACEHOLDER};
pub use library::{LibraryImageSource, PathSelector, SelectionSlot};

/// [`ImageSourcePort`] combining a camera and a photo library.
pub struct DeviceImageSource {
    camera: CommandCameraSource,
    library: LibraryImageSource,
}

impl DeviceImageSource {
    pub fn new(camera: CommandCameraSource, library: LibraryImageSource) -> Self {
        Self { camera, library }
    }
}

#[async_trait]
impl ImageSourcePort for DeviceImageSource {
    async fn capture_from_camera(&self) -> Result<Acquisition, ImageSourceError> {
        self.camera.capture().await
    }

    async fn pick_from_library(&self) -> Result<Acquisition, ImageSourceError> {
        self.library.pick().await
    }
}
