use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use fl_core::ports::{Acquisition, ImageSourceError};
use tracing::{debug, info};

use super::encode::into_jpeg_payload_blocking;

/// Supplies the file the user picked, or `None` when they dismissed the picker.
pub trait PathSelector: Send + Sync {
    fn select(&self) -> Option<PathBuf>;
}

/// One-shot selection: set before a pick, consumed by it.
///
/// A pick with nothing set behaves like a dismissed picker.
#[derive(Debug, Default, Clone)]
pub struct SelectionSlot {
    slot: Arc<Mutex<Option<PathBuf>>>,
}

impl SelectionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, path: Option<PathBuf>) {
        if let Ok(mut guard) = self.slot.lock() {
            *guard = path;
        }
    }
}

impl PathSelector for SelectionSlot {
    fn select(&self) -> Option<PathBuf> {
        self.slot.lock().ok().and_then(|mut guard| guard.take())
    }
}

/// Photo library backed by the local file system.
pub struct LibraryImageSource {
    selector: Arc<dyn PathSelector>,
}

impl LibraryImageSource {
    pub fn new(selector: Arc<dyn PathSelector>) -> Self {
        Self { selector }
    }

    pub async fn pick(&self) -> Result<Acquisition, ImageSourceError> {
        let Some(path) = self
            .selector
            .select()
            .filter(|path| !path.as_os_str().is_empty())
        else {
            debug!("library selection dismissed");
            return Ok(Acquisition::Cancelled);
        };

        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| read_error(&path, &e))?;
        let canonical = tokio::fs::canonicalize(&path).await.unwrap_or(path);

        info!(path = %canonical.display(), size_bytes = bytes.len(), "library image selected");
        let payload = into_jpeg_payload_blocking(bytes, canonical).await?;
        Ok(Acquisition::Image(payload))
    }
}

/// Library reads never report `PermissionDenied`; that kind is reserved for
/// the camera.
fn read_error(path: &Path, error: &std::io::Error) -> ImageSourceError {
    match error.kind() {
        ErrorKind::NotFound => ImageSourceError::Device(format!("file not found: {}", path.display())),
        _ => ImageSourceError::Device(format!("failed to read {}: {error}", path.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_source::encode::fixtures::encoded;
    use fl_core::ImageEncoding;
    use image::ImageFormat;

    fn source_for(path: Option<PathBuf>) -> LibraryImageSource {
        let slot = SelectionSlot::new();
        slot.set(path);
        LibraryImageSource::new(Arc::new(slot))
    }

    #[tokio::test]
    async fn no_selection_is_cancelled() {
        let source = source_for(None);
        assert_eq!(source.pick().await.unwrap(), Acquisition::Cancelled);
    }

    #[tokio::test]
    async fn empty_path_is_cancelled() {
        let source = source_for(Some(PathBuf::new()));
        assert_eq!(source.pick().await.unwrap(), Acquisition::Cancelled);
    }

    #[tokio::test]
    async fn missing_file_is_device_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = source_for(Some(dir.path().join("missing.jpg")));

        let err = source.pick().await.unwrap_err();

        assert!(matches!(err, ImageSourceError::Device(ref d) if d.contains("not found")));
    }

    #[test]
    fn unreadable_file_is_device_error_not_permission() {
        let error = std::io::Error::from(ErrorKind::PermissionDenied);

        let mapped = read_error(Path::new("/photos/locked.jpg"), &error);

        assert!(matches!(mapped, ImageSourceError::Device(ref d) if d.contains("/photos/locked.jpg")));
    }

    #[tokio::test]
    async fn png_file_becomes_jpeg_payload_with_file_locator() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lunch.png");
        std::fs::write(&path, encoded(ImageFormat::Png)).unwrap();
        let source = source_for(Some(path.clone()));

        let Acquisition::Image(payload) = source.pick().await.unwrap() else {
            panic!("expected an image");
        };

        assert_eq!(payload.encoding(), ImageEncoding::Jpeg);
        assert!(payload.locator().as_str().starts_with("file://"));
        assert!(payload.locator().as_str().ends_with("lunch.png"));
    }

    #[tokio::test]
    async fn selection_is_consumed_by_one_pick() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.jpg");
        std::fs::write(&path, encoded(ImageFormat::Jpeg)).unwrap();
        let source = source_for(Some(path));

        assert!(matches!(source.pick().await.unwrap(), Acquisition::Image(_)));
        assert_eq!(source.pick().await.unwrap(), Acquisition::Cancelled);
    }
}
