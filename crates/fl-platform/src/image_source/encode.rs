//! Normalises acquired files into JPEG payloads.

use std::io::Cursor;
use std::path::Path;

use fl_core::ports::ImageSourceError;
use fl_core::{ContentLocator, ImageEncoding, ImagePayload};
use image::codecs::jpeg::JpegEncoder;
use image::ImageFormat;

const JPEG_QUALITY: u8 = 90;

pub(crate) fn file_locator(path: &Path) -> ContentLocator {
    ContentLocator::new(format!("file://{}", path.display()))
}

/// JPEG input is passed through untouched. Anything else `image` can decode
/// is re-encoded as JPEG.
pub(crate) fn into_jpeg_payload(
    bytes: Vec<u8>,
    path: &Path,
) -> Result<ImagePayload, ImageSourceError> {
    let locator = file_locator(path);
    let format = image::guess_format(&bytes)
        .map_err(|e| ImageSourceError::Device(format!("unrecognized image data: {e}")))?;

    if format == ImageFormat::Jpeg {
        return Ok(ImagePayload::new(bytes, ImageEncoding::Jpeg, locator));
    }

    let decoded = image::load_from_memory_with_format(&bytes, format)
        .map_err(|e| ImageSourceError::Device(format!("failed to decode {format:?}: {e}")))?;

    let mut encoded = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut encoded, JPEG_QUALITY)
        .encode_image(&decoded.to_rgb8())
        .map_err(|e| ImageSourceError::Device(format!("failed to encode jpeg: {e}")))?;

    Ok(ImagePayload::new(
        encoded.into_inner(),
        ImageEncoding::Jpeg,
        locator,
    ))
}

/// Runs [`into_jpeg_payload`] off the async runtime.
pub(crate) async fn into_jpeg_payload_blocking(
    bytes: Vec<u8>,
    path: std::path::PathBuf,
) -> Result<ImagePayload, ImageSourceError> {
    tokio::task::spawn_blocking(move || into_jpeg_payload(bytes, &path))
        .await
        .map_err(|e| ImageSourceError::Device(format!("image encoding task failed: {e}")))?
}


#[cfg(test)]
mod tests {
    use super::fixtures::encoded;
    use super::*;

    #[test]
    fn jpeg_bytes_pass_through_unchanged() {
        let jpeg = encoded(ImageFormat::Jpeg);

        let payload = into_jpeg_payload(jpeg.clone(), Path::new("/tmp/a.jpg")).unwrap();

        assert_eq!(payload.content().as_ref(), jpeg.as_slice());
        assert_eq!(payload.encoding(), ImageEncoding::Jpeg);
        assert_eq!(payload.locator().as_str(), "file:///tmp/a.jpg");
    }

    #[test]
    fn png_is_reencoded_as_jpeg() {
        let png = encoded(ImageFormat::Png);

        let payload = into_jpeg_payload(png, Path::new("/tmp/b.png")).unwrap();

        assert_eq!(&payload.content()[..3], &[0xFF, 0xD8, 0xFF]);
        assert_eq!(payload.encoding(), ImageEncoding::Jpeg);
    }

    #[test]
    fn garbage_is_a_device_error() {
        let err = into_jpeg_payload(b"not an image".to_vec(), Path::new("/tmp/c.txt")).unwrap_err();
        assert!(matches!(err, ImageSourceError::Device(_)));
    }
}
