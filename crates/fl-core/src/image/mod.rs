//! Image acquisition domain types.
//!
//! An [`ImagePayload`] is what an image source hands back after a successful
//! capture. It is immutable and owned by the capture flow until it has been
//! turned into an [`AnalysisRequest`].

use std::fmt;

use base64::Engine;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Where an image comes from.
///
/// 图片来源。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageOrigin {
    /// Take a new photo with the camera.
    Camera,
    /// Pick an existing photo from the library.
    Library,
}

impl ImageOrigin {
    /// Maps the UI-level "use camera" flag onto an origin.
    pub fn from_use_camera(use_camera: bool) -> Self {
        if use_camera {
            Self::Camera
        } else {
            Self::Library
        }
    }
}

impl fmt::Display for ImageOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Camera => f.write_str("camera"),
            Self::Library => f.write_str("library"),
        }
    }
}

/// Encoding of the binary image content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageEncoding {
    Jpeg,
    Png,
    Webp,
    Heic,
}

impl ImageEncoding {
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Webp => "image/webp",
            Self::Heic => "image/heic",
        }
    }

    /// Guess the encoding from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            "webp" => Some(Self::Webp),
            "heic" | "heif" => Some(Self::Heic),
            _ => None,
        }
    }
}

/// Opaque reference used to display an already-acquired image without
/// transmitting it again (a URI such as `file:///...`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentLocator(String);

impl ContentLocator {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContentLocator {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Result of a successful image acquisition.
///
/// 成功采集到的图片。
#[derive(Clone, PartialEq, Eq)]
pub struct ImagePayload {
    content: Bytes,
    encoding: ImageEncoding,
    locator: ContentLocator,
}

impl ImagePayload {
    pub fn new(content: impl Into<Bytes>, encoding: ImageEncoding, locator: ContentLocator) -> Self {
        Self {
            content: content.into(),
            encoding,
            locator,
        }
    }

    pub fn content(&self) -> &Bytes {
        &self.content
    }

    pub fn encoding(&self) -> ImageEncoding {
        self.encoding
    }

    pub fn locator(&self) -> &ContentLocator {
        &self.locator
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

// Image bytes are never printed, only their size.
impl fmt::Debug for ImagePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImagePayload")
            .field("size_bytes", &self.content.len())
            .field("encoding", &self.encoding)
            .field("locator", &self.locator)
            .finish()
    }
}

/// Encoded image ready for transmission to the analysis endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    data_base64: String,
    mime_type: &'static str,
}

impl AnalysisRequest {
    pub fn data_base64(&self) -> &str {
        &self.data_base64
    }

    pub fn mime_type(&self) -> &'static str {
        self.mime_type
    }
}

impl From<&ImagePayload> for AnalysisRequest {
    fn from(payload: &ImagePayload) -> Self {
        Self {
            data_base64: base64::engine::general_purpose::STANDARD.encode(payload.content()),
            mime_type: payload.encoding().mime_type(),
        }
    }
}

impl fmt::Debug for AnalysisRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisRequest")
            .field("data_base64_len", &self.data_base64.len())
            .field("mime_type", &self.mime_type)
            .finish()
    }
}
