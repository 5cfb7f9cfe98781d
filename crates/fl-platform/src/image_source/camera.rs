use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use fl_core::ports::{Acquisition, ImageSourceError};
use tokio::process::Command;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::encode::into_jpeg_payload_blocking;

/// Placeholder replaced by the output file path in the capture command.
pub const OUTPUT_PLACEHOLDER: &str = "{output}";

/// Exit status conventionally used for "interrupted by the user".
const EXIT_CANCELLED: i32 = 130;
/// Exit status conventionally used for "cannot execute".
const EXIT_NOT_PERMITTED: i32 = 126;

/// Camera backed by an external capture command.
///
/// The command is a whitespace separated template such as
/// `fswebcam --no-banner {output}`. It must write a single image to
/// `{output}`; an empty or missing file counts as a cancelled capture.
pub struct CommandCameraSource {
    command: Option<String>,
    capture_dir: PathBuf,
}

impl CommandCameraSource {
    pub fn new(command: impl Into<String>, capture_dir: impl Into<PathBuf>) -> Self {
        let command = command.into();
        Self {
            command: (!command.trim().is_empty()).then_some(command),
            capture_dir: capture_dir.into(),
        }
    }

    pub async fn capture(&self) -> Result<Acquisition, ImageSourceError> {
        let Some(template) = &self.command else {
            return Err(ImageSourceError::Device("no camera configured".to_string()));
        };

        tokio::fs::create_dir_all(&self.capture_dir)
            .await
            .map_err(|e| map_io_error(e, "failed to create capture directory"))?;
        let output = self
            .capture_dir
            .join(format!("capture-{}.jpg", Uuid::new_v4()));

        let (program, args) = build_invocation(template, &output)
            .ok_or_else(|| ImageSourceError::Device("no camera configured".to_string()))?;
        debug!(%program, ?args, "running camera command");

        let status = Command::new(&program)
            .args(&args)
            .status()
            .await
            .map_err(|e| map_io_error(e, "failed to start camera command"))?;

        match status.code() {
            Some(EXIT_CANCELLED) => {
                info!("camera capture cancelled");
                remove_quietly(&output).await;
                return Ok(Acquisition::Cancelled);
            }
            Some(EXIT_NOT_PERMITTED) => {
                warn!("camera command not permitted");
                return Err(ImageSourceError::PermissionDenied);
            }
            _ if !status.success() => {
                warn!(%status, "camera command failed");
                remove_quietly(&output).await;
                return Err(ImageSourceError::Device(format!(
                    "camera command exited with {status}"
                )));
            }
            _ => {}
        }

        let bytes = match tokio::fs::read(&output).await {
            Ok(bytes) if bytes.is_empty() => {
                info!("camera produced no image, treating as cancelled");
                remove_quietly(&output).await;
                return Ok(Acquisition::Cancelled);
            }
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("camera produced no image, treating as cancelled");
                return Ok(Acquisition::Cancelled);
            }
            Err(e) => return Err(map_io_error(e, "failed to read captured image")),
        };

        info!(path = %output.display(), size_bytes = bytes.len(), "camera image captured");
        let payload = into_jpeg_payload_blocking(bytes, output).await?;
        Ok(Acquisition::Image(payload))
    }
}

fn build_invocation(template: &str, output: &Path) -> Option<(String, Vec<String>)> {
    let output = output.to_string_lossy();
    let mut parts = template
        .split_whitespace()
        .map(|part| part.replace(OUTPUT_PLACEHOLDER, &output));
    let program = parts.next()?;
    Some((program, parts.collect()))
}

fn map_io_error(error: std::io::Error, context: &str) -> ImageSourceError {
    match error.kind() {
        ErrorKind::PermissionDenied => ImageSourceError::PermissionDenied,
        _ => ImageSourceError::Device(format!("{context}: {error}")),
    }
}

async fn remove_quietly(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        if e.kind() != ErrorKind::NotFound {
            debug!(error = %e, path = %path.display(), "failed to remove capture file");
        }
    }
}
