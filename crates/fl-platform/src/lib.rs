//! # fl-platform
//!
//! Platform-specific implementations for FoodLens.
//!
//! This crate contains adapters that interact with the operating system:
//! the data directory, an external camera command and image files on disk.

pub mod app_dirs;
pub mod image_source;

pub use app_dirs::DirsAppDirsAdapter;
pub use image_source::{
    CommandCameraSource, DeviceImageSource, LibraryImageSource, PathSelector, SelectionSlot,
};
