//! Shared types passed from the album assembler to the page assembler.
//!
//! Everything here is built once per run, fully populated, and never mutated
//! afterwards.

/// Fallback shown when no capture timestamp can be found or parsed.
pub const UNKNOWN_DATE: &str = "Unknown date";
/// Fallback shown when neither camera make nor model is present.
pub const UNKNOWN_CAMERA: &str = "Unknown camera";

/// GPS position in signed decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// Display-ready metadata for one image.
///
/// `date` and `camera` always carry text (a fallback if nothing better is
/// known). `location` and `description` are either complete or absent.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedMetadata {
    pub date: String,
    pub camera: String,
    pub location: Option<Location>,
    pub description: Option<String>,
}

impl NormalizedMetadata {
    /// The record used when an image has no usable metadata at all.
    pub fn fallback() -> Self {
        Self {
            date: UNKNOWN_DATE.to_string(),
            camera: UNKNOWN_CAMERA.to_string(),
            location: None,
            description: None,
        }
    }
}

impl Default for NormalizedMetadata {
    fn default() -> Self {
        Self::fallback()
    }
}

/// One photo inside a trip.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageEntry {
    /// File name inside the trip directory (e.g. `001-louvre.jpg`).
    pub file_name: String,
    /// Path used as the `<img src>`, forward slashes, relative to the output page.
    pub src: String,
    /// `"<trip display name> - <file name>"`
    pub alt: String,
    pub metadata: NormalizedMetadata,
}

/// One album: a trip directory with at least one qualifying image.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    /// Directory name, also the section anchor id.
    pub id: String,
    /// Human-readable name, e.g. `"July 2023, Paris France"`.
    pub name: String,
    /// Images in ascending file-name order. Never empty.
    pub images: Vec<ImageEntry>,
}

impl Trip {
    pub fn photo_count(&self) -> usize {
        self.images.len()
    }
}
