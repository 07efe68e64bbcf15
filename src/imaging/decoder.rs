//! Metadata decoder trait and the raw record it produces.
//!
//! The [`MetadataDecoder`] trait is the seam between the pipeline and
//! whatever actually parses image tags. The production implementation is
//! [`ExifDecoder`](super::exif_decoder::ExifDecoder); tests substitute stubs
//! that return canned records or errors.

use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("EXIF error: {0}")]
    Exif(#[from] exif::Error),
}

/// Loosely-typed tags as found in the file.
///
/// Each field is `None` when the tag is missing. A tag that is present but
/// blank is kept as `Some("")`; deciding what blank means is left to the
/// normalizer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawMetadata {
    /// `DateTimeOriginal`, the moment the shutter fired.
    pub date_time_original: Option<String>,
    /// `DateTime`, last modification; used when the original is missing.
    pub date_time: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    /// Signed decimal degrees, south negative.
    pub latitude: Option<f64>,
    /// Signed decimal degrees, west negative.
    pub longitude: Option<f64>,
    pub image_description: Option<String>,
    pub user_comment: Option<String>,
}

impl RawMetadata {
    /// True when no tag at all was found.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Anything that can pull a [`RawMetadata`] out of an image file.
///
/// `Ok(None)` means the file was readable but carried no metadata.
/// Errors are for unreadable or corrupt files; callers are expected to
/// degrade rather than propagate them.
pub trait MetadataDecoder {
    fn decode(&self, path: &Path) -> Result<Option<RawMetadata>, DecodeError>;
}
