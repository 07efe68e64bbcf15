//! Image metadata normalization.
//!
//! Turns whatever the decoder found ([`RawMetadata`]) into the fixed-shape
//! [`NormalizedMetadata`] the page renders. This is a total function: decoder
//! errors, missing tags and unparseable values all degrade to fallbacks.
//!
//! ## Resolution priority
//!
//! Each field is resolved independently. The first non-blank value wins:
//!
//! - **Date**: `DateTimeOriginal` → `DateTime` → "Unknown date"
//! - **Camera**: "Make Model" → Make → Model → "Unknown camera"
//! - **Location**: latitude *and* longitude → None (never half a pair)
//! - **Description**: `ImageDescription` → `UserComment` → None
//!
//! A timestamp that is present but cannot be parsed is skipped like a missing
//! one, so a garbled original still lets a valid fallback through.
//!
//! ## Date format
//!
//! Dates are rendered in a single fixed English convention with a 12-hour
//! clock: `Saturday, July 15, 2023, 02:30 PM`.

use crate::imaging::{MetadataDecoder, RawMetadata};
use crate::types::{Location, NormalizedMetadata, UNKNOWN_CAMERA, UNKNOWN_DATE};
use chrono::{DateTime, NaiveDateTime};
use std::path::Path;

const DISPLAY_FORMAT: &str = "%A, %B %-d, %Y, %I:%M %p";

/// Layouts accepted for naive timestamps. EXIF uses colons in the date.
const NAIVE_FORMATS: &[&str] = &[
    "%Y:%m:%d %H:%M:%S%.f",
    "%Y:%m:%d %H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Layouts with a trailing UTC offset, as written by some phones.
const OFFSET_FORMATS: &[&str] = &["%Y:%m:%d %H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M:%S%.f%:z"];

/// Decode and normalize the metadata of one image. Never fails.
pub fn normalize(decoder: &dyn MetadataDecoder, path: &Path) -> NormalizedMetadata {
    match decoder.decode(path) {
        Ok(Some(raw)) => normalize_raw(&raw),
        Ok(None) => {
            log::debug!("No metadata in {}", path.display());
            NormalizedMetadata::fallback()
        }
        Err(e) => {
            log::warn!("Could not read metadata from {}: {e}", path.display());
            NormalizedMetadata::fallback()
        }
    }
}

/// Apply the fallback rules to an already decoded record.
pub fn normalize_raw(raw: &RawMetadata) -> NormalizedMetadata {
    NormalizedMetadata {
        date: resolve_date(raw),
        camera: resolve_camera(raw),
        location: resolve_location(raw),
        description: resolve(&[
            raw.image_description.as_deref(),
            raw.user_comment.as_deref(),
        ]),
    }
}

/// Resolve a metadata field from multiple sources.
///
/// Takes a list of optional values in priority order and returns the first
/// non-None, non-blank value, trimmed.
pub fn resolve(sources: &[Option<&str>]) -> Option<String> {
    sources
        .iter()
        .filter_map(|opt| {
            opt.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
        })
        .next()
}

fn resolve_date(raw: &RawMetadata) -> String {
    [raw.date_time_original.as_deref(), raw.date_time.as_deref()]
        .into_iter()
        .flatten()
        .find_map(format_capture_date)
        .unwrap_or_else(|| UNKNOWN_DATE.to_string())
}

fn resolve_camera(raw: &RawMetadata) -> String {
    let make = resolve(&[raw.make.as_deref()]);
    let model = resolve(&[raw.model.as_deref()]);
    match (make, model) {
        (Some(make), Some(model)) => format!("{make} {model}"),
        (Some(only), None) | (None, Some(only)) => only,
        (None, None) => UNKNOWN_CAMERA.to_string(),
    }
}

fn resolve_location(raw: &RawMetadata) -> Option<Location> {
    match (raw.latitude, raw.longitude) {
        (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite() => Some(Location { lat, lng }),
        _ => None,
    }
}

/// Format a timestamp string for display, or `None` if it cannot be parsed.
///
/// ```
/// use travel_gallery::metadata::format_capture_date;
/// assert_eq!(
///     format_capture_date("2023:07:15 14:30:00").as_deref(),
///     Some("Saturday, July 15, 2023, 02:30 PM")
/// );
/// ```
pub fn format_capture_date(text: &str) -> Option<String> {
    let text = text.trim().trim_end_matches('Z');
    if text.is_empty() {
        return None;
    }
    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            OFFSET_FORMATS
                .iter()
                .find_map(|fmt| DateTime::parse_from_str(text, fmt).ok())
                .map(|dt| dt.naive_local())
        });
    match naive {
        Some(dt) => Some(dt.format(DISPLAY_FORMAT).to_string()),
        None => {
            log::debug!("Unparseable timestamp {text:?}");
            None
        }
    }
}
