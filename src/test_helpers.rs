//! Shared test utilities for the travel-gallery test suite.
//!
//! Provides stub decoders, trip-directory builders, and lookups over
//! assembled trips.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! make_trip(tmp.path(), "2023-07-paris-france", &["a.jpg", "b.png"]);
//!
//! let decoder = StubDecoder::default().with("a.jpg", camera("Canon", "EOS R6"));
//! let trip = build_trip(&decoder, &tmp.path().join("2023-07-paris-france"), "2023-07-paris-france", "travel").unwrap();
//! assert_eq!(image_names(&trip), vec!["a.jpg", "b.png"]);
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::imaging::{DecodeError, MetadataDecoder, RawMetadata};
use crate::types::Trip;

// =========================================================================
// Decoders
// =========================================================================

/// Decoder returning canned records keyed by file name.
///
/// Files without a canned record decode to `Ok(None)`.
#[derive(Default)]
pub struct StubDecoder {
    records: HashMap<String, RawMetadata>,
}

impl StubDecoder {
    pub fn with(mut self, file_name: &str, raw: RawMetadata) -> Self {
        self.records.insert(file_name.to_string(), raw);
        self
    }
}

impl MetadataDecoder for StubDecoder {
    fn decode(&self, path: &Path) -> Result<Option<RawMetadata>, DecodeError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(self.records.get(&name).cloned())
    }
}

/// Decoder that fails on every file, like a corrupt image would.
pub struct FailingDecoder;

impl MetadataDecoder for FailingDecoder {
    fn decode(&self, path: &Path) -> Result<Option<RawMetadata>, DecodeError> {
        Err(DecodeError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("corrupt image: {}", path.display()),
        )))
    }
}

/// A record with only camera make and model.
pub fn camera(make: &str, model: &str) -> RawMetadata {
    RawMetadata {
        make: Some(make.to_string()),
        model: Some(model.to_string()),
        ..Default::default()
    }
}

// =========================================================================
// Filesystem fixtures
// =========================================================================

/// Create `root/dir_name` containing placeholder files. Returns the trip path.
///
/// The scanner only looks at extensions, so file contents are dummy bytes.
pub fn make_trip(root: &Path, dir_name: &str, files: &[&str]) -> PathBuf {
    let dir = root.join(dir_name);
    fs::create_dir_all(&dir).unwrap();
    for file in files {
        fs::write(dir.join(file), b"fake image").unwrap();
    }
    dir
}

/// Template used by page tests: head and foot around the marker.
pub const TEST_TEMPLATE: &str = "<head/>\n<!-- PUT CONTENT HERE -->\n<foot/>";

// =========================================================================
// Lookups
// =========================================================================

/// File names of a trip's images in order.
pub fn image_names(trip: &Trip) -> Vec<&str> {
    trip.images.iter().map(|i| i.file_name.as_str()).collect()
}

/// Trip ids in order.
pub fn trip_ids(trips: &[Trip]) -> Vec<&str> {
    trips.iter().map(|t| t.id.as_str()).collect()
}
