//! Trip discovery and album assembly.
//!
//! ## Directory Structure
//!
//! ```text
//! travel/                              # Travel root
//! ├── 2023-07-paris-france/            # Trip (YYYY-MM-location)
//! │   ├── 001-eiffel.jpg
//! │   ├── 002-louvre.JPG               # Extension match is case-insensitive
//! │   └── notes.txt                    # Ignored
//! ├── 2024-02-tokyo/
//! │   └── shibuya.webp
//! └── 2024-05-empty/                   # No images → no trip, no section
//! ```
//!
//! Only the immediate subdirectories of the root are trips, and only the
//! immediate files of a trip are images. Both are ordered by file name,
//! ascending byte order, so output is deterministic.

use crate::imaging::MetadataDecoder;
use crate::metadata;
use crate::naming::format_trip_name;
use crate::types::{ImageEntry, Trip};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extensions (lower-case) that count as images.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// A trip directory found under the travel root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripDir {
    pub name: String,
    pub path: PathBuf,
}

/// True if the path has an allow-listed image extension, ignoring case.
pub fn is_image(path: &Path) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Immediate children of `dir`, sorted by name.
///
/// An entry that cannot be resolved (a dangling symlink, a vanished file) is
/// logged and skipped. Only failing to read `dir` itself is an error.
fn read_children(dir: &Path) -> Result<Vec<walkdir::DirEntry>, walkdir::Error> {
    let mut entries = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        match entry {
            Ok(entry) => entries.push(entry),
            Err(e) if e.depth() == 0 => return Err(e),
            Err(e) => log::warn!("Skipping unreadable entry in {}: {e}", dir.display()),
        }
    }
    Ok(entries)
}

/// List the immediate subdirectories of `root`, sorted by name.
pub fn list_trip_dirs(root: &Path) -> Result<Vec<TripDir>, walkdir::Error> {
    Ok(read_children(root)?
        .into_iter()
        .filter(|entry| entry.file_type().is_dir())
        .map(|entry| TripDir {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.into_path(),
        })
        .collect())
}

/// Image file names directly inside `dir`, sorted by name.
fn list_images(dir: &Path) -> Result<Vec<String>, walkdir::Error> {
    Ok(read_children(dir)?
        .into_iter()
        .filter(|entry| entry.file_type().is_file() && is_image(entry.path()))
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect())
}

/// Build the `<img src>` for a file: `<image_root>/<trip>/<file>`.
fn image_src(image_root: &str, dir_name: &str, file_name: &str) -> String {
    let root = image_root.trim_end_matches('/');
    if root.is_empty() {
        format!("{dir_name}/{file_name}")
    } else {
        format!("{root}/{dir_name}/{file_name}")
    }
}

/// Assemble one trip from its directory.
///
/// Returns `None` when the directory holds no qualifying images or cannot be
/// read; the caller leaves such directories out of the page entirely.
/// Metadata problems on individual images never fail the trip.
pub fn build_trip(
    decoder: &dyn MetadataDecoder,
    dir_path: &Path,
    dir_name: &str,
    image_root: &str,
) -> Option<Trip> {
    let files = match list_images(dir_path) {
        Ok(files) => files,
        Err(e) => {
            log::warn!("Could not read trip directory {}: {e}", dir_path.display());
            return None;
        }
    };
    if files.is_empty() {
        return None;
    }

    let name = format_trip_name(dir_name);
    let images = files
        .into_iter()
        .map(|file_name| {
            let metadata = metadata::normalize(decoder, &dir_path.join(&file_name));
            log::debug!("{dir_name}/{file_name}: {metadata:?}");
            ImageEntry {
                src: image_src(image_root, dir_name, &file_name),
                alt: format!("{name} - {file_name}"),
                file_name,
                metadata,
            }
        })
        .collect();

    Some(Trip {
        id: dir_name.to_string(),
        name,
        images,
    })
}
