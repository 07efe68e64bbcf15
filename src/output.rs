//! CLI output formatting for a build run.
//!
//! # Information-First Display
//!
//! Each trip leads with its positional index, display name and photo count;
//! the source directory follows as an indented `Source:` line.
//!
//! ```text
//! Trips
//! 001 July 2023, Paris France (2 photos)
//!     Source: 2023-07-paris-france/
//! 002 February 2024, Tokyo (1 photo)
//!     Source: 2024-02-tokyo/
//!
//! Skipped
//!     2024-05-empty/ (no images)
//!
//! Wrote index.html (2 trips, 3 photos)
//! ```
//!
//! `format_*` functions are pure and return lines for testability; the
//! `print_*` wrapper writes them to stdout.

use crate::pipeline::BuildReport;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Format an entity header: positional index + title + photo count.
fn entity_header(index: usize, title: &str, count: usize) -> String {
    format!(
        "{} {} ({})",
        format_index(index),
        title,
        plural(count, "photo", "photos")
    )
}

/// Format the summary of a finished build.
pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let mut lines = vec!["Trips".to_string()];

    if report.trips.is_empty() {
        lines.push("    (none)".to_string());
    }
    for (i, trip) in report.trips.iter().enumerate() {
        lines.push(entity_header(i + 1, &trip.name, trip.photo_count()));
        lines.push(format!("    Source: {}/", trip.id));
    }

    if !report.skipped.is_empty() {
        lines.push(String::new());
        lines.push("Skipped".to_string());
        for dir in &report.skipped {
            lines.push(format!("    {dir}/ (no images)"));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Wrote {} ({}, {})",
        report.output.display(),
        plural(report.trips.len(), "trip", "trips"),
        plural(report.photo_count(), "photo", "photos")
    ));
    lines
}

/// Print the build summary to stdout.
pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ImageEntry, NormalizedMetadata, Trip};
    use std::path::PathBuf;

    fn trip(id: &str, name: &str, photos: usize) -> Trip {
        Trip {
            id: id.to_string(),
            name: name.to_string(),
            images: (0..photos)
                .map(|i| ImageEntry {
                    file_name: format!("{i}.jpg"),
                    src: format!("travel/{id}/{i}.jpg"),
                    alt: format!("{name} - {i}.jpg"),
                    metadata: NormalizedMetadata::fallback(),
                })
                .collect(),
        }
    }

    #[test]
    fn index_is_zero_padded() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(1000), "1000");
    }

    #[test]
    fn full_summary() {
        let report = BuildReport {
            trips: vec![
                trip("2023-07-paris-france", "July 2023, Paris France", 2),
                trip("2024-02-tokyo", "February 2024, Tokyo", 1),
            ],
            skipped: vec!["2024-05-empty".to_string()],
            output: PathBuf::from("index.html"),
        };

        assert_eq!(
            format_build_output(&report),
            vec![
                "Trips",
                "001 July 2023, Paris France (2 photos)",
                "    Source: 2023-07-paris-france/",
                "002 February 2024, Tokyo (1 photo)",
                "    Source: 2024-02-tokyo/",
                "",
                "Skipped",
                "    2024-05-empty/ (no images)",
                "",
                "Wrote index.html (2 trips, 3 photos)",
            ]
        );
    }

    #[test]
    fn empty_summary() {
        let report = BuildReport {
            trips: vec![],
            skipped: vec![],
            output: PathBuf::from("index.html"),
        };
        assert_eq!(
            format_build_output(&report),
            vec!["Trips", "    (none)", "", "Wrote index.html (0 trips, 0 photos)"]
        );
    }
}
