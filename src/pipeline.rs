//! The build run: discover trips, assemble them, write the page.
//!
//! ## Failure policy
//!
//! Only these stop the run, and nothing is written when they do:
//! - the travel directory or the template does not exist
//! - the travel directory cannot be listed
//! - the template cannot be read
//! - the output cannot be written
//!
//! Everything below the run level is absorbed. A trip directory that is
//! unreadable or has no images is skipped with a log line; an image whose
//! metadata cannot be decoded gets fallback values.

use crate::config::BuildConfig;
use crate::generate::{PageError, assemble_page};
use crate::imaging::MetadataDecoder;
use crate::scan::{build_trip, list_trip_dirs};
use crate::types::Trip;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    /// One or both inputs are absent. Each field holds the missing path.
    #[error("{}", missing_message(travel_dir.as_deref(), template.as_deref()))]
    MissingInputs {
        travel_dir: Option<PathBuf>,
        template: Option<PathBuf>,
    },
    #[error("Cannot list trips in {}: {source}", path.display())]
    ListTrips {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error(transparent)]
    Page(#[from] PageError),
    #[error("Cannot write {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What a successful run produced.
#[derive(Debug)]
pub struct BuildReport {
    /// Trips on the page, in page order.
    pub trips: Vec<Trip>,
    /// Directories left out because they had no readable images.
    pub skipped: Vec<String>,
    /// Where the page was written.
    pub output: PathBuf,
}

impl BuildReport {
    pub fn photo_count(&self) -> usize {
        self.trips.iter().map(Trip::photo_count).sum()
    }
}

fn missing_message(travel_dir: Option<&Path>, template: Option<&Path>) -> String {
    let mut parts = Vec::new();
    if let Some(path) = travel_dir {
        parts.push(format!("Travel directory not found: {}", path.display()));
    }
    if let Some(path) = template {
        parts.push(format!("Template not found: {}", path.display()));
    }
    parts.join("; ")
}

/// Both inputs are checked so a single error names everything missing.
fn check_inputs(config: &BuildConfig) -> Result<(), BuildError> {
    let travel_dir = (!config.travel_dir.is_dir()).then(|| config.travel_dir.clone());
    let template = (!config.template.is_file()).then(|| config.template.clone());
    if travel_dir.is_none() && template.is_none() {
        return Ok(());
    }
    Err(BuildError::MissingInputs {
        travel_dir,
        template,
    })
}

/// Run the whole build with the given decoder.
pub fn run(config: &BuildConfig, decoder: &dyn MetadataDecoder) -> Result<BuildReport, BuildError> {
    check_inputs(config)?;

    let dirs = list_trip_dirs(&config.travel_dir).map_err(|source| BuildError::ListTrips {
        path: config.travel_dir.clone(),
        source,
    })?;

    let image_root = config.image_root();
    let mut trips = Vec::new();
    let mut skipped = Vec::new();
    for dir in dirs {
        match build_trip(decoder, &dir.path, &dir.name, &image_root) {
            Some(trip) => {
                log::info!("{}: {} photos", trip.id, trip.photo_count());
                trips.push(trip);
            }
            None => {
                log::info!("Skipping {}: no images", dir.name);
                skipped.push(dir.name);
            }
        }
    }

    let page = assemble_page(&trips, &config.template, &config.marker)?;

    let write_err = |source| BuildError::WriteOutput {
        path: config.output.clone(),
        source,
    };
    if let Some(parent) = config.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(&config.output, page).map_err(write_err)?;
    log::info!("Wrote {}", config.output.display());

    Ok(BuildReport {
        trips,
        skipped,
        output: config.output.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    fn setup(tmp: &TempDir) -> BuildConfig {
        let travel = tmp.path().join("travel");
        fs::create_dir_all(&travel).unwrap();
        let template = tmp.path().join("template.html");
        fs::write(&template, TEST_TEMPLATE).unwrap();
        BuildConfig {
            travel_dir: travel,
            template,
            output: tmp.path().join("index.html"),
            ..Default::default()
        }
    }

    #[test]
    fn missing_travel_dir_aborts_without_output() {
        let tmp = TempDir::new().unwrap();
        let mut config = setup(&tmp);
        config.travel_dir = tmp.path().join("nowhere");

        let result = run(&config, &StubDecoder::default());
        assert!(matches!(
            result,
            Err(BuildError::MissingInputs {
                travel_dir: Some(_),
                template: None
            })
        ));
        assert!(!config.output.exists());
    }

    #[test]
    fn both_missing_inputs_reported_together() {
        let tmp = TempDir::new().unwrap();
        let mut config = setup(&tmp);
        config.travel_dir = tmp.path().join("nowhere");
        config.template = tmp.path().join("nope.html");

        let err = run(&config, &StubDecoder::default()).unwrap_err();
        assert!(matches!(
            err,
            BuildError::MissingInputs {
                travel_dir: Some(_),
                template: Some(_)
            }
        ));
        let message = err.to_string();
        assert!(message.contains("Travel directory not found"));
        assert!(message.contains("nowhere"));
        assert!(message.contains("Template not found"));
        assert!(message.contains("nope.html"));
        assert!(!config.output.exists());
    }

    #[test]
    fn missing_template_aborts_without_output() {
        let tmp = TempDir::new().unwrap();
        let mut config = setup(&tmp);
        config.template = tmp.path().join("nope.html");
        make_trip(&config.travel_dir, "2023-07-paris-france", &["a.jpg"]);

        let result = run(&config, &StubDecoder::default());
        assert!(matches!(
            result,
            Err(BuildError::MissingInputs {
                travel_dir: None,
                template: Some(_)
            })
        ));
        assert!(!config.output.exists());
    }

    #[test]
    fn template_that_is_a_directory_counts_as_missing() {
        let tmp = TempDir::new().unwrap();
        let mut config = setup(&tmp);
        config.template = tmp.path().join("travel");

        let result = run(&config, &StubDecoder::default());
        assert!(matches!(
            result,
            Err(BuildError::MissingInputs {
                travel_dir: None,
                template: Some(_)
            })
        ));
    }

    #[test]
    fn trips_in_directory_order_and_empty_dirs_skipped() {
        let tmp = TempDir::new().unwrap();
        let config = setup(&tmp);
        make_trip(&config.travel_dir, "2024-02-tokyo", &["a.jpg"]);
        make_trip(&config.travel_dir, "2023-07-paris-france", &["b.png", "a.jpg"]);
        make_trip(&config.travel_dir, "2024-05-empty", &["notes.txt"]);

        let report = run(&config, &StubDecoder::default()).unwrap();
        assert_eq!(
            trip_ids(&report.trips),
            vec!["2023-07-paris-france", "2024-02-tokyo"]
        );
        assert_eq!(report.skipped, vec!["2024-05-empty"]);
        assert_eq!(report.photo_count(), 3);

        let page = fs::read_to_string(&config.output).unwrap();
        assert!(!page.contains("2024-05-empty"));
    }

    #[test]
    fn no_trips_writes_placeholder_page() {
        let tmp = TempDir::new().unwrap();
        let config = setup(&tmp);

        let report = run(&config, &StubDecoder::default()).unwrap();
        assert!(report.trips.is_empty());
        let page = fs::read_to_string(&config.output).unwrap();
        assert!(page.contains("No trips found."));
    }

    #[test]
    fn existing_output_overwritten() {
        let tmp = TempDir::new().unwrap();
        let config = setup(&tmp);
        fs::write(&config.output, "stale").unwrap();
        make_trip(&config.travel_dir, "2024-02-tokyo", &["a.jpg"]);

        run(&config, &StubDecoder::default()).unwrap();
        let page = fs::read_to_string(&config.output).unwrap();
        assert!(!page.contains("stale"));
        assert!(page.contains(r#"id="2024-02-tokyo""#));
    }

    #[test]
    fn output_parent_created() {
        let tmp = TempDir::new().unwrap();
        let mut config = setup(&tmp);
        config.output = tmp.path().join("dist/site/index.html");

        run(&config, &StubDecoder::default()).unwrap();
        assert!(config.output.is_file());
    }

    #[test]
    fn image_src_uses_travel_dir() {
        let tmp = TempDir::new().unwrap();
        let config = setup(&tmp);
        make_trip(&config.travel_dir, "2024-02-tokyo", &["a.jpg"]);

        let report = run(&config, &StubDecoder::default()).unwrap();
        let src = &report.trips[0].images[0].src;
        assert_eq!(*src, format!("{}/2024-02-tokyo/a.jpg", config.image_root()));
    }

    #[test]
    fn corrupt_images_do_not_stop_the_run() {
        let tmp = TempDir::new().unwrap();
        let config = setup(&tmp);
        make_trip(&config.travel_dir, "2024-02-tokyo", &["a.jpg", "b.jpg"]);

        let report = run(&config, &FailingDecoder).unwrap();
        assert_eq!(report.photo_count(), 2);
        let page = fs::read_to_string(&config.output).unwrap();
        assert_eq!(page.matches("Unknown camera").count(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlinks_do_not_stop_the_run() {
        let tmp = TempDir::new().unwrap();
        let config = setup(&tmp);
        let tokyo = make_trip(&config.travel_dir, "2024-02-tokyo", &["a.jpg", "b.jpg"]);
        std::os::unix::fs::symlink("/nonexistent", config.travel_dir.join("zz-broken")).unwrap();
        std::os::unix::fs::symlink("/nonexistent", tokyo.join("notes.txt")).unwrap();

        let report = run(&config, &StubDecoder::default()).unwrap();
        assert_eq!(trip_ids(&report.trips), vec!["2024-02-tokyo"]);
        assert_eq!(report.photo_count(), 2);
        assert!(report.skipped.is_empty());
        assert!(config.output.is_file());
    }
}
