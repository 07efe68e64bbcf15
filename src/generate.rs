//! Page assembly.
//!
//! Renders each [`Trip`] into an HTML fragment and splices the concatenated
//! fragments into a user-supplied template at a marker token.
//!
//! ## Fragment Structure
//!
//! ```text
//! <section class="trip" id="2023-07-paris-france">
//!   <h2>July 2023, Paris France <span class="photo-count">2 photos</span></h2>
//!   <div class="photos">
//!     <figure class="photo">
//!       <img src="travel/2023-07-paris-france/a.jpg" alt="..." loading="lazy">
//!       <figcaption>
//!         <p class="date">…</p>
//!         <p class="camera">…</p>
//!         <p class="location"><a href="https://www.google.com/maps?q=lat,lng">…</a></p>
//!         <p class="description">…</p>
//!       </figcaption>
//!     </figure>
//!   </div>
//! </section>
//! ```
//!
//! Fragments are built with [maud](https://maud.lambda.xyz/), so metadata
//! text is escaped. The template itself is opaque text: the marker is
//! replaced once, everything else passes through byte for byte, and a
//! template without the marker comes out unchanged.

use crate::types::{ImageEntry, Location, Trip};
use maud::{Markup, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const MAP_URL: &str = "https://www.google.com/maps?q=";

#[derive(Error, Debug)]
pub enum PageError {
    #[error("Cannot read template {path}: {source}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Map link for a location: `https://www.google.com/maps?q=<lat>,<lng>`.
pub fn map_link(location: &Location) -> String {
    format!("{MAP_URL}{},{}", location.lat, location.lng)
}

fn photo_count_label(count: usize) -> String {
    if count == 1 {
        "1 photo".to_string()
    } else {
        format!("{count} photos")
    }
}

fn render_image(image: &ImageEntry) -> Markup {
    let meta = &image.metadata;
    html! {
        figure.photo {
            img src=(image.src) alt=(image.alt) loading="lazy";
            figcaption {
                p.date { (meta.date) }
                p.camera { (meta.camera) }
                @if let Some(location) = &meta.location {
                    p.location {
                        a href=(map_link(location)) target="_blank" rel="noopener" {
                            "View on map"
                        }
                    }
                }
                @if let Some(description) = &meta.description {
                    p.description { (description) }
                }
            }
        }
    }
}

/// Render one trip as a `<section>` anchored at its directory name.
pub fn render_trip(trip: &Trip) -> String {
    html! {
        section.trip id=(trip.id) {
            h2 {
                (trip.name)
                " "
                span.photo-count { (photo_count_label(trip.photo_count())) }
            }
            div.photos {
                @for image in &trip.images {
                    (render_image(image))
                }
            }
        }
    }
    .into_string()
}

fn render_empty() -> String {
    html! {
        p.no-trips { "No trips found." }
    }
    .into_string()
}

/// Render all trips in the given order and substitute them for `marker`.
///
/// With no trips, a "No trips found." placeholder is substituted instead.
pub fn render_page(trips: &[Trip], template: &str, marker: &str) -> String {
    let content = if trips.is_empty() {
        render_empty()
    } else {
        trips.iter().map(render_trip).collect::<Vec<_>>().join("\n")
    };
    template.replacen(marker, &content, 1)
}

/// Read the template at `template_path` and render the page into it.
pub fn assemble_page(
    trips: &[Trip],
    template_path: &Path,
    marker: &str,
) -> Result<String, PageError> {
    let template = fs::read_to_string(template_path).map_err(|source| PageError::TemplateRead {
        path: template_path.to_path_buf(),
        source,
    })?;
    Ok(render_page(trips, &template, marker))
}
