//! # Travel Gallery
//!
//! Builds a single static HTML page from a directory of travel photo albums.
//! Each subdirectory of the travel root is a trip; each image in it is shown
//! with its capture date, camera, a map link when it carries GPS coordinates,
//! and its embedded description.
//!
//! # Architecture: One Pass, Top to Bottom
//!
//! ```text
//! travel/ ──scan──▶ Vec<Trip> ──generate──▶ template + fragments ──▶ index.html
//!             │
//!             ├── naming    "2023-07-paris-france" → "July 2023, Paris France"
//!             └── metadata  EXIF/IPTC tags → date, camera, location, description
//! ```
//!
//! Every value is built once and never mutated. Per-image and per-directory
//! problems degrade to fallbacks or skips; only missing inputs, an unreadable
//! template and a failed write stop the run (see [`pipeline`]).
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`pipeline`] | Runs the build: checks inputs, assembles trips, writes the page |
//! | [`scan`] | Lists trip directories and assembles each into a [`types::Trip`] |
//! | [`naming`] | `YYYY-MM-location` directory name → display heading |
//! | [`metadata`] | Raw tags → display-ready metadata with fallbacks |
//! | [`imaging`] | Decoder trait, EXIF decoder, IPTC caption reader |
//! | [`generate`] | HTML fragments with Maud, marker substitution into the template |
//! | [`config`] | Paths and marker token, defaults plus optional TOML overlay |
//! | [`types`] | Shared data model |
//! | [`output`] | CLI summary formatting |
//!
//! # Design Decisions
//!
//! ## Template Marker, Not a Template Engine
//!
//! The page shell is the user's own HTML file. The generator replaces one
//! literal marker (`<!-- PUT CONTENT HERE -->` by default) and leaves every
//! other byte alone.
//!
//! ## Maud for Fragments
//!
//! Trip sections are rendered with [Maud](https://maud.lambda.xyz/), so
//! descriptions typed into a camera or photo tool are escaped before they
//! reach the page.
//!
//! ## Decoder Behind a Trait
//!
//! Metadata decoding sits behind [`imaging::MetadataDecoder`]. The binary uses
//! [`imaging::ExifDecoder`]; tests plug in stubs to exercise fallback rules
//! without crafting image files.

pub mod config;
pub mod generate;
pub mod imaging;
pub mod metadata;
pub mod naming;
pub mod output;
pub mod pipeline;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
