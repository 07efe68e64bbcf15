//! Reading embedded metadata out of image files.
//!
//! | Concern | Crate / function |
//! |---|---|
//! | **EXIF / GPS tags** | `kamadak-exif` via [`ExifDecoder`] |
//! | **IPTC caption** | custom parser (JPEG APP13 + TIFF IFD) |
//!
//! The module is split into:
//! - **Decoder**: [`MetadataDecoder`] trait + [`RawMetadata`] record
//! - **EXIF decoder**: the production implementation
//! - **IPTC parser**: caption fallback for files tagged by press tools

pub mod decoder;
pub mod exif_decoder;
pub(crate) mod iptc_parser;

pub use decoder::{DecodeError, MetadataDecoder, RawMetadata};
pub use exif_decoder::ExifDecoder;
