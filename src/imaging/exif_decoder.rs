//! Production metadata decoder built on `kamadak-exif`.
//!
//! | Field | Source |
//! |---|---|
//! | original timestamp | `DateTimeOriginal` (Exif IFD) |
//! | fallback timestamp | `DateTime` (IFD0) |
//! | camera | `Make`, `Model` |
//! | location | `GPSLatitude`/`GPSLatitudeRef`, `GPSLongitude`/`GPSLongitudeRef` |
//! | description | `ImageDescription`, else IPTC Caption-Abstract |
//! | user comment | `UserComment` (charset-prefixed) |

use super::decoder::{DecodeError, MetadataDecoder, RawMetadata};
use super::iptc_parser;
use exif::{Exif, In, Rational, Reader, Tag, Value};
use std::io::Cursor;
use std::path::Path;

#[derive(Debug, Default, Clone, Copy)]
pub struct ExifDecoder;

impl ExifDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl MetadataDecoder for ExifDecoder {
    fn decode(&self, path: &Path) -> Result<Option<RawMetadata>, DecodeError> {
        let bytes = std::fs::read(path)?;

        let mut raw = match read_exif(&bytes)? {
            Some(exif) => raw_from_exif(&exif),
            None => RawMetadata::default(),
        };
        if raw.image_description.is_none() {
            raw.image_description = iptc_parser::read_caption(&bytes);
        }

        Ok(Some(raw).filter(|r| !r.is_empty()))
    }
}

/// Parse the EXIF block, treating "no EXIF in this container" as `None`.
fn read_exif(bytes: &[u8]) -> Result<Option<Exif>, DecodeError> {
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => Ok(Some(exif)),
        Err(exif::Error::NotFound(_)) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn raw_from_exif(exif: &Exif) -> RawMetadata {
    RawMetadata {
        date_time_original: ascii_field(exif, Tag::DateTimeOriginal),
        date_time: ascii_field(exif, Tag::DateTime),
        make: ascii_field(exif, Tag::Make),
        model: ascii_field(exif, Tag::Model),
        latitude: coordinate(exif, Tag::GPSLatitude, Tag::GPSLatitudeRef, "S"),
        longitude: coordinate(exif, Tag::GPSLongitude, Tag::GPSLongitudeRef, "W"),
        image_description: ascii_field(exif, Tag::ImageDescription),
        user_comment: exif
            .get_field(Tag::UserComment, In::PRIMARY)
            .and_then(|f| user_comment(&f.value, exif.little_endian())),
    }
}

/// Read an ASCII tag, stripping NUL padding and surrounding whitespace.
fn ascii_field(exif: &Exif, tag: Tag) -> Option<String> {
    match &exif.get_field(tag, In::PRIMARY)?.value {
        Value::Ascii(parts) => Some(
            parts
                .iter()
                .map(|p| {
                    String::from_utf8_lossy(p)
                        .trim_end_matches('\0')
                        .trim()
                        .to_string()
                })
                .filter(|p| !p.is_empty())
                .collect::<Vec<_>>()
                .join(" "),
        ),
        _ => None,
    }
}

/// Signed decimal degrees from a DMS rational triple and its hemisphere ref.
fn coordinate(exif: &Exif, tag: Tag, ref_tag: Tag, negative_ref: &str) -> Option<f64> {
    let Value::Rational(dms) = &exif.get_field(tag, In::PRIMARY)?.value else {
        return None;
    };
    let degrees = dms_to_degrees(dms)?;
    let negative = ascii_field(exif, ref_tag).is_some_and(|r| r.eq_ignore_ascii_case(negative_ref));
    Some(if negative { -degrees } else { degrees })
}

fn dms_to_degrees(dms: &[Rational]) -> Option<f64> {
    let parts: Vec<f64> = dms.iter().map(Rational::to_f64).collect();
    let value = match parts.as_slice() {
        [] => return None,
        [d] => *d,
        [d, m] => d + m / 60.0,
        [d, m, s, ..] => d + m / 60.0 + s / 3600.0,
    };
    value.is_finite().then_some(value)
}

/// Decode `UserComment`: an 8-byte charset id followed by the text.
fn user_comment(value: &Value, little_endian: bool) -> Option<String> {
    let Value::Undefined(bytes, _) = value else {
        return None;
    };
    if bytes.len() < 8 {
        return None;
    }
    let (charset, text) = bytes.split_at(8);
    let decoded = match charset {
        b"UNICODE\0" => {
            let units: Vec<u16> = text
                .chunks_exact(2)
                .map(|c| {
                    if little_endian {
                        u16::from_le_bytes([c[0], c[1]])
                    } else {
                        u16::from_be_bytes([c[0], c[1]])
                    }
                })
                .collect();
            String::from_utf16_lossy(&units)
        }
        // ASCII, JIS and the all-zero "undefined" id; JIS is rare enough to
        // read as lossy UTF-8.
        _ => String::from_utf8_lossy(text).into_owned(),
    };
    Some(
        decoded
            .trim_matches(|c: char| c == '\0' || c.is_whitespace())
            .to_string(),
    )
}
