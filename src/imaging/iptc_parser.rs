//! Minimal IPTC-IIM caption reader for JPEG and TIFF files.
//!
//! Only Caption-Abstract (2:120) is extracted. It is the "Caption" field in
//! Lightroom and most photo tools, and is used as the image description when
//! the EXIF `ImageDescription` tag is missing.
//!
//! For JPEG: reads from APP13 marker (Photoshop 8BIM resource 0x0404).
//! For TIFF: reads from IFD tag 33723 (IPTC-NAA, raw IIM bytes).

const CAPTION_DATASET: u8 = 120;
const PHOTOSHOP_HEADER: &[u8] = b"Photoshop 3.0\0";
const BIM_MARKER: &[u8] = b"8BIM";
const IPTC_RESOURCE_ID: u16 = 0x0404;
const TIFF_IPTC_TAG: u16 = 33723;

/// Read the IPTC caption from raw file bytes, sniffing the container.
///
/// Returns `None` for other formats, files without IPTC data, and captions
/// that are blank.
pub fn read_caption(bytes: &[u8]) -> Option<String> {
    let iim = match bytes {
        [0xFF, 0xD8, ..] => find_jpeg_app13_iptc(bytes)?,
        [b'I', b'I', ..] | [b'M', b'M', ..] => find_tiff_iptc(bytes)?,
        _ => return None,
    };
    caption_from_iim(iim)
}

/// Scan IIM datasets for Record 2, Dataset 120.
///
/// Each dataset is `0x1C, record, dataset, len_hi, len_lo, data...`.
fn caption_from_iim(data: &[u8]) -> Option<String> {
    let mut pos = 0;
    while pos + 5 <= data.len() {
        if data[pos] != 0x1C {
            pos += 1;
            continue;
        }
        let record = data[pos + 1];
        let dataset = data[pos + 2];
        let length = u16::from_be_bytes([data[pos + 3], data[pos + 4]]) as usize;
        pos += 5;
        if pos + length > data.len() {
            break;
        }
        if record == 2 && dataset == CAPTION_DATASET {
            let value = String::from_utf8_lossy(&data[pos..pos + length])
                .trim()
                .to_string();
            return Some(value).filter(|v| !v.is_empty());
        }
        pos += length;
    }
    None
}

fn find_jpeg_app13_iptc(data: &[u8]) -> Option<&[u8]> {
    // Skip SOI, then walk length-prefixed segments until SOS.
    let mut pos = 2;
    while pos + 4 <= data.len() {
        if data[pos] != 0xFF {
            return None;
        }
        let marker = data[pos + 1];
        if marker == 0xDA || marker == 0xD9 {
            return None;
        }
        let seg_len = u16::from_be_bytes([data[pos + 2], data[pos + 3]]) as usize;
        if seg_len < 2 {
            return None;
        }
        let seg_end = (pos + 2 + seg_len).min(data.len());
        if marker == 0xED
            && let Some(iim) = iptc_from_8bim(&data[pos + 4..seg_end])
        {
            return Some(iim);
        }
        pos += 2 + seg_len;
    }
    None
}

/// Pick resource 0x0404 out of a Photoshop image resource block.
///
/// Each resource is `8BIM`, id (2), padded pascal name, length (4), data
/// padded to even length.
fn iptc_from_8bim(segment: &[u8]) -> Option<&[u8]> {
    let data = segment.strip_prefix(PHOTOSHOP_HEADER).unwrap_or(segment);
    let mut pos = 0;
    while pos + 12 <= data.len() {
        if &data[pos..pos + 4] != BIM_MARKER {
            return None;
        }
        let resource_id = u16::from_be_bytes([data[pos + 4], data[pos + 5]]);
        let name_len = data[pos + 6] as usize;
        pos += 6 + 1 + name_len + ((1 + name_len) % 2);
        if pos + 4 > data.len() {
            return None;
        }
        let res_len =
            u32::from_be_bytes([data[pos], data[pos + 1], data[pos + 2], data[pos + 3]]) as usize;
        pos += 4;
        if pos + res_len > data.len() {
            return None;
        }
        if resource_id == IPTC_RESOURCE_ID {
            return Some(&data[pos..pos + res_len]);
        }
        pos += res_len + (res_len % 2);
    }
    None
}

/// Find tag 33723 in the first IFD of a TIFF file.
fn find_tiff_iptc(data: &[u8]) -> Option<&[u8]> {
    let big_endian = data.starts_with(b"MM");
    let u16_at = |at: usize| -> Option<u16> {
        let b = data.get(at..at + 2)?;
        Some(if big_endian {
            u16::from_be_bytes([b[0], b[1]])
        } else {
            u16::from_le_bytes([b[0], b[1]])
        })
    };
    let u32_at = |at: usize| -> Option<u32> {
        let b = data.get(at..at + 4)?;
        Some(if big_endian {
            u32::from_be_bytes([b[0], b[1], b[2], b[3]])
        } else {
            u32::from_le_bytes([b[0], b[1], b[2], b[3]])
        })
    };

    if u16_at(2)? != 42 {
        return None;
    }
    let ifd = u32_at(4)? as usize;
    let entries = u16_at(ifd)? as usize;
    for i in 0..entries {
        let entry = ifd + 2 + i * 12;
        if u16_at(entry)? != TIFF_IPTC_TAG {
            continue;
        }
        // Stored as BYTE/UNDEFINED or LONG; either way count * size bytes.
        let size = match u16_at(entry + 2)? {
            4 => 4,
            _ => 1,
        };
        let len = u32_at(entry + 4)? as usize * size;
        let offset = if len <= 4 {
            entry + 8
        } else {
            u32_at(entry + 8)? as usize
        };
        return data.get(offset..offset + len);
    }
    None
}
