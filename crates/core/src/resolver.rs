use crate::metadata::{DerivedName, MetadataRecord, NamingMode, YearWidth};
use crate::sanitize::sanitize_label;
use chrono::NaiveDateTime;

pub const DATE_KEYS: &[&str] = &[
    "EXIF:DateTimeOriginal",
    "EXIF:CreateDate",
    "XMP:CreateDate",
    "EXIF:ModifyDate",
];

pub const MODEL_KEYS: &[&str] = &["EXIF:Model", "IFD0:Model"];
pub const MAKE_KEYS: &[&str] = &["EXIF:Make", "IFD0:Make"];

pub const UNKNOWN_DEVICE: &str = "Unknown";

const EXIF_DATE_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// `YYYY:MM:DD HH:MM:SS[+HH:MM]`; the offset is dropped, not applied.
pub fn parse_capture_time(raw: &str) -> Option<NaiveDateTime> {
    let local = match raw.split_once('+') {
        Some((head, _)) => head,
        None => raw,
    };
    NaiveDateTime::parse_from_str(local, EXIF_DATE_FORMAT).ok()
}

pub fn format_timestamp(time: &NaiveDateTime, width: YearWidth) -> String {
    time.format(width.chrono_format()).to_string()
}

pub fn resolve_timestamp(record: &MetadataRecord, width: YearWidth) -> Option<String> {
    for key in DATE_KEYS {
        let Some(raw) = record.get(key) else {
            continue;
        };
        if let Some(time) = parse_capture_time(raw) {
            return Some(format_timestamp(&time, width));
        }
    }
    None
}

pub fn resolve_device(record: &MetadataRecord) -> String {
    MODEL_KEYS
        .iter()
        .chain(MAKE_KEYS)
        .filter_map(|key| record.get(key))
        .find_map(sanitize_label)
        .unwrap_or_else(|| UNKNOWN_DEVICE.to_string())
}

pub fn derive_name(record: &MetadataRecord, mode: &NamingMode) -> Option<DerivedName> {
    let timestamp = resolve_timestamp(record, mode.year_width)?;
    let device = mode.include_device.then(|| resolve_device(record));
    Some(DerivedName { timestamp, device })
}
