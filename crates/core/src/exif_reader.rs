use crate::extractor::{ExtractError, MetadataExtractor};
use crate::metadata::MetadataRecord;
use exif::{In, Reader, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

const TAG_KEYS: &[(Tag, &str)] = &[
    (Tag::DateTimeOriginal, "EXIF:DateTimeOriginal"),
    (Tag::DateTimeDigitized, "EXIF:CreateDate"),
    (Tag::DateTime, "EXIF:ModifyDate"),
    (Tag::Make, "EXIF:Make"),
    (Tag::Model, "EXIF:Model"),
];

#[derive(Debug, Default)]
pub struct ExifExtractor;

impl ExifExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl MetadataExtractor for ExifExtractor {
    fn extract(&mut self, path: &Path) -> Result<MetadataRecord, ExtractError> {
        read_exif_record(path)
    }
}

pub fn read_exif_record(path: &Path) -> Result<MetadataRecord, ExtractError> {
    let file = File::open(path)?;
    let mut buf = BufReader::new(file);
    let exif = Reader::new().read_from_container(&mut buf)?;

    let record = TAG_KEYS
        .iter()
        .filter_map(|(tag, key)| {
            let field = exif.get_field(*tag, In::PRIMARY)?;
            ascii_value(&field.value).map(|value| (*key, value))
        })
        .collect();
    Ok(record)
}

fn ascii_value(value: &Value) -> Option<String> {
    match value {
        Value::Ascii(parts) => parts
            .first()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned()),
        _ => None,
    }
}
