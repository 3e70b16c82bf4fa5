use crate::metadata::MetadataRecord;
use std::io;
use std::path::Path;
use thiserror::Error;

pub trait MetadataExtractor {
    fn extract(&mut self, path: &Path) -> Result<MetadataRecord, ExtractError>;
}

impl<T: MetadataExtractor + ?Sized> MetadataExtractor for Box<T> {
    fn extract(&mut self, path: &Path) -> Result<MetadataRecord, ExtractError> {
        (**self).extract(path)
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("exiftoolを起動できませんでした: {0}")]
    Spawn(#[source] io::Error),
    #[error("ファイル入出力に失敗しました: {0}")]
    Io(#[from] io::Error),
    #[error("EXIFを解析できませんでした: {0}")]
    Exif(#[from] exif::Error),
    #[error("exiftoolの出力を解析できませんでした: {0}")]
    Json(#[from] serde_json::Error),
    #[error("exiftoolがエラーを返しました: {0}")]
    Reported(String),
    #[error("exiftoolから出力がありませんでした")]
    NoOutput,
}
