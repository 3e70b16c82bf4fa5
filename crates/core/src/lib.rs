mod allocator;
mod batch;
mod config;
mod exif_reader;
mod exiftool;
mod extractor;
mod metadata;
mod resolver;
mod sanitize;

pub use allocator::{base_name, candidate_file_name, FilenameAllocator};
pub use batch::{rename_directory, BatchError, BatchReport, BatchStats, FileOutcome};
pub use config::{RenameOptions, DEFAULT_EXTENSIONS, DEFAULT_INPUT_DIR};
pub use exif_reader::{read_exif_record, ExifExtractor};
pub use exiftool::{parse_exiftool_json, ExiftoolExtractor};
pub use extractor::{ExtractError, MetadataExtractor};
pub use metadata::{DerivedName, MetadataRecord, NamingMode, YearWidth};
pub use resolver::{
    derive_name, format_timestamp, parse_capture_time, resolve_device, resolve_timestamp,
    DATE_KEYS, MAKE_KEYS, MODEL_KEYS, UNKNOWN_DEVICE,
};
