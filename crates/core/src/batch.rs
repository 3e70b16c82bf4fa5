use crate::allocator::{base_name, FilenameAllocator};
use crate::config::RenameOptions;
use crate::extractor::MetadataExtractor;
use crate::resolver::derive_name;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("フォルダが存在しません: {}", .0.display())]
    MissingDirectory(PathBuf),
    #[error("フォルダを読めませんでした: {}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    Renamed { from: PathBuf, to: PathBuf },
    Planned { from: PathBuf, to: PathBuf },
    Unchanged { path: PathBuf },
    NoDate { path: PathBuf },
    ExtractionFailed { path: PathBuf, error: String },
    RenameFailed { from: PathBuf, to: PathBuf, error: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub scanned_files: usize,
    pub matched_files: usize,
    pub skipped_unsupported: usize,
    pub renamed: usize,
    pub planned: usize,
    pub unchanged: usize,
    pub no_date: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BatchReport {
    pub input_dir: PathBuf,
    pub dry_run: bool,
    pub outcomes: Vec<FileOutcome>,
    pub stats: BatchStats,
}

impl BatchReport {
    fn record(&mut self, outcome: FileOutcome) {
        match &outcome {
            FileOutcome::Renamed { .. } => self.stats.renamed += 1,
            FileOutcome::Planned { .. } => self.stats.planned += 1,
            FileOutcome::Unchanged { .. } => self.stats.unchanged += 1,
            FileOutcome::NoDate { .. } => self.stats.no_date += 1,
            FileOutcome::ExtractionFailed { .. } | FileOutcome::RenameFailed { .. } => {
                self.stats.failed += 1
            }
        }
        self.outcomes.push(outcome);
    }
}

pub fn rename_directory<E>(
    options: &RenameOptions,
    extractor: &mut E,
) -> Result<BatchReport, BatchError>
where
    E: MetadataExtractor + ?Sized,
{
    let root = &options.input_dir;
    if !root.is_dir() {
        return Err(BatchError::MissingDirectory(root.clone()));
    }

    let mut report = BatchReport {
        input_dir: root.clone(),
        dry_run: options.dry_run,
        ..BatchReport::default()
    };
    let files = collect_image_files(options, &mut report.stats)?;
    let mut allocator = FilenameAllocator::new();

    for path in files {
        let outcome = process_file(options, extractor, &mut allocator, &path);
        report.record(outcome);
    }

    Ok(report)
}

fn collect_image_files(
    options: &RenameOptions,
    stats: &mut BatchStats,
) -> Result<Vec<PathBuf>, BatchError> {
    let root = &options.input_dir;
    let mut out = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| BatchError::ReadDir {
            path: root.clone(),
            source,
        })?;
        if entry.file_type().is_dir() {
            continue;
        }
        stats.scanned_files += 1;

        let path = entry.into_path();
        if options.accepts(&path) {
            stats.matched_files += 1;
            out.push(path);
        } else {
            debug!("対象外の拡張子: {}", path.display());
            stats.skipped_unsupported += 1;
        }
    }

    Ok(out)
}

fn process_file<E>(
    options: &RenameOptions,
    extractor: &mut E,
    allocator: &mut FilenameAllocator,
    path: &Path,
) -> FileOutcome
where
    E: MetadataExtractor + ?Sized,
{
    let record = match extractor.extract(path) {
        Ok(record) => record,
        Err(err) => {
            error!("メタデータの取得に失敗しました: {} ({})", display_name(path), err);
            return FileOutcome::ExtractionFailed {
                path: path.to_path_buf(),
                error: err.to_string(),
            };
        }
    };

    let Some(derived) = derive_name(&record, &options.mode) else {
        warn!("日付情報が見つかりません: {}", display_name(path));
        return FileOutcome::NoDate {
            path: path.to_path_buf(),
        };
    };

    let directory = path.parent().unwrap_or(options.input_dir.as_path());
    let extension = path
        .extension()
        .map(|v| format!(".{}", v.to_string_lossy()))
        .unwrap_or_default();
    let target = allocator.allocate(directory, &base_name(&derived), &extension, Some(path));

    if target == path {
        info!("変更なし: {}", display_name(path));
        return FileOutcome::Unchanged {
            path: path.to_path_buf(),
        };
    }

    if options.dry_run {
        info!(
            "リネーム予定: {} -> {}",
            display_name(path),
            display_name(&target)
        );
        allocator.reserve(target.clone());
        allocator.release(path.to_path_buf());
        return FileOutcome::Planned {
            from: path.to_path_buf(),
            to: target,
        };
    }

    match fs::rename(path, &target) {
        Ok(()) => {
            info!(
                "リネームしました: {} -> {}",
                display_name(path),
                display_name(&target)
            );
            FileOutcome::Renamed {
                from: path.to_path_buf(),
                to: target,
            }
        }
        Err(err) => {
            error!(
                "リネームに失敗しました: {} -> {} ({})",
                display_name(path),
                display_name(&target),
                err
            );
            FileOutcome::RenameFailed {
                from: path.to_path_buf(),
                to: target,
                error: err.to_string(),
            }
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|v| v.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
