mod logging;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use exif_renamer_core::{
    rename_directory, BatchError, BatchReport, ExifExtractor, ExiftoolExtractor, FileOutcome,
    MetadataExtractor, NamingMode, RenameOptions, YearWidth, DEFAULT_EXTENSIONS,
    DEFAULT_INPUT_DIR,
};
use std::path::PathBuf;
use tracing::error;

#[derive(Debug, Parser)]
#[command(name = "exif-renamer")]
#[command(about = "撮影日時と機種名から画像ファイルを一括リネームします")]
struct Cli {
    #[arg(long, default_value = DEFAULT_INPUT_DIR)]
    input: PathBuf,
    /// ファイル名に機種名を含めない
    #[arg(long, default_value_t = false)]
    no_device: bool,
    #[arg(long, value_enum, default_value_t = YearWidthArg::Four)]
    year_width: YearWidthArg,
    /// 対象拡張子 (複数指定可)
    #[arg(long = "extension", value_name = "EXT")]
    extensions: Vec<String>,
    #[arg(long, value_enum, default_value_t = Backend::Exiftool)]
    backend: Backend,
    #[arg(long, default_value_t = false)]
    dry_run: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,
    #[arg(long, short, default_value_t = false)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum YearWidthArg {
    #[value(name = "2")]
    Two,
    #[value(name = "4")]
    Four,
}

impl From<YearWidthArg> for YearWidth {
    fn from(value: YearWidthArg) -> Self {
        match value {
            YearWidthArg::Two => YearWidth::Two,
            YearWidthArg::Four => YearWidth::Four,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Backend {
    Exiftool,
    Exif,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let options = RenameOptions {
        input_dir: cli.input,
        extensions: if cli.extensions.is_empty() {
            DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
        } else {
            cli.extensions
        },
        mode: NamingMode {
            include_device: !cli.no_device,
            year_width: cli.year_width.into(),
        },
        dry_run: cli.dry_run,
    };

    if !options.input_dir.is_dir() {
        error!("{}", BatchError::MissingDirectory(options.input_dir.clone()));
        return Ok(());
    }

    let mut extractor: Box<dyn MetadataExtractor> = match cli.backend {
        Backend::Exiftool => Box::new(
            ExiftoolExtractor::spawn()
                .context("exiftoolが見つかりません。--backend exif を試してください")?,
        ),
        Backend::Exif => Box::new(ExifExtractor::new()),
    };

    let report = rename_directory(&options, &mut extractor)?;

    match cli.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => print_table(&report),
    }

    if report.dry_run {
        eprintln!("dry-runモード: 実ファイルは変更していません。");
    } else {
        eprintln!("リネーム完了！");
    }
    Ok(())
}

fn print_table(report: &BatchReport) {
    println!("元ファイル -> 新ファイル (結果)");
    for outcome in &report.outcomes {
        match outcome {
            FileOutcome::Renamed { from, to } => {
                println!("{} -> {} (renamed)", from.display(), to.display())
            }
            FileOutcome::Planned { from, to } => {
                println!("{} -> {} (planned)", from.display(), to.display())
            }
            FileOutcome::Unchanged { path } => println!("{} (unchanged)", path.display()),
            FileOutcome::NoDate { path } => println!("{} (no date)", path.display()),
            FileOutcome::ExtractionFailed { path, error } => {
                println!("{} (metadata error: {})", path.display(), error)
            }
            FileOutcome::RenameFailed { from, to, error } => println!(
                "{} -> {} (rename error: {})",
                from.display(),
                to.display(),
                error
            ),
        }
    }

    let stats = &report.stats;
    println!(
        "\n集計: scanned={} matched={} unsupported_skip={} renamed={} planned={} unchanged={} no_date={} failed={}",
        stats.scanned_files,
        stats.matched_files,
        stats.skipped_unsupported,
        stats.renamed,
        stats.planned,
        stats.unchanged,
        stats.no_date,
        stats.failed
    );
}
