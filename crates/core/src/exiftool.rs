use crate::extractor::{ExtractError, MetadataExtractor};
use crate::metadata::MetadataRecord;
use serde_json::{Map, Value};
use std::ffi::OsStr;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use tracing::debug;

const ERROR_KEY: &str = "ExifTool:Error";

/// One `exiftool -stay_open` process per batch; `-G -n` keeps group prefixes and raw values.
pub struct ExiftoolExtractor {
    child: Child,
    stdin: BufWriter<ChildStdin>,
    stdout: BufReader<ChildStdout>,
}

impl ExiftoolExtractor {
    pub fn spawn() -> Result<Self, ExtractError> {
        Self::spawn_program("exiftool")
    }

    pub fn spawn_program(program: impl AsRef<OsStr>) -> Result<Self, ExtractError> {
        let mut child = Command::new(program)
            .args(["-stay_open", "True", "-@", "-"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(ExtractError::Spawn)?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| ExtractError::Spawn(io::Error::other("stdinを取得できませんでした")))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| ExtractError::Spawn(io::Error::other("stdoutを取得できませんでした")))?;

        Ok(Self {
            child,
            stdin: BufWriter::new(stdin),
            stdout: BufReader::new(stdout),
        })
    }

    fn execute(&mut self, path: &Path) -> Result<String, ExtractError> {
        let arg = argument_line(path)?;
        writeln!(self.stdin, "-json")?;
        writeln!(self.stdin, "-G")?;
        writeln!(self.stdin, "-n")?;
        writeln!(self.stdin, "{}", arg)?;
        writeln!(self.stdin, "-execute")?;
        self.stdin.flush()?;

        let mut output = String::new();
        loop {
            let mut line = String::new();
            if self.stdout.read_line(&mut line)? == 0 {
                return Err(ExtractError::Io(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "exiftoolが途中で終了しました",
                )));
            }
            let trimmed = line.trim();
            if trimmed.starts_with("{ready") && trimmed.ends_with('}') {
                break;
            }
            output.push_str(&line);
        }
        Ok(output)
    }
}

impl MetadataExtractor for ExiftoolExtractor {
    fn extract(&mut self, path: &Path) -> Result<MetadataRecord, ExtractError> {
        debug!("exiftool: {}", path.display());
        let output = self.execute(path)?;
        parse_exiftool_json(&output)
    }
}

impl Drop for ExiftoolExtractor {
    fn drop(&mut self) {
        let _ = writeln!(self.stdin, "-stay_open");
        let _ = writeln!(self.stdin, "False");
        let _ = self.stdin.flush();
        let _ = self.child.wait();
    }
}

// `-@ -` reads one argument per line
fn argument_line(path: &Path) -> Result<String, ExtractError> {
    let line = path.to_string_lossy();
    if line.contains(['\n', '\r']) {
        return Err(ExtractError::Reported(format!(
            "改行を含むファイル名は扱えません: {}",
            line.escape_debug()
        )));
    }
    Ok(line.into_owned())
}

pub fn parse_exiftool_json(output: &str) -> Result<MetadataRecord, ExtractError> {
    if output.trim().is_empty() {
        return Err(ExtractError::NoOutput);
    }

    let entries: Vec<Map<String, Value>> = serde_json::from_str(output)?;
    let entry = entries.into_iter().next().ok_or(ExtractError::NoOutput)?;

    if let Some(message) = entry.get(ERROR_KEY) {
        return Err(ExtractError::Reported(value_to_string(message)));
    }

    Ok(entry
        .into_iter()
        .filter(|(key, value)| key != "SourceFile" && !value.is_null())
        .map(|(key, value)| {
            let value = value_to_string(&value);
            (key, value)
        })
        .collect())
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
