use crate::metadata::NamingMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT_DIR: &str = "main";
pub const DEFAULT_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "tiff", "raw", "arw", "cr2"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameOptions {
    pub input_dir: PathBuf,
    pub extensions: Vec<String>,
    pub mode: NamingMode,
    pub dry_run: bool,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            mode: NamingMode::default(),
            dry_run: false,
        }
    }
}

impl RenameOptions {
    pub fn accepts(&self, path: &Path) -> bool {
        let Some(ext) = path.extension() else {
            return false;
        };
        let ext = ext.to_string_lossy();
        self.extensions
            .iter()
            .map(|e| e.trim_start_matches('.'))
            .any(|e| e.eq_ignore_ascii_case(&ext))
    }
}

#[cfg(test)]
mod tests {
    use super::RenameOptions;
    use std::path::{Path, PathBuf};

    #[test]
    fn default_extensions_match_case_insensitively() {
        let options = RenameOptions::default();
        assert_eq!(options.input_dir, PathBuf::from("main"));
        for name in [
            "a.jpg", "a.JPG", "a.Jpeg", "a.png", "a.TIFF", "a.raw", "a.ARW", "a.cr2",
        ] {
            assert!(options.accepts(Path::new(name)), "{name} should be accepted");
        }
        for name in ["a.txt", "a.heic", "a.jpg.bak", "jpg", ".jpg", "a."] {
            assert!(!options.accepts(Path::new(name)), "{name} should be skipped");
        }
    }

    #[test]
    fn custom_extensions_may_carry_a_leading_dot() {
        let options = RenameOptions {
            extensions: vec![".heic".to_string(), "DNG".to_string()],
            ..RenameOptions::default()
        };
        assert!(options.accepts(Path::new("x.HEIC")));
        assert!(options.accepts(Path::new("x.dng")));
        assert!(!options.accepts(Path::new("x.jpg")));
    }
}
