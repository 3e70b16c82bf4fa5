use crate::metadata::DerivedName;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub fn base_name(name: &DerivedName) -> String {
    match name.device.as_deref() {
        Some(device) => format!("{}_{}", device, name.timestamp),
        None => name.timestamp.clone(),
    }
}

pub fn candidate_file_name(base: &str, counter: usize, extension: &str) -> String {
    if counter == 0 {
        format!("{}{}", base, extension)
    } else {
        format!("{}_{}{}", base, counter, extension)
    }
}

#[derive(Debug, Default)]
pub struct FilenameAllocator {
    reserved: HashSet<PathBuf>,
    released: HashSet<PathBuf>,
}

impl FilenameAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(
        &self,
        directory: &Path,
        base: &str,
        extension: &str,
        source: Option<&Path>,
    ) -> PathBuf {
        let mut counter = 0usize;
        loop {
            let candidate = directory.join(candidate_file_name(base, counter, extension));
            if self.is_available(&candidate, source) {
                return candidate;
            }
            counter += 1;
        }
    }

    pub fn reserve(&mut self, path: PathBuf) {
        self.released.remove(&path);
        self.reserved.insert(path);
    }

    pub fn release(&mut self, path: PathBuf) {
        self.reserved.remove(&path);
        self.released.insert(path);
    }

    fn is_available(&self, candidate: &Path, source: Option<&Path>) -> bool {
        if self.reserved.contains(candidate) {
            return false;
        }
        if source == Some(candidate) || self.released.contains(candidate) {
            return true;
        }
        // symlink_metadata so that a dangling link still blocks the name
        candidate.symlink_metadata().is_err()
    }
}
