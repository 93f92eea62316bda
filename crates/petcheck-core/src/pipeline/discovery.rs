//! Listing the images of one directory.

use std::path::Path;
use walkdir::WalkDir;

use crate::config::ProcessingConfig;

/// Finds image file names in a directory (non-recursive).
pub struct FileDiscovery {
    config: ProcessingConfig,
}

impl FileDiscovery {
    /// Create a new file discovery instance.
    pub fn new(config: ProcessingConfig) -> Self {
        Self { config }
    }

    /// File names of the regular files directly inside `dir`.
    ///
    /// Hidden files (leading `.`) are skipped, as are files whose extension
    /// is not accepted. Names are sorted for deterministic ordering.
    pub fn discover(&self, dir: &Path) -> std::io::Result<Vec<String>> {
        if !dir.is_dir() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("not a directory: {}", dir.display()),
            ));
        }

        let mut names: Vec<String> = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
            .filter(|name| !is_hidden(name) && self.is_supported(name))
            .collect();

        names.sort();
        Ok(names)
    }

    /// Check if a file name has an accepted extension.
    fn is_supported(&self, name: &str) -> bool {
        if self.config.extensions.is_empty() {
            return true;
        }
        Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                self.config
                    .extensions
                    .iter()
                    .any(|accepted| accepted.eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false)
    }
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}
