// Cache path utilities.
// Resolves the cache directory and maps cache slot keys to files inside it.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

/// Key of the slot mirroring the FAQ list.
pub const FAQS_KEY: &str = "faqs";

/// Get the base cache directory (~/.cache/faqdesk on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "faqdesk").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path to the file backing a cache slot.
pub fn slot_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{}.json", sanitize_name(key)))
}

/// Path to the default log file.
pub fn log_path(dir: &Path) -> PathBuf {
    dir.join("faqdesk.log")
}

/// Sanitize a name for use in filesystem paths.
/// Replaces problematic characters with underscores.
fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect()
}
