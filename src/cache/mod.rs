// Cache module for local filesystem caching.
// Backs the named cache slots that mirror the FAQ list between runs.

pub mod paths;
pub mod store;

pub use paths::{FAQS_KEY, cache_dir, log_path, slot_path};
pub use store::{CachedData, read_cached, read_text, write_cached, write_text};
