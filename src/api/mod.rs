// FAQ API module.
// Provides the HTTP client and types for the remote FAQ collection.

pub mod client;
pub mod endpoints;
pub mod types;

#[cfg(test)]
pub mod fake;

pub use client::FaqClient;
pub use endpoints::FaqApi;
pub use types::{Faq, NewFaq};
