//! Seam traits for the external collaborators the core consumes.
//!
//! All traits are object-safe and `Send + Sync` so the scheduler can hold
//! them behind `Arc<dyn _>` and run blocking calls off the async path.

mod analyzer;
mod hasher;
mod publisher;

pub use analyzer::ContentAnalyzer;
pub use hasher::{Blake3Hasher, ContentHasher};
pub use publisher::LedgerPublisher;
