//! context-clean - Sanitize web-scraped JSONL metadata for training pipelines
//!
//! This library cleans corpora of scraped JSON metadata records (one object
//! per line) so they are safe to feed into a text-generation pipeline. It
//! handles:
//!
//! - Recovering objects from malformed lines where the scraper concatenated
//!   several JSON objects without a separator
//! - Stripping HTML tags and decoding HTML entities
//! - Removing invisible/zero-width Unicode, control characters, inline URLs
//!   and emoji spam
//! - Truncating known platform boilerplate (release calendars, CTAs,
//!   self-promotional text) out of free-text fields
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use context_clean::{clean_file, default_output_path};
//!
//! let input = Path::new("data/context_17k.jsonl");
//! let stats = clean_file(input, &default_output_path(input))?;
//! println!("Wrote {} records", stats.output_records);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cleaner;
pub mod cli;
pub mod processor;
pub mod recovery;

// Re-export commonly used functions
pub use cleaner::{clean_text, clean_value};
pub use processor::{RunStats, clean_file, default_output_path};
pub use recovery::recover_objects;
