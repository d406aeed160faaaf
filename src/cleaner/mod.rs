//! Text sanitization for scraped metadata records.
//!
//! The cleaning pipeline is a fixed, ordered sequence of lossy transforms
//! applied to every string leaf of a record:
//!
//! 1. NFC normalization
//! 2. Invisible/zero-width character removal
//! 3. HTML tag stripping
//! 4. HTML entity decoding
//! 5. ASCII control character removal
//! 6. Boilerplate truncation / fake-bio rejection
//! 7. URL removal
//! 8. Emoji-spam removal
//! 9. Whitespace collapse and trim
//!
//! Every transform is pure and deterministic; the marker lists driving
//! step 6 live in [`markers`] as plain data tables.

pub mod markers;
pub mod rules;
pub mod value;

pub use rules::clean_text;
pub use value::clean_value;
