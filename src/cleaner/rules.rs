use std::sync::LazyLock;

use regex::{Captures, Regex};
use unicode_normalization::UnicodeNormalization;

use super::markers::{FAKE_BIO_OPENERS, JUNK_MARKERS};

// Zero-width and invisible characters: ZWSP/ZWNJ/ZWJ/LRM/RLM, BOM, soft
// hyphen, replacement char, line/paragraph separators, typographic space
// variants, bidi embeddings/overrides/isolates, Arabic letter mark.
static PHANTOM_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[\x{200B}-\x{200F}\x{FEFF}\x{00AD}\x{FFFD}\x{2028}\x{2029}\x{2002}-\x{200A}\x{202A}-\x{202E}\x{2066}-\x{2069}\x{061C}\x{FFFE}\x{FFFF}]",
    )
    .unwrap()
});

// HTML tags get stripped, inner text is kept
static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"</?[a-zA-Z][^>]*>").unwrap());

static HTML_ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:amp|lt|gt|quot|apos|nbsp|#([0-9]+)|#x([0-9a-fA-F]+));").unwrap()
});

// ASCII control characters except tab and line feed
static CONTROL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x00-\x08\x0B\x0C\x0E-\x1F\x7F]").unwrap());

static URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+").unwrap());

// Runs of 3+ emoji-style characters, optionally whitespace-separated
static EMOJI_SPAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:[\x{1F300}-\x{1F9FF}\x{2600}-\x{27BF}\x{200D}\x{FE0F}]\s*){3,}").unwrap()
});

static MULTI_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {2,}").unwrap());

/// Decode one matched HTML entity. Named entities come from a fixed table;
/// numeric entities (`&#NNN;`, `&#xHH;`) map to the code point. A numeric
/// entity that does not name a valid code point is left verbatim rather
/// than dropped, so decoding never loses text and never panics.
fn decode_entity(caps: &Captures) -> String {
    let full = &caps[0];
    let literal = match full {
        "&amp;" => Some("&"),
        "&lt;" => Some("<"),
        "&gt;" => Some(">"),
        "&quot;" => Some("\""),
        "&apos;" => Some("'"),
        "&nbsp;" => Some(" "),
        _ => None,
    };
    if let Some(literal) = literal {
        return literal.to_string();
    }

    let code_point = if let Some(dec) = caps.get(1) {
        dec.as_str().parse::<u32>().ok()
    } else if let Some(hex) = caps.get(2) {
        u32::from_str_radix(hex.as_str(), 16).ok()
    } else {
        None
    };

    match code_point.and_then(char::from_u32) {
        Some(c) => c.to_string(),
        None => full.to_string(),
    }
}

/// Truncate boilerplate tails (release calendars, CTAs, self-promo).
///
/// Fields that are entirely platform self-description rather than real
/// artist bios are emptied outright.
fn strip_boilerplate(s: &str) -> &str {
    if FAKE_BIO_OPENERS.iter().any(|opener| s.trim_start().starts_with(opener)) {
        return "";
    }

    match JUNK_MARKERS.iter().filter_map(|marker| s.find(marker)).min() {
        Some(earliest) => &s[..earliest],
        None => s,
    }
}

/// Apply the full cleaning pipeline to one string.
///
/// The rule order is fixed: normalization and invisible-character removal
/// first so the later substring matches see canonical text, markup before
/// entities so decoded `<`/`>` cannot form new tags, boilerplate truncation
/// before URL/emoji removal so marker matching sees the original phrasing,
/// whitespace collapse last.
pub fn clean_text(s: &str) -> String {
    let s: String = s.nfc().collect();
    let s = PHANTOM_CHARS.replace_all(&s, "");
    let s = HTML_TAG.replace_all(&s, "");
    let s = HTML_ENTITY.replace_all(&s, decode_entity);
    let s = CONTROL_CHARS.replace_all(&s, "");
    let s = strip_boilerplate(&s);
    let s = URL.replace_all(s, "");
    let s = EMOJI_SPAM.replace_all(&s, "");
    let s = MULTI_SPACE.replace_all(&s, " ");
    s.trim().to_string()
}
