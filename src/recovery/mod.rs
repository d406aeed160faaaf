//! Recovery of JSON objects from malformed scraper output lines.
//!
//! The scraper sometimes writes two or more complete JSON objects onto one
//! line with no separator. Recovery is a best-effort forward scan for that
//! defect, not a general JSON repair: an object with internal corruption is
//! unrecoverable and scanning resumes at the next `{`.

use serde_json::Value;

/// Extract every well-formed JSON object from one raw line.
///
/// A line that parses whole as a single object yields exactly that object.
/// A whole-line parse producing a non-object (bare number, list, string) is
/// discarded; the corpus is defined to be object-per-line. Otherwise the
/// line is scanned for concatenated objects. Never errors; a line from
/// which nothing can be recovered yields an empty vec, and the caller is
/// responsible for counting it.
pub fn recover_objects(line: &str) -> Vec<Value> {
    let line = line.trim();

    if let Ok(value) = serde_json::from_str::<Value>(line) {
        return match value {
            Value::Object(_) => vec![value],
            _ => Vec::new(),
        };
    }

    let mut objects = Vec::new();
    let mut idx = 0;

    while idx < line.len() {
        // Trailing-content-tolerant decode of one value at the current offset
        let mut stream = serde_json::Deserializer::from_str(&line[idx..]).into_iter::<Value>();
        if let Some(Ok(value)) = stream.next() {
            idx += stream.byte_offset();
            if value.is_object() {
                objects.push(value);
            }
            while idx < line.len() && matches!(line.as_bytes()[idx], b' ' | b'\t') {
                idx += 1;
            }
            continue;
        }

        // Decode failed here: jump to the next '{' strictly after the
        // current offset and retry. This can swallow an object whose brace
        // sits inside a string literal of the garbage before it; accepted.
        match line[idx..].char_indices().skip(1).find(|&(_, c)| c == '{') {
            Some((offset, _)) => idx += offset,
            None => break,
        }
    }

    objects
}
