//! Single-pass file orchestration: read, recover, clean, write.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cleaner::clean_value;
use crate::recovery::recover_objects;

/// Counters for one cleaning pass. Created per file, single writer,
/// reported once at the end and not persisted.
#[derive(Debug, Default, Clone, Serialize)]
pub struct RunStats {
    /// Lines read from the input, blank lines included.
    pub total_lines: u64,
    /// Cleaned records written to the output.
    pub output_records: u64,
    /// Lines that held more than one concatenated object.
    pub split_lines: u64,
    /// Lines from which no object could be recovered.
    pub skipped_lines: u64,
}

/// Derive the conventional output path: `<stem>_cleaned.<ext>` next to the
/// input file.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    let mut file_name = format!("{stem}_cleaned");
    if let Some(ext) = input.extension() {
        file_name.push('.');
        file_name.push_str(&ext.to_string_lossy());
    }
    input.with_file_name(file_name)
}

/// Clean one JSONL file into `output`, one JSON object per line.
///
/// Line-level problems are absorbed into the returned [`RunStats`] (with a
/// per-line diagnostic on stderr); only whole-pass I/O failures are errors.
/// The input is opened before the output is created, so a missing input
/// never leaves a partial output file behind.
pub fn clean_file(input: &Path, output: &Path) -> Result<RunStats> {
    let infile = File::open(input)
        .with_context(|| format!("Failed to open input file: {}", input.display()))?;
    let mut reader = BufReader::new(infile);

    let outfile = File::create(output)
        .with_context(|| format!("Failed to create output file: {}", output.display()))?;
    let mut writer = BufWriter::new(outfile);

    let mut stats = RunStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .with_context(|| format!("Failed to read line from {}", input.display()))?;
        if read == 0 {
            break;
        }
        stats.total_lines += 1;

        // Scraper output is not guaranteed to be valid UTF-8; bad bytes
        // become replacement chars, which the cleaner strips anyway.
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let objects = recover_objects(line);
        if objects.is_empty() {
            stats.skipped_lines += 1;
            eprintln!("  skip line {}: unparseable", stats.total_lines);
            continue;
        }
        if objects.len() > 1 {
            stats.split_lines += 1;
        }

        for obj in objects {
            let cleaned = clean_value(obj);
            // serde_json emits non-ASCII literally, keeping output human-readable
            let json = serde_json::to_string(&cleaned).context("Failed to serialize record")?;
            writeln!(writer, "{json}")
                .with_context(|| format!("Failed to write to {}", output.display()))?;
            stats.output_records += 1;
        }
    }

    writer.flush().with_context(|| format!("Failed to flush {}", output.display()))?;
    Ok(stats)
}
