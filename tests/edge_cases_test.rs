/// Edge cases: idempotence across a whole pass, deep nesting, heavy corruption
mod common;

use common::{read_output, read_output_lines, write_input};
use context_clean::clean_file;
use serde_json::json;

#[test]
fn test_cleaning_a_cleaned_file_is_a_no_op() {
    let (dir, input) = write_input(&[
        r#"{"bio": "<b>Act</b> &amp; crew\u200b https://genius.com/a 🔥🔥🔥  live"}"#,
        r#"{"wiki": "Real content here. WELCOME TO GENIUS and more junk"}"#,
        r#"{"a": 1}{"b": "x  y"}"#,
    ]);
    let first_output = dir.path().join("pass1.jsonl");
    let second_output = dir.path().join("pass2.jsonl");

    let first = clean_file(&input, &first_output).unwrap();
    let second = clean_file(&first_output, &second_output).unwrap();

    assert_eq!(first.output_records, second.total_lines);
    assert_eq!(second.skipped_lines, 0);
    assert_eq!(second.split_lines, 0);
    assert_eq!(read_output_lines(&first_output), read_output_lines(&second_output));
}

#[test]
fn test_deeply_nested_record_cleaned_at_every_level() {
    let (dir, input) = write_input(&[
        r#"{"track": {"title": "A &amp; B", "credits": [{"name": "<i>C</i>"}, {"name": "D&#233;"}]}}"#,
    ]);
    let output = dir.path().join("out.jsonl");

    clean_file(&input, &output).unwrap();

    let records = read_output(&output);
    assert_eq!(
        records[0],
        json!({"track": {"title": "A & B", "credits": [{"name": "C"}, {"name": "Dé"}]}})
    );
}

#[test]
fn test_corrupt_object_mid_line_recovers_later_object() {
    // first object on the line is truncated; the second is intact
    let (dir, input) = write_input(&[r#"{"broken": "no close {"intact": true}"#]);
    let output = dir.path().join("out.jsonl");

    let stats = clean_file(&input, &output).unwrap();

    assert_eq!(stats.output_records, 1);
    assert_eq!(stats.skipped_lines, 0);
    assert_eq!(read_output(&output), vec![json!({"intact": true})]);
}

#[test]
fn test_fake_bio_field_emptied_but_record_kept() {
    let (dir, input) = write_input(&[
        r#"{"name": "Community Page", "bio": "Genius Romanizations is the place for romanized lyrics"}"#,
    ]);
    let output = dir.path().join("out.jsonl");

    clean_file(&input, &output).unwrap();

    let records = read_output(&output);
    assert_eq!(records[0], json!({"name": "Community Page", "bio": ""}));
}

#[test]
fn test_line_of_only_garbage_braces() {
    let (dir, input) = write_input(&["{{{{", r#"{"ok": 1}"#]);
    let output = dir.path().join("out.jsonl");

    let stats = clean_file(&input, &output).unwrap();

    assert_eq!(stats.skipped_lines, 1);
    assert_eq!(stats.output_records, 1);
}

#[test]
fn test_whitespace_only_file_produces_nothing() {
    let (dir, input) = write_input(&["   ", "\t", ""]);
    let output = dir.path().join("out.jsonl");

    let stats = clean_file(&input, &output).unwrap();

    assert_eq!(stats.total_lines, 3);
    assert_eq!(stats.output_records, 0);
    assert_eq!(stats.skipped_lines, 0);
}
