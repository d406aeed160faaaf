use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::processor::{clean_file, default_output_path};

#[derive(Parser)]
#[command(name = "context-clean")]
#[command(version = "0.1.0")]
#[command(about = "Clean web-scraping artifacts from context JSONL files", long_about = None)]
pub struct Cli {
    /// Input JSONL file (one scraped record per line)
    pub input: PathBuf,

    /// Output path (defaults to `<input stem>_cleaned.<ext>` next to the input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let output = cli.output.clone().unwrap_or_else(|| default_output_path(&cli.input));
    let stats = clean_file(&cli.input, &output)?;

    println!("Input:   {}", cli.input.display());
    println!("Output:  {}", output.display());
    println!("Lines read:      {}", stats.total_lines);
    println!("Records written: {}", stats.output_records);
    if stats.split_lines > 0 {
        println!("Split lines:     {} (had concatenated objects)", stats.split_lines);
    }
    if stats.skipped_lines > 0 {
        println!("Skipped:         {} (unparseable)", stats.skipped_lines);
    }

    Ok(())
}
