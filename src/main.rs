use anyhow::Result;

fn main() -> Result<()> {
    context_clean::cli::run()
}
