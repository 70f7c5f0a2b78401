//! Extracts item and quest data from the archived wiki pages and writes
//! `data/combined_data.json`. Run from the repository root.

use anyhow::Context;
use wikidata_engine::{run_pipeline, PipelineSettings};
use wikidata_logging::wiki_error;

fn main() -> anyhow::Result<()> {
    wikidata_logging::initialize();

    let repo_root = std::env::current_dir().context("cannot determine repository root")?;
    let settings = PipelineSettings::for_repo_root(&repo_root);

    let summary = run_pipeline(&settings)
        .inspect_err(|err| wiki_error!("Extraction failed: {err}"))
        .with_context(|| format!("extracting wiki data from {}", settings.input_dir.display()))?;

    for line in summary.report_lines() {
        println!("{line}");
    }
    Ok(())
}
