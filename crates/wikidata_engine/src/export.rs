use std::path::{Path, PathBuf};

use wikidata_core::ItemRecord;

use crate::persist::{replace_file_atomically, PersistError};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to serialize item records: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
}

/// Renders item records as a 2-space indented JSON array with non-ASCII kept literal.
pub fn render_combined_data(items: &[ItemRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(items)
}

/// Writes the combined dataset to `output_path`, replacing any previous file.
pub fn write_combined_data(
    items: &[ItemRecord],
    output_path: &Path,
) -> Result<PathBuf, ExportError> {
    let content = render_combined_data(items)?;
    Ok(replace_file_atomically(output_path, &content)?)
}
