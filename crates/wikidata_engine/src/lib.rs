//! Wikidata engine: HTML extraction and the archive-to-JSON pipeline.
mod decode;
mod export;
mod item;
mod page;
mod persist;
mod pipeline;
mod quest;

pub use decode::{decode_html, DecodeError, DecodedHtml};
pub use export::{render_combined_data, write_combined_data, ExportError};
pub use item::{parse_item_page, parse_sell_price};
pub use page::WikiPage;
pub use persist::{ensure_output_dir, replace_file_atomically, PersistError};
pub use pipeline::{
    list_pages, process_page, run_pipeline, PageOutcome, PipelineError, PipelineSettings,
    PipelineSummary, COMBINED_DATA_FILE, WIKI_PAGES_DIR,
};
pub use quest::{parse_quest_page, trader_from_description};
