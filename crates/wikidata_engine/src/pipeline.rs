use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use wikidata_core::{extract_categories, is_hub_page, is_quest_page, ItemRecord, QuestRecord};
use wikidata_logging::{wiki_debug, wiki_info};

use crate::decode::{decode_html, DecodeError};
use crate::export::{write_combined_data, ExportError};
use crate::item::parse_item_page;
use crate::page::WikiPage;
use crate::quest::parse_quest_page;

/// Archive location relative to the repository root.
pub const WIKI_PAGES_DIR: &str = "assets/arcraiders_wiki_pages";
/// Output location relative to the repository root.
pub const COMBINED_DATA_FILE: &str = "data/combined_data.json";

const PAGE_EXTENSION: &str = "html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSettings {
    pub input_dir: PathBuf,
    pub output_path: PathBuf,
}

impl PipelineSettings {
    pub fn for_repo_root(root: &Path) -> Self {
        Self {
            input_dir: root.join(WIKI_PAGES_DIR),
            output_path: root.join(COMBINED_DATA_FILE),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineSummary {
    pub items: Vec<ItemRecord>,
    /// Indexed for requirement mapping; not written to disk yet.
    pub quests: Vec<QuestRecord>,
    pub pages_seen: usize,
    pub hubs_skipped: usize,
    pub output_path: PathBuf,
}

impl PipelineSummary {
    /// The two operator-facing lines printed after a run.
    pub fn report_lines(&self) -> [String; 2] {
        [
            format!(
                "Extracted {} items into {}",
                self.items.len(),
                self.output_path.display()
            ),
            format!(
                "Indexed {} quest summaries for future requirement mapping.",
                self.quests.len()
            ),
        ]
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("cannot read page directory {path}: {source}")]
    InputDir { path: PathBuf, source: io::Error },
    #[error("cannot read page {path}: {source}")]
    ReadPage { path: PathBuf, source: io::Error },
    #[error("cannot decode page {path}: {source}")]
    Decode { path: PathBuf, source: DecodeError },
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// What a single page contributed to the run.
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome {
    Hub,
    Quest(QuestRecord),
    Item(ItemRecord),
    /// Neither a quest nor a usable item page.
    NotExtracted,
}

/// Classifies one page (hub, then quest, then item) and runs the matching extractor.
pub fn process_page(stem: &str, raw_html: &str) -> PageOutcome {
    let categories = extract_categories(raw_html);
    // Hub detection needs no DOM, so skip the parse entirely.
    if is_hub_page(stem, &categories) {
        return PageOutcome::Hub;
    }
    let page = WikiPage::parse(raw_html);
    if is_quest_page(stem, &categories) {
        return PageOutcome::Quest(parse_quest_page(&page));
    }
    if !page.is_item_page(&categories) {
        return PageOutcome::NotExtracted;
    }
    parse_item_page(&page, &categories)
        .map(PageOutcome::Item)
        .unwrap_or(PageOutcome::NotExtracted)
}

/// `*.html` files inside `dir`, sorted by file name. Symlinks are followed.
pub fn list_pages(dir: &Path) -> Result<Vec<PathBuf>, PipelineError> {
    let input_err = |source: io::Error| PipelineError::InputDir {
        path: dir.to_path_buf(),
        source,
    };
    let mut pages = Vec::new();
    for entry in fs::read_dir(dir).map_err(input_err)? {
        let path = entry.map_err(input_err)?.path();
        if path.extension().and_then(|s| s.to_str()) != Some(PAGE_EXTENSION) {
            continue;
        }
        let meta = fs::metadata(&path).map_err(|source| PipelineError::ReadPage {
            path: path.clone(),
            source,
        })?;
        if meta.is_file() {
            pages.push(path);
        }
    }
    pages.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(pages)
}

fn read_page(path: &Path) -> Result<String, PipelineError> {
    let bytes = fs::read(path).map_err(|source| PipelineError::ReadPage {
        path: path.to_path_buf(),
        source,
    })?;
    let decoded = decode_html(&bytes).map_err(|source| PipelineError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    wiki_debug!("{}: decoded as {}", path.display(), decoded.encoding_label);
    Ok(decoded.html)
}

/// One sequential pass over the archive; any IO failure aborts before output is written.
pub fn run_pipeline(settings: &PipelineSettings) -> Result<PipelineSummary, PipelineError> {
    let pages = list_pages(&settings.input_dir)?;
    wiki_info!(
        "Processing {} pages from {:?}",
        pages.len(),
        settings.input_dir
    );

    let mut items = Vec::new();
    let mut quests = Vec::new();
    let mut hubs_skipped = 0;

    for path in &pages {
        let raw_html = read_page(path)?;
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        match process_page(&stem, &raw_html) {
            PageOutcome::Hub => {
                wiki_debug!("{stem}: hub page, skipped");
                hubs_skipped += 1;
            }
            PageOutcome::Quest(quest) => {
                wiki_debug!("{stem}: quest {:?} (trader {:?})", quest.quest_name, quest.trader);
                quests.push(quest);
            }
            PageOutcome::Item(item) => {
                wiki_debug!("{stem}: item {:?}", item.name);
                items.push(item);
            }
            PageOutcome::NotExtracted => {
                wiki_debug!("{stem}: not an item or quest page");
            }
        }
    }

    let output_path = write_combined_data(&items, &settings.output_path)?;
    wiki_info!(
        "Wrote {} items to {:?}; {} quests indexed, {} hubs skipped",
        items.len(),
        output_path,
        quests.len(),
        hubs_skipped
    );

    Ok(PipelineSummary {
        items,
        quests,
        pages_seen: pages.len(),
        hubs_skipped,
        output_path,
    })
}
