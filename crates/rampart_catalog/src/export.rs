//! # Asset Export
//!
//! Writes every card's art and record to disk, then the catalog index.
//!
//! ## Output Layout
//!
//! ```text
//! <out>/
//! ├── index.json
//! └── cards/
//!     └── <id>/
//!         ├── art.svg
//!         └── card.json
//! ```
//!
//! ## Failure Model
//!
//! - Every file is written to a sibling `.tmp` and renamed into place, so
//!   re-exporting over an existing tree is always safe.
//! - Cards are independent: a failed card is reported in the
//!   [`ExportReport`] and the remaining cards still export.
//! - Only failures that affect the whole run (the `cards/` directory or the
//!   index itself) abort with an error.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use crossbeam_channel::unbounded;
use rampart_procedural::{render_image, VisualConfig, VisualParameterGenerator};

use crate::card::{CardAsset, CardRecord};
use crate::catalog::Catalog;
use crate::error::{CatalogError, CatalogResult};
use crate::index::{CatalogIndex, IndexEntry, ART_FILE, CARDS_DIR, INDEX_FILE, RECORD_FILE};

/// Export settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    /// Output root.
    pub out_dir: PathBuf,
    /// Worker threads (at least one is always used).
    pub workers: usize,
}

impl ExportOptions {
    /// Exports to `out_dir` with one worker per available core.
    #[must_use]
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            workers: std::thread::available_parallelism().map_or(1, NonZeroUsize::get),
        }
    }

    /// Overrides the worker count.
    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }
}

/// Paths of the output tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetLayout {
    root: PathBuf,
}

impl AssetLayout {
    /// Layout rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Output root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding all card directories.
    #[must_use]
    pub fn cards_dir(&self) -> PathBuf {
        self.root.join(CARDS_DIR)
    }

    /// Directory of one card.
    #[must_use]
    pub fn card_dir(&self, id: &str) -> PathBuf {
        self.cards_dir().join(id)
    }

    /// SVG path of one card.
    #[must_use]
    pub fn art_path(&self, id: &str) -> PathBuf {
        self.card_dir(id).join(ART_FILE)
    }

    /// JSON record path of one card.
    #[must_use]
    pub fn record_path(&self, id: &str) -> PathBuf {
        self.card_dir(id).join(RECORD_FILE)
    }

    /// Index path.
    #[must_use]
    pub fn index_path(&self) -> PathBuf {
        self.root.join(INDEX_FILE)
    }
}

/// A card that could not be exported.
#[derive(Debug)]
pub struct ExportFailure {
    /// Card id.
    pub id: String,
    /// What went wrong.
    pub error: CatalogError,
}

/// Outcome of a catalog export.
#[derive(Debug, Default)]
pub struct ExportReport {
    /// Cards written, sorted by id.
    pub exported: Vec<IndexEntry>,
    /// Cards that failed, sorted by id.
    pub failures: Vec<ExportFailure>,
}

impl ExportReport {
    /// Returns true if every card exported.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Generates, renders and writes one card.
///
/// # Errors
///
/// Returns `Io` if the card directory or a file cannot be written, or
/// `Serialize` if the record cannot be encoded.
pub fn export_card(
    card: &CardRecord,
    generator: &VisualParameterGenerator<'_>,
    layout: &AssetLayout,
) -> CatalogResult<IndexEntry> {
    let visuals = generator.generate(&card.identity());
    let svg = render_image(&visuals);

    let dir = layout.card_dir(&card.id);
    std::fs::create_dir_all(&dir).map_err(|e| CatalogError::io("create directory", &dir, e))?;

    write_atomic(&layout.art_path(&card.id), svg.as_bytes())?;

    let asset = CardAsset {
        card: card.clone(),
        visuals,
    };
    let mut record = serde_json::to_string_pretty(&asset).map_err(|e| CatalogError::Serialize {
        what: format!("record for {}", card.id),
        reason: e.to_string(),
    })?;
    record.push('\n');
    write_atomic(&layout.record_path(&card.id), record.as_bytes())?;

    tracing::debug!(id = %card.id, "exported card");
    Ok(IndexEntry::for_card(card))
}

/// Exports every card in `catalog`, then writes the index.
///
/// # Errors
///
/// Returns an error only if the `cards/` directory or the index cannot be
/// written. Per-card failures are collected in the report.
pub fn export_catalog(
    catalog: &Catalog,
    config: &VisualConfig,
    options: &ExportOptions,
) -> CatalogResult<ExportReport> {
    let layout = AssetLayout::new(&options.out_dir);
    let cards_dir = layout.cards_dir();
    std::fs::create_dir_all(&cards_dir)
        .map_err(|e| CatalogError::io("create directory", &cards_dir, e))?;

    let generator = VisualParameterGenerator::new(config);
    let workers = options.workers.clamp(1, catalog.len().max(1));

    let (job_tx, job_rx) = unbounded::<&CardRecord>();
    for card in catalog {
        // The receiver is alive until the end of this function.
        let _ = job_tx.send(card);
    }
    drop(job_tx);

    let (result_tx, result_rx) = unbounded();
    std::thread::scope(|scope| {
        for _ in 0..workers {
            let jobs = job_rx.clone();
            let results = result_tx.clone();
            let generator = &generator;
            let layout = &layout;
            scope.spawn(move || {
                for card in jobs {
                    let outcome = export_card(card, generator, layout).map_err(|error| {
                        tracing::warn!(id = %card.id, %error, "card export failed");
                        ExportFailure {
                            id: card.id.clone(),
                            error,
                        }
                    });
                    let _ = results.send(outcome);
                }
            });
        }
    });
    drop(result_tx);

    let mut report = ExportReport::default();
    for outcome in result_rx {
        match outcome {
            Ok(entry) => report.exported.push(entry),
            Err(failure) => report.failures.push(failure),
        }
    }
    report.failures.sort_by(|a, b| a.id.cmp(&b.id));

    let index = CatalogIndex::new(report.exported);
    write_atomic(&layout.index_path(), index.to_json()?.as_bytes())?;
    report.exported = index.cards;

    tracing::info!(
        out = %layout.root().display(),
        exported = report.exported.len(),
        failed = report.failures.len(),
        workers,
        "catalog export finished"
    );
    Ok(report)
}

/// Writes to a sibling temp file and renames it over `path`.
fn write_atomic(path: &Path, bytes: &[u8]) -> CatalogResult<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    std::fs::write(&tmp, bytes).map_err(|e| CatalogError::io("write", &tmp, e))?;
    std::fs::rename(&tmp, path).map_err(|e| {
        let _ = std::fs::remove_file(&tmp);
        CatalogError::io("rename", path, e)
    })
}
