//! Raster export of the composed wall.
//!
//! Exports render at twice the preview resolution and are written
//! atomically: the PNG is encoded in memory, written to a temp file
//! next to the destination, then renamed into place. The tracker flips
//! to completed only after the rename succeeds.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use framewall_common::error::{FramewallError, FramewallResult};
use framewall_model::SlotStore;
use image::ImageFormat;

use crate::compositor::{self, BASE_CANVAS_WIDTH};
use crate::style::FrameStyle;

/// Export renders at twice the preview resolution.
pub const EXPORT_PIXEL_RATIO: u32 = 2;

/// Default destination file name for the order raster.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "gallery-order.png";

/// Parameters for one export run.
#[derive(Debug, Clone)]
pub struct ExportJob {
    /// Destination path for the finished PNG.
    pub output_path: PathBuf,

    /// Preview-resolution canvas width; the export doubles it.
    pub base_width: u32,
}

impl ExportJob {
    /// Job writing `gallery-order.png` into `dir` at the default width.
    pub fn into_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            output_path: dir.as_ref().join(DEFAULT_EXPORT_FILE_NAME),
            base_width: BASE_CANVAS_WIDTH,
        }
    }
}

/// Shared flag recording whether an export has completed.
///
/// Order hand-off refuses to build a link until this is set. Cloning
/// shares the flag.
#[derive(Debug, Clone, Default)]
pub struct ExportTracker(Arc<AtomicBool>);

impl ExportTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an export finished since the tracker was created/reset.
    pub fn completed(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Clear the flag, e.g. when the composition changes after export.
    pub fn reset(&self) {
        self.0.store(false, Ordering::Release);
    }

    pub(crate) fn mark_completed(&self) {
        self.0.store(true, Ordering::Release);
    }
}

/// Render the composite at export resolution and write it to disk.
///
/// Empty slots export as placeholders; a partially filled wall is a
/// valid order. Render failures surface before any file is touched.
pub async fn export_composite(
    store: &SlotStore,
    style: &FrameStyle,
    job: &ExportJob,
    tracker: &ExportTracker,
) -> FramewallResult<PathBuf> {
    let width = job.base_width * EXPORT_PIXEL_RATIO;
    let canvas = compositor::render_composite(store, style, width)?;
    tracing::info!(
        width = canvas.width(),
        height = canvas.height(),
        filled = store.filled_count(),
        "Composite rendered for export"
    );

    let mut encoded = Vec::new();
    canvas
        .write_to(&mut Cursor::new(&mut encoded), ImageFormat::Png)
        .map_err(|e| FramewallError::export(format!("PNG encoding failed: {e}")))?;

    let tmp_path = job.output_path.with_extension("png.tmp");
    tokio::fs::write(&tmp_path, &encoded).await?;
    tokio::fs::rename(&tmp_path, &job.output_path).await?;

    tracker.mark_completed();
    tracing::info!(path = %job.output_path.display(), bytes = encoded.len(), "Export written");
    Ok(job.output_path.clone())
}
