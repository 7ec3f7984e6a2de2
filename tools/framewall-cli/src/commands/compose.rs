//! Compose photos onto a wall template and export the order raster.

use std::path::PathBuf;

use framewall_input::Reorder;
use framewall_model::{SlotStore, TemplateSize};
use framewall_render::export::DEFAULT_EXPORT_FILE_NAME;
use framewall_render::{
    color_by_name, export_composite, handoff_link, Color, ExportJob, ExportTracker, FrameStyle,
    BASE_CANVAS_WIDTH, ORDER_CONTACT,
};
use framewall_session::CropSession;

pub async fn run(
    photos: Vec<PathBuf>,
    count: u8,
    frame_color: String,
    output: Option<PathBuf>,
    auto_crop: bool,
    moves: Vec<String>,
    handoff: bool,
) -> anyhow::Result<()> {
    let size = TemplateSize::from_frame_count(count as usize)
        .ok_or_else(|| anyhow::anyhow!("Unsupported frame count: {count}. Use 5 or 6"))?;

    let palette = color_by_name(&frame_color)
        .ok_or_else(|| anyhow::anyhow!("Unknown frame color: {frame_color}. See `framewall colors`"))?;
    let style = FrameStyle::with_frame_color(
        Color::from_hex(palette.hex).map_err(|e| anyhow::anyhow!("{e}"))?,
    );

    if photos.len() > size.frame_count() {
        tracing::warn!(
            photos = photos.len(),
            frames = size.frame_count(),
            "More photos than frames; extras are ignored"
        );
    }

    let mut store = SlotStore::new(size);
    let ids: Vec<_> = store.slots().iter().map(|s| s.id).collect();

    for (id, path) in ids.iter().zip(&photos) {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable photo");
                continue;
            }
        };
        store.upload(*id, bytes);
        println!("  Slot {id}: {}", path.display());

        if auto_crop {
            let slot = store.slot(*id).and_then(|s| s.original).and_then(|h| store.bytes(h));
            if let Some(source) = slot {
                let session = CropSession::open(&source, None);
                if let Some(saved) = session.save().map_err(|e| anyhow::anyhow!("{e}"))? {
                    store
                        .apply_edit(*id, saved.artifact, saved.descriptor)
                        .map_err(|e| anyhow::anyhow!("{e}"))?;
                }
            }
        }
    }

    for spec in &moves {
        let command = parse_move(spec)?;
        store.reorder(command.from, command.to);
        println!("  Moved: {command}");
    }

    let output_path = output.unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE_NAME));
    println!("Composing {}-frame wall ({})", size.frame_count(), palette.name);
    println!("  Filled slots: {}/{}", store.filled_count(), size.frame_count());
    println!("  Output: {}", output_path.display());

    let tracker = ExportTracker::new();
    let job = ExportJob {
        output_path,
        base_width: BASE_CANVAS_WIDTH,
    };
    let path = export_composite(&store, &style, &job, &tracker)
        .await
        .map_err(|e| anyhow::anyhow!("Export failed: {e}"))?;
    println!("Export complete: {}", path.display());

    if handoff {
        let link = handoff_link(&tracker, ORDER_CONTACT, size, palette.name)
            .map_err(|e| anyhow::anyhow!("{e}"))?;
        println!("Order link: {link}");
    }

    // Remember the chosen color for the next run.
    let mut config = framewall_common::config::AppConfig::load();
    config.frame_color = palette.hex.to_string();
    if let Err(e) = config.save() {
        tracing::warn!(error = %e, "Could not persist frame color preference");
    }

    Ok(())
}

fn parse_move(spec: &str) -> anyhow::Result<Reorder> {
    let (from, to) = spec
        .split_once(':')
        .ok_or_else(|| anyhow::anyhow!("Invalid move '{spec}'. Use FROM:TO, e.g. 0:3"))?;
    Ok(Reorder {
        from: from.trim().parse()?,
        to: to.trim().parse()?,
    })
}
