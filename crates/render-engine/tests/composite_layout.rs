//! End-to-end composition scenarios: upload, edit, reorder, export,
//! and order hand-off against a real slot store.

use std::io::Cursor;

use framewall_model::{template, SlotStore, TemplateSize};
use framewall_render::{
    export_composite, frame_pixel_rect, handoff_link, photo_area, render_composite, ExportJob,
    ExportTracker, FrameStyle, BASE_CANVAS_WIDTH, ORDER_CONTACT,
};
use framewall_session::CropSession;
use image::{ImageFormat, Rgba, RgbaImage};

fn solid_png(r: u8, g: u8, b: u8, w: u32, h: u32) -> Vec<u8> {
    let img = RgbaImage::from_pixel(w, h, Rgba([r, g, b, 255]));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

fn center_color(canvas: &RgbaImage, style: &FrameStyle, size: TemplateSize, index: usize) -> [u8; 3] {
    let canvas_w = canvas.width();
    let canvas_h = canvas.height();
    let rect = &template::positions_for(size)[index];
    let photo = photo_area(frame_pixel_rect(rect, canvas_w, canvas_h), style, canvas_w);
    let (cx, cy) = photo.center();
    let px = canvas.get_pixel(cx, cy);
    [px[0], px[1], px[2]]
}

#[test]
fn reorder_swaps_rendered_photos_between_frames() {
    let mut store = SlotStore::new(TemplateSize::Six);
    let style = FrameStyle::default();
    let first = store.slots()[0].id;
    let second = store.slots()[1].id;

    store.upload(first, solid_png(200, 20, 20, 64, 48));
    store.upload(second, solid_png(20, 20, 200, 64, 48));

    let before = render_composite(&store, &style, 820).unwrap();
    assert_eq!(center_color(&before, &style, TemplateSize::Six, 0), [200, 20, 20]);
    assert_eq!(center_color(&before, &style, TemplateSize::Six, 1), [20, 20, 200]);

    store.reorder(0, 1);

    let after = render_composite(&store, &style, 820).unwrap();
    assert_eq!(center_color(&after, &style, TemplateSize::Six, 0), [20, 20, 200]);
    assert_eq!(center_color(&after, &style, TemplateSize::Six, 1), [200, 20, 20]);
}

#[test]
fn fully_filled_six_wall_shows_every_photo() {
    let mut store = SlotStore::new(TemplateSize::Six);
    let style = FrameStyle::default();
    let colors: [[u8; 3]; 6] = [
        [220, 30, 30],
        [30, 220, 30],
        [30, 30, 220],
        [220, 220, 30],
        [30, 220, 220],
        [220, 30, 220],
    ];

    let ids: Vec<_> = store.slots().iter().map(|s| s.id).collect();
    for (id, [r, g, b]) in ids.iter().zip(colors) {
        store.upload(*id, solid_png(r, g, b, 64, 48));
    }

    let canvas = render_composite(&store, &style, 820).unwrap();
    for (index, expected) in colors.iter().enumerate() {
        assert_eq!(
            &center_color(&canvas, &style, TemplateSize::Six, index),
            expected,
            "frame {index}"
        );
    }
}

#[test]
fn empty_slots_render_as_placeholders_among_filled_ones() {
    let mut store = SlotStore::new(TemplateSize::Five);
    let style = FrameStyle::default();
    let first = store.slots()[0].id;
    store.upload(first, solid_png(10, 180, 10, 64, 48));

    let canvas = render_composite(&store, &style, 820).unwrap();
    assert_eq!(center_color(&canvas, &style, TemplateSize::Five, 0), [10, 180, 10]);
    assert_eq!(
        center_color(&canvas, &style, TemplateSize::Five, 2),
        [
            style.placeholder_color.r,
            style.placeholder_color.g,
            style.placeholder_color.b
        ]
    );
}

#[test]
fn saved_edit_replaces_the_upload_in_the_composite() {
    let mut store = SlotStore::new(TemplateSize::Five);
    let style = FrameStyle::default();
    let id = store.slots()[0].id;
    store.upload(id, solid_png(120, 60, 200, 800, 600));

    let slot = store.slot(id).unwrap();
    let source = store.bytes(slot.original.unwrap()).unwrap();
    let session = CropSession::open(&source, slot.transform.as_ref());
    let saved = session.save().unwrap().unwrap();
    store.apply_edit(id, saved.artifact, saved.descriptor).unwrap();

    let slot = store.slot(id).unwrap();
    assert_eq!(slot.display_handle(), slot.edited);

    let canvas = render_composite(&store, &style, 820).unwrap();
    let [r, g, b] = center_color(&canvas, &style, TemplateSize::Five, 0);
    // JPEG re-encoding shifts channels slightly.
    assert!(r.abs_diff(120) < 8 && g.abs_diff(60) < 8 && b.abs_diff(200) < 8);
}

#[tokio::test]
async fn export_of_an_empty_wall_succeeds_at_double_resolution() {
    let dir = std::env::temp_dir().join("framewall-composite-test");
    std::fs::create_dir_all(&dir).unwrap();

    let store = SlotStore::new(TemplateSize::Five);
    let tracker = ExportTracker::new();
    let job = ExportJob {
        output_path: dir.join("empty-wall.png"),
        base_width: BASE_CANVAS_WIDTH,
    };

    let path = export_composite(&store, &FrameStyle::default(), &job, &tracker)
        .await
        .unwrap();

    let written = image::open(&path).unwrap();
    assert_eq!((written.width(), written.height()), (3280, 2320));
    std::fs::remove_file(&path).unwrap();
}

#[tokio::test]
async fn handoff_link_unlocks_only_after_export() {
    let dir = std::env::temp_dir().join("framewall-handoff-test");
    std::fs::create_dir_all(&dir).unwrap();

    let store = SlotStore::new(TemplateSize::Six);
    let tracker = ExportTracker::new();
    assert!(handoff_link(&tracker, ORDER_CONTACT, store.size(), "Black").is_err());

    let job = ExportJob {
        output_path: dir.join("order.png"),
        base_width: 82,
    };
    export_composite(&store, &FrameStyle::default(), &job, &tracker)
        .await
        .unwrap();

    let link = handoff_link(&tracker, ORDER_CONTACT, store.size(), "Black").unwrap();
    assert!(link.starts_with("https://wa.me/"));
    std::fs::remove_file(&job.output_path).unwrap();
}
