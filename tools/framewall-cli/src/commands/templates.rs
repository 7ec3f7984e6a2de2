//! List the available wall templates.

use framewall_model::{template, TemplateSize};

pub fn run() -> anyhow::Result<()> {
    let (aw, ah) = template::WALL_ASPECT;
    println!("Wall templates ({aw}:{ah} canvas)");
    println!("{}", "=".repeat(50));

    for size in TemplateSize::all() {
        println!("{} frames:", size.frame_count());
        for (index, rect) in template::positions_for(size).iter().enumerate() {
            println!(
                "  [{index}] x={:>5.1}%  y={:>5.1}%  w={:>5.1}%  h={:>5.1}%",
                rect.x, rect.y, rect.w, rect.h
            );
        }
        println!();
    }

    Ok(())
}
