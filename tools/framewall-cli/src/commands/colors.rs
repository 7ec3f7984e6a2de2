//! List the frame color palette.

use framewall_common::config::AppConfig;
use framewall_render::{color_name_for_hex, FRAME_COLORS};

pub fn run() -> anyhow::Result<()> {
    let config = AppConfig::load();
    let current = color_name_for_hex(&config.frame_color);

    println!("Frame colors");
    println!("{}", "=".repeat(50));
    for color in FRAME_COLORS {
        let marker = if color.name == current { "*" } else { " " };
        println!("{marker} {:<8} {}", color.name, color.hex);
    }
    println!();
    println!("* currently selected");

    Ok(())
}
