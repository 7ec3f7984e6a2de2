//! Framewall CLI — Command-line interface for composing gallery walls.
//!
//! Usage:
//!   framewall compose [OPTIONS] <PHOTOS>...   Compose and export a wall
//!   framewall templates                       List wall templates
//!   framewall colors                          List frame colors

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "framewall",
    about = "Gallery wall composition and order export",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose photos onto a wall template and export the order raster
    Compose {
        /// Photo files, in slot order (missing slots stay empty)
        photos: Vec<PathBuf>,

        /// Number of frames on the wall (5 or 6)
        #[arg(short, long, default_value = "6")]
        count: u8,

        /// Frame color by palette name (see `framewall colors`)
        #[arg(short, long, default_value = "Black")]
        frame_color: String,

        /// Output PNG path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Run each photo through the default 4:3 crop before composing
        #[arg(long)]
        auto_crop: bool,

        /// Move a slot before export, as FROM:TO indices (repeatable)
        #[arg(long = "move", value_name = "FROM:TO")]
        moves: Vec<String>,

        /// Print the order hand-off link after a successful export
        #[arg(long)]
        handoff: bool,
    },

    /// List the available wall templates
    Templates,

    /// List the frame color palette
    Colors,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    framewall_common::logging::init_logging(&framewall_common::config::LoggingConfig {
        level: log_level.to_string(),
        json: false,
        file: None,
    });

    match cli.command {
        Commands::Compose {
            photos,
            count,
            frame_color,
            output,
            auto_crop,
            moves,
            handoff,
        } => {
            commands::compose::run(photos, count, frame_color, output, auto_crop, moves, handoff)
                .await
        }
        Commands::Templates => commands::templates::run(),
        Commands::Colors => commands::colors::run(),
    }
}
