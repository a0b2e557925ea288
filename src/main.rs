use clap::Parser;
use screenstitch::config::StitchConfig;
use screenstitch::stitch::Direction;
use screenstitch::{output, run};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "screenstitch")]
#[command(about = "Stitch numbered PNG screenshots into a single collage")]
#[command(long_about = "\
Stitch numbered PNG screenshots into a single collage

Scans the directory containing this executable (or --dir) for files named
<page>_<anything>.png, orders them by page number, and stacks them into one
collage_<label>.png in the same directory.

Filename convention:

  3_settings.png      page 3
  007_map.png         page 7 (leading zeros fine)
  112_appendix.PNG    page 112 (extension match is case-insensitive)
  cover.png           ignored — no page prefix

For the default ALL label, page 112 (the boilerplate legal page) is excluded
unless --keep-112 is passed. Images are never resized: the collage is exactly
as wide as the widest page (vertical) or as tall as the tallest (horizontal),
with white background filling the remainder.")]
#[command(version)]
struct Cli {
    /// Stacking direction
    #[arg(short, long, value_enum, default_value = "vertical")]
    direction: Direction,

    /// Label for the output filename: collage_<label>.png
    #[arg(short, long, default_value = "ALL")]
    label: String,

    /// Keep page 112 in the ALL collage
    #[arg(long = "keep-112")]
    keep_112: bool,

    /// Directory to scan; defaults to the directory containing this executable
    #[arg(long)]
    dir: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let dir = match cli.dir {
        Some(dir) => dir,
        None => executable_dir()?,
    };

    let options = run::Options {
        direction: cli.direction,
        label: cli.label,
        keep_excluded: cli.keep_112,
    };
    let outcome = run::run(&dir, &options, &StitchConfig::default())?;
    output::print_outcome(&outcome);
    Ok(())
}

/// The directory holding the running binary — inputs and output live there,
/// not in the process's current working directory.
fn executable_dir() -> std::io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}
