//! Lists the icons a design document would export.
//!
//! Reads the file structure JSON saved from the design tool's API and prints
//! one line per selected element: file name, size and node id.
//!
//! Usage: select-icons file.json --page "Icons"

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use iconcanon::{DesignFile, SelectRule, select_icons};

#[derive(Parser)]
#[command(name = "select-icons")]
#[command(about = "List icons in a saved design document", long_about = None)]
struct Cli {
    /// Saved file structure (JSON)
    file: PathBuf,

    /// Page holding the icons
    #[arg(short, long)]
    page: String,

    /// Smallest accepted width/height
    #[arg(long, default_value = "8")]
    min_size: f64,

    /// Largest accepted width/height
    #[arg(long, default_value = "128")]
    max_size: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let json = fs::read_to_string(&cli.file)?;
    let file = DesignFile::from_json(&json)?;

    let Some(page) = file.find_page(&cli.page) else {
        eprintln!("Page '{}' not found. Available pages:", cli.page);
        for name in file.page_names() {
            eprintln!("  - {}", name);
        }
        return Err(format!("page '{}' not found", cli.page).into());
    };

    let rule = SelectRule {
        min_size: cli.min_size,
        max_size: cli.max_size,
    };
    let icons = select_icons(page, &rule);

    for icon in &icons {
        println!(
            "{}\t{}x{}\t{}",
            icon.file_name(),
            icon.width,
            icon.height,
            icon.id
        );
    }
    eprintln!("Found {} icons on '{}'", icons.len(), cli.page);

    Ok(())
}
