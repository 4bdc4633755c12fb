use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::Parser;
use iconcanon::{
    BatchOptions, Options, Outcome, ViewBox, canonicalize_item, load_profile, process_dir,
};

#[derive(Parser)]
#[command(name = "iconcanon")]
#[command(about = "Canonicalize exported SVG icons", long_about = None)]
struct Cli {
    /// Input file or directory of icons (use - for stdin)
    #[arg(default_value = "-")]
    input: PathBuf,

    /// Output file or directory (use - for stdout)
    #[arg(short, long, default_value = "-")]
    output: PathBuf,

    /// TOML profile with shell attributes
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Icon width and height
    #[arg(long)]
    size: Option<u32>,

    /// viewBox used when the input has none
    #[arg(long, value_parser = parse_view_box)]
    view_box: Option<ViewBox>,

    /// Always use the default viewBox, even if the input has one
    #[arg(long)]
    reset_view_box: bool,

    /// Stroke width on the outer element
    #[arg(long, value_parser = parse_finite)]
    stroke_width: Option<f64>,

    /// Verify each output is canonical before writing it
    #[arg(long)]
    check: bool,

    /// Print size comparison
    #[arg(short, long)]
    stats: bool,
}

fn parse_view_box(s: &str) -> Result<ViewBox, String> {
    ViewBox::parse(s).ok_or_else(|| format!("expected four numbers, got `{}`", s))
}

fn parse_finite(s: &str) -> Result<f64, String> {
    match s.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(format!("expected a finite number, got `{}`", s)),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Build options: profile first, flags override
    let mut options = match &cli.config {
        Some(path) => load_profile(path)?,
        None => Options::default(),
    };
    if let Some(size) = cli.size {
        options.width = size;
        options.height = size;
    }
    if let Some(view_box) = cli.view_box.clone() {
        options.default_view_box = view_box;
    }
    if cli.reset_view_box {
        options.keep_view_box = false;
    }
    if let Some(width) = cli.stroke_width {
        options.stroke_width = width;
    }

    let batch = BatchOptions { check: cli.check };

    if cli.input.is_dir() {
        run_dir(&cli, &options, &batch)
    } else {
        run_single(&cli, &options, &batch)
    }
}

fn run_single(
    cli: &Cli,
    options: &Options,
    batch: &BatchOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    // Read input
    let input = if cli.input.as_os_str() == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        buf
    } else {
        fs::read(&cli.input)?
    };

    let output = canonicalize_item(&input, options, batch)?;

    // Write output
    if cli.output.as_os_str() == "-" {
        io::stdout().write_all(output.as_bytes())?;
    } else {
        fs::write(&cli.output, &output)?;
    }

    if cli.stats {
        print_stats(input.len(), output.len());
    }

    Ok(())
}

fn run_dir(
    cli: &Cli,
    options: &Options,
    batch: &BatchOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    if cli.output.as_os_str() == "-" {
        return Err("an output directory is required when the input is a directory".into());
    }

    eprintln!("Source: {}", cli.input.display());
    eprintln!("Output: {}", cli.output.display());

    let summary = process_dir(&cli.input, &cli.output, options, batch)?;

    if summary.outcomes.is_empty() {
        eprintln!("No SVG files found in source directory.");
        return Ok(());
    }

    for outcome in &summary.outcomes {
        match outcome {
            Outcome::Written { name, .. } => eprintln!("✓ {}", name),
            Outcome::Failed { name, error } => eprintln!("✗ {}: {}", name, error),
        }
    }

    eprintln!();
    eprintln!("Processed {} icons successfully", summary.processed());
    if cli.stats {
        print_stats(summary.bytes_in(), summary.bytes_out());
    }

    match summary.failed() {
        0 => Ok(()),
        n => Err(format!("{} icons failed", n).into()),
    }
}

fn print_stats(input_len: usize, output_len: usize) {
    let saved = input_len.saturating_sub(output_len);
    let percent = if input_len > 0 {
        (saved as f64 / input_len as f64) * 100.0
    } else {
        0.0
    };
    eprintln!(
        "{} -> {} bytes ({:.1}% smaller)",
        input_len, output_len, percent
    );
}
