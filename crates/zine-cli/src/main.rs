mod logger;

use anyhow::Result;
use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;
use logger::CliLogger;
use std::path::PathBuf;
use zine_layout::{Slot, ZineOptions};

/// Arrange 8 photos into a printable 8-page zine layout.
///
/// Expects images named FRONT, BACK, 1, 2, 3, 4, 5, 6 (.png, .jpg or .jpeg)
/// in INPUT_DIR, or explicit assignments with --image.
#[derive(Parser)]
#[command(name = "zinerator", version)]
struct Cli {
    /// Directory containing the page images
    input_dir: Option<PathBuf>,

    /// Margin on the left and right of the sheet, in pixels [default: 60]
    #[arg(long)]
    side_margin: Option<u32>,

    /// Margin on the top and bottom of the sheet, in pixels [default: 60]
    #[arg(long)]
    top_bottom_margin: Option<u32>,

    /// Output format [default: jpg]
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Full-page back cover appended as a second PDF page
    #[arg(long)]
    full_back: Option<PathBuf>,

    /// Directory to write zinerator_output.<ext> into
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Exact output file path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Assign an image to a page, e.g. --image FRONT=cover.jpg (repeatable)
    #[arg(long = "image", value_name = "LABEL=PATH", value_parser = parse_assignment)]
    images: Vec<(Slot, PathBuf)>,

    /// JPEG quality, 1-100 [default: 95]
    #[arg(long)]
    quality: Option<u8>,

    /// Load options from a JSON file; command-line flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective options to a JSON file
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Show the layout only, don't generate the output
    #[arg(long)]
    dry_run: bool,

    /// More output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only show warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Jpg,
    Pdf,
}

impl From<FormatArg> for zine_layout::OutputKind {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Jpg => Self::Jpg,
            FormatArg::Pdf => Self::Pdf,
        }
    }
}

fn parse_assignment(s: &str) -> Result<(Slot, PathBuf), String> {
    let (label, path) = s
        .split_once('=')
        .ok_or_else(|| format!("expected LABEL=PATH, got '{}'", s))?;
    let slot = label.parse::<Slot>().map_err(|e| e.to_string())?;
    if path.is_empty() {
        return Err(format!("missing path for '{}'", slot));
    }
    Ok((slot, PathBuf::from(path)))
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Warn;
        }
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    async fn options(&self) -> Result<ZineOptions> {
        let mut options = match &self.config {
            Some(path) => ZineOptions::load(path).await?,
            None => ZineOptions::default(),
        };

        if let Some(dir) = &self.input_dir {
            options.input_dir = Some(dir.clone());
        }
        for (slot, path) in &self.images {
            options.image_paths.insert(*slot, path.clone());
        }
        if let Some(side) = self.side_margin {
            options.margins.side_px = side;
        }
        if let Some(top_bottom) = self.top_bottom_margin {
            options.margins.top_bottom_px = top_bottom;
        }
        if let Some(format) = self.format {
            options.output_kind = format.into();
        }
        if let Some(cover) = &self.full_back {
            options.full_back_cover = Some(cover.clone());
        }
        if let Some(dir) = &self.output_dir {
            options.output_dir = Some(dir.clone());
        }
        if let Some(file) = &self.output {
            options.output_file = Some(file.clone());
        }
        if let Some(quality) = self.quality {
            options.jpeg_quality = quality;
        }

        // Without a directory or explicit images, look in the current one
        if options.input_dir.is_none() && options.image_paths.is_empty() {
            options.input_dir = Some(PathBuf::from("."));
        }

        Ok(options)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    CliLogger::new(cli.log_level()).init()?;

    let options = cli.options().await?;

    if let Some(path) = &cli.save_config {
        options.save(path).await?;
        println!("Options saved → {}", path.display());
    }

    if cli.dry_run {
        let summary = zine_layout::calculate_layout(&options)?;
        let (out_w, out_h) = summary.geometry.output_dimensions();
        println!("Zine Layout:");
        println!(
            "  Sheet: {}x{} px ({}x{} after rotation)",
            summary.geometry.canvas_width, summary.geometry.canvas_height, out_w, out_h
        );
        println!(
            "  Page cells: {}x{} px",
            summary.geometry.cell_width, summary.geometry.cell_height
        );
        for (placement, path) in &summary.cells {
            println!(
                "  {:>5} at ({:>4}, {:>4}){}  {}",
                placement.slot().label(),
                placement.rect.x,
                placement.rect.y,
                if placement.is_inverted() { " inverted" } else { "         " },
                path.display()
            );
        }
        println!("  Output pages: {}", summary.expected_pages);
        println!("  Output: {}", summary.output_path.display());
        return Ok(());
    }

    let output = zine_layout::create_zine(&options).await?;
    for warning in &output.warnings {
        eprintln!("Warning: {}", warning);
    }
    println!(
        "Zine ({} page{}) → {}",
        output.page_count,
        if output.page_count == 1 { "" } else { "s" },
        output.path.display()
    );

    Ok(())
}
