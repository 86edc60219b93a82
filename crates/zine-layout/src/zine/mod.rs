//! Zine creation - composing eight photos onto one printable sheet
//!
//! This module orchestrates the layout process:
//! 1. Validate options and derive the sheet geometry
//! 2. Resolve the eight source images
//! 3. Composite the sheet and turn it to portrait
//! 4. Encode as JPEG or PDF (with optional back cover page)
//! 5. Write the single output file

mod io;
mod pdf;
mod raster;

use crate::assets::{resolve_assets, resolve_output_path};
use crate::layout::SheetGeometry;
use crate::options::ZineOptions;
use crate::render::{compose_sheet, prepare_full_page};
use crate::types::*;
use image::RgbImage;
use io::write_output;
use pdf::build_pdf;
use raster::encode_jpeg;
use std::path::Path;

/// An encoded zine that has not been written anywhere yet
#[derive(Debug, Clone)]
pub struct RenderedZine {
    pub bytes: Vec<u8>,
    pub output_kind: OutputKind,
    pub page_count: usize,
    pub geometry: SheetGeometry,
    pub warnings: Vec<ZineWarning>,
}

/// Main entry point: lay out the zine and write it to disk.
///
/// Nothing is written unless every image was found and processed.
pub async fn create_zine(options: &ZineOptions) -> Result<ZineOutput> {
    options.validate()?;
    let output_path = resolve_output_path(options);

    let options = options.clone();
    let rendered = tokio::task::spawn_blocking(move || render_zine(&options)).await??;

    write_output(&output_path, &rendered.bytes).await?;
    log::info!("Zine layout saved to: {}", output_path.display());

    Ok(ZineOutput {
        path: output_path,
        output_kind: rendered.output_kind,
        page_count: rendered.page_count,
        geometry: rendered.geometry,
        warnings: rendered.warnings,
    })
}

/// Lay out and encode the zine in memory.
pub fn render_zine(options: &ZineOptions) -> Result<RenderedZine> {
    let geometry = options.validate()?;
    log::info!(
        "Final output resolution: {}x{} pixels",
        geometry.canvas_width,
        geometry.canvas_height
    );
    log::info!(
        "Margins: {}px (sides), {}px (top/bottom)",
        geometry.margins.side_px,
        geometry.margins.top_bottom_px
    );
    log::info!(
        "Page dimensions: {}x{} pixels",
        geometry.cell_width,
        geometry.cell_height
    );

    let assets = resolve_assets(options)?;
    let sheet = compose_sheet(&assets, &geometry)?;

    let mut warnings = Vec::new();
    let (bytes, page_count) = match options.output_kind {
        OutputKind::Jpg => {
            if let Some(cover) = &options.full_back_cover {
                log::warn!(
                    "Full back cover {} is only used for PDF output; ignoring it",
                    cover.display()
                );
            }
            (encode_jpeg(&sheet, options.jpeg_quality)?, 1)
        }
        OutputKind::Pdf => {
            let mut pages = vec![sheet];
            if let Some(cover) = &options.full_back_cover {
                match load_back_cover(cover) {
                    Ok(page) => {
                        log::info!("Adding full back cover as second page");
                        pages.push(page);
                    }
                    Err(warning) => {
                        log::warn!("{}", warning);
                        warnings.push(warning);
                    }
                }
            }
            let page_count = pages.len();
            (build_pdf(&pages, options.jpeg_quality)?, page_count)
        }
    };

    Ok(RenderedZine {
        bytes,
        output_kind: options.output_kind,
        page_count,
        geometry,
        warnings,
    })
}

fn load_back_cover(path: &Path) -> std::result::Result<RgbImage, ZineWarning> {
    let warning = |reason: String| ZineWarning::SecondaryCover {
        path: path.to_owned(),
        reason,
    };

    if !path.is_file() {
        return Err(warning("file not found".to_string()));
    }

    prepare_full_page(path).map_err(|e| warning(e.to_string()))
}
