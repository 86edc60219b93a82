//! Sheet compositing
//!
//! Cells are prepared independently (optionally in parallel with the
//! `parallel` feature) and then pasted one after another in grid order. Each
//! cell owns a disjoint rectangle, so paste order never changes the result.

use crate::assets::ResolvedAssets;
use crate::constants::CANVAS_BACKGROUND;
use crate::layout::{SheetGeometry, SlotPlacement};
use crate::types::*;
use image::{Rgb, RgbImage, imageops};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::{load_image, prepare_cell};

/// Build the finished sheet: eight cells pasted, then a single quarter turn
/// counter-clockwise into portrait orientation.
pub fn compose_sheet(assets: &ResolvedAssets, geometry: &SheetGeometry) -> Result<RgbImage> {
    let placements = geometry.placements();

    #[cfg(feature = "parallel")]
    let cells = placements
        .par_iter()
        .map(|placement| render_cell(assets, placement))
        .collect::<Result<Vec<_>>>()?;

    #[cfg(not(feature = "parallel"))]
    let cells = placements
        .iter()
        .map(|placement| render_cell(assets, placement))
        .collect::<Result<Vec<_>>>()?;

    let mut canvas = RgbImage::from_pixel(
        geometry.canvas_width,
        geometry.canvas_height,
        Rgb(CANVAS_BACKGROUND),
    );

    for (placement, cell) in placements.iter().zip(&cells) {
        imageops::replace(
            &mut canvas,
            cell,
            placement.rect.x as i64,
            placement.rect.y as i64,
        );
    }

    Ok(imageops::rotate270(&canvas))
}

fn render_cell(assets: &ResolvedAssets, placement: &SlotPlacement) -> Result<RgbImage> {
    let slot = placement.slot();
    let path = assets.path(slot)?;

    let image = load_image(path).map_err(|source| {
        log::error!("Error processing image '{}': {}", slot, source);
        ZineError::Processing { slot, source }
    })?;

    log::debug!(
        "{}: {}x{} -> cell at ({}, {}){}",
        slot,
        image.width(),
        image.height(),
        placement.rect.x,
        placement.rect.y,
        if placement.is_inverted() { ", inverted" } else { "" }
    );

    Ok(prepare_cell(image, placement))
}
