//! Sheet geometry calculation
//!
//! This module derives the cell size and cell origins for a fold pattern on
//! the fixed working canvas, after the sheet margins are removed.

use crate::constants::{CANVAS_HEIGHT_PX, CANVAS_WIDTH_PX};
use crate::types::{Margins, Result, Slot, ZineError};

use super::{CellRect, FoldPattern, GridPosition, SlotPlacement};

// =============================================================================
// Geometry
// =============================================================================

/// Cell layout of the working (landscape) canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetGeometry {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub margins: Margins,
    pub cell_width: u32,
    pub cell_height: u32,
    pattern: &'static FoldPattern,
}

impl SheetGeometry {
    /// Geometry of the eight-page zine on the 3300×2550 canvas.
    pub fn new(margins: Margins) -> Result<Self> {
        Self::with_pattern(margins, &FoldPattern::EIGHT_PAGE)
    }

    /// Geometry for an arbitrary fold pattern on the standard canvas.
    ///
    /// Fails with [`ZineError::InvalidGeometry`] when the margins consume the
    /// whole canvas or leave a cell with zero width or height.
    pub fn with_pattern(margins: Margins, pattern: &'static FoldPattern) -> Result<Self> {
        let canvas_width = CANVAS_WIDTH_PX as i64;
        let canvas_height = CANVAS_HEIGHT_PX as i64;
        let total_horizontal = 2 * margins.side_px as i64;
        let total_vertical = 2 * margins.top_bottom_px as i64;

        if total_horizontal >= canvas_width || total_vertical >= canvas_height {
            return Err(ZineError::InvalidGeometry(format!(
                "Margins ({}px sides, {}px top/bottom) are too large for a {}x{} canvas",
                margins.side_px, margins.top_bottom_px, CANVAS_WIDTH_PX, CANVAS_HEIGHT_PX
            )));
        }

        let cell_width = (canvas_width - total_horizontal) / pattern.cols as i64;
        let cell_height = (canvas_height - total_vertical) / pattern.rows as i64;

        if cell_width <= 0 || cell_height <= 0 {
            return Err(ZineError::InvalidGeometry(format!(
                "Page dimensions would be {}x{}; margins leave no room for the pages",
                cell_width, cell_height
            )));
        }

        Ok(Self {
            canvas_width: CANVAS_WIDTH_PX,
            canvas_height: CANVAS_HEIGHT_PX,
            margins,
            cell_width: cell_width as u32,
            cell_height: cell_height as u32,
            pattern,
        })
    }

    pub fn pattern(&self) -> &'static FoldPattern {
        self.pattern
    }

    /// Top-left corner of a cell on the working canvas
    pub fn cell_origin(&self, pos: GridPosition) -> (u32, u32) {
        (
            self.margins.side_px + pos.col * self.cell_width,
            self.margins.top_bottom_px + pos.row * self.cell_height,
        )
    }

    /// Bounds of a cell on the working canvas
    pub fn cell_bounds(&self, pos: GridPosition) -> CellRect {
        let (x, y) = self.cell_origin(pos);
        CellRect::new(x, y, self.cell_width, self.cell_height)
    }

    /// Placement of a single slot
    pub fn placement(&self, slot: Slot) -> Option<SlotPlacement> {
        self.pattern.position(slot).map(|position| SlotPlacement {
            position,
            rect: self.cell_bounds(position.grid_pos),
        })
    }

    /// Placements of every slot, in grid order
    pub fn placements(&self) -> Vec<SlotPlacement> {
        self.pattern
            .positions()
            .iter()
            .map(|&position| SlotPlacement {
                position,
                rect: self.cell_bounds(position.grid_pos),
            })
            .collect()
    }

    /// Area covered by all cells together
    pub fn content_bounds(&self) -> CellRect {
        CellRect::new(
            self.margins.side_px,
            self.margins.top_bottom_px,
            self.cell_width * self.pattern.cols,
            self.cell_height * self.pattern.rows,
        )
    }

    /// Size of the saved sheet after the final quarter turn (portrait)
    pub fn output_dimensions(&self) -> (u32, u32) {
        (self.canvas_height, self.canvas_width)
    }
}

// =============================================================================
// Tests
// =============================================================================
