//! Layout data types
//!
//! These types sit between the fold pattern and the raster compositing.

use crate::types::Slot;

/// Position within the grid (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    /// Row index (0 = top row)
    pub row: u32,
    /// Column index (0 = leftmost column)
    pub col: u32,
}

impl GridPosition {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// Where one slot lives in a fold pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotPosition {
    pub slot: Slot,
    pub grid_pos: GridPosition,
    /// Whether this cell ends up upside down after folding (rotated 180°)
    pub inverted: bool,
}

/// A rectangular area in pixels, origin at the top-left of the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellRect {
    /// X position (left edge)
    pub x: u32,
    /// Y position (top edge)
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CellRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate (exclusive)
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Bottom edge y coordinate (exclusive)
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Whether two rectangles share any pixel
    pub fn overlaps(&self, other: &CellRect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Final placement of a slot on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotPlacement {
    pub position: SlotPosition,
    pub rect: CellRect,
}

impl SlotPlacement {
    pub fn slot(&self) -> Slot {
        self.position.slot
    }

    pub fn is_inverted(&self) -> bool {
        self.position.inverted
    }
}
