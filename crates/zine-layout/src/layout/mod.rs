//! Layout calculation modules for the zine sheet
//!
//! This module handles all the geometric calculations for the layout:
//! - The fold pattern (which slot goes in which cell, which row is inverted)
//! - Sheet geometry (cell dimensions and origins inside the margins)

mod fold;
mod grid;
mod types;

pub use fold::*;
pub use grid::*;
pub use types::*;
