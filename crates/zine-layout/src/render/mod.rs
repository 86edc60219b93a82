//! Raster rendering for the zine sheet
//!
//! This module handles all pixel-level operations:
//! - Decoding source images
//! - Orienting and resizing each page into its cell
//! - Compositing the cells onto the sheet canvas
//! - Preparing the optional full-page back cover

mod cell;
mod cover;
mod sheet;

pub use cell::{load_image, orient_portrait, prepare_cell};
pub use cover::prepare_full_page;
pub use sheet::compose_sheet;
