pub mod constants;
pub mod layout;
pub mod render;
pub mod zine;
mod assets;
mod options;
mod summary;
mod types;

pub use assets::{ResolvedAssets, resolve_assets, resolve_output_path};
pub use layout::{CellRect, FoldPattern, GridPosition, SheetGeometry, SlotPlacement, SlotPosition};
pub use options::*;
pub use render::compose_sheet;
pub use summary::calculate_layout;
pub use types::*;
pub use zine::{RenderedZine, create_zine, render_zine};
