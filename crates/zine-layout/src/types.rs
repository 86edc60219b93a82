use crate::constants::{DEFAULT_SIDE_MARGIN_PX, DEFAULT_TOP_BOTTOM_MARGIN_PX};
use crate::layout::{SheetGeometry, SlotPlacement};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZineError {
    #[error("Image for '{slot}' not found")]
    MissingAsset { slot: Slot },
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),
    #[error("Error processing image '{slot}': {source}")]
    Processing {
        slot: Slot,
        #[source]
        source: image::ImageError,
    },
    #[error("Error saving {}: {}", .path.display(), .source)]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ZineError>;

/// One of the eight named pages of the zine
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    Front,
    Back,
    Page1,
    Page2,
    Page3,
    Page4,
    Page5,
    Page6,
}

impl Slot {
    /// Every slot, in reading order
    pub const ALL: [Slot; 8] = [
        Slot::Front,
        Slot::Back,
        Slot::Page1,
        Slot::Page2,
        Slot::Page3,
        Slot::Page4,
        Slot::Page5,
        Slot::Page6,
    ];

    /// Canonical label, also the expected file stem when scanning a directory
    pub fn label(self) -> &'static str {
        match self {
            Slot::Front => "FRONT",
            Slot::Back => "BACK",
            Slot::Page1 => "1",
            Slot::Page2 => "2",
            Slot::Page3 => "3",
            Slot::Page4 => "4",
            Slot::Page5 => "5",
            Slot::Page6 => "6",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Slot {
    type Err = ZineError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Slot::ALL
            .into_iter()
            .find(|slot| slot.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                ZineError::Config(format!(
                    "Unknown page label '{}' (expected FRONT, BACK or 1-6)",
                    trimmed
                ))
            })
    }
}

// Slots are written by label so config files read like the file names
#[cfg(feature = "serde")]
impl serde::Serialize for Slot {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Slot {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse::<Slot>().map_err(|_| {
            serde::de::Error::unknown_variant(&s, &["FRONT", "BACK", "1", "2", "3", "4", "5", "6"])
        })
    }
}

/// Output artifact kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OutputKind {
    /// Single JPEG raster
    #[default]
    Jpg,
    /// PDF document with one or two pages
    Pdf,
}

impl OutputKind {
    pub fn extension(self) -> &'static str {
        match self {
            OutputKind::Jpg => "jpg",
            OutputKind::Pdf => "pdf",
        }
    }
}

/// Sheet margins in pixels, applied symmetrically
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Margins {
    /// Left and right margin
    pub side_px: u32,
    /// Top and bottom margin
    pub top_bottom_px: u32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            side_px: DEFAULT_SIDE_MARGIN_PX,
            top_bottom_px: DEFAULT_TOP_BOTTOM_MARGIN_PX,
        }
    }
}

impl Margins {
    pub fn new(side_px: u32, top_bottom_px: u32) -> Self {
        Self {
            side_px,
            top_bottom_px,
        }
    }
}

/// A recoverable condition reported alongside a successful output
#[derive(Debug, Clone, PartialEq)]
pub enum ZineWarning {
    /// The full back cover could not be added; the PDF has a single page
    SecondaryCover { path: PathBuf, reason: String },
}

impl fmt::Display for ZineWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZineWarning::SecondaryCover { path, reason } => write!(
                f,
                "Could not add full back cover {}: {}",
                path.display(),
                reason
            ),
        }
    }
}

/// Result of a successful layout run
#[derive(Debug, Clone)]
pub struct ZineOutput {
    /// The file that was written
    pub path: PathBuf,
    pub output_kind: OutputKind,
    /// 1 for raster output, 1 or 2 for PDF
    pub page_count: usize,
    pub geometry: SheetGeometry,
    pub warnings: Vec<ZineWarning>,
}

/// Dry-run description of a layout
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSummary {
    pub geometry: SheetGeometry,
    /// Every cell with its source image, in grid order
    pub cells: Vec<(SlotPlacement, PathBuf)>,
    pub output_kind: OutputKind,
    pub output_path: PathBuf,
    /// Pages the output will contain if the back cover loads
    pub expected_pages: usize,
}
