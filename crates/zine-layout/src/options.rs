use crate::constants::DEFAULT_JPEG_QUALITY;
use crate::layout::SheetGeometry;
use crate::types::*;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Complete zine layout configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ZineOptions {
    // Input
    /// Directory scanned for `<LABEL>.png|jpg|jpeg`
    pub input_dir: Option<PathBuf>,
    /// Explicit per-slot paths; these win over the directory scan
    pub image_paths: BTreeMap<Slot, PathBuf>,

    // Geometry
    pub margins: Margins,

    // Output configuration
    pub output_kind: OutputKind,
    pub output_dir: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub jpeg_quality: u8,

    // Second PDF page
    pub full_back_cover: Option<PathBuf>,
}

impl Default for ZineOptions {
    fn default() -> Self {
        Self {
            input_dir: None,
            image_paths: BTreeMap::new(),
            margins: Margins::default(),
            output_kind: OutputKind::Jpg,
            output_dir: None,
            output_file: None,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            full_back_cover: None,
        }
    }
}

impl ZineOptions {
    /// Options that scan `input_dir` for the eight page images
    pub fn from_dir(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: Some(input_dir.into()),
            ..Default::default()
        }
    }

    /// Assign an explicit image to a slot
    pub fn with_image(mut self, slot: Slot, path: impl Into<PathBuf>) -> Self {
        self.image_paths.insert(slot, path.into());
        self
    }

    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| ZineError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ZineError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options and derive the sheet geometry
    pub fn validate(&self) -> Result<SheetGeometry> {
        if self.input_dir.is_none() && self.image_paths.is_empty() {
            return Err(ZineError::Config(
                "No input directory or image paths specified".to_string(),
            ));
        }

        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(ZineError::Config(format!(
                "JPEG quality must be between 1 and 100, got {}",
                self.jpeg_quality
            )));
        }

        SheetGeometry::new(self.margins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ZineOptions::default();
        assert_eq!(options.margins, Margins::new(60, 60));
        assert_eq!(options.output_kind, OutputKind::Jpg);
        assert_eq!(options.jpeg_quality, 95);
        assert!(options.full_back_cover.is_none());
    }

    #[test]
    fn test_with_image_overrides() {
        let options = ZineOptions::default()
            .with_image(Slot::Front, "a.png")
            .with_image(Slot::Front, "b.png");
        assert_eq!(options.image_paths.len(), 1);
        assert_eq!(options.image_paths[&Slot::Front], PathBuf::from("b.png"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_slot_keys_serialize_as_labels() {
        let options = ZineOptions::from_dir("pages").with_image(Slot::Page3, "three.jpg");
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["image_paths"]["3"], "three.jpg");
        assert_eq!(json["output_kind"], "jpg");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_config_uses_defaults() {
        let options: ZineOptions =
            serde_json::from_str(r#"{"output_kind": "pdf", "image_paths": {"front": "f.png"}}"#)
                .unwrap();
        assert_eq!(options.output_kind, OutputKind::Pdf);
        assert_eq!(options.margins, Margins::default());
        assert_eq!(options.image_paths[&Slot::Front], PathBuf::from("f.png"));
    }
}
