//! Locating the source images and the output file
//!
//! Per slot, an explicit path always wins; only slots without one are looked
//! up in the input directory. An explicit path that does not exist is
//! reported as missing rather than silently replaced by a scanned file.

use crate::constants::{DEFAULT_NAME_SUFFIX, IMAGE_EXTENSIONS, OUTPUT_STEM};
use crate::options::ZineOptions;
use crate::types::*;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Source file for every slot, checked to exist
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAssets {
    paths: BTreeMap<Slot, PathBuf>,
}

impl ResolvedAssets {
    pub fn path(&self, slot: Slot) -> Result<&Path> {
        self.paths
            .get(&slot)
            .map(PathBuf::as_path)
            .ok_or(ZineError::MissingAsset { slot })
    }

    pub fn iter(&self) -> impl Iterator<Item = (Slot, &Path)> {
        self.paths.iter().map(|(slot, path)| (*slot, path.as_path()))
    }
}

/// Resolve all eight slots, failing on the first one that cannot be found.
pub fn resolve_assets(options: &ZineOptions) -> Result<ResolvedAssets> {
    let mut paths = BTreeMap::new();

    for slot in Slot::ALL {
        let path = match options.image_paths.get(&slot) {
            Some(explicit) => explicit.is_file().then(|| explicit.clone()),
            None => options
                .input_dir
                .as_deref()
                .and_then(|dir| find_in_dir(dir, slot)),
        };

        match path {
            Some(path) => {
                log::info!("Found {}: {}", slot, path.display());
                paths.insert(slot, path);
            }
            None => {
                log::error!("Image for '{}' not found", slot);
                return Err(ZineError::MissingAsset { slot });
            }
        }
    }

    log::info!("All {} required images found", paths.len());
    Ok(ResolvedAssets { paths })
}

/// First `<LABEL>.<ext>` in `dir`, probing extensions in priority order
fn find_in_dir(dir: &Path, slot: Slot) -> Option<PathBuf> {
    IMAGE_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{}.{}", slot.label(), ext)))
        .find(|candidate| candidate.is_file())
}

/// Decide where the output is written.
///
/// 1. `output_file`
/// 2. `output_dir/zinerator_output.<ext>`
/// 3. with explicit image paths: `<input_dir or cwd>/zinerator_output.<ext>`
/// 4. otherwise `<input dir name>_zine_layout_printable.<ext>` in the cwd
pub fn resolve_output_path(options: &ZineOptions) -> PathBuf {
    let ext = options.output_kind.extension();

    if let Some(file) = &options.output_file {
        return file.clone();
    }

    if let Some(dir) = &options.output_dir {
        return dir.join(format!("{}.{}", OUTPUT_STEM, ext));
    }

    if !options.image_paths.is_empty() {
        let dir = options.input_dir.clone().unwrap_or_else(|| PathBuf::from("."));
        return dir.join(format!("{}.{}", OUTPUT_STEM, ext));
    }

    let dir_name = options
        .input_dir
        .as_deref()
        .and_then(directory_name)
        .unwrap_or_else(|| OUTPUT_STEM.to_string());
    PathBuf::from(format!("{}{}.{}", dir_name, DEFAULT_NAME_SUFFIX, ext))
}

/// Last component of a directory path, resolving `.` and trailing separators
fn directory_name(dir: &Path) -> Option<String> {
    let name = |p: &Path| p.file_name().map(|n| n.to_string_lossy().into_owned());
    name(dir).or_else(|| std::fs::canonicalize(dir).ok().as_deref().and_then(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"x").unwrap();
        path
    }

    fn populate(dir: &Path, ext: &str) {
        for slot in Slot::ALL {
            touch(dir, &format!("{}.{}", slot.label(), ext));
        }
    }

    #[test]
    fn test_resolve_from_directory() {
        let dir = TempDir::new().unwrap();
        populate(dir.path(), "jpg");

        let assets = resolve_assets(&ZineOptions::from_dir(dir.path())).unwrap();
        assert_eq!(assets.iter().count(), 8);
        assert_eq!(
            assets.path(Slot::Front).unwrap(),
            dir.path().join("FRONT.jpg")
        );
    }

    #[test]
    fn test_extension_priority() {
        let dir = TempDir::new().unwrap();
        populate(dir.path(), "jpeg");
        touch(dir.path(), "1.jpg");
        touch(dir.path(), "2.jpg");
        touch(dir.path(), "2.png");

        let assets = resolve_assets(&ZineOptions::from_dir(dir.path())).unwrap();
        assert_eq!(assets.path(Slot::Page1).unwrap(), dir.path().join("1.jpg"));
        assert_eq!(assets.path(Slot::Page2).unwrap(), dir.path().join("2.png"));
        assert_eq!(assets.path(Slot::Page3).unwrap(), dir.path().join("3.jpeg"));
    }

    #[test]
    fn test_explicit_path_wins() {
        let dir = TempDir::new().unwrap();
        populate(dir.path(), "png");
        let other = TempDir::new().unwrap();
        let custom = touch(other.path(), "cover-art.jpg");

        let options = ZineOptions::from_dir(dir.path()).with_image(Slot::Front, &custom);
        let assets = resolve_assets(&options).unwrap();
        assert_eq!(assets.path(Slot::Front).unwrap(), custom);
        assert_eq!(assets.path(Slot::Back).unwrap(), dir.path().join("BACK.png"));
    }

    #[test]
    fn test_missing_explicit_path_does_not_fall_back() {
        let dir = TempDir::new().unwrap();
        populate(dir.path(), "png");

        let options =
            ZineOptions::from_dir(dir.path()).with_image(Slot::Page5, dir.path().join("nope.png"));
        match resolve_assets(&options) {
            Err(ZineError::MissingAsset { slot }) => assert_eq!(slot, Slot::Page5),
            other => panic!("Expected MissingAsset, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_label_reported() {
        let dir = TempDir::new().unwrap();
        populate(dir.path(), "png");
        fs::remove_file(dir.path().join("4.png")).unwrap();

        let err = resolve_assets(&ZineOptions::from_dir(dir.path())).unwrap_err();
        assert!(matches!(err, ZineError::MissingAsset { slot: Slot::Page4 }));
        assert!(err.to_string().contains("'4'"));
    }

    #[test]
    fn test_output_path_priority() {
        let mut options = ZineOptions::from_dir("/photos/summer");
        assert_eq!(
            resolve_output_path(&options),
            PathBuf::from("summer_zine_layout_printable.jpg")
        );

        options.output_kind = OutputKind::Pdf;
        assert_eq!(
            resolve_output_path(&options),
            PathBuf::from("summer_zine_layout_printable.pdf")
        );

        options.image_paths.insert(Slot::Front, PathBuf::from("f.png"));
        assert_eq!(
            resolve_output_path(&options),
            PathBuf::from("/photos/summer/zinerator_output.pdf")
        );

        options.output_dir = Some(PathBuf::from("/out"));
        assert_eq!(
            resolve_output_path(&options),
            PathBuf::from("/out/zinerator_output.pdf")
        );

        options.output_file = Some(PathBuf::from("/tmp/mine.pdf"));
        assert_eq!(resolve_output_path(&options), PathBuf::from("/tmp/mine.pdf"));
    }

    #[test]
    fn test_default_name_ignores_trailing_separator() {
        let options = ZineOptions::from_dir("/photos/winter/");
        assert_eq!(
            resolve_output_path(&options),
            PathBuf::from("winter_zine_layout_printable.jpg")
        );
    }
}
