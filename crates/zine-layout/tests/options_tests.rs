use std::path::PathBuf;
use tempfile::TempDir;
use zine_layout::*;

#[tokio::test]
async fn test_options_save_load_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("zine.json");

    let mut options = ZineOptions::from_dir("pages").with_image(Slot::Back, "/art/back.jpg");
    options.margins = Margins::new(30, 45);
    options.output_kind = OutputKind::Pdf;
    options.full_back_cover = Some(PathBuf::from("/art/poster.png"));
    options.jpeg_quality = 80;

    options.save(&path).await.unwrap();
    let loaded = ZineOptions::load(&path).await.unwrap();

    assert_eq!(loaded, options);
}

#[tokio::test]
async fn test_load_rejects_bad_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    tokio::fs::write(&path, "{ not json").await.unwrap();

    assert!(matches!(
        ZineOptions::load(&path).await,
        Err(ZineError::Config(_))
    ));
}

#[tokio::test]
async fn test_load_rejects_unknown_slot() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("slots.json");
    tokio::fs::write(&path, r#"{"image_paths": {"7": "seven.png"}}"#)
        .await
        .unwrap();

    assert!(ZineOptions::load(&path).await.is_err());
}

#[test]
fn test_validate() {
    assert!(matches!(
        ZineOptions::default().validate(),
        Err(ZineError::Config(_))
    ));

    let mut options = ZineOptions::from_dir(".");
    options.jpeg_quality = 0;
    assert!(matches!(options.validate(), Err(ZineError::Config(_))));

    options.jpeg_quality = 100;
    let geometry = options.validate().unwrap();
    assert_eq!(geometry.cell_width, 795);
}

#[test]
fn test_slot_labels() {
    assert_eq!("front".parse::<Slot>().unwrap(), Slot::Front);
    assert_eq!(" 6 ".parse::<Slot>().unwrap(), Slot::Page6);
    assert!("0".parse::<Slot>().is_err());

    let labels: Vec<String> = Slot::ALL.iter().map(Slot::to_string).collect();
    assert_eq!(labels, ["FRONT", "BACK", "1", "2", "3", "4", "5", "6"]);
}
