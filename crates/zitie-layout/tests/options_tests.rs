use zitie_layout::*;

#[test]
fn test_default_options_are_valid() {
    let options = SheetOptions::default();
    assert!(options.validate().is_ok());

    assert_eq!(options.layout.grid_type, GridType::Tian);
    assert_eq!(options.layout.grid_size, 64.0);
    assert_eq!(options.layout.repeat_count, 1);
    assert_eq!(options.layout.layout_type, LayoutType::Grid);
    assert_eq!(options.print.paper_size, PaperSize::A4);
    assert_eq!(options.print.margins, PageMargins::default());
}

#[test]
fn test_validation_font_size_range() {
    let mut options = SheetOptions::default();

    options.layout.font_size = 200.0;
    assert!(options.validate().is_ok());

    options.layout.font_size = 250.0;
    match options.validate() {
        Err(SheetError::Config(msg)) => assert!(msg.contains("Font size")),
        other => panic!("Expected Config error, got {:?}", other),
    }
}

#[test]
fn test_validation_geometry() {
    let mut options = SheetOptions::default();
    options.layout.grid_size = 0.0;
    assert!(matches!(
        options.validate(),
        Err(SheetError::InvalidDimension { .. })
    ));

    let mut options = SheetOptions::default();
    options.print.margins.top_mm = f32::NAN;
    assert!(options.validate().is_err());

    let mut options = SheetOptions::default();
    options.layout.reference_opacity = 150.0;
    assert!(options.validate().is_err());
}

#[test]
fn test_styles_follow_settings() {
    let layout = LayoutSettings {
        grid_size: 100.0,
        font_size: 60.0,
        font_color: "red".to_string(),
        reference_opacity: 25.0,
        ..Default::default()
    };

    let glyph = layout.glyph_style();
    assert_eq!(glyph.font_size_px, 60.0);
    assert_eq!(glyph.color, "red");
    assert_eq!(glyph.font_family, layout.font_family);

    let reference = layout.reference_style();
    assert_eq!(reference.opacity, 0.25);
    assert_eq!(reference.font_size_px, 60.0);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_options() {
    use tempfile::NamedTempFile;

    let mut options = SheetOptions::default();
    options.layout.grid_type = GridType::Mitian;
    options.layout.repeat_count = 6;
    options.layout.layout_type = LayoutType::Vertical;
    options.layout.line_style = LineStyle::Dashed;
    options.print.paper_size = PaperSize::Custom {
        width_mm: 180.0,
        height_mm: 240.0,
    };
    options.print.orientation = Orientation::Landscape;
    options.print.margins = PageMargins::uniform(8.0);

    let temp = NamedTempFile::new().unwrap();
    options.save(temp.path()).await.unwrap();

    let loaded = SheetOptions::load(temp.path()).await.unwrap();
    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_partial_config_uses_defaults() {
    use tempfile::NamedTempFile;

    let temp = NamedTempFile::new().unwrap();
    tokio::fs::write(temp.path(), r#"{ "layout": { "grid_type": "mi", "grid_size": 80 } }"#)
        .await
        .unwrap();

    let loaded = SheetOptions::load(temp.path()).await.unwrap();
    assert_eq!(loaded.layout.grid_type, GridType::Mi);
    assert_eq!(loaded.layout.grid_size, 80.0);
    assert_eq!(loaded.layout.font_size, LayoutSettings::default().font_size);
    assert_eq!(loaded.print, PrintSettings::default());
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_malformed_config() {
    use tempfile::NamedTempFile;

    let temp = NamedTempFile::new().unwrap();
    tokio::fs::write(temp.path(), "{ not json").await.unwrap();

    let result = SheetOptions::load(temp.path()).await;
    assert!(matches!(result, Err(SheetError::Config(_))));
}
