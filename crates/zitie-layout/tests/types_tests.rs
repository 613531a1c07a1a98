use zitie_layout::constants::*;
use zitie_layout::*;

#[test]
fn test_paper_size_dimensions() {
    assert_eq!(PaperSize::A4.dimensions_mm(), (210.0, 297.0));
    assert_eq!(PaperSize::A5.dimensions_mm(), (148.0, 210.0));
    assert_eq!(PaperSize::B5.dimensions_mm(), (176.0, 250.0));

    let custom = PaperSize::Custom {
        width_mm: 100.0,
        height_mm: 200.0,
    };
    assert_eq!(
        custom.dimensions_with_orientation(Orientation::Landscape),
        (200.0, 100.0)
    );
}

#[test]
fn test_a4_uses_reference_page() {
    assert_eq!(
        PaperSize::A4.dimensions_px(Orientation::Portrait),
        (795.0, 1133.0)
    );
    assert_eq!(
        PaperSize::A4.dimensions_px(Orientation::Landscape),
        (1133.0, 795.0)
    );
}

#[test]
fn test_mm_to_px() {
    assert!((mm_to_px(25.4) - 96.0).abs() < 1e-4);
    assert!((px_to_mm(96.0) - 25.4).abs() < 1e-4);
    assert!((mm_to_px(10.0) - 37.795_277).abs() < 1e-3);
}

#[test]
fn test_grid_type_names_and_labels() {
    for grid_type in GridType::ALL {
        assert_eq!(GridType::from_name(grid_type.name()), grid_type);
    }
    assert_eq!(GridType::from_name(" Mitian "), GridType::Mitian);
    assert_eq!(GridType::from_name("unknown"), GridType::Tian);
    assert_eq!(GridType::Tian.label(), "田字格");
    assert_eq!(GridType::Si.label(), "四线格");
}

#[test]
fn test_layout_type_from_name() {
    assert_eq!(LayoutType::from_name("vertical"), LayoutType::Vertical);
    assert_eq!(LayoutType::from_name("grid"), LayoutType::Grid);
    assert_eq!(LayoutType::from_name("sideways"), LayoutType::Grid);
}

#[test]
fn test_space_sentinels() {
    assert!(is_space_sentinel(" "));
    assert!(is_space_sentinel("\u{3000}"));
    assert!(!is_space_sentinel("永"));
    assert!(PracticeCell::new("\u{3000}", 0, true).is_space());
}

#[test]
fn test_margins_validation() {
    assert!(PageMargins::default().validate().is_ok());
    assert!(PageMargins::uniform(0.0).validate().is_ok());
    assert!(PageMargins::uniform(-0.5).validate().is_err());
    assert!(PageMargins::uniform(f32::INFINITY).validate().is_err());
}

#[test]
fn test_character_style() {
    let style = character_style(64.0, 80.0, 0.0, LayoutType::Grid);
    assert!((style.font_size_px - 51.2).abs() < 1e-4);
    assert_eq!(style.anchor.x, 32.0);
    assert_eq!(style.anchor.y, 32.0);

    let vertical = character_style(64.0, 80.0, 0.0, LayoutType::Vertical);
    assert_eq!(vertical.anchor, style.anchor);
    assert_ne!(vertical.writing_mode, style.writing_mode);

    let ghost = overlay_style(&style, "gray", 250.0);
    assert_eq!(ghost.opacity, 1.0);
    assert_eq!(ghost.color, "gray");
}
