use zitie_layout::guide::{GuideRole, GuideShape, Point};
use zitie_layout::*;

fn params(size: f32) -> GuideParams {
    GuideParams {
        size,
        ..Default::default()
    }
}

#[test]
fn test_heng_is_bottom_line_only() {
    for show_sublines in [true, false] {
        let p = GuideParams {
            show_sublines,
            ..params(80.0)
        };
        let guide = generate_guide(GridType::Heng, &p).unwrap();

        assert_eq!(guide.elements.len(), 1);
        assert_eq!(
            guide.elements[0].shape,
            GuideShape::Line {
                from: Point::new(0.0, 80.0),
                to: Point::new(80.0, 80.0),
            }
        );
        assert!(!guide.has_role(GuideRole::CenterLine));
        assert!(!guide.has_role(GuideRole::Diagonal));
    }
}

#[test]
fn test_generation_is_idempotent() {
    let p = params(64.0);
    for grid_type in GridType::ALL {
        let first = generate_guide(grid_type, &p).unwrap();
        let second = generate_guide(grid_type, &p).unwrap();
        assert_eq!(first, second, "{:?}", grid_type);
    }
}

#[test]
fn test_every_style_but_heng_zhong_si_has_border() {
    for grid_type in GridType::ALL {
        let guide = generate_guide(grid_type, &params(64.0)).unwrap();
        let expects_square = !matches!(grid_type, GridType::Heng | GridType::Zhong | GridType::Si);
        let has_square = guide
            .with_role(GuideRole::Border)
            .any(|e| matches!(e.shape, GuideShape::Rect { .. }));

        assert_eq!(has_square, expects_square, "{:?}", grid_type);
    }
}

#[test]
fn test_mi_has_cross_and_diagonals() {
    let guide = generate_guide(GridType::Mi, &params(64.0)).unwrap();

    assert_eq!(guide.with_role(GuideRole::CenterLine).count(), 2);
    assert_eq!(guide.with_role(GuideRole::Diagonal).count(), 2);
}

#[test]
fn test_mitian_adds_circle() {
    let guide = generate_guide(GridType::Mitian, &params(100.0)).unwrap();
    let circle = guide.with_role(GuideRole::Circle).next().unwrap();

    assert_eq!(
        circle.shape,
        GuideShape::Circle {
            center: Point::new(50.0, 50.0),
            radius: 30.0,
        }
    );
    assert_eq!(guide.with_role(GuideRole::Diagonal).count(), 2);
}

#[test]
fn test_jiu_thirds() {
    let guide = generate_guide(GridType::Jiu, &params(90.0)).unwrap();
    assert_eq!(guide.with_role(GuideRole::ThirdLine).count(), 4);
}

#[test]
fn test_colors_pass_through() {
    let p = GuideParams {
        border_color: "#c00".to_string(),
        guide_color: "rgb(1, 2, 3)".to_string(),
        ..params(64.0)
    };
    let guide = generate_guide(GridType::Tian, &p).unwrap();

    let border = guide.with_role(GuideRole::Border).next().unwrap();
    let cross = guide.with_role(GuideRole::CenterLine).next().unwrap();
    assert_eq!(border.stroke.color, "#c00");
    assert_eq!(cross.stroke.color, "rgb(1, 2, 3)");
}

#[test]
fn test_unknown_name_falls_back_to_tian() {
    let p = params(64.0);
    let unknown = generate_guide_by_name("hexagon", &p).unwrap();
    let tian = generate_guide(GridType::Tian, &p).unwrap();

    assert_eq!(unknown, tian);
    assert_eq!(generate_guide_by_name("MI", &p).unwrap(), generate_guide(GridType::Mi, &p).unwrap());
}

#[test]
fn test_non_positive_size_rejected() {
    for size in [0.0, -10.0, f32::INFINITY] {
        let result = generate_guide(GridType::Tian, &params(size));
        assert!(matches!(result, Err(SheetError::InvalidDimension { .. })));
    }
}
