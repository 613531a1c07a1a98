use zitie_layout::*;

#[test]
fn test_statistics_multi_page() {
    let mut options = SheetOptions::default();
    options.layout.repeat_count = 10;
    let text: String = std::iter::repeat_n("永", 20).collect();

    let stats = calculate_statistics(&text, &options).unwrap();

    // 15 runs of 10 fit in 154 cells
    assert_eq!(stats.characters, 20);
    assert_eq!(stats.cells, 200);
    assert_eq!(stats.pages, 2);
    assert_eq!(stats.cells_per_page, 154);
    assert_eq!(stats.unused_cells_last_page, 104);
}

#[test]
fn test_statistics_vertical() {
    let mut options = SheetOptions::default();
    options.layout.layout_type = LayoutType::Vertical;
    options.layout.repeat_count = 5;

    let stats = calculate_statistics("永和九年岁在癸丑暮春之初", &options).unwrap();

    // 10 columns of 5 cells per A4 page
    assert_eq!(stats.cells_per_page, 50);
    assert_eq!(stats.pages, 2);
    assert_eq!(stats.unused_cells_last_page, 40);
}

#[test]
fn test_statistics_overflowing_run() {
    let mut options = SheetOptions::default();
    options.layout.repeat_count = 200;

    let stats = calculate_statistics("永", &options).unwrap();

    assert_eq!(stats.pages, 1);
    assert_eq!(stats.cells, 200);
    assert_eq!(stats.unused_cells_last_page, 0);
}

#[test]
fn test_statistics_rejects_invalid_options() {
    let mut options = SheetOptions::default();
    options.layout.grid_size = -64.0;

    assert!(calculate_statistics("永", &options).is_err());
}
