use super::*;

#[test]
fn category_bytes_match_file_layout() {
    for (b, c) in Category::ALL.iter().enumerate() {
        assert_eq!(c.as_u8() as usize, b);
        assert_eq!(Category::try_from(b as u8).unwrap(), *c);
    }
}

#[test]
fn category_rejects_values_above_three() {
    assert!(matches!(
        Category::try_from(4u8),
        Err(RacetrackError::CategoryRange(4))
    ));
    assert!(matches!(
        Category::try_from(255u8),
        Err(RacetrackError::CategoryRange(255))
    ));
}

#[test]
fn standard_palette_colors() {
    let p = Palette::STANDARD;
    assert_eq!(p.color(Category::Boundary), image::Rgb([0, 0, 0]));
    assert_eq!(p.color(Category::Start), image::Rgb([0, 255, 0]));
    assert_eq!(p.color(Category::Finish), image::Rgb([255, 0, 0]));
    assert_eq!(p.color(Category::Track), image::Rgb([255, 255, 255]));
}

#[test]
fn reference_colors_prioritize_black_then_green_then_red() {
    let order: Vec<_> = Palette::STANDARD
        .reference_colors()
        .iter()
        .map(|(c, _)| *c)
        .collect();
    assert_eq!(
        order,
        vec![Category::Boundary, Category::Start, Category::Finish]
    );
}

#[test]
fn standard_layout_uses_twelve_pixel_blocks() {
    assert_eq!(TrackLayout::STANDARD.block_side(), 12);
    TrackLayout::STANDARD.validate().unwrap();

    let tiny = TrackLayout {
        image_side: 49,
        ..TrackLayout::STANDARD
    };
    assert!(matches!(
        tiny.validate(),
        Err(RacetrackError::ShapeMismatch(_))
    ));
}
