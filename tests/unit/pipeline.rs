use super::*;

fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_pipeline").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn walled_image() -> RgbImage {
    let mut img = RgbImage::from_pixel(600, 600, image::Rgb([255, 255, 255]));
    for k in 0..600 {
        img.put_pixel(k, 0, image::Rgb([0, 0, 0]));
        img.put_pixel(0, k, image::Rgb([0, 0, 0]));
    }
    img.put_pixel(300, 300, image::Rgb([0, 255, 0]));
    img.put_pixel(400, 300, image::Rgb([255, 0, 0]));
    img
}

#[test]
fn discretize_track_file_writes_track_and_debug() {
    let dir = scratch("discretize");
    let image_path = dir.join("racetrack.png");
    walled_image().save(&image_path).unwrap();

    let opts = DiscretizeOpts {
        image: image_path,
        debug: Some(dir.join("debug.png")),
        out: dir.join("racetrack.values"),
        layout: TrackLayout::STANDARD,
    };
    let grid = discretize_track_file(&opts).unwrap();

    let bytes = std::fs::read(&opts.out).unwrap();
    assert_eq!(bytes.len(), GRID_CELLS);
    assert_eq!(bytes, grid.to_bytes());
    assert_eq!(grid.get(25, 25), Category::Start);
    assert_eq!(grid.get(25, 33), Category::Finish);

    let debug = image::open(dir.join("debug.png")).unwrap();
    assert_eq!((debug.width(), debug.height()), (600, 600));
}

#[test]
fn discretize_track_file_rejects_four_channel_images() {
    let dir = scratch("rgba");
    let image_path = dir.join("racetrack.png");
    image::RgbaImage::from_pixel(600, 600, image::Rgba([0, 0, 0, 255]))
        .save(&image_path)
        .unwrap();

    let opts = DiscretizeOpts {
        image: image_path,
        debug: None,
        out: dir.join("racetrack.values"),
        layout: TrackLayout::STANDARD,
    };
    let err = discretize_track_file(&opts).unwrap_err();
    assert!(matches!(err, RacetrackError::ShapeMismatch(_)));
    assert!(!opts.out.exists());
}

#[test]
fn discretize_track_file_requires_walls() {
    let dir = scratch("no_walls");
    let image_path = dir.join("racetrack.png");
    RgbImage::from_pixel(600, 600, image::Rgb([255, 255, 255]))
        .save(&image_path)
        .unwrap();

    let opts = DiscretizeOpts {
        image: image_path,
        debug: Some(dir.join("debug.png")),
        out: dir.join("racetrack.values"),
        layout: TrackLayout::STANDARD,
    };
    assert!(matches!(
        discretize_track_file(&opts),
        Err(RacetrackError::MissingBoundary)
    ));
    assert!(!opts.out.exists());
    assert!(!dir.join("debug.png").exists());
}

#[test]
fn missing_input_is_an_io_error() {
    let dir = scratch("missing");
    let err = load_track(&dir.join("nope.values")).unwrap_err();
    assert!(matches!(err, RacetrackError::Io { .. }));
    let err = load_episode(&dir.join("nope.values")).unwrap_err();
    assert!(matches!(err, RacetrackError::Io { .. }));
}

#[test]
fn track_file_roundtrip() {
    let dir = scratch("roundtrip");
    let path = dir.join("t.values");
    let mut grid = CategoryGrid::filled(Category::Boundary);
    grid.set(1, 2, Category::Start);
    grid.set(48, 47, Category::Finish);
    grid.set(20, 20, Category::Track);

    write_track(&path, &grid).unwrap();
    assert_eq!(load_track(&path).unwrap(), grid);
}

#[test]
fn summarize_counts_and_locates_markers() {
    let mut grid = CategoryGrid::filled(Category::Track);
    grid.set(0, 0, Category::Boundary);
    grid.set(2, 3, Category::Start);
    grid.set(2, 4, Category::Start);
    grid.set(7, 1, Category::Finish);

    let s = summarize_track(&grid);
    assert_eq!(s.cells, GRID_CELLS);
    assert_eq!((s.boundary, s.start, s.finish), (1, 2, 1));
    assert_eq!(s.track, GRID_CELLS - 4);
    assert_eq!(s.start_cells, vec![[2, 3], [2, 4]]);
    assert_eq!(s.finish_cells, vec![[7, 1]]);
}
