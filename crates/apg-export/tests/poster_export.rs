//! Full pipeline: info file and cover art in, poster PNG out.

use std::path::PathBuf;
use std::sync::Arc;

use apg_core::AlbumInfo;
use apg_export::{export_poster, output_file_name};
use apg_layout::{compute_poster_layout, CanvasGeometry, PosterLayout, PosterOptions};
use apg_render_2d::{build_scene, load_cover_art, FontBook, RenderOptions, RenderTarget, SoftwareRenderer};
use glam::Vec2;

fn asset(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../assets").join(relative)
}

fn render(album: &AlbumInfo) -> (PosterLayout, RenderTarget) {
    let fonts = FontBook::load(
        asset("fonts/DejaVuSans-Bold.ttf"),
        asset("fonts/DejaVuSansCondensed-Bold.ttf"),
    )
    .unwrap();

    let options = PosterOptions::default();
    let side = CanvasGeometry::new(&options).cover_side();
    let cover = load_cover_art(asset("example_data/raceforspace.png"), side as u32).unwrap();
    let layout = compute_poster_layout(album, Vec2::splat(side), &options, &fonts).unwrap();

    let scene = build_scene(&layout, Arc::new(cover), &RenderOptions::default());
    let mut target = RenderTarget::new(options.poster_width, options.poster_height);
    SoftwareRenderer::new().render(&scene, &fonts, &mut target).unwrap();
    (layout, target)
}

#[test]
fn test_example_poster_round_trip() {
    let album = AlbumInfo::load(asset("example_data/raceforspace.txt")).unwrap();
    assert_eq!(album.track_names.len(), 9);

    let (layout, target) = render(&album);
    assert_eq!(layout.left_tracks.overflow() + layout.right_tracks.overflow(), 0);

    // Border stays background, the divider is foreground
    assert_eq!(target.pixel(10, 10), Some([245, 245, 245, 255]));
    let divider = layout.divider.midpoint();
    assert_eq!(target.pixel(divider.x as u32, divider.y as u32), Some([0, 0, 0, 255]));

    let dir = tempfile::tempdir().unwrap();
    let path = export_poster(&target, &album, dir.path()).unwrap();
    assert_eq!(path.file_name().unwrap(), "Race_for_Space-Public_Service_Broadcasting.png");
    assert_eq!(output_file_name(&album), "Race_for_Space-Public_Service_Broadcasting.png");

    let exported = image::open(&path).unwrap().to_rgba8();
    assert_eq!(exported.dimensions(), (3508, 4961));
    assert_eq!(exported.as_raw(), target.pixels());
}

#[test]
fn test_twelve_tracks_fill_two_columns() {
    let album = AlbumInfo {
        album_name: "Race for Space".into(),
        artist_name: "Public Service Broadcasting".into(),
        album_date: "23 February 2015".into(),
        album_duration: "43:38".into(),
        track_names: [
            "Race for Space",
            "Sputnik",
            "Gagarin",
            "Fire in the Cockpit",
            "E.V.A.",
            "The Other Side",
            "Valentina",
            "Go!",
            "Tomorrow",
            "Korolev",
            "Vostok",
            "Apollo",
        ]
        .map(String::from)
        .to_vec(),
    };

    let (layout, target) = render(&album);
    assert_eq!(layout.columns.count, 10);
    assert_eq!(layout.left_tracks.rows().len(), 10);
    assert_eq!(layout.right_tracks.rows().len(), 2);
    assert_eq!(layout.left_tracks.overflow(), 0);
    assert_eq!(layout.right_tracks.overflow(), 0);

    // The right column starts at the divider midpoint and is drawn
    let right = layout.right_tracks.bounds();
    assert_eq!(right.x, layout.divider.midpoint().x);
    let inked = (right.x as u32..right.right() as u32)
        .flat_map(|x| (right.y as u32..right.bottom() as u32).map(move |y| (x, y)))
        .any(|(x, y)| target.pixel(x, y).is_some_and(|p| p[0] < 128));
    assert!(inked, "right column rendered nothing");

    let dir = tempfile::tempdir().unwrap();
    let path = export_poster(&target, &album, dir.path()).unwrap();
    assert_eq!(path.file_name().unwrap(), "Race_for_Space-Public_Service_Broadcasting.png");

    let exported = image::open(&path).unwrap();
    assert_eq!((exported.width(), exported.height()), (3508, 4961));
}
