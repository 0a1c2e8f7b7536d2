use std::fs;

use pacsense_render::{save_pgm, ImageView, RenderError};

#[test]
fn saved_file_is_readable_pgm() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frame.pgm");
    let data: Vec<f32> = (0..12).map(|i| i as f32 / 5.5 - 1.0).collect();
    let img = ImageView::new(&data, 3, 4).unwrap();
    save_pgm(&img, &path).unwrap();

    let bytes = fs::read(&path).unwrap();
    let header = b"P5\n4 3\n255\n";
    assert_eq!(&bytes[..header.len()], header);
    let pixels = &bytes[header.len()..];
    assert_eq!(pixels.len(), 12);
    assert_eq!(pixels[0], 0);
    assert_eq!(pixels[11], 255);
    assert!(pixels.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn saving_replaces_previous_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frame.pgm");
    fs::write(&path, vec![7u8; 1000]).unwrap();
    let img = ImageView::new(&[1.0], 1, 1).unwrap();
    save_pgm(&img, &path).unwrap();
    assert_eq!(fs::read(&path).unwrap(), b"P5\n1 1\n255\n\xff");
}

#[test]
fn missing_folder_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent").join("frame.pgm");
    let img = ImageView::new(&[0.0], 1, 1).unwrap();
    match save_pgm(&img, &path) {
        Err(RenderError::Io { path: Some(p), .. }) => assert_eq!(p, path),
        other => panic!("expected io error with path, got {other:?}"),
    }
}
