use super::*;

#[test]
fn black_frame_has_packed_rgb_len() {
    let f = FrameRGB::black(FrameSize::new(4, 3));
    assert_eq!(f.data.len(), 4 * 3 * 3);
    assert!(f.pixels().all(|p| p == Rgb8::BLACK));
    assert_eq!(f.size(), FrameSize::new(4, 3));
}

#[test]
fn set_and_get_pixel_are_row_major() {
    let mut f = FrameRGB::black(FrameSize::new(3, 2));
    f.set_pixel(2, 1, Rgb8::new(9, 8, 7));
    assert_eq!(f.pixel(2, 1), Rgb8::new(9, 8, 7));
    assert_eq!(&f.data[15..18], &[9, 8, 7]);
}

#[test]
fn to_image_preserves_pixels() {
    let mut f = FrameRGB::black(FrameSize::new(2, 2));
    f.set_pixel(1, 0, Rgb8::new(1, 2, 3));
    let img = f.to_image().unwrap();
    assert_eq!(img.dimensions(), (2, 2));
    assert_eq!(img.get_pixel(1, 0).0, [1, 2, 3]);
}

#[test]
fn to_image_rejects_short_buffer() {
    let f = FrameRGB {
        width: 2,
        height: 2,
        data: vec![0; 5],
    };
    assert!(f.to_image().is_err());
}

#[test]
fn save_png_writes_readable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("f.png");
    let mut f = FrameRGB::black(FrameSize::new(2, 1));
    f.set_pixel(0, 0, Rgb8::new(255, 0, 0));
    f.save_png(&path).unwrap();

    let back = image::open(&path).unwrap().to_rgb8();
    assert_eq!(back.get_pixel(0, 0).0, [255, 0, 0]);
    assert_eq!(back.get_pixel(1, 0).0, [0, 0, 0]);
}
