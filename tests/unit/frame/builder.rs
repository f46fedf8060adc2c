use super::*;

fn ramp(n: usize) -> Vec<Rgb8> {
    (0..n)
        .map(|i| Rgb8::new(i as u8, (i >> 8) as u8, 0xaa))
        .collect()
}

#[test]
fn colors_are_placed_row_major() {
    let size = FrameSize::new(3, 2);
    let colors = ramp(6);
    let frame = build_frame(&colors, size).unwrap();
    for (idx, c) in colors.iter().enumerate() {
        let x = (idx % 3) as u32;
        let y = (idx / 3) as u32;
        assert_eq!(frame.pixel(x, y), *c);
    }
}

#[test]
fn short_chunk_is_padded_black() {
    let frame = build_frame(&ramp(2), FrameSize::new(2, 2)).unwrap();
    assert_eq!(frame.pixel(1, 0), Rgb8::new(1, 0, 0xaa));
    assert_eq!(frame.pixel(0, 1), Rgb8::BLACK);
    assert_eq!(frame.pixel(1, 1), Rgb8::BLACK);
}

#[test]
fn too_many_colors_is_rejected() {
    assert!(build_frame(&ramp(5), FrameSize::new(2, 2)).is_err());
    assert!(build_frame(&[], FrameSize::new(0, 2)).is_err());
}

#[test]
fn frame_count_is_ceil_of_capacity() {
    let size = FrameSize::new(2, 2);
    assert_eq!(frame_count(0, size), 0);
    assert_eq!(frame_count(1, size), 1);
    assert_eq!(frame_count(4, size), 1);
    assert_eq!(frame_count(5, size), 2);
    assert_eq!(frame_count_for_len(0, size), 0);
    assert_eq!(frame_count_for_len(12, size), 1);
    assert_eq!(frame_count_for_len(13, size), 2);
}

#[test]
fn layout_emits_one_upscaled_frame_per_chunk() {
    let layout = FrameLayout::new(FrameSize::new(2, 2), FrameSize::new(4, 4)).unwrap();
    let colors = ramp(9);
    let frames = layout.frames_for_colors(&colors).unwrap();
    assert_eq!(frames.len(), 3);
    for f in &frames {
        assert_eq!(f.size(), FrameSize::new(4, 4));
    }
    // Second chunk starts at colors[4]; its top-left 2x2 block replicates that color.
    assert_eq!(frames[1].pixel(0, 0), colors[4]);
    assert_eq!(frames[1].pixel(1, 1), colors[4]);
    // Last chunk holds a single color, the rest is black.
    assert_eq!(frames[2].pixel(0, 0), colors[8]);
    assert_eq!(frames[2].pixel(3, 3), Rgb8::BLACK);
}

#[test]
fn layout_count_agrees_with_emitted_frames() {
    let layout = FrameLayout::new(FrameSize::new(3, 3), FrameSize::new(6, 6)).unwrap();
    for len in [0usize, 1, 26, 27, 28, 54, 55, 200] {
        let bytes = vec![0x11u8; len];
        let frames = layout.frames_for_bytes(&bytes).unwrap();
        assert_eq!(frames.len() as u64, layout.frame_count_for_len(len as u64));
    }
}

#[test]
fn layout_is_deterministic() {
    let layout = FrameLayout::new(FrameSize::new(4, 4), FrameSize::new(8, 8)).unwrap();
    let bytes: Vec<u8> = (0..100u8).collect();
    assert_eq!(
        layout.frames_for_bytes(&bytes).unwrap(),
        layout.frames_for_bytes(&bytes).unwrap()
    );
}

#[test]
fn layout_rejects_empty_sizes() {
    assert!(FrameLayout::new(FrameSize::new(0, 1), FrameSize::new(2, 2)).is_err());
    assert!(FrameLayout::new(FrameSize::new(1, 1), FrameSize::new(2, 0)).is_err());
}
