use super::*;
use crate::encode::sink::InMemorySink;
use crate::foundation::core::{FrameSize, Rgb8};

fn solid(size: FrameSize, c: Rgb8) -> FrameRGB {
    let mut f = FrameRGB::black(size);
    for y in 0..size.height {
        for x in 0..size.width {
            f.set_pixel(x, y, c);
        }
    }
    f
}

#[test]
fn frames_are_pushed_in_order() {
    let size = FrameSize::new(4, 4);
    let frames = vec![
        solid(size, Rgb8::new(1, 0, 0)),
        solid(size, Rgb8::new(2, 0, 0)),
        solid(size, Rgb8::new(3, 0, 0)),
    ];
    let mut sink = InMemorySink::new();
    let fps = Fps::new(30, 1).unwrap();
    let report = encode_segment(&mut sink, &frames, Path::new("out_part1.mp4"), fps).unwrap();

    assert_eq!(report.frames, 3);
    assert_eq!((report.width, report.height), (4, 4));
    let segs = sink.segments();
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].frames, frames);
    assert_eq!(segs[0].config.fps, fps);
    assert_eq!(segs[0].config.out_path, PathBuf::from("out_part1.mp4"));
}

#[test]
fn empty_frame_set_is_an_encoding_error() {
    let mut sink = InMemorySink::new();
    let err = encode_segment(
        &mut sink,
        &[],
        Path::new("x.mp4"),
        Fps::new(30, 1).unwrap(),
    )
    .unwrap_err();
    assert!(matches!(err, BytereelError::Encoding(_)));
    assert!(sink.segments().is_empty());
}

#[test]
fn mixed_dimensions_are_an_encoding_error() {
    let frames = vec![
        FrameRGB::black(FrameSize::new(4, 4)),
        FrameRGB::black(FrameSize::new(4, 2)),
    ];
    let mut sink = InMemorySink::new();
    let err = encode_segment(
        &mut sink,
        &frames,
        Path::new("x.mp4"),
        Fps::new(30, 1).unwrap(),
    )
    .unwrap_err();
    assert!(matches!(err, BytereelError::Encoding(_)));
    assert!(err.to_string().contains("frame 1"));
    assert!(sink.segments().is_empty());
}

#[test]
fn in_memory_sink_rejects_nested_begin() {
    let mut sink = InMemorySink::new();
    let cfg = SinkConfig {
        width: 2,
        height: 2,
        fps: Fps::new(1, 1).unwrap(),
        out_path: PathBuf::from("a.mp4"),
    };
    sink.begin(cfg.clone()).unwrap();
    assert!(sink.begin(cfg).is_err());
    sink.end().unwrap();
    assert!(sink.end().is_err());
}
