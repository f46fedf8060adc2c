use super::*;
use crate::config::PipelineConfig;
use crate::encode::sink::InMemorySink;
use crate::foundation::core::FrameSize;

fn pipeline(batch_size: usize) -> Pipeline {
    Pipeline::new(PipelineConfig {
        frame_size: FrameSize::new(2, 2),
        upscale_size: FrameSize::new(4, 4),
        batch_size,
        ..PipelineConfig::default()
    })
    .unwrap()
}

#[test]
fn plan_matches_actual_run() {
    let dir = tempfile::tempdir().unwrap();
    let paths: Vec<PathBuf> = [5usize, 12, 13, 40, 1, 24, 25]
        .iter()
        .enumerate()
        .map(|(i, &len)| {
            let p = dir.path().join(format!("{i}.bin"));
            std::fs::write(&p, vec![0xabu8; len]).unwrap();
            p
        })
        .collect();
    let base = dir.path().join("video.mp4");
    let p = pipeline(3);

    let plan = p.plan(&paths, &base).unwrap();
    let mut sink = InMemorySink::new();
    p.run(&paths, &base, &mut sink).unwrap();

    assert_eq!(plan.segments.len(), sink.segments().len());
    for (planned, written) in plan.segments.iter().zip(sink.segments()) {
        assert_eq!(planned.out_path, written.config.out_path);
        assert_eq!(planned.frames, written.frames.len() as u64);
    }
    let numbers: Vec<u32> = plan.segments.iter().map(|s| s.number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    assert_eq!(plan.segments[2].files.len(), 1);
    assert_eq!(
        plan.peak_batch_frames,
        plan.segments.iter().map(|s| s.frames).max().unwrap()
    );
    // Largest file is 40 bytes -> 14 colors -> 4 frames, three files per batch.
    assert_eq!(plan.max_batch_frames, 12);
    assert!(plan.peak_batch_frames <= plan.max_batch_frames);
}

#[test]
fn plan_serializes_to_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.bin");
    std::fs::write(&path, [1u8, 2, 3]).unwrap();

    let plan = pipeline(10)
        .plan(std::slice::from_ref(&path), Path::new("out.mp4"))
        .unwrap();
    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["segments"][0]["number"], 1);
    assert_eq!(json["segments"][0]["out_path"], "out_part1.mp4");
    assert_eq!(json["segments"][0]["files"][0]["bytes"], 3);
    assert_eq!(json["frames_total"], 1);
    assert_eq!(json["max_batch_frames"], 10);
}

#[test]
fn plan_fails_on_missing_file() {
    let err = pipeline(1)
        .plan(&[PathBuf::from("definitely/missing.bin")], Path::new("o.mp4"))
        .unwrap_err();
    assert!(err.is_read_failure());
}
