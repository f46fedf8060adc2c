use super::*;

#[test]
fn defaults_match_documented_values() {
    let cfg = PipelineConfig::default();
    assert_eq!(cfg.frame_size, FrameSize::new(80, 80));
    assert_eq!(cfg.upscale_size, FrameSize::new(160, 160));
    assert_eq!(cfg.fps, Fps::new(30, 1).unwrap());
    assert_eq!(cfg.batch_size, 10);
    assert_eq!(cfg.failure_policy, FailurePolicy::Abort);
    assert!(cfg.sort_paths);
    cfg.validate().unwrap();
}

#[test]
fn partial_json_fills_defaults() {
    let json = r#"{ "batch_size": 3, "fps": { "num": 1, "den": 1 }, "failure_policy": "skip" }"#;
    let cfg = PipelineConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(cfg.batch_size, 3);
    assert_eq!(cfg.fps, Fps::new(1, 1).unwrap());
    assert_eq!(cfg.failure_policy, FailurePolicy::Skip);
    assert_eq!(cfg.frame_size, FrameSize::new(80, 80));
}

#[test]
fn unknown_fields_and_bad_values_are_rejected() {
    assert!(PipelineConfig::from_reader(r#"{ "batchsize": 3 }"#.as_bytes()).is_err());
    assert!(PipelineConfig::from_reader(r#"{ "batch_size": 0 }"#.as_bytes()).is_err());
    assert!(
        PipelineConfig::from_reader(r#"{ "frame_size": { "width": 0, "height": 8 } }"#.as_bytes())
            .is_err()
    );
    assert!(
        PipelineConfig::from_reader(r#"{ "fps": { "num": 30, "den": 0 } }"#.as_bytes()).is_err()
    );
}

#[test]
fn from_path_reads_file_and_reports_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cfg.json");
    std::fs::write(&path, r#"{ "upscale_size": { "width": 320, "height": 240 } }"#).unwrap();
    let cfg = PipelineConfig::from_path(&path).unwrap();
    assert_eq!(cfg.upscale_size, FrameSize::new(320, 240));

    let err = PipelineConfig::from_path(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, BytereelError::NotFound { .. }));
}

#[test]
fn max_batch_frames_scales_with_batch_size() {
    let cfg = PipelineConfig {
        frame_size: FrameSize::new(2, 2),
        batch_size: 4,
        ..PipelineConfig::default()
    };
    // 13 bytes -> 5 colors -> 2 frames per file.
    assert_eq!(cfg.max_batch_frames(13), 8);
}
