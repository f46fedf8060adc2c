use super::*;

#[test]
fn inserts_part_suffix_before_extension() {
    assert_eq!(
        segment_path(Path::new("output.mp4"), 1),
        PathBuf::from("output_part1.mp4")
    );
    assert_eq!(
        segment_path(Path::new("out/dir/video.mkv"), 12),
        PathBuf::from("out/dir/video_part12.mkv")
    );
}

#[test]
fn only_last_extension_is_split() {
    assert_eq!(
        segment_path(Path::new("a.tar.mp4"), 3),
        PathBuf::from("a.tar_part3.mp4")
    );
}

#[test]
fn dotted_directories_are_left_alone() {
    assert_eq!(
        segment_path(Path::new("v1.2/output"), 1),
        PathBuf::from("v1.2/output_part1.mp4")
    );
}
