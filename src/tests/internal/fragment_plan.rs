//! 分片规划测试：分片数、字节范围连续覆盖、Range 头格式，以及资源描述上的配置方法。

use crate::downloader::{plan_fragments, FragmentJob};
use crate::remote_resource::DEFAULT_FRAGMENT_SIZE;
use crate::{DownloadConfig, RemoteResource};

const MIB: u64 = 1024 * 1024;

/// 检查分片首尾相接、不重叠、覆盖 `[0, size - 1]`，序号从 0 连续递增。
fn assert_contiguous_cover(jobs: &[FragmentJob], size: u64) {
    assert!(!jobs.is_empty());
    assert_eq!(jobs[0].byte_start, 0);
    assert_eq!(jobs.last().unwrap().byte_end, size - 1);
    for (i, pair) in jobs.windows(2).enumerate() {
        assert_eq!(pair[0].index, i);
        assert_eq!(pair[1].index, i + 1);
        assert_eq!(pair[0].byte_end + 1, pair[1].byte_start);
    }
    let total: u64 = jobs.iter().map(|j| j.len()).sum();
    assert_eq!(total, size);
}

#[test]
fn plan_matches_reference_ranges() {
    let jobs = plan_fragments(1_699_280, MIB);
    assert_eq!(jobs.len(), 2);
    assert_eq!((jobs[0].byte_start, jobs[0].byte_end), (0, 1_048_575));
    assert_eq!((jobs[1].byte_start, jobs[1].byte_end), (1_048_576, 1_699_279));
    assert_contiguous_cover(&jobs, 1_699_280);
}

#[test]
fn plan_covers_exact_and_ragged_sizes() {
    for (size, fragment_size) in [
        (1, 1),
        (10, 3),
        (12, 3),
        (4096, 4096),
        (4097, 4096),
        (7 * MIB + 5, MIB),
    ] {
        let jobs = plan_fragments(size, fragment_size);
        assert_eq!(jobs.len() as u64, size.div_ceil(fragment_size));
        assert_contiguous_cover(&jobs, size);
    }
}

#[test]
fn plan_for_empty_resource_is_empty() {
    assert!(plan_fragments(0, MIB).is_empty());
}

#[test]
fn fragment_larger_than_resource_yields_one_job() {
    let jobs = plan_fragments(100, MIB);
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].len(), 100);
}

#[test]
fn zero_fragment_size_is_treated_as_one() {
    let jobs = plan_fragments(3, 0);
    assert_eq!(jobs.len(), 3);
    assert_contiguous_cover(&jobs, 3);
}

#[test]
fn range_header_is_inclusive() {
    let job = FragmentJob {
        index: 1,
        byte_start: 1_048_576,
        byte_end: 1_699_279,
    };
    assert_eq!(job.range_header(), "bytes=1048576-1699279");
    assert_eq!(job.len(), 650_704);
}

#[test]
fn num_fragments_depends_on_range_support() {
    let url = "http://localhost/files/a.bin";

    let resource =
        RemoteResource::from_parts(url, 1_699_280, true).with_fragment_size(MIB);
    assert_eq!(resource.num_fragments(), 2);

    let resource =
        RemoteResource::from_parts(url, 1_699_280, false).with_fragment_size(MIB);
    assert_eq!(resource.num_fragments(), 1);

    let resource = RemoteResource::from_parts(url, 0, true);
    assert_eq!(resource.num_fragments(), 0);
}

#[test]
fn default_fragment_size_is_four_mib() {
    let resource = RemoteResource::from_parts("http://localhost/x", 10, true);
    assert_eq!(resource.fragment_size(), DEFAULT_FRAGMENT_SIZE);
    assert_eq!(DEFAULT_FRAGMENT_SIZE, 4 * MIB);
    assert!(!resource.keeps_fragments());
}

#[test]
fn with_config_clamps_fragment_size() {
    let config = DownloadConfig {
        fragment_size: 0,
        keep_fragments: true,
        ..DownloadConfig::default()
    };
    let resource =
        RemoteResource::from_parts("http://localhost/x", 10, true).with_config(config);
    assert_eq!(resource.fragment_size(), 1);
    assert!(resource.keeps_fragments());
    assert_eq!(resource.num_fragments(), 10);
}

#[test]
fn suggested_file_name_uses_last_path_segment() {
    let cases = [
        ("http://localhost/files/song.wav", "song.wav"),
        ("http://localhost/files/dir/", "dir"),
        ("http://localhost/files/a.bin?token=1", "a.bin"),
        ("http://localhost/", "download"),
        ("not a url", "download"),
    ];
    for (url, expected) in cases {
        let resource = RemoteResource::from_parts(url, 1, true);
        assert_eq!(resource.suggested_file_name(), expected, "url: {url}");
    }
}

#[test]
fn config_accepts_partial_fields() {
    let config: DownloadConfig =
        serde_json::from_str(r#"{ "fragment_size": 1024, "keep_fragments": true }"#).unwrap();

    let defaults = DownloadConfig::default();
    assert_eq!(config.fragment_size, 1024);
    assert!(config.keep_fragments);
    assert_eq!(config.scratch_dir, defaults.scratch_dir);
    assert_eq!(config.max_collision_attempts, defaults.max_collision_attempts);

    let text = serde_json::to_string(&config).unwrap();
    let back: DownloadConfig = serde_json::from_str(&text).unwrap();
    assert_eq!(back, config);
}
