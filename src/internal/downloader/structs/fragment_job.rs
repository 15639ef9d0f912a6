//! 分片任务与分片结果。

use std::path::PathBuf;

use super::download_error::DownloadError;

/// 单个分片任务：序号及其闭区间字节范围。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FragmentJob {
    /// 分片序号（从 0 开始），决定字节范围与合并顺序
    pub index: usize,
    /// 起始字节（含）
    pub byte_start: u64,
    /// 结束字节（含）
    pub byte_end: u64,
}

impl FragmentJob {
    /// 分片长度：`byte_end - byte_start + 1`。
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> u64 {
        self.byte_end - self.byte_start + 1
    }

    /// `Range` 请求头：`bytes=start-end`，两端均含。
    pub fn range_header(&self) -> String {
        format!("bytes={}-{}", self.byte_start, self.byte_end)
    }
}

/// 分片任务处理结果：成功时为分片文件路径。
#[derive(Debug)]
pub struct FragmentResult {
    pub index: usize,
    pub outcome: Result<PathBuf, DownloadError>,
}

/// 按固定分片大小切分 `[0, size)`；最后一片的结束字节恒为 `size - 1`。
///
/// 分片数 = `ceil(size / fragment_size)`，`size` 为 0 时返回空列表。
pub fn plan_fragments(size: u64, fragment_size: u64) -> Vec<FragmentJob> {
    let fragment_size = fragment_size.max(1);
    let count = size.div_ceil(fragment_size);

    (0..count)
        .map(|i| {
            let byte_start = i * fragment_size;
            let byte_end = byte_start
                .saturating_add(fragment_size - 1)
                .min(size - 1);
            FragmentJob {
                index: i as usize,
                byte_start,
                byte_end,
            }
        })
        .collect()
}
