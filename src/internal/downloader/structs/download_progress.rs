use serde::Serialize;

/// 下载进度快照：通过下载句柄的 `watch_progress()` 监听，每次写入数据后更新。
///
/// 发布的 `bytes_done` 单调不减；`completed` 只在下载成功结束后置为 `true`。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DownloadProgress {
    /// 已写入的字节数（含续传命中的分片）
    pub bytes_done: u64,
    /// 文件总大小（字节），来自探测结果
    pub total: u64,
    /// 是否已成功完成
    pub completed: bool,
}

impl DownloadProgress {
    /// 进度比例（0～1）。总大小为 0 时，完成前为 0，完成后为 1。
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return if self.completed { 1.0 } else { 0.0 };
        }
        (self.bytes_done as f64 / self.total as f64).clamp(0.0, 1.0)
    }

    /// 进度百分比（0～100）。
    pub fn pct(&self) -> f64 {
        self.fraction() * 100.0
    }
}
