//! 下载相关错误类型。

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("HTTP 请求失败: {0}")]
    Request(#[from] reqwest::Error),

    #[error("分片 {index} 未返回 206 Partial Content（状态码 {status}）")]
    RangeNotHonored {
        index: usize,
        status: reqwest::StatusCode,
    },

    #[error("分片 {index} 长度不符：预期 {expected} 字节，实际 {actual} 字节")]
    FragmentLength {
        index: usize,
        expected: u64,
        actual: u64,
    },

    #[error("创建临时目录失败: {0}")]
    CreateScratchDir(std::io::Error),

    #[error("创建文件失败: {0}")]
    CreateFile(std::io::Error),

    #[error("打开文件失败: {0}")]
    OpenFile(std::io::Error),

    #[error("写入文件失败: {0}")]
    WriteFile(std::io::Error),

    #[error("读取文件信息失败: {0}")]
    ReadFile(std::io::Error),

    #[error("删除临时文件失败: {0}")]
    RemoveFile(std::io::Error),

    #[error("目标文件重名，已尝试 {attempts} 个名称: {path:?}")]
    DestinationCollisionExhausted { path: PathBuf, attempts: usize },

    #[error("下载任务提前退出：已收到 {received}/{expected} 个分片结果")]
    WorkersExited { received: usize, expected: usize },

    #[error("后台下载任务异常终止")]
    TaskAborted,

    #[error("下载结果已被取走")]
    CompletionConsumed,
}
