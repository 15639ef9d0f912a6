//! `RemoteResource` 的下载入口。

use std::path::Path;

use crate::internal::remote_resource::structs::RemoteResource;

use super::fragmented_download::start_fragmented_download;
use super::single_download::start_single_download;
use super::structs::{DownloadError, DownloadHandle};

impl RemoteResource {
    /// 开始下载到 `destination`，分派完成后立即返回句柄。
    ///
    /// - 支持 Range：按分片大小切分，`threads` 个 worker 并发下载（0 按 1 处理）
    /// - 不支持 Range：忽略 `threads`，单个 GET 流式写入
    ///
    /// 目标路径已存在时自动追加 ` (n)` 后缀，实际路径见 [`DownloadHandle::path`]。
    ///
    /// # 示例
    /// ```ignore
    /// let resource = RemoteResource::probe("https://example.com/big.iso").await?;
    /// let mut handle = resource.download("big.iso", 4).await?;
    /// handle.wait().await?;
    /// ```
    pub async fn download(
        &self,
        destination: impl AsRef<Path>,
        threads: usize,
    ) -> Result<DownloadHandle, DownloadError> {
        let destination = destination.as_ref();
        if self.fragmentable {
            start_fragmented_download(self, destination, threads).await
        } else {
            start_single_download(self, destination).await
        }
    }

    /// 下载到目录 `dir` 下，文件名取自 [`RemoteResource::suggested_file_name`]。
    pub async fn download_into(
        &self,
        dir: impl AsRef<Path>,
        threads: usize,
    ) -> Result<DownloadHandle, DownloadError> {
        let destination = dir.as_ref().join(self.suggested_file_name());
        self.download(destination, threads).await
    }
}
