//! 字节计数：每写入一块数据，同时通知调用方回调与下载句柄的进度。

use std::sync::Arc;

use futures_util::StreamExt;
use reqwest::Response;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::internal::remote_resource::structs::BytesReceivedCallback;
use crate::internal::states::progress_state::ProgressState;

use super::download_error::DownloadError;

/// 字节计数器：回调与进度状态都可被多个分片任务并发调用。
#[derive(Clone)]
pub(crate) struct ByteCounter {
    callback: Option<BytesReceivedCallback>,
    progress: Arc<ProgressState>,
}

impl ByteCounter {
    pub fn new(
        callback: Option<BytesReceivedCallback>,
        progress: Arc<ProgressState>,
    ) -> Self {
        Self { callback, progress }
    }

    /// 记录 `n` 个字节：先回调，再累加进度。
    pub fn record(&self, n: u64) {
        if n == 0 {
            return;
        }
        if let Some(cb) = &self.callback {
            cb(n);
        }
        self.progress.add(n);
    }

    /// 将响应体流式写入文件，每块写入成功后计数，返回写入的总字节数。
    pub async fn copy_body(
        &self,
        resp: Response,
        file: &mut File,
    ) -> Result<u64, DownloadError> {
        let mut stream = resp.bytes_stream();
        let mut written: u64 = 0;

        while let Some(chunk_result) = stream.next().await {
            let chunk = chunk_result?;
            file.write_all(&chunk)
                .await
                .map_err(DownloadError::WriteFile)?;

            let len = chunk.len() as u64;
            written += len;
            self.record(len);
        }

        file.flush().await.map_err(DownloadError::WriteFile)?;
        Ok(written)
    }
}
