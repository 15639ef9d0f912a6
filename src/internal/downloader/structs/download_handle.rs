//! 下载句柄：表示一次进行中或已结束的下载。

use std::path::Path;
use std::sync::Arc;

use tokio::fs::File;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;
use tokio::sync::watch;

use crate::internal::states::progress_state::ProgressState;

use super::download_error::DownloadError;
use super::download_progress::DownloadProgress;
use super::downloaded_file::DownloadedFile;

/// 下载结束时由后台任务发送的一次性结果。
pub(crate) type Completion = Result<DownloadedFile, DownloadError>;
pub(crate) type CompletionSender = oneshot::Sender<Completion>;

/// 下载句柄
///
/// 由 `RemoteResource::download` 立即返回；后台任务在完成或首个错误时通过一次性通道结束本句柄。
///
/// - `progress()`：随时轮询进度比例，可与传输并发调用
/// - `wait()` / `blocking_wait()` / `try_wait()`：等待或轮询结束结果
/// - `file()` / `path()`：仅在成功等待之后有值
#[derive(Debug)]
pub struct DownloadHandle {
    progress: Arc<ProgressState>,
    /// 一次性结果通道；取走结果后为 None
    completion: Option<oneshot::Receiver<Completion>>,
    /// 成功结束后的目标文件
    file: Option<DownloadedFile>,
}

impl DownloadHandle {
    pub(crate) fn new(progress: Arc<ProgressState>) -> (Self, CompletionSender) {
        let (tx, rx) = oneshot::channel();
        let handle = Self {
            progress,
            completion: Some(rx),
            file: None,
        };
        (handle, tx)
    }

    /// 进度比例（0～1）：已传输字节 / 总字节。
    pub fn progress(&self) -> f64 {
        self.progress.fraction()
    }

    /// 已传输字节数（含续传命中的分片）。
    pub fn bytes_transferred(&self) -> u64 {
        self.progress.bytes_done()
    }

    /// 总字节数，创建句柄时取自资源大小。
    pub fn total_bytes(&self) -> u64 {
        self.progress.total()
    }

    /// 监听进度变化；`.changed().await` 后读取最新快照。
    pub fn watch_progress(&self) -> watch::Receiver<DownloadProgress> {
        self.progress.watch()
    }

    /// 结果是否已被取走（无论成功失败）。
    pub fn is_finished(&self) -> bool {
        self.completion.is_none()
    }

    /// 等待下载结束。成功时保存目标文件并返回 `Ok(())`，失败时返回首个错误。
    ///
    /// 再次调用：之前成功则仍返回 `Ok(())`，之前失败则返回 [`DownloadError::CompletionConsumed`]。
    pub async fn wait(&mut self) -> Result<(), DownloadError> {
        let Some(rx) = self.completion.take() else {
            return self.settled();
        };
        let outcome = rx.await.unwrap_or(Err(DownloadError::TaskAborted));
        self.settle(outcome)
    }

    /// 阻塞当前线程直到下载结束，供非异步调用方使用；不能在异步上下文中调用。
    pub fn blocking_wait(&mut self) -> Result<(), DownloadError> {
        let Some(rx) = self.completion.take() else {
            return self.settled();
        };
        let outcome = rx
            .blocking_recv()
            .unwrap_or(Err(DownloadError::TaskAborted));
        self.settle(outcome)
    }

    /// 非阻塞轮询：尚未结束时返回 `None`。
    pub fn try_wait(&mut self) -> Option<Result<(), DownloadError>> {
        let Some(rx) = self.completion.as_mut() else {
            return Some(self.settled());
        };
        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Closed) => Err(DownloadError::TaskAborted),
        };
        self.completion = None;
        Some(self.settle(outcome))
    }

    /// 下载完成的文件句柄；仅在成功等待后有值。
    pub fn file(&self) -> Option<&File> {
        self.file.as_ref().map(|f| &f.file)
    }

    /// 目标文件的实际路径（可能带重名后缀）；仅在成功等待后有值。
    pub fn path(&self) -> Option<&Path> {
        self.file.as_ref().map(|f| f.path.as_path())
    }

    /// 交出下载完成的文件。
    pub fn into_file(self) -> Option<DownloadedFile> {
        self.file
    }

    fn settle(&mut self, outcome: Completion) -> Result<(), DownloadError> {
        let file = outcome?;
        self.file = Some(file);
        Ok(())
    }

    fn settled(&self) -> Result<(), DownloadError> {
        if self.file.is_some() {
            Ok(())
        } else {
            Err(DownloadError::CompletionConsumed)
        }
    }
}
