//! 分片下载：汇总任务——收集分片结果，首个错误即结束，全部成功后按序号合并。

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::internal::destination::resolve_destination::resolve_destination;
use crate::internal::states::progress_state::ProgressState;

use super::super::structs::download_handle::CompletionSender;
use super::super::structs::{DownloadError, DownloadedFile, FragmentResult};

/// 汇总任务的参数。
pub(super) struct AggregatorParams {
    pub results: mpsc::Receiver<FragmentResult>,
    pub expected: usize,
    pub destination: PathBuf,
    pub keep_fragments: bool,
    pub max_collision_attempts: usize,
    pub aborted: Arc<AtomicBool>,
    pub progress: Arc<ProgressState>,
    pub completion: CompletionSender,
}

/// 汇总任务入口：结果通过一次性通道交给下载句柄。
pub(super) async fn run_aggregator(mut params: AggregatorParams) {
    let outcome = match collect_fragment_paths(
        &mut params.results,
        params.expected,
        &params.aborted,
    )
    .await
    {
        Ok(paths) => {
            merge_fragments(
                &paths,
                &params.destination,
                params.keep_fragments,
                params.max_collision_attempts,
            )
            .await
        }
        Err(e) => Err(e),
    };

    match &outcome {
        Ok(file) => {
            params.progress.mark_completed();
            info!(path = %file.path.display(), bytes = file.len, "分片合并完成");
        }
        Err(e) => warn!(error = %e, "分片下载失败，已保留完成的分片文件"),
    }

    // 调用方可能已丢弃句柄
    let _ = params.completion.send(outcome);
}

/// 收齐 `expected` 个结果，按序号排好分片路径；遇到首个错误立即置位中止标志并返回。
async fn collect_fragment_paths(
    results: &mut mpsc::Receiver<FragmentResult>,
    expected: usize,
    aborted: &AtomicBool,
) -> Result<Vec<PathBuf>, DownloadError> {
    let mut paths: Vec<Option<PathBuf>> = vec![None; expected];
    let mut received = 0;

    while received < expected {
        let Some(result) = results.recv().await else {
            // 所有 worker 都已退出，剩余结果不会再来
            aborted.store(true, Ordering::Release);
            return Err(DownloadError::WorkersExited { received, expected });
        };

        match result.outcome {
            Ok(path) => {
                if let Some(slot) = paths.get_mut(result.index) {
                    *slot = Some(path);
                }
                received += 1;
            }
            Err(e) => {
                aborted.store(true, Ordering::Release);
                return Err(e);
            }
        }
    }

    Ok(paths.into_iter().flatten().collect())
}

/// 按序号依次把分片拷贝进目标文件；每拷完一片即删除（除非要求保留）。
async fn merge_fragments(
    paths: &[PathBuf],
    destination: &Path,
    keep_fragments: bool,
    max_collision_attempts: usize,
) -> Result<DownloadedFile, DownloadError> {
    let (path, mut out) =
        resolve_destination(destination, max_collision_attempts).await?;
    let mut len: u64 = 0;

    for fragment in paths {
        let mut src = File::open(fragment)
            .await
            .map_err(DownloadError::OpenFile)?;
        len += tokio::io::copy(&mut src, &mut out)
            .await
            .map_err(DownloadError::WriteFile)?;
        drop(src);

        if !keep_fragments {
            fs::remove_file(fragment)
                .await
                .map_err(DownloadError::RemoveFile)?;
        }
    }

    out.flush().await.map_err(DownloadError::WriteFile)?;

    Ok(DownloadedFile {
        path,
        file: out,
        len,
    })
}
