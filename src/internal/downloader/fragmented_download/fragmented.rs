//! 分片下载入口：规划分片、启动 worker 与汇总任务，立即返回句柄。

use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::info;

use crate::internal::remote_resource::structs::RemoteResource;
use crate::internal::states::progress_state::ProgressState;

use super::super::structs::{
    plan_fragments, ByteCounter, DownloadError, DownloadHandle,
};
use super::aggregator::{run_aggregator, AggregatorParams};
use super::scratch::ensure_scratch_dir;
use super::workers::{load_job_queue, spawn_workers, WorkerContext};

/// 启动分片下载。
///
/// 只有创建临时目录失败会在这里返回错误；其余错误都经句柄的 `wait()` 交付。
pub(crate) async fn start_fragmented_download(
    resource: &RemoteResource,
    destination: &Path,
    threads: usize,
) -> Result<DownloadHandle, DownloadError> {
    let threads = threads.max(1);
    let scratch_dir = resource.scratch_dir().to_path_buf();
    ensure_scratch_dir(&scratch_dir).await?;

    let jobs = plan_fragments(resource.size(), resource.fragment_size());
    let expected = jobs.len();

    let progress = Arc::new(ProgressState::new(resource.size()));
    let (handle, completion) = DownloadHandle::new(progress.clone());

    info!(
        url = %resource.url(),
        size = resource.size(),
        fragments = expected,
        threads,
        "开始分片下载"
    );

    let (results_tx, results_rx) = mpsc::channel(expected.max(1));
    let aborted = Arc::new(AtomicBool::new(false));

    spawn_workers(
        WorkerContext {
            client: resource.client(),
            url: Arc::from(resource.url()),
            destination: destination.to_path_buf(),
            scratch_dir,
            counter: ByteCounter::new(
                resource.on_bytes_received.clone(),
                progress.clone(),
            ),
            jobs: load_job_queue(jobs),
            results: results_tx,
            aborted: aborted.clone(),
        },
        threads,
    );

    tokio::spawn(run_aggregator(AggregatorParams {
        results: results_rx,
        expected,
        destination: destination.to_path_buf(),
        keep_fragments: resource.keeps_fragments(),
        max_collision_attempts: resource.config().max_collision_attempts,
        aborted,
        progress,
        completion,
    }));

    Ok(handle)
}
