//! 分片下载：任务队列与 worker 池。

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use reqwest::Client;
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, warn};

use super::super::structs::{ByteCounter, FragmentJob, FragmentResult};
use super::download_one_fragment::{
    download_one_fragment, DownloadOneFragmentParams,
};
use super::scratch::fragment_path;

/// 共享任务队列：多个 worker 竞争同一个接收端（recv 需要 &mut，故用 Mutex 包装）。
pub(super) type JobQueue = Arc<Mutex<mpsc::Receiver<FragmentJob>>>;

/// 所有 worker 共享的上下文。
#[derive(Clone)]
pub(super) struct WorkerContext {
    pub client: Client,
    pub url: Arc<str>,
    pub destination: PathBuf,
    pub scratch_dir: PathBuf,
    pub counter: ByteCounter,
    pub jobs: JobQueue,
    pub results: mpsc::Sender<FragmentResult>,
    /// 汇总任务发现失败后置位，worker 不再领取新任务
    pub aborted: Arc<AtomicBool>,
}

/// 创建容量等于任务数的队列，装入全部任务后关闭发送端，worker 取完即自然退出。
pub(super) fn load_job_queue(jobs: Vec<FragmentJob>) -> JobQueue {
    let (tx, rx) = mpsc::channel(jobs.len().max(1));
    for job in jobs {
        // 容量等于任务数，不会满
        if tx.try_send(job).is_err() {
            break;
        }
    }
    drop(tx);
    Arc::new(Mutex::new(rx))
}

/// 启动 `threads` 个 worker（至少 1 个）。
pub(super) fn spawn_workers(ctx: WorkerContext, threads: usize) {
    for worker_id in 0..threads.max(1) {
        tokio::spawn(run_worker(worker_id, ctx.clone()));
    }
}

async fn run_worker(worker_id: usize, ctx: WorkerContext) {
    loop {
        if ctx.aborted.load(Ordering::Acquire) {
            debug!(worker_id, "下载已失败，停止领取任务");
            break;
        }

        let job = ctx.jobs.lock().await.recv().await;
        let Some(job) = job else {
            break;
        };

        let path = fragment_path(&ctx.scratch_dir, &ctx.destination, job.index);
        let outcome = download_one_fragment(DownloadOneFragmentParams {
            client: &ctx.client,
            url: &ctx.url,
            job,
            path,
            counter: &ctx.counter,
        })
        .await;

        let failed = outcome.is_err();
        if let Err(e) = &outcome {
            warn!(worker_id, index = job.index, error = %e, "分片下载失败");
        }

        let result = FragmentResult {
            index: job.index,
            outcome,
        };
        if ctx.results.send(result).await.is_err() || failed {
            break;
        }
    }
}
