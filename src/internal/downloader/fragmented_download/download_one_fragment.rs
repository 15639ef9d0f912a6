//! 分片下载：单个分片的完整处理——续传检查、Range 请求、流式写入临时文件、校验长度。

use std::path::PathBuf;

use reqwest::Client;
use tokio::fs::File;
use tracing::debug;

use super::super::structs::{ByteCounter, DownloadError, FragmentJob};
use super::range_request::{fetch_range_response, FetchRangeParams};
use super::resume::{check_existing_fragment, FragmentResumeOutcome};

/// 处理单个分片时的参数（形参超过 3 个，用 struct 承载）。
pub(super) struct DownloadOneFragmentParams<'a> {
    pub client: &'a Client,
    pub url: &'a str,
    pub job: FragmentJob,
    pub path: PathBuf,
    pub counter: &'a ByteCounter,
}

/// 下载单个分片到 `path`，成功时返回该路径。
///
/// 续传命中时按整段长度计数一次，不发起网络请求。
pub(super) async fn download_one_fragment(
    params: DownloadOneFragmentParams<'_>,
) -> Result<PathBuf, DownloadError> {
    let job = params.job;

    if let FragmentResumeOutcome::AlreadyComplete =
        check_existing_fragment(&params.path, &job).await?
    {
        debug!(index = job.index, bytes = job.len(), "分片已存在，跳过下载");
        params.counter.record(job.len());
        return Ok(params.path);
    }

    debug!(index = job.index, range = %job.range_header(), "开始下载分片");

    let resp = fetch_range_response(FetchRangeParams {
        client: params.client,
        url: params.url,
        job: &job,
    })
    .await?;

    let mut file = File::create(&params.path)
        .await
        .map_err(DownloadError::CreateFile)?;
    let written = params.counter.copy_body(resp, &mut file).await?;

    if written != job.len() {
        return Err(DownloadError::FragmentLength {
            index: job.index,
            expected: job.len(),
            actual: written,
        });
    }

    debug!(index = job.index, bytes = written, "分片下载完成");
    Ok(params.path)
}
