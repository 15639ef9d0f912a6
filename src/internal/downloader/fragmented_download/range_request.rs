//! 分片下载：发起单段 Range 请求，返回响应供流式读取。

use reqwest::header::RANGE;
use reqwest::{Client, Response, StatusCode};

use super::super::structs::{DownloadError, FragmentJob};

/// 发起 Range 请求时的参数。
pub(super) struct FetchRangeParams<'a> {
    pub client: &'a Client,
    pub url: &'a str,
    pub job: &'a FragmentJob,
}

/// 发起单段 Range GET 请求；非 2xx 视为请求失败，非 206 说明服务器忽略了 Range。
pub(super) async fn fetch_range_response(
    params: FetchRangeParams<'_>,
) -> Result<Response, DownloadError> {
    let resp = params
        .client
        .get(params.url)
        .header(RANGE, params.job.range_header())
        .send()
        .await?
        .error_for_status()?;

    let status = resp.status();
    if status != StatusCode::PARTIAL_CONTENT {
        return Err(DownloadError::RangeNotHonored {
            index: params.job.index,
            status,
        });
    }

    Ok(resp)
}
