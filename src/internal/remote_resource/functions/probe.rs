//! 探测远程资源：一次 HEAD 请求，读取 `Content-Length` 与 `Accept-Ranges`。

use reqwest::header::{HeaderMap, ACCEPT_RANGES, CONTENT_LENGTH};
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::internal::remote_resource::structs::{
    DownloadConfig, ProbeError, RemoteResource,
};

use super::default_client::default_client;

impl RemoteResource {
    /// 使用进程级默认客户端探测远程资源。
    pub async fn probe(url: &str) -> Result<Self, ProbeError> {
        let (url, size, fragmentable) =
            probe_metadata(&default_client(), url).await?;

        Ok(Self {
            url,
            size,
            fragmentable,
            client: None,
            on_bytes_received: None,
            config: DownloadConfig::default(),
        })
    }

    /// 使用指定客户端探测远程资源，后续下载沿用该客户端。
    pub async fn probe_with_client(
        url: &str,
        client: Client,
    ) -> Result<Self, ProbeError> {
        let (url, size, fragmentable) = probe_metadata(&client, url).await?;

        Ok(Self {
            url,
            size,
            fragmentable,
            client: Some(client),
            on_bytes_received: None,
            config: DownloadConfig::default(),
        })
    }
}

/// 发起 HEAD 请求，返回 (规范化 URL, 文件大小, 是否支持 Range)。
async fn probe_metadata(
    client: &Client,
    url: &str,
) -> Result<(String, u64, bool), ProbeError> {
    let parsed = Url::parse(url)?;
    let resp = client.head(parsed.clone()).send().await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(ProbeError::Status(status));
    }

    let headers = resp.headers();
    let size = parse_content_length(headers)?;
    let fragmentable = accepts_byte_ranges(headers);

    debug!(url = %parsed, size, fragmentable, "探测完成");

    Ok((parsed.to_string(), size, fragmentable))
}

fn parse_content_length(headers: &HeaderMap) -> Result<u64, ProbeError> {
    let raw = headers
        .get(CONTENT_LENGTH)
        .ok_or(ProbeError::MissingContentLength)?;

    raw.to_str()
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .ok_or_else(|| {
            ProbeError::InvalidContentLength(
                String::from_utf8_lossy(raw.as_bytes()).into_owned(),
            )
        })
}

fn accepts_byte_ranges(headers: &HeaderMap) -> bool {
    headers
        .get(ACCEPT_RANGES)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim().eq_ignore_ascii_case("bytes"))
        .unwrap_or(false)
}
