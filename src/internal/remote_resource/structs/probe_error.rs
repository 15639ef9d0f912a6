//! 探测远程资源时的错误类型。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("URL 格式错误: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("HEAD 请求失败: {0}")]
    Request(#[from] reqwest::Error),

    #[error("服务器返回异常状态码: {0}")]
    Status(reqwest::StatusCode),

    #[error("响应缺少 Content-Length")]
    MissingContentLength,

    #[error("Content-Length 无法解析: {0}")]
    InvalidContentLength(String),
}
