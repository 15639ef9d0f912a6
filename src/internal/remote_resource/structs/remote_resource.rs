use core::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use reqwest::Client;
use url::Url;

use crate::internal::remote_resource::functions::default_client;

use super::download_config::DownloadConfig;

/// 收到数据时的回调，参数为本次写入的字节数。多个分片任务会并发调用。
pub type BytesReceivedCallback = Arc<dyn Fn(u64) + Send + Sync>;

/// 远程资源描述
///
/// 该结构体定位
/// - 记录一次探测得到的 URL、总大小、是否支持 Range 请求
/// - 承载下载前可调整的配置：分片大小、HTTP 客户端、进度回调、是否保留分片
///
/// 配置方法均为链式调用，必须在 `download()` 之前完成。
#[derive(Clone)]
pub struct RemoteResource {
    pub(crate) url: String,
    pub(crate) size: u64,
    pub(crate) fragmentable: bool,
    pub(crate) client: Option<Client>, // 内部是Arc，clone 代价很低
    pub(crate) on_bytes_received: Option<BytesReceivedCallback>,
    pub(crate) config: DownloadConfig,
}

impl RemoteResource {
    /// 由已知元数据直接构建，不发起探测请求。
    pub fn from_parts(
        url: impl Into<String>,
        size: u64,
        fragmentable: bool,
    ) -> Self {
        Self {
            url: url.into(),
            size,
            fragmentable,
            client: None,
            on_bytes_received: None,
            config: DownloadConfig::default(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// 远程文件总大小（字节）
    pub fn size(&self) -> u64 {
        self.size
    }

    /// 服务器是否支持 `Range` 请求
    pub fn fragmentable(&self) -> bool {
        self.fragmentable
    }

    pub fn fragment_size(&self) -> u64 {
        self.config.fragment_size
    }

    pub fn keeps_fragments(&self) -> bool {
        self.config.keep_fragments
    }

    pub fn scratch_dir(&self) -> &Path {
        &self.config.scratch_dir
    }

    pub fn config(&self) -> &DownloadConfig {
        &self.config
    }

    /// 分片数：支持 Range 时为 `ceil(size / fragment_size)`，否则恒为 1。
    pub fn num_fragments(&self) -> usize {
        if !self.fragmentable {
            return 1;
        }
        self.size.div_ceil(self.config.fragment_size.max(1)) as usize
    }

    /// 从 URL 最后一个非空路径段推断文件名，推断不出时返回 `download`。
    pub fn suggested_file_name(&self) -> String {
        Url::parse(&self.url)
            .ok()
            .and_then(|u| {
                u.path_segments()
                    .and_then(|segs| segs.filter(|s| !s.is_empty()).last())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| "download".to_string())
    }

    /// 设置分片大小（字节）；传 0 按 1 处理。
    pub fn with_fragment_size(mut self, fragment_size: u64) -> Self {
        self.config.fragment_size = fragment_size.max(1);
        self
    }

    /// 指定 HTTP 客户端；不设置时使用进程级默认客户端。
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// 注册收到数据的回调；续传命中的分片也会以整段长度回调一次。
    pub fn on_bytes_received<F>(mut self, f: F) -> Self
    where
        F: Fn(u64) + Send + Sync + 'static,
    {
        self.on_bytes_received = Some(Arc::new(f));
        self
    }

    /// 合并成功后是否保留分片文件，默认不保留。
    pub fn keep_fragments(mut self, keep: bool) -> Self {
        self.config.keep_fragments = keep;
        self
    }

    /// 设置分片临时目录。
    pub fn with_scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.scratch_dir = dir.into();
        self
    }

    /// 整体替换下载配置。
    pub fn with_config(mut self, config: DownloadConfig) -> Self {
        self.config = DownloadConfig {
            fragment_size: config.fragment_size.max(1),
            ..config
        };
        self
    }

    pub(crate) fn client(&self) -> Client {
        self.client.clone().unwrap_or_else(default_client)
    }
}

/// 回调无法打印，仅输出元数据与配置
impl fmt::Debug for RemoteResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteResource")
            .field("url", &self.url)
            .field("size", &self.size)
            .field("fragmentable", &self.fragmentable)
            .field("config", &self.config)
            .field("has_callback", &self.on_bytes_received.is_some())
            .finish()
    }
}
