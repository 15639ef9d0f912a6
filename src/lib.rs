//! 分片并发 HTTP 下载
//!
//! 一次 HEAD 探测得到远程资源的大小与 Range 支持情况；支持 Range 时按固定分片大小切分，
//! 多个 worker 并发下载到临时目录，全部完成后按序号合并为目标文件。

/// 内部导出的模块
mod internal;


/// 导出核心入口类型
pub use internal::downloader::structs::{DownloadError, DownloadHandle};
pub use internal::remote_resource::structs::{
    DownloadConfig, ProbeError, RemoteResource,
};

pub mod remote_resource {
    use crate::internal;
    // 结构体模型与配置
    pub use internal::remote_resource::structs::*;
    pub use internal::remote_resource::functions::default_client;
}

/// 下载器：句柄、进度、错误与分片规划（以 lib 为中心，此处统一导出）
pub mod downloader {
    use crate::internal;
    pub use internal::downloader::structs::*;
}

/// 目标文件解析，不限制在下载入口中使用，以防有人自己要用
pub mod destination {
    use crate::internal;
    pub use internal::destination::resolve_destination::*;
}

pub mod states {
    use crate::internal;
    pub use internal::states::progress_state::*;
}
