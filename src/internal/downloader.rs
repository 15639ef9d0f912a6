//! 下载器领域模块：由远程资源发起下载，返回可轮询、可等待的下载句柄。
//!
//! - `fragmented_download`：分片并发下载（Range 请求、续传、按序合并）
//! - `single_download`：不支持 Range 时的整文件流式下载
//! - `impl_download`：`RemoteResource::download` 入口，按资源能力选择路径
//!
//! 对外导出以 crate 根部的 [`crate::downloader`] 为准，此处仅做模块划分。

pub(crate) mod fragmented_download;
mod impl_download;
mod single_download;
pub mod structs;
