//! 远程资源领域模块：一次 HEAD 探测得到的文件元数据，以及下载前可调整的配置。
//!
//! 使用方式：`RemoteResource::probe(url).await?.with_fragment_size(n).download(path, threads).await`

pub mod functions;
pub mod structs;
