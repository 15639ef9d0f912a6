//! 内部实现模块，对外导出统一在 crate 根部完成。

pub mod destination;
pub mod downloader;
pub mod remote_resource;
pub mod states;
