//! 目标文件解析：避免覆盖已有文件。

pub mod resolve_destination;
