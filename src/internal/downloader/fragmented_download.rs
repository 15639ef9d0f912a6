//! 分片并发下载
//!
//! 按固定分片大小切分字节范围，固定数量的 worker 共享一个预装满并已关闭的任务队列，
//! 每个分片通过 Range 请求写入临时目录；汇总任务收齐全部结果后按序号合并到目标文件。
//!
//! - `scratch`：临时目录与分片文件路径
//! - `resume`：续传检查（分片文件大小与预期一致则跳过）
//! - `range_request`：发起单段 Range 请求
//! - `download_one_fragment`：单个分片的完整处理
//! - `workers`：任务队列与 worker 池
//! - `aggregator`：收集结果、首错即停、按序合并

mod aggregator;
mod download_one_fragment;
mod fragmented;
mod range_request;
mod resume;
mod scratch;
mod workers;

pub(crate) use fragmented::start_fragmented_download;
#[cfg(test)]
pub(crate) use scratch::fragment_path;
