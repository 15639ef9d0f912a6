use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// 默认分片大小：4MB
pub const DEFAULT_FRAGMENT_SIZE: u64 = 4 * 1024 * 1024;

/// 目标文件重名时最多尝试的编号后缀数
pub const DEFAULT_MAX_COLLISION_ATTEMPTS: usize = 10_000;

/// 分片临时目录名（位于系统临时目录下）
pub const SCRATCH_DIR_NAME: &str = ".fragdl";

/// 进程级默认临时目录：`<系统临时目录>/.fragdl`，首次分片下载前按需创建。
pub fn default_scratch_dir() -> PathBuf {
    std::env::temp_dir().join(SCRATCH_DIR_NAME)
}

/// 下载配置，可嵌入调用方自己的配置文件中（缺省字段取默认值）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadConfig {
    /// 每个分片的大小（字节），至少为 1
    pub fragment_size: u64,
    /// 合并成功后是否保留分片文件
    pub keep_fragments: bool,
    /// 分片文件存放目录；同一目标文件多次下载共用，用于续传
    pub scratch_dir: PathBuf,
    /// 目标文件重名时最多尝试的编号后缀数
    pub max_collision_attempts: usize,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            fragment_size: DEFAULT_FRAGMENT_SIZE,
            keep_fragments: false,
            scratch_dir: default_scratch_dir(),
            max_collision_attempts: DEFAULT_MAX_COLLISION_ATTEMPTS,
        }
    }
}
