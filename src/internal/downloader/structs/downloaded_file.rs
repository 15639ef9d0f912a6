use std::path::{Path, PathBuf};

use tokio::fs::File;

/// 下载完成的目标文件：实际路径（可能带重名后缀）与写入完毕的文件句柄。
///
/// 句柄的读写位置停在文件末尾，读取前需自行 seek。
#[derive(Debug)]
pub struct DownloadedFile {
    pub path: PathBuf,
    pub file: File,
    /// 写入的总字节数
    pub len: u64,
}

impl DownloadedFile {
    pub fn path(&self) -> &Path {
        &self.path
    }
}
