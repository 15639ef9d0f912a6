//! 分片下载：临时目录与分片文件路径。

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tokio::fs;

use super::super::structs::DownloadError;

/// 分片文件路径：`<临时目录>/<目标文件名>.<路径摘要>.part<序号>`。
///
/// 路径摘要取自目标文件的完整路径，不同目录下的同名目标互不共用分片；
/// 同一目标再次下载时会落到相同路径，从而续传。
pub(crate) fn fragment_path(
    scratch_dir: &Path,
    destination: &Path,
    index: usize,
) -> PathBuf {
    let name = destination
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "download".to_string());
    let key = destination_key(destination);
    scratch_dir.join(format!("{name}.{key}.part{index}"))
}

/// 目标路径的短摘要（sha256 前 16 位十六进制）；相对路径先按当前目录补全。
fn destination_key(destination: &Path) -> String {
    let full = std::path::absolute(destination)
        .unwrap_or_else(|_| destination.to_path_buf());
    let mut hasher = Sha256::new();
    hasher.update(full.as_os_str().as_encoded_bytes());
    let mut digest = format!("{:x}", hasher.finalize());
    digest.truncate(16);
    digest
}

/// 确保临时目录存在；已存在时不做任何事。
pub(super) async fn ensure_scratch_dir(dir: &Path) -> Result<(), DownloadError> {
    fs::create_dir_all(dir)
        .await
        .map_err(DownloadError::CreateScratchDir)
}
