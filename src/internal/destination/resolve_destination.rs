use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs::{File, OpenOptions};

use crate::internal::downloader::structs::DownloadError;

/// 生成第 `n` 个候选文件名：在扩展名前插入 ` (n)`，无扩展名时追加在末尾。
///
/// - `name.ext` → `name (1).ext`
/// - `name` → `name (1)`
/// - `dir/archive.tar.gz` → `dir/archive.tar (1).gz`
pub fn numbered_candidate(desired: &Path, n: usize) -> PathBuf {
    let mut name: OsString = desired
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_default();
    name.push(format!(" ({n})"));
    if let Some(ext) = desired.extension() {
        name.push(".");
        name.push(ext);
    }
    desired.with_file_name(name)
}

/// 在不覆盖已有文件的前提下创建目标文件，返回实际路径与可写句柄。
///
/// 依次尝试原路径、` (1)`、` (2)` …；以 create-new 方式创建，检查与创建之间被占用的名字直接跳过。
/// 最多尝试 `max_attempts` 个编号后缀，仍冲突时返回 [`DownloadError::DestinationCollisionExhausted`]。
pub async fn resolve_destination(
    desired: impl AsRef<Path>,
    max_attempts: usize,
) -> Result<(PathBuf, File), DownloadError> {
    let desired = desired.as_ref();

    for attempt in 0..=max_attempts {
        let candidate = if attempt == 0 {
            desired.to_path_buf()
        } else {
            numbered_candidate(desired, attempt)
        };

        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&candidate)
            .await
        {
            Ok(file) => return Ok((candidate, file)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(DownloadError::CreateFile(e)),
        }
    }

    Err(DownloadError::DestinationCollisionExhausted {
        path: desired.to_path_buf(),
        attempts: max_attempts.saturating_add(1),
    })
}
