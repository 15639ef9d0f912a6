//! 分片下载：断点续传——分片文件已存在且大小与预期一致时视为已完成。

use std::io::ErrorKind;
use std::path::Path;

use tokio::fs;

use super::super::structs::{DownloadError, FragmentJob};

/// 续传检查结果：分片已完整，或需要重新下载。
pub(super) enum FragmentResumeOutcome {
    AlreadyComplete,
    Download,
}

/// 只比较大小，不校验内容。
pub(super) async fn check_existing_fragment(
    path: &Path,
    job: &FragmentJob,
) -> Result<FragmentResumeOutcome, DownloadError> {
    match fs::metadata(path).await {
        Ok(meta) if meta.is_file() && meta.len() == job.len() => {
            Ok(FragmentResumeOutcome::AlreadyComplete)
        }
        Ok(_) => Ok(FragmentResumeOutcome::Download),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Ok(FragmentResumeOutcome::Download)
        }
        Err(e) => Err(DownloadError::ReadFile(e)),
    }
}
