//! 单线程整文件下载：服务器不支持 Range 时使用。

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use crate::internal::destination::resolve_destination::resolve_destination;
use crate::internal::remote_resource::structs::RemoteResource;
use crate::internal::states::progress_state::ProgressState;

use super::structs::{ByteCounter, DownloadError, DownloadHandle, DownloadedFile};

/// 整文件 GET：请求与目标文件创建在这里完成，流式写入交给后台任务。
///
/// 写入中途出错时，已写入的部分文件保留在目标路径。
pub(super) async fn start_single_download(
    resource: &RemoteResource,
    destination: &Path,
) -> Result<DownloadHandle, DownloadError> {
    let resp = resource
        .client()
        .get(resource.url())
        .send()
        .await?
        .error_for_status()?;

    let (path, mut file) = resolve_destination(
        destination,
        resource.config().max_collision_attempts,
    )
    .await?;

    let progress = Arc::new(ProgressState::new(resource.size()));
    let (handle, completion) = DownloadHandle::new(progress.clone());
    let counter =
        ByteCounter::new(resource.on_bytes_received.clone(), progress.clone());

    info!(url = %resource.url(), path = %path.display(), size = resource.size(), "开始单线程下载");

    tokio::spawn(async move {
        let outcome = match counter.copy_body(resp, &mut file).await {
            Ok(len) => {
                progress.mark_completed();
                info!(path = %path.display(), bytes = len, "单线程下载完成");
                Ok(DownloadedFile { path, file, len })
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "单线程下载失败");
                Err(e)
            }
        };
        let _ = completion.send(outcome);
    });

    Ok(handle)
}
