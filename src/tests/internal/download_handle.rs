//! 下载句柄测试：等待、阻塞等待、非阻塞轮询，以及结果被取走后的行为。

use std::sync::Arc;

use crate::downloader::{DownloadHandle, DownloadedFile};
use crate::states::ProgressState;
use crate::DownloadError;

async fn finished_file(dir: &std::path::Path) -> DownloadedFile {
    let path = dir.join("done.bin");
    tokio::fs::write(&path, b"abc").await.unwrap();
    let file = tokio::fs::File::open(&path).await.unwrap();
    DownloadedFile { path, file, len: 3 }
}

#[tokio::test]
async fn try_wait_is_none_while_pending() {
    let (mut handle, completion) = DownloadHandle::new(Arc::new(ProgressState::new(10)));
    assert!(handle.try_wait().is_none());
    assert!(!handle.is_finished());

    completion
        .send(Err(DownloadError::WorkersExited {
            received: 1,
            expected: 2,
        }))
        .unwrap();

    let outcome = handle.try_wait().unwrap();
    assert!(
        matches!(
            outcome,
            Err(DownloadError::WorkersExited {
                received: 1,
                expected: 2
            })
        ),
        "{outcome:?}"
    );
    assert!(handle.is_finished());
    assert!(matches!(
        handle.try_wait(),
        Some(Err(DownloadError::CompletionConsumed))
    ));
}

#[tokio::test]
async fn repeated_wait_after_success_is_ok() {
    let dir = tempfile::tempdir().unwrap();
    let (mut handle, completion) = DownloadHandle::new(Arc::new(ProgressState::new(3)));
    completion.send(Ok(finished_file(dir.path()).await)).unwrap();

    handle.wait().await.unwrap();
    handle.wait().await.unwrap();
    assert_eq!(handle.path(), Some(dir.path().join("done.bin").as_path()));
    assert!(handle.file().is_some());
}

#[tokio::test]
async fn dropped_sender_is_task_aborted() {
    let (mut handle, completion) = DownloadHandle::new(Arc::new(ProgressState::new(10)));
    drop(completion);

    let err = handle.wait().await.unwrap_err();
    assert!(matches!(err, DownloadError::TaskAborted), "{err:?}");
    let err = handle.wait().await.unwrap_err();
    assert!(matches!(err, DownloadError::CompletionConsumed), "{err:?}");
    assert!(handle.into_file().is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn blocking_wait_works_outside_async_context() {
    let dir = tempfile::tempdir().unwrap();
    let file = finished_file(dir.path()).await;
    let (mut handle, completion) = DownloadHandle::new(Arc::new(ProgressState::new(3)));

    let waiter = tokio::task::spawn_blocking(move || {
        let outcome = handle.blocking_wait();
        (handle, outcome)
    });
    completion.send(Ok(file)).unwrap();

    let (handle, outcome) = waiter.await.unwrap();
    outcome.unwrap();
    assert_eq!(handle.into_file().unwrap().len, 3);
}

#[test]
fn progress_accessors_read_shared_state() {
    let state = Arc::new(ProgressState::new(100));
    let (handle, _completion) = DownloadHandle::new(state.clone());
    state.add(25);

    assert_eq!(handle.bytes_transferred(), 25);
    assert_eq!(handle.total_bytes(), 100);
    assert_eq!(handle.progress(), 0.25);
    assert_eq!(handle.watch_progress().borrow().bytes_done, 25);
}
