//! 进度状态测试：比例计算、并发累加、监听值不回退。

use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;

use crate::downloader::DownloadProgress;
use crate::states::ProgressState;

#[test]
fn fraction_is_ratio_of_bytes_done() {
    let state = ProgressState::new(200);
    assert_eq!(state.fraction(), 0.0);
    assert_eq!(state.add(50), 50);
    assert_eq!(state.fraction(), 0.25);
    state.add(150);
    assert_eq!(state.fraction(), 1.0);
    assert!(!state.is_completed());
}

#[test]
fn empty_total_reports_zero_until_completed() {
    let state = ProgressState::new(0);
    assert_eq!(state.fraction(), 0.0);
    state.mark_completed();
    assert_eq!(state.fraction(), 1.0);
    assert!(state.snapshot().completed);
}

#[test]
fn progress_fraction_is_clamped() {
    let over = DownloadProgress {
        bytes_done: 150,
        total: 100,
        completed: false,
    };
    assert_eq!(over.fraction(), 1.0);
    assert_eq!(over.pct(), 100.0);

    let half = DownloadProgress {
        bytes_done: 1,
        total: 2,
        completed: false,
    };
    assert_eq!(half.pct(), 50.0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_adds_are_all_counted() {
    let state = Arc::new(ProgressState::new(8 * 1000));

    let mut tasks = Vec::new();
    for _ in 0..8 {
        let s = Arc::clone(&state);
        tasks.push(tokio::spawn(async move {
            for _ in 0..1000 {
                s.add(1);
            }
        }));
    }
    for t in tasks {
        t.await.unwrap();
    }

    assert_eq!(state.bytes_done(), 8000);
    assert_eq!(state.snapshot().bytes_done, 8000);
    assert_eq!(state.fraction(), 1.0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn watchers_never_see_progress_go_backwards() {
    let state = Arc::new(ProgressState::new(4 * 500 * 7));
    let mut rx = state.watch();

    let observer = tokio::spawn(async move {
        let mut last = 0;
        loop {
            let current = rx.borrow_and_update().bytes_done;
            assert!(current >= last, "进度回退：{last} -> {current}");
            last = current;
            if current == 4 * 500 * 7 || rx.changed().await.is_err() {
                break;
            }
        }
        last
    });

    let mut tasks = Vec::new();
    for _ in 0..4 {
        let s = Arc::clone(&state);
        tasks.push(tokio::spawn(async move {
            for _ in 0..500 {
                s.add(7);
                tokio::task::yield_now().await;
            }
        }));
    }
    for t in tasks {
        t.await.unwrap();
    }

    let last = timeout(Duration::from_secs(5), observer)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(last, 4 * 500 * 7);
}
