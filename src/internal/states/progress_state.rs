//! # ProgressState — 下载进度状态
//!
//! 多个分片任务共享的进度容器：
//! - 原子计数器负责累加已写入字节，读取不加锁，适合高频轮询；
//! - [`tokio::sync::watch`] 通道负责通知监听者，发布值单调不减。
//!
//! ## 使用示例
//! ```rust,no_run
//! use fragdl::states::ProgressState;
//!
//! let state = ProgressState::new(100);
//! state.add(40);
//! assert_eq!(state.fraction(), 0.4);
//! ```

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use tokio::sync::watch;

use crate::internal::downloader::structs::DownloadProgress;

/// 下载进度状态：计数器 + 完成标志 + 变化通知。
#[derive(Debug)]
pub struct ProgressState {
    bytes_done: AtomicU64,
    total: u64,
    completed: AtomicBool,
    sender: watch::Sender<DownloadProgress>,
}

impl ProgressState {
    pub fn new(total: u64) -> Self {
        let (sender, _) = watch::channel(DownloadProgress {
            bytes_done: 0,
            total,
            completed: false,
        });
        Self {
            bytes_done: AtomicU64::new(0),
            total,
            completed: AtomicBool::new(false),
            sender,
        }
    }

    /// 累加已写入字节并通知监听者，返回累加后的值。
    ///
    /// 并发累加时各任务拿到的返回值可能乱序到达，发布时取最大值，保证监听者看到的进度不回退。
    pub fn add(&self, n: u64) -> u64 {
        let current = self.bytes_done.fetch_add(n, Ordering::Relaxed) + n;
        self.sender.send_modify(|p| {
            if current > p.bytes_done {
                p.bytes_done = current;
            }
        });
        current
    }

    /// 标记下载成功完成。
    pub fn mark_completed(&self) {
        self.completed.store(true, Ordering::Release);
        self.sender.send_modify(|p| p.completed = true);
    }

    pub fn bytes_done(&self) -> u64 {
        self.bytes_done.load(Ordering::Relaxed)
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_completed(&self) -> bool {
        self.completed.load(Ordering::Acquire)
    }

    /// 当前进度快照。
    pub fn snapshot(&self) -> DownloadProgress {
        DownloadProgress {
            bytes_done: self.bytes_done(),
            total: self.total,
            completed: self.is_completed(),
        }
    }

    /// 进度比例（0～1），纯读取。
    pub fn fraction(&self) -> f64 {
        self.snapshot().fraction()
    }

    /// 创建一个监听器，用于异步等待进度变化。
    pub fn watch(&self) -> watch::Receiver<DownloadProgress> {
        self.sender.subscribe()
    }
}
