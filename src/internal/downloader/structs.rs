pub(crate) mod byte_counter;
pub mod download_error;
pub mod download_handle;
pub mod download_progress;
pub mod downloaded_file;
pub mod fragment_job;

pub(crate) use byte_counter::ByteCounter;

// 重导出公共类型
pub use download_error::DownloadError;
pub use download_handle::DownloadHandle;
pub use download_progress::DownloadProgress;
pub use downloaded_file::DownloadedFile;
pub use fragment_job::{plan_fragments, FragmentJob, FragmentResult};
