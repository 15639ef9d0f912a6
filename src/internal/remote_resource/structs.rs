pub mod download_config;
pub mod probe_error;
pub mod remote_resource;

// 重导出公共类型
pub use download_config::{
    default_scratch_dir, DownloadConfig, DEFAULT_FRAGMENT_SIZE,
    DEFAULT_MAX_COLLISION_ATTEMPTS, SCRATCH_DIR_NAME,
};
pub use probe_error::ProbeError;
pub use remote_resource::{BytesReceivedCallback, RemoteResource};
