pub mod error;
pub mod model;

pub use error::ValidationError;
pub use model::{DownloadId, DownloadRecord, DownloadStatus, Quality, Settings, PROGRESS_MAX};
