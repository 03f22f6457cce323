pub mod notice;
pub mod progress;
pub mod scheduler;
pub mod submission;
pub mod tracker;

pub use notice::{Notice, NoticeBoard, NoticeKind};
pub use submission::submit;
pub use tracker::{DownloadTracker, TickOutcome};
