use std::fmt;

/// Upper bound of a record's progress, in percent.
pub const PROGRESS_MAX: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DownloadId(u64);

impl DownloadId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for DownloadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadStatus {
    Downloading,
    Completed,
    /// Reserved; nothing in the simulation produces it.
    #[allow(dead_code)]
    Error,
}

impl DownloadStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Error)
    }
}

/// Resolution a new download is stamped with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quality {
    Uhd2160,
    Qhd1440,
    #[default]
    FullHd1080,
    Hd720,
    Sd480,
    Mobile360,
}

impl Quality {
    pub const ALL: [Quality; 6] = [
        Quality::Uhd2160,
        Quality::Qhd1440,
        Quality::FullHd1080,
        Quality::Hd720,
        Quality::Sd480,
        Quality::Mobile360,
    ];

    /// Short label stored on records, e.g. `1080p`.
    pub fn as_str(self) -> &'static str {
        match self {
            Quality::Uhd2160 => "2160p",
            Quality::Qhd1440 => "1440p",
            Quality::FullHd1080 => "1080p",
            Quality::Hd720 => "720p",
            Quality::Sd480 => "480p",
            Quality::Mobile360 => "360p",
        }
    }
}

// Picker label
impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Quality::Uhd2160 => "4K",
            Quality::Qhd1440 => "2K",
            Quality::FullHd1080 => "Full HD",
            Quality::Hd720 => "HD",
            Quality::Sd480 => "SD",
            Quality::Mobile360 => "Mobile",
        };
        write!(f, "{} ({})", name, self.as_str())
    }
}

/// User-editable settings, read when a download is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub quality: Quality,
    pub download_folder: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: Quality::default(),
            download_folder: "Downloads/Videos".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DownloadRecord {
    pub id: DownloadId,
    pub source_url: String,
    pub title: String,
    pub progress: f32,
    pub status: DownloadStatus,
    pub size_label: String,
    pub quality: Quality,
    /// Folder as configured when the download was submitted.
    pub destination: String,
}

impl DownloadRecord {
    pub fn is_completed(&self) -> bool {
        self.status == DownloadStatus::Completed
    }
}
