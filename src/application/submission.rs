use tracing::{info, warn};

use crate::{
    application::{progress::ProgressSource, tracker::DownloadTracker},
    domain::{DownloadId, Settings, ValidationError},
};

/// Turns the URL field into a new simulated download.
///
/// On success the record is created, its timer started and `input` cleared.
/// Blank input is rejected and leaves everything untouched.
pub fn submit<P: ProgressSource>(
    tracker: &mut DownloadTracker<P>,
    input: &mut String,
    settings: &Settings,
) -> Result<DownloadId, ValidationError> {
    if input.trim().is_empty() {
        warn!("Rejected empty submission");
        return Err(ValidationError::EmptyUrl);
    }

    let url = std::mem::take(input);
    let id = tracker.create(url, settings);
    tracker.start(id);

    info!(
        "Queued {} for {} at {}",
        id,
        settings.quality.as_str(),
        settings.download_folder
    );
    Ok(id)
}
