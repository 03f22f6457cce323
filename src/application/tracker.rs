use tracing::{debug, info};

use crate::{
    application::{
        progress::{ProgressSource, RandomProgress},
        scheduler::TickScheduler,
    },
    config::TrackerConfig,
    domain::{DownloadId, DownloadRecord, DownloadStatus, Settings, PROGRESS_MAX},
};

/// Emitted once when a record reaches 100%.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub id: DownloadId,
    pub title: String,
    pub destination: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    Advanced { id: DownloadId, progress: f32 },
    Completed(Completion),
    /// Unknown id, cancelled timer or a record that is no longer downloading.
    Ignored,
}

/// Owns every download record and the timers that move them forward.
///
/// Records are kept most-recent-first. A tick only ever touches the record
/// whose id it carries.
pub struct DownloadTracker<P = RandomProgress> {
    records: Vec<DownloadRecord>,
    scheduler: TickScheduler,
    source: P,
    config: TrackerConfig,
    next_id: u64,
}

impl DownloadTracker<RandomProgress> {
    pub fn new(config: TrackerConfig) -> Self {
        let source = RandomProgress::new(config.max_increment);
        Self::with_source(config, source)
    }
}

impl<P: ProgressSource> DownloadTracker<P> {
    pub fn with_source(config: TrackerConfig, source: P) -> Self {
        Self {
            records: Vec::new(),
            scheduler: TickScheduler::new(),
            source,
            config,
            next_id: 1,
        }
    }

    /// Adds a fresh record at the front of the collection.
    ///
    /// Quality and destination come from `settings` as they are right now;
    /// later settings changes do not affect the record.
    pub fn create(&mut self, source_url: String, settings: &Settings) -> DownloadId {
        let id = DownloadId::new(self.next_id);
        self.next_id += 1;

        let record = DownloadRecord {
            id,
            source_url,
            title: format!("Video {}", self.records.len() + 1),
            progress: 0.0,
            status: DownloadStatus::Downloading,
            size_label: self.config.size_label.clone(),
            quality: settings.quality,
            destination: settings.download_folder.clone(),
        };
        self.records.insert(0, record);
        id
    }

    /// Starts the repeating timer for a downloading record.
    pub fn start(&mut self, id: DownloadId) -> bool {
        let downloading = self
            .get(id)
            .is_some_and(|record| record.status == DownloadStatus::Downloading);
        if !downloading {
            return false;
        }
        self.scheduler.start(id, self.config.tick_interval)
    }

    pub fn tick(&mut self, id: DownloadId) -> TickOutcome {
        if !self.scheduler.record_tick(id) {
            debug!("Dropping tick for {} without a timer", id);
            return TickOutcome::Ignored;
        }

        let Some(record) = self.records.iter_mut().find(|r| r.id == id) else {
            self.scheduler.cancel(id);
            return TickOutcome::Ignored;
        };

        if record.status.is_terminal() {
            self.scheduler.cancel(id);
            return TickOutcome::Ignored;
        }

        let next = record.progress + self.source.next_increment().max(0.0);
        if next >= PROGRESS_MAX {
            record.progress = PROGRESS_MAX;
            record.status = DownloadStatus::Completed;
            self.scheduler.cancel(id);
            info!("{} ({}) completed", record.title, id);

            return TickOutcome::Completed(Completion {
                id,
                title: record.title.clone(),
                destination: record.destination.clone(),
            });
        }

        record.progress = next;
        let ticks = self.scheduler.entry(id).map_or(0, |entry| entry.ticks);
        debug!("{} at {:.1}% after {} ticks", id, next, ticks);
        TickOutcome::Advanced { id, progress: next }
    }

    #[cfg(test)]
    pub fn records(&self) -> &[DownloadRecord] {
        &self.records
    }

    pub fn get(&self, id: DownloadId) -> Option<&DownloadRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// The most recent records regardless of status.
    pub fn active(&self) -> impl Iterator<Item = &DownloadRecord> {
        self.records.iter().take(self.config.active_view_limit)
    }

    pub fn completed(&self) -> impl Iterator<Item = &DownloadRecord> {
        self.records.iter().filter(|r| r.is_completed())
    }

    pub fn completed_count(&self) -> usize {
        self.completed().count()
    }

    pub fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
