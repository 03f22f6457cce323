use std::collections::HashMap;
use std::time::Duration;

use crate::domain::DownloadId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerEntry {
    pub interval: Duration,
    pub ticks: u64,
}

/// Registry of per-download repeating timers.
///
/// The registry only records which downloads should be ticking; the UI
/// runtime turns every entry into its own `time::every` subscription.
/// Removing an entry drops that subscription, so a cancelled download never
/// receives another tick.
#[derive(Debug, Default)]
pub struct TickScheduler {
    timers: HashMap<DownloadId, TimerEntry>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if a timer already exists for `id`.
    pub fn start(&mut self, id: DownloadId, interval: Duration) -> bool {
        if self.timers.contains_key(&id) {
            return false;
        }
        self.timers.insert(id, TimerEntry { interval, ticks: 0 });
        true
    }

    pub fn cancel(&mut self, id: DownloadId) -> bool {
        self.timers.remove(&id).is_some()
    }

    #[cfg(test)]
    pub fn is_scheduled(&self, id: DownloadId) -> bool {
        self.timers.contains_key(&id)
    }

    /// Counts a fired tick. Returns `false` for unknown ids.
    pub fn record_tick(&mut self, id: DownloadId) -> bool {
        match self.timers.get_mut(&id) {
            Some(entry) => {
                entry.ticks += 1;
                true
            }
            None => false,
        }
    }

    pub fn entry(&self, id: DownloadId) -> Option<&TimerEntry> {
        self.timers.get(&id)
    }

    /// Scheduled timers ordered by id.
    pub fn scheduled(&self) -> Vec<(DownloadId, Duration)> {
        let mut scheduled: Vec<_> = self
            .timers
            .iter()
            .map(|(id, entry)| (*id, entry.interval))
            .collect();
        scheduled.sort_by_key(|(id, _)| *id);
        scheduled
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(500);

    #[test]
    fn test_start_and_cancel() {
        let mut scheduler = TickScheduler::new();
        let id = DownloadId::new(1);

        assert!(scheduler.start(id, INTERVAL));
        assert!(!scheduler.start(id, INTERVAL));
        assert!(scheduler.is_scheduled(id));
        assert_eq!(scheduler.len(), 1);

        assert!(scheduler.cancel(id));
        assert!(!scheduler.cancel(id));
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_ticks_after_cancel_are_rejected() {
        let mut scheduler = TickScheduler::new();
        let id = DownloadId::new(3);
        scheduler.start(id, INTERVAL);

        assert!(scheduler.record_tick(id));
        assert!(scheduler.record_tick(id));
        assert_eq!(scheduler.entry(id).map(|e| e.ticks), Some(2));

        scheduler.cancel(id);
        assert!(!scheduler.record_tick(id));
    }

    #[test]
    fn test_scheduled_is_sorted() {
        let mut scheduler = TickScheduler::new();
        for raw in [5, 2, 9] {
            scheduler.start(DownloadId::new(raw), INTERVAL);
        }
        let ids: Vec<_> = scheduler.scheduled().into_iter().map(|(id, _)| id).collect();
        assert_eq!(
            ids,
            vec![DownloadId::new(2), DownloadId::new(5), DownloadId::new(9)]
        );
    }
}
