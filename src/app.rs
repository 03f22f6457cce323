use iced::{time, Subscription, Task};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

use crate::application::{submit, DownloadTracker, NoticeBoard, TickOutcome};
use crate::config::TrackerConfig;
use crate::domain::{DownloadId, Settings};
use crate::ui::{MainView, UiMessage};

pub struct VideoGrabApp {
    view: MainView,
    tracker: DownloadTracker,
    settings: Settings,
    notices: NoticeBoard,
}

impl Default for VideoGrabApp {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

impl VideoGrabApp {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            view: MainView::default(),
            tracker: DownloadTracker::new(config),
            settings: Settings::default(),
            notices: NoticeBoard::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    UiMessage(UiMessage),
    /// One timer tick for a single download
    Tick(DownloadId),
    /// Result of the folder picker; `None` when the dialog was cancelled
    FolderPicked(Option<PathBuf>),
    NoticeExpired(u64),
}

pub fn update(app: &mut VideoGrabApp, message: Message) -> Task<Message> {
    let notice_ttl = app.tracker.config().notice_ttl;

    match message {
        Message::UiMessage(ui_msg) => {
            app.view.update(ui_msg.clone());

            match ui_msg {
                UiMessage::SubmitPressed => {
                    let input = &mut app.view.url_input;
                    if let Err(e) = submit(&mut app.tracker, input, &app.settings) {
                        let id = app.notices.validation_failed(&e);
                        return expire_notice(id, notice_ttl);
                    }
                }
                UiMessage::QualitySelected(quality) => {
                    info!("Default quality set to {}", quality.as_str());
                    app.settings.quality = quality;
                }
                UiMessage::FolderChanged(folder) => {
                    app.settings.download_folder = folder;
                }
                UiMessage::BrowseFolderPressed => {
                    return Task::perform(
                        async {
                            rfd::AsyncFileDialog::new()
                                .pick_folder()
                                .await
                                .map(|handle| handle.path().to_path_buf())
                        },
                        Message::FolderPicked,
                    );
                }
                UiMessage::NoticeDismissed(id) => {
                    app.notices.dismiss(id);
                }
                UiMessage::UrlChanged(_)
                | UiMessage::TabSelected(_)
                | UiMessage::FaqToggled(_) => {}
            }
        }
        Message::Tick(id) => {
            if let TickOutcome::Completed(done) = app.tracker.tick(id) {
                let notice = app.notices.download_completed(&done);
                return expire_notice(notice, notice_ttl);
            }
        }
        Message::FolderPicked(Some(path)) => {
            app.settings.download_folder = path.display().to_string();
            info!("Download folder set to {}", app.settings.download_folder);
        }
        Message::FolderPicked(None) => {
            debug!("Folder selection cancelled");
        }
        Message::NoticeExpired(id) => {
            app.notices.dismiss(id);
        }
    }
    Task::none()
}

/// Removes the notice once `ttl` has passed.
fn expire_notice(id: u64, ttl: Duration) -> Task<Message> {
    // sleep must be created inside the future: it needs a running runtime
    Task::perform(
        async move {
            tokio::time::sleep(ttl).await;
            id
        },
        Message::NoticeExpired,
    )
}

pub fn view(app: &VideoGrabApp) -> iced::Element<'_, Message> {
    app.view
        .view(&app.tracker, &app.settings, &app.notices)
        .map(Message::UiMessage)
}

/// One repeating timer per scheduled download.
pub fn subscription(app: &VideoGrabApp) -> Subscription<Message> {
    Subscription::batch(
        app.tracker
            .scheduler()
            .scheduled()
            .into_iter()
            .map(|(id, interval)| {
                time::every(interval)
                    .with(id)
                    .map(|(id, _)| Message::Tick(id))
            }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::NoticeKind;
    use crate::domain::{DownloadStatus, Quality, PROGRESS_MAX};

    fn type_and_submit(app: &mut VideoGrabApp, url: &str) {
        let _ = update(
            app,
            Message::UiMessage(UiMessage::UrlChanged(url.to_string())),
        );
        let _ = update(app, Message::UiMessage(UiMessage::SubmitPressed));
    }

    #[test]
    fn test_empty_submission_only_shows_notice() {
        let mut app = VideoGrabApp::default();
        type_and_submit(&mut app, "   ");

        assert!(app.tracker.is_empty());
        assert!(app.tracker.scheduler().is_empty());
        assert_eq!(app.notices.len(), 1);
        assert_eq!(
            app.notices.iter().next().map(|n| n.kind),
            Some(NoticeKind::Error)
        );
    }

    #[test]
    fn test_submission_clears_input_and_schedules() {
        let mut app = VideoGrabApp::default();
        type_and_submit(&mut app, "https://youtube.com/watch?v=abc");

        assert!(app.view.url_input.is_empty());
        assert_eq!(app.tracker.len(), 1);
        assert_eq!(app.tracker.scheduler().len(), 1);
        assert!(app.notices.is_empty());
    }

    #[test]
    fn test_ticks_complete_download_and_notify() {
        let mut app = VideoGrabApp::default();
        type_and_submit(&mut app, "https://youtube.com/watch?v=abc");
        let id = app.tracker.records()[0].id;

        for _ in 0..1_000 {
            let _ = update(&mut app, Message::Tick(id));
        }

        let record = app.tracker.get(id).unwrap();
        assert_eq!(record.status, DownloadStatus::Completed);
        assert_eq!(record.progress, PROGRESS_MAX);
        assert!(app.tracker.scheduler().is_empty());

        let notices: Vec<_> = app.notices.iter().collect();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Success);
        assert!(notices[0].body.contains("Downloads/Videos"));

        let notice_id = notices[0].id;
        let _ = update(&mut app, Message::NoticeExpired(notice_id));
        assert!(app.notices.is_empty());
    }

    #[test]
    fn test_settings_only_affect_new_downloads() {
        let mut app = VideoGrabApp::default();
        type_and_submit(&mut app, "https://vimeo.com/1");

        let _ = update(
            &mut app,
            Message::UiMessage(UiMessage::QualitySelected(Quality::Sd480)),
        );
        let _ = update(
            &mut app,
            Message::UiMessage(UiMessage::FolderChanged("Movies".to_string())),
        );
        type_and_submit(&mut app, "https://vimeo.com/2");

        let newest = &app.tracker.records()[0];
        let oldest = &app.tracker.records()[1];
        assert_eq!(newest.quality, Quality::Sd480);
        assert_eq!(newest.destination, "Movies");
        assert_eq!(oldest.quality, Quality::FullHd1080);
        assert_eq!(oldest.destination, "Downloads/Videos");
    }

    #[test]
    fn test_custom_config_reaches_tracker() {
        let config = TrackerConfig {
            tick_interval: Duration::from_millis(100),
            active_view_limit: 1,
            ..TrackerConfig::default()
        };
        let mut app = VideoGrabApp::new(config);
        let _ = update(
            &mut app,
            Message::UiMessage(UiMessage::TabSelected(crate::ui::Tab::Files)),
        );
        type_and_submit(&mut app, "https://vimeo.com/1");
        type_and_submit(&mut app, "https://vimeo.com/2");

        assert_eq!(app.view.tab, crate::ui::Tab::Files);
        assert_eq!(app.tracker.active().count(), 1);
        assert_eq!(
            app.tracker.scheduler().scheduled()[0].1,
            Duration::from_millis(100)
        );
        assert!(app.notices.is_empty());
    }

    #[test]
    fn test_picked_folder_replaces_setting() {
        let mut app = VideoGrabApp::default();
        let _ = update(
            &mut app,
            Message::FolderPicked(Some(PathBuf::from("/home/me/Clips"))),
        );
        assert_eq!(app.settings.download_folder, "/home/me/Clips");

        let _ = update(&mut app, Message::FolderPicked(None));
        assert_eq!(app.settings.download_folder, "/home/me/Clips");
    }
}
