use crate::{application::tracker::Completion, domain::ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
}

/// A fire-and-forget message shown on top of the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Default)]
pub struct NoticeBoard {
    notices: Vec<Notice>,
    next_id: u64,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        kind: NoticeKind,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.notices.push(Notice {
            id,
            kind,
            title: title.into(),
            body: body.into(),
        });
        id
    }

    pub fn validation_failed(&mut self, error: &ValidationError) -> u64 {
        self.push(NoticeKind::Error, "Error", error.to_string())
    }

    pub fn download_completed(&mut self, completion: &Completion) -> u64 {
        self.push(
            NoticeKind::Success,
            "✅ Done!",
            format!("{} saved to {}", completion.title, completion.destination),
        )
    }

    /// Returns `false` if the notice was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.notices.len();
        self.notices.retain(|notice| notice.id != id);
        self.notices.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.notices.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DownloadId;

    #[test]
    fn test_completion_notice_mentions_folder() {
        let mut board = NoticeBoard::new();
        board.download_completed(&Completion {
            id: DownloadId::new(1),
            title: "Video 1".to_string(),
            destination: "Downloads/Videos".to_string(),
        });

        let notice = board.iter().next().unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.body, "Video 1 saved to Downloads/Videos");
    }

    #[test]
    fn test_dismiss() {
        let mut board = NoticeBoard::new();
        let first = board.validation_failed(&ValidationError::EmptyUrl);
        let second = board.validation_failed(&ValidationError::EmptyUrl);
        assert_ne!(first, second);

        assert!(board.dismiss(first));
        assert!(!board.dismiss(first));
        assert_eq!(board.len(), 1);
        assert_eq!(board.iter().next().map(|n| n.id), Some(second));
    }
}
