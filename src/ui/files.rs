use iced::{
    alignment,
    widget::{column, container, text, Column},
    Element, Length,
};

use super::{card, UiMessage};
use crate::{application::DownloadTracker, domain::DownloadRecord};

pub fn view(tracker: &DownloadTracker) -> Element<'_, UiMessage> {
    let count = tracker.completed_count();

    let body: Element<'_, UiMessage> = if count == 0 {
        text("No downloaded files yet")
            .size(16)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .into()
    } else {
        Column::with_children(tracker.completed().map(file_row))
            .spacing(10)
            .into()
    };

    card(
        "Downloaded files",
        Some(format!("Total downloaded: {} files", count)),
        body,
    )
}

fn file_row(record: &DownloadRecord) -> Element<'_, UiMessage> {
    container(
        column![
            text(&record.title).size(16),
            text(format!("{} • {}", record.size_label, record.quality.as_str())).size(13),
        ]
        .spacing(4),
    )
    .padding(14)
    .width(Length::Fill)
    .style(container::bordered_box)
    .into()
}
