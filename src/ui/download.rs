use iced::{
    alignment,
    widget::{button, column, container, progress_bar, row, text, text_input, Column, Space},
    Element, Length,
};

use super::{card, UiMessage};
use crate::{
    application::DownloadTracker,
    domain::{DownloadRecord, DownloadStatus, Settings, PROGRESS_MAX},
    utils::{percent_label, truncate_display},
};

const URL_DISPLAY_CHARS: usize = 60;

pub fn view<'a>(
    url_input: &'a str,
    tracker: &'a DownloadTracker,
    settings: &'a Settings,
) -> Element<'a, UiMessage> {
    let form = column![
        row![
            text_input("https://youtube.com/watch?v=...", url_input)
                .on_input(UiMessage::UrlChanged)
                .on_submit(UiMessage::SubmitPressed)
                .padding(10)
                .size(18),
            button("Download")
                .on_press(UiMessage::SubmitPressed)
                .padding([10, 20]),
        ]
        .spacing(12),
        row![
            text(format!("Quality: {}", settings.quality.as_str())).size(14),
            text(format!("Folder: {}", settings.download_folder)).size(14),
        ]
        .spacing(24),
    ]
    .spacing(12);

    let mut content = column![card(
        "Paste a link to the video",
        Some("All popular platforms are supported: YouTube, Vimeo, TikTok and more".to_string()),
        form.into(),
    )]
    .spacing(20);

    if !tracker.is_empty() {
        let rows = Column::with_children(tracker.active().map(download_row)).spacing(12);
        content = content.push(card("Active downloads", None, rows.into()));
    }

    content.into()
}

fn download_row(record: &DownloadRecord) -> Element<'_, UiMessage> {
    let (state_label, marker) = match record.status {
        DownloadStatus::Completed => ("Completed", "✓"),
        DownloadStatus::Downloading => ("Downloading...", "⟳"),
        DownloadStatus::Error => ("Failed", "!"),
    };

    container(
        column![
            row![
                column![
                    row![text(&record.title).size(16), text(marker).size(16)].spacing(8),
                    text(truncate_display(&record.source_url, URL_DISPLAY_CHARS)).size(13),
                ]
                .spacing(4),
                Space::new().width(Length::Fill),
                container(text(&record.size_label).size(13)).padding([4, 10]),
            ]
            .align_y(alignment::Vertical::Center),
            row![
                text(state_label).size(13),
                Space::new().width(Length::Fill),
                text(percent_label(record.progress)).size(13),
            ],
            progress_bar(0.0..=PROGRESS_MAX, record.progress),
        ]
        .spacing(8),
    )
    .padding(14)
    .width(Length::Fill)
    .style(container::bordered_box)
    .into()
}
