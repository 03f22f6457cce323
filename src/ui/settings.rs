use iced::{
    widget::{button, column, pick_list, row, text, text_input},
    Element,
};

use super::{card, UiMessage};
use crate::domain::{Quality, Settings};

pub fn view(settings: &Settings) -> Element<'_, UiMessage> {
    let form = column![
        text("Default video quality").size(15),
        pick_list(Quality::ALL, Some(settings.quality), UiMessage::QualitySelected).padding(10),
        text("Download folder").size(15),
        row![
            text_input("Downloads/Videos", &settings.download_folder)
                .on_input(UiMessage::FolderChanged)
                .padding(10),
            button("Browse…")
                .on_press(UiMessage::BrowseFolderPressed)
                .padding([10, 20]),
        ]
        .spacing(12),
        text("The folder will be created automatically if it does not exist").size(12),
    ]
    .spacing(12);

    card(
        "Download settings",
        Some("Choose the video quality and the folder to save to".to_string()),
        form.into(),
    )
}
