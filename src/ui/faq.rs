use iced::{
    alignment,
    widget::{button, column, text, Column},
    Element, Length,
};

use super::{card, UiMessage};

pub static ENTRIES: [(&str, &str); 5] = [
    (
        "Which sites are supported?",
        "VideoGrab supports more than 1000 sites, including YouTube, Vimeo, TikTok, \
         Instagram, Facebook, Twitter and many other popular platforms.",
    ),
    (
        "Where are downloaded videos saved?",
        "By default videos are saved to Downloads/Videos. You can change the path in \
         the settings. The folder is created automatically on the first download.",
    ),
    (
        "What is the maximum quality available?",
        "Every quality from 360p up to 4K (2160p) is available, as long as the original \
         video offers it. The best quality is detected automatically.",
    ),
    (
        "Can I download audio only?",
        "Yes, extracting audio as MP3, AAC and FLAC is coming soon.",
    ),
    (
        "Is there a file size limit?",
        "There are no hard limits. You can download videos of any size as long as you \
         have enough disk space.",
    ),
];

pub fn view<'a>(expanded: Option<usize>) -> Element<'a, UiMessage> {
    let items = ENTRIES
        .iter()
        .enumerate()
        .map(|(index, (question, answer))| -> Element<'a, UiMessage> {
            let open = expanded == Some(index);
            let toggle = button(
                text(format!("{} {}", if open { "▾" } else { "▸" }, question))
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .on_press(UiMessage::FaqToggled(index))
            .style(button::text)
            .width(Length::Fill);

            let mut item = column![toggle].spacing(6);
            if open {
                item = item.push(text(*answer).size(14));
            }
            item.into()
        });

    card(
        "Frequently asked questions",
        None,
        Column::with_children(items).spacing(8).into(),
    )
}
