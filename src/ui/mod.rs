mod download;
mod faq;
mod files;
mod settings;

use iced::{
    alignment,
    widget::{button, column, container, row, scrollable, text, Column, Space},
    Element, Length,
};

use crate::{
    application::{DownloadTracker, Notice, NoticeBoard, NoticeKind},
    domain::{Quality, Settings},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Download,
    Files,
    Settings,
    Faq,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Download, Tab::Files, Tab::Settings, Tab::Faq];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Download => "Download",
            Tab::Files => "Files",
            Tab::Settings => "Settings",
            Tab::Faq => "FAQ",
        }
    }
}

/// View-only state: what the user is typing and looking at
#[derive(Debug, Default)]
pub struct MainView {
    pub url_input: String,
    pub tab: Tab,
    pub expanded_faq: Option<usize>,
}

#[derive(Debug, Clone)]
pub enum UiMessage {
    UrlChanged(String),
    SubmitPressed,
    TabSelected(Tab),
    QualitySelected(Quality),
    FolderChanged(String),
    BrowseFolderPressed,
    FaqToggled(usize),
    NoticeDismissed(u64),
}

impl MainView {
    pub fn update(&mut self, message: UiMessage) {
        match message {
            UiMessage::UrlChanged(url) => {
                self.url_input = url;
            }
            UiMessage::TabSelected(tab) => {
                self.tab = tab;
            }
            UiMessage::FaqToggled(index) => {
                // Single-open accordion; clicking the open item collapses it
                self.expanded_faq = if self.expanded_faq == Some(index) {
                    None
                } else {
                    Some(index)
                };
            }
            // Everything else touches app state and is handled by the app
            _ => {}
        }
    }

    pub fn view<'a>(
        &'a self,
        tracker: &'a DownloadTracker,
        settings: &'a Settings,
        notices: &'a NoticeBoard,
    ) -> Element<'a, UiMessage> {
        let body = match self.tab {
            Tab::Download => download::view(&self.url_input, tracker, settings),
            Tab::Files => files::view(tracker),
            Tab::Settings => settings::view(settings),
            Tab::Faq => faq::view(self.expanded_faq),
        };

        let content = column![
            header(),
            notice_stack(notices),
            tab_bar(self.tab),
            body,
            footer(),
        ]
        .spacing(20)
        .padding(20)
        .max_width(960.0);

        scrollable(container(content).center_x(Length::Fill)).into()
    }
}

fn header<'a>() -> Element<'a, UiMessage> {
    column![
        text("VideoGrab").size(40),
        text("Grab videos from any site in high quality").size(16),
    ]
    .spacing(6)
    .align_x(alignment::Horizontal::Center)
    .width(Length::Fill)
    .into()
}

fn tab_bar<'a>(current: Tab) -> Element<'a, UiMessage> {
    let tabs = Tab::ALL.into_iter().map(|tab| -> Element<'a, UiMessage> {
        let selected = tab == current;
        button(text(tab.label()).width(Length::Fill).align_x(alignment::Horizontal::Center))
            .on_press(UiMessage::TabSelected(tab))
            .style(move |theme, status| {
                if selected {
                    button::primary(theme, status)
                } else {
                    button::secondary(theme, status)
                }
            })
            .width(Length::Fill)
            .padding([8, 12])
            .into()
    });

    iced::widget::Row::with_children(tabs).spacing(8).into()
}

fn notice_stack(notices: &NoticeBoard) -> Element<'_, UiMessage> {
    Column::with_children(notices.iter().map(notice_card))
        .spacing(8)
        .into()
}

fn notice_card(notice: &Notice) -> Element<'_, UiMessage> {
    let title = match notice.kind {
        NoticeKind::Error => text(&notice.title).size(16).style(text::danger),
        NoticeKind::Success => text(&notice.title).size(16).style(text::success),
    };

    container(
        row![
            column![title, text(&notice.body).size(14)].spacing(4),
            Space::new().width(Length::Fill),
            button(text("×"))
                .on_press(UiMessage::NoticeDismissed(notice.id))
                .style(button::text),
        ]
        .align_y(alignment::Vertical::Center),
    )
    .padding(12)
    .width(Length::Fill)
    .style(container::rounded_box)
    .into()
}

fn footer<'a>() -> Element<'a, UiMessage> {
    text("Safe downloads • No viruses • Completely free")
        .size(13)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}

/// Card with a heading, used by every tab.
fn card<'a>(
    heading: &'a str,
    description: Option<String>,
    body: Element<'a, UiMessage>,
) -> Element<'a, UiMessage> {
    let mut content = column![text(heading).size(22)].spacing(12);
    if let Some(description) = description {
        content = content.push(text(description).size(14));
    }

    container(content.push(body))
        .padding(20)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}
