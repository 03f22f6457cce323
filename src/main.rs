mod app;
mod application;
mod config;
mod domain;
mod ui;
mod utils;

use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("videograb=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    tracing::info!("Starting VideoGrab");

    iced::application(app::VideoGrabApp::default, app::update, app::view)
        .title("VideoGrab")
        .subscription(app::subscription)
        .run()
}
