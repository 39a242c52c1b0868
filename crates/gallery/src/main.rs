mod app;
mod key_binds;
mod labels;
mod localize;
mod message;
mod views;

use app::GalleryApp;
use std::path::PathBuf;

fn main() -> cosmic::iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let settings = cosmic::app::Settings::default().size_limits(
        cosmic::iced::Limits::NONE
            .min_width(480.0)
            .min_height(360.0),
    );

    // A manifest file or a directory of images
    let source = std::env::args().nth(1).map(PathBuf::from);

    cosmic::app::run::<GalleryApp>(settings, source)
}
