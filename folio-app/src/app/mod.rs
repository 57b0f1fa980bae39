use std::sync::Arc;

use crate::{subscriptions, theme, update, view};

pub mod bootstrap;

pub use bootstrap::AppConfig;

/// Run the Folio application with the provided configuration.
pub fn run(config: AppConfig) -> iced::Result {
    let config = Arc::new(config);
    let boot_config = Arc::clone(&config);

    iced::application("Folio", update::update, view::view)
        .settings(default_settings())
        .subscription(subscriptions::subscription)
        .theme(|_state| theme::PortfolioTheme::theme())
        .window(iced::window::Settings {
            size: iced::Size::new(1280.0, 860.0),
            min_size: Some(iced::Size::new(960.0, 640.0)),
            resizable: true,
            decorations: true,
            transparent: false,
            ..Default::default()
        })
        .run_with(move || bootstrap::boot(&boot_config))
}

fn default_settings() -> iced::Settings {
    let mut settings = iced::Settings::default();
    settings.id = Some("folio".to_string());
    settings.antialiasing = true;
    settings
}
