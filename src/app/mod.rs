// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the portfolio page.
//!
//! The `App` struct owns the one piece of cross-component state (the
//! lightbox) and wires the content catalog, localization, and persisted
//! preferences into the page. This file keeps policy decisions (window
//! sizing, theme persistence, section anchors) close to the main update
//! loop so user-facing behavior is easy to audit.

mod subscription;

use crate::config;
use crate::content::Catalog;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::theming::ThemeMode;
use crate::ui::{baking, gallery, game, icons, lightbox, navbar, profile, section, styles};
use chrono::Datelike;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Column, Container, Id, Row, Scrollable, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    window, Element, Length, Subscription, Task, Theme,
};
use std::fmt;

/// Widget id of the page scrollable, used by the nav links to snap to
/// section anchors.
pub const PAGE_SCROLL_ID: &str = "portfolio-page-scroll";

pub const WINDOW_DEFAULT_WIDTH: u32 = 1160;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    /// Decoded portfolio; `None` until the startup load task delivers it.
    content: Option<Catalog>,
    /// Set instead of `content` when startup decoding failed.
    load_error: Option<Error>,
    lightbox: lightbox::State,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("has_content", &self.content.is_some())
            .field("lightbox", &self.lightbox)
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

/// Top-level messages consumed by [`App::update`]. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    ContentLoaded(Result<Catalog, Error>),
    Gallery(gallery::Message),
    Lightbox(lightbox::Message),
    Navbar(navbar::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .title(|state: &App| state.title())
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            content: None,
            load_error: None,
            lightbox: lightbox::State::default(),
            theme_mode: ThemeMode::default(),
        }
    }
}

impl App {
    /// Initializes application state and kicks off asynchronous decoding of
    /// the embedded catalog.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            ..Self::default()
        };

        let load = Task::perform(
            async {
                match tokio::task::spawn_blocking(Catalog::load).await {
                    Ok(result) => result,
                    Err(err) => Err(Error::Image(format!("content decode task failed: {err}"))),
                }
            },
            Message::ContentLoaded,
        );

        (app, load)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.lightbox.is_open())
    }

    fn series_len(&self) -> usize {
        self.content
            .as_ref()
            .map(|catalog| catalog.photography.len())
            .unwrap_or(0)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ContentLoaded(Ok(catalog)) => {
                self.content = Some(catalog);
                Task::none()
            }
            Message::ContentLoaded(Err(error)) => {
                self.load_error = Some(error);
                Task::none()
            }
            Message::Gallery(gallery::Message::OpenPhoto(index)) => {
                let series_len = self.series_len();
                let _ = self.lightbox.open_at(index, series_len);
                Task::none()
            }
            Message::Lightbox(message) => {
                let series_len = self.series_len();
                let _ = self.lightbox.update(message, series_len);
                Task::none()
            }
            Message::Navbar(navbar::Message::JumpTo(target)) => operation::snap_to(
                Id::new(PAGE_SCROLL_ID),
                RelativeOffset {
                    x: 0.0,
                    y: target.anchor(),
                },
            ),
            Message::Navbar(navbar::Message::CycleTheme) => {
                self.theme_mode = self.theme_mode.cycled();
                self.persist_theme_mode();
                Task::none()
            }
        }
    }

    fn persist_theme_mode(&self) {
        let mut config = config::load();
        config.general.theme_mode = self.theme_mode;
        if let Err(error) = config::save(&config) {
            eprintln!("failed to save settings: {error}");
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let body: Element<'_, Message> = match (&self.content, &self.load_error) {
            (Some(catalog), _) => self.page_view(catalog),
            (None, Some(error)) => {
                self.notice_view(self.i18n.tr("error-load-heading"), error.to_string())
            }
            (None, None) => self.notice_view(self.i18n.tr("loading-message"), String::new()),
        };

        match (self.lightbox.open_index(), &self.content) {
            (Some(index), Some(catalog)) => {
                let overlay = lightbox::view(lightbox::ViewContext {
                    i18n: &self.i18n,
                    photos: &catalog.photography.photos,
                    index,
                })
                .map(Message::Lightbox);

                Stack::new()
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .push(body)
                    .push(overlay)
                    .into()
            }
            _ => body,
        }
    }

    /// Full-window message used for the loading and error states.
    fn notice_view(&self, heading: String, details: String) -> Element<'_, Message> {
        let mut column = Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(Text::new(heading).size(typography::TITLE_LG));

        if !details.is_empty() {
            column = column.push(
                Text::new(details)
                    .size(typography::SIZE_MD)
                    .style(styles::text::muted),
            );
        }

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::page)
            .into()
    }

    fn page_view<'a>(&'a self, catalog: &'a Catalog) -> Element<'a, Message> {
        let header = navbar::view(navbar::ViewContext {
            i18n: &self.i18n,
            name: catalog.profile.name,
            role: catalog.profile.role,
            theme_mode: self.theme_mode,
        })
        .map(Message::Navbar);

        let sections = Column::new()
            .spacing(spacing::MD)
            .width(Length::Fill)
            .push(section::view(
                self.i18n.tr("section-about-title"),
                None,
                profile::view(&catalog.profile),
            ))
            .push(section::view(
                self.i18n.tr("section-photography-title"),
                Some(icons::camera()),
                self.photography_view(catalog),
            ))
            .push(section::view(
                self.i18n.tr("section-game-title"),
                Some(icons::gamepad()),
                game::view(&catalog.game, &catalog.sprites),
            ))
            .push(section::view(
                self.i18n.tr("section-baking-title"),
                Some(icons::cookie()),
                baking::view(&catalog.baking),
            ))
            .push(self.footer_view(catalog));

        let content = Container::new(sections.width(Length::Fixed(sizing::CONTENT_WIDTH)))
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .padding(spacing::MD);

        let page = Scrollable::new(content)
            .id(Id::new(PAGE_SCROLL_ID))
            .width(Length::Fill)
            .height(Length::Fill);

        let layout = Column::new().push(header).push(page);

        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::page)
            .into()
    }

    fn photography_view<'a>(&'a self, catalog: &'a Catalog) -> Element<'a, Message> {
        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(catalog.photography.title).size(typography::TITLE_MD))
            .push(section::muted_text(
                catalog.photography.idea.to_string(),
                typography::SIZE_MD,
            ))
            .push(gallery::view(&catalog.photography.photos).map(Message::Gallery))
            .into()
    }

    fn footer_view<'a>(&'a self, catalog: &'a Catalog) -> Element<'a, Message> {
        let year = chrono::Local::now().year();
        let copyright = format!(
            "© {year} {}. Built for a Computer Animation course application :)",
            catalog.profile.name
        );

        Container::new(
            Row::new().push(
                Text::new(copyright)
                    .size(typography::SIZE_SM)
                    .style(styles::text::muted),
            ),
        )
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::card)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard;

    fn key_event(named: keyboard::key::Named, code: keyboard::key::Code) -> iced::Event {
        iced::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(named),
            modified_key: keyboard::Key::Named(named),
            physical_key: keyboard::key::Physical::Code(code),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::default(),
            text: None,
            repeat: false,
        })
    }

    fn app_with_content() -> App {
        let mut app = App::default();
        let catalog = Catalog::load().expect("embedded catalog should decode");
        let _ = app.update(Message::ContentLoaded(Ok(catalog)));
        app
    }

    #[test]
    fn gallery_press_opens_lightbox_at_index() {
        let mut app = app_with_content();

        let _ = app.update(Message::Gallery(gallery::Message::OpenPhoto(3)));

        assert_eq!(app.lightbox.open_index(), Some(3));
    }

    #[test]
    fn escape_closes_and_keyboard_subscription_is_released() {
        let mut app = app_with_content();
        let _ = app.update(Message::Gallery(gallery::Message::OpenPhoto(3)));
        assert!(app.lightbox.is_open());

        let _ = app.update(Message::Lightbox(lightbox::Message::RawEvent(key_event(
            keyboard::key::Named::Escape,
            keyboard::key::Code::Escape,
        ))));

        // The keyboard listener exists exactly while the lightbox is open;
        // with it closed the subscription gate is false again.
        assert!(!app.lightbox.is_open());
    }

    #[test]
    fn arrow_keys_wrap_across_the_series() {
        let mut app = app_with_content();
        let _ = app.update(Message::Gallery(gallery::Message::OpenPhoto(0)));

        let _ = app.update(Message::Lightbox(lightbox::Message::RawEvent(key_event(
            keyboard::key::Named::ArrowLeft,
            keyboard::key::Code::ArrowLeft,
        ))));
        assert_eq!(app.lightbox.open_index(), Some(7));

        for expected in [0, 1] {
            let _ = app.update(Message::Lightbox(lightbox::Message::RawEvent(key_event(
                keyboard::key::Named::ArrowRight,
                keyboard::key::Code::ArrowRight,
            ))));
            assert_eq!(app.lightbox.open_index(), Some(expected));
        }
    }

    #[test]
    fn backdrop_press_closes_the_lightbox() {
        let mut app = app_with_content();
        let _ = app.update(Message::Gallery(gallery::Message::OpenPhoto(3)));

        let _ = app.update(Message::Lightbox(lightbox::Message::BackdropPressed));

        assert!(!app.lightbox.is_open());
    }

    #[test]
    fn figure_press_keeps_the_lightbox_open() {
        let mut app = app_with_content();
        let _ = app.update(Message::Gallery(gallery::Message::OpenPhoto(5)));

        let _ = app.update(Message::Lightbox(lightbox::Message::FigurePressed));

        assert_eq!(app.lightbox.open_index(), Some(5));
    }

    #[test]
    fn lightbox_cannot_open_before_content_arrives() {
        let mut app = App::default();

        let _ = app.update(Message::Gallery(gallery::Message::OpenPhoto(0)));

        assert!(!app.lightbox.is_open());
    }

    #[test]
    fn load_failure_is_stored_for_the_error_view() {
        let mut app = App::default();

        let _ = app.update(Message::ContentLoaded(Err(Error::Image(
            "broken".to_string(),
        ))));

        assert!(app.content.is_none());
        assert!(app.load_error.is_some());
    }

    #[test]
    fn cycling_theme_updates_the_mode() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::env::set_var("ICED_FOLIO_CONFIG_DIR", dir.path());

        let mut app = app_with_content();
        let before = app.theme_mode;

        let _ = app.update(Message::Navbar(navbar::Message::CycleTheme));

        assert_eq!(app.theme_mode, before.cycled());
        std::env::remove_var("ICED_FOLIO_CONFIG_DIR");
    }
}
