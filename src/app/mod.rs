// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page and the gallery.
//!
//! The `App` struct wires together localization, theming and the gallery
//! widget, and translates messages into side effects like the native file
//! dialog or background file reads.

pub mod config;
mod loads;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: gallery::State,
    loads: loads::LoadQueue,
    theme_mode: ThemeMode,
    /// Resolved once at startup.
    theme: Theme,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", self.i18n.current_locale())
            .field("theme_mode", &self.theme_mode)
            .field("images", &self.gallery.gallery().len())
            .field("loads_in_flight", &self.loads.in_flight())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 900;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Builds the window settings. Close requests are handled by the app so the
/// gallery can be torn down first.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants a `Fn` boot; the flags are only consumed by the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            gallery: gallery::State::default(),
            loads: loads::LoadQueue::new(),
            theme_mode: ThemeMode::Light,
            theme: Theme::Light,
        }
    }
}

impl App {
    /// Initializes application state from the settings file and the CLI
    /// flags, and starts loading any images passed on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        if let Some(key) = config_warning {
            tracing::warn!("{}", i18n.tr(&key));
        }

        let theme_mode = config.general.theme_mode;
        let mut app = App {
            i18n,
            gallery: gallery::State::new(&config.gallery),
            loads: loads::LoadQueue::new(),
            theme_mode,
            theme: theme_mode.to_theme(),
        };
        tracing::info!(
            locale = %app.i18n.current_locale(),
            theme = ?app.theme_mode,
            "application started"
        );

        let task = if flags.files.is_empty() {
            Task::none()
        } else {
            update::load_files(&mut app.loads, flags.files)
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            gallery: &mut self.gallery,
            loads: &mut self.loads,
            dialog_title: self.i18n.tr("gallery-title"),
        };

        match message {
            Message::Page(page_message) => update::handle_page_message(&mut ctx, page_message),
            Message::OpenFileDialogResult(paths) => {
                update::handle_open_file_dialog_result(&mut ctx, paths)
            }
            Message::FilesLoaded { ticket, files } => {
                update::handle_files_loaded(&mut ctx, ticket, files)
            }
            Message::FileDropped(path) => update::load_files(ctx.loads, vec![path]),
            Message::WindowCloseRequested(_) => update::handle_window_close(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::SelectedFile;
    use crate::ui::{gallery as gallery_ui, page};

    fn png(name: &str, size: usize) -> SelectedFile {
        SelectedFile::new(name, "image/png", vec![0u8; size])
    }

    fn first_id(app: &App) -> crate::gallery::RecordId {
        app.gallery.gallery().records()[0].id().clone()
    }

    fn gallery_message(message: gallery_ui::Message) -> Message {
        Message::Page(page::Message::Gallery(message))
    }

    fn loaded(app: &mut App, files: Vec<SelectedFile>) {
        let ticket = app.loads.issue();
        let _ = app.update(Message::FilesLoaded { ticket, files });
    }

    fn names(app: &App) -> Vec<String> {
        app.gallery
            .gallery()
            .records()
            .iter()
            .map(|record| record.file().name.clone())
            .collect()
    }

    #[test]
    fn new_app_has_empty_gallery() {
        let app = App::default();
        assert!(app.gallery.gallery().is_empty());
        assert!(app.gallery.gallery().viewed().is_none());
    }

    #[test]
    fn title_is_localized() {
        let app = App {
            i18n: I18n::new(Some("fr".into()), &config::Config::default()),
            ..App::default()
        };
        assert_eq!(app.title(), "Portail des startups AYUSH");
    }

    #[test]
    fn cancelled_dialog_changes_nothing() {
        let mut app = App::default();
        let _ = app.update(Message::OpenFileDialogResult(Vec::new()));
        assert!(app.gallery.gallery().is_empty());
    }

    #[test]
    fn loaded_files_then_view_and_delete() {
        let mut app = App::default();
        loaded(&mut app, vec![png("a.png", 2048)]);
        assert_eq!(app.gallery.gallery().len(), 1);

        let id = first_id(&app);
        let _ = app.update(gallery_message(gallery_ui::Message::ViewRequested(id)));
        let viewed = app.gallery.gallery().viewed().map(|record| record.file().clone());
        let viewed = viewed.expect("viewer should be open");
        assert_eq!(viewed.name, "a.png");
        assert_eq!(viewed.size_label(), "2.00 KB");
        assert_eq!(viewed.mime_type, "image/png");

        let _ = app.update(gallery_message(gallery_ui::Message::DeleteViewed));
        assert!(app.gallery.gallery().is_empty());
        assert!(app.gallery.gallery().viewed().is_none());
    }

    #[test]
    fn dropped_files_are_added_in_drop_order() {
        let mut app = App::default();
        let dir = std::env::temp_dir();
        let _ = app.update(Message::FileDropped(dir.join("first_big.png")));
        let _ = app.update(Message::FileDropped(dir.join("second_small.png")));
        assert_eq!(app.loads.in_flight(), 2);

        // The smaller read completes first.
        let _ = app.update(Message::FilesLoaded {
            ticket: 1,
            files: vec![png("second_small.png", 8)],
        });
        assert!(app.gallery.gallery().is_empty());

        let _ = app.update(Message::FilesLoaded {
            ticket: 0,
            files: vec![png("first_big.png", 200 * 1024)],
        });
        assert_eq!(names(&app), ["first_big.png", "second_small.png"]);
        assert_eq!(app.loads.in_flight(), 0);
    }

    #[test]
    fn window_close_tears_down_gallery() {
        let mut app = App::default();
        loaded(&mut app, vec![png("a.png", 1), png("b.png", 1)]);
        let ledger = std::sync::Arc::clone(app.gallery.gallery().ledger());

        let _ = app.update(Message::WindowCloseRequested(window::Id::unique()));

        assert!(app.gallery.gallery().is_empty());
        assert_eq!(ledger.outstanding(), 0);
    }

    #[test]
    fn view_renders_with_open_viewer() {
        let mut app = App::default();
        loaded(&mut app, vec![png("a.png", 4)]);
        let id = first_id(&app);
        let _ = app.update(gallery_message(gallery_ui::Message::ViewRequested(id)));
        let _ = app.view();
    }
}
