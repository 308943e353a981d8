// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the card state, the viewport observer and the
//! confetti overlay, and translates messages into state events and
//! subscriptions.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::celebration::CelebrationState;
use crate::config::{
    self, Config, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, WINDOW_DEFAULT_HEIGHT,
    WINDOW_DEFAULT_WIDTH,
};
use crate::i18n::fluent::I18n;
use crate::ui::card::Greeting;
use crate::ui::state::{ViewportObserver, ViewportSize};
use crate::ui::theming::ThemeMode;
use crate::ui::widgets::ConfettiField;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    state: CelebrationState,
    greeting: Greeting,
    viewport: ViewportObserver,
    confetti: Option<ConfettiField>,
    theme_mode: ThemeMode,
    /// i18n key of a config warning shown on the card.
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("state", &self.state)
            .field("viewport", &self.viewport.size())
            .field("confetti", &self.confetti)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
///
/// Close requests are handled by the app so the timer and listeners are
/// released before the window goes away.
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

    // iced requires an `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from CLI flags and `settings.toml`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        (Self::with_config(&flags, &config, config_warning), Task::none())
    }

    /// Builds the app from an already loaded config.
    #[must_use]
    pub fn with_config(flags: &Flags, config: &Config, config_warning: Option<String>) -> Self {
        let i18n = I18n::new(flags.lang.clone(), config);
        let greeting = Greeting::from_config(&config.greeting, flags.name.as_deref());

        tracing::debug!(
            locale = %i18n.current_locale(),
            recipient = %greeting.recipient,
            "card mounted"
        );

        Self {
            i18n,
            state: CelebrationState::new(),
            greeting,
            viewport: ViewportObserver::mount(ViewportSize::new(
                WINDOW_DEFAULT_WIDTH,
                WINDOW_DEFAULT_HEIGHT,
            )),
            confetti: None,
            theme_mode: config.general.theme_mode,
            config_warning,
        }
    }

    #[must_use]
    pub fn state(&self) -> &CelebrationState {
        &self.state
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportObserver {
        &self.viewport
    }

    #[must_use]
    pub fn confetti(&self) -> Option<&ConfettiField> {
        self.confetti.as_ref()
    }

    #[must_use]
    pub fn greeting(&self) -> &Greeting {
        &self.greeting
    }

    #[must_use]
    pub fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let window_sub = subscription::create_window_subscription(self.viewport.is_attached());
        let autoplay_sub = subscription::create_autoplay_subscription(self.state.autoplay());
        let confetti_sub = subscription::create_confetti_subscription(
            self.confetti
                .as_ref()
                .is_some_and(|field| !field.is_finished()),
        );

        Subscription::batch([window_sub, autoplay_sub, confetti_sub])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            state: &mut self.state,
            viewport: &mut self.viewport,
            confetti: &mut self.confetti,
        };
        update::handle_message(&mut ctx, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            state: &self.state,
            greeting: &self.greeting,
            confetti: self.confetti.as_ref(),
            warning: self.config_warning.as_deref(),
        })
    }
}
