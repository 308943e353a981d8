// SPDX-License-Identifier: MPL-2.0
use birthday_wish::app::{App, Flags, Message};
use birthday_wish::celebration::Phase;
use birthday_wish::config::{self, Config, CONFIG_LOAD_WARNING, TOTAL_BALLOONS, TOTAL_CANDLES};
use birthday_wish::i18n::fluent::I18n;
use birthday_wish::ui::card;
use birthday_wish::ui::state::ViewportSize;
use iced::advanced::subscription::into_recipes;
use iced::{window, Size};
use std::fs;
use std::time::Instant;
use tempfile::tempdir;

fn app_with(flags: Flags) -> App {
    App::with_config(&flags, &Config::default(), None)
}

fn click(app: &mut App, message: card::Message) {
    let _ = app.update(Message::Card(message));
}

fn tick(app: &mut App) {
    let _ = app.update(Message::AutoplayTick(Instant::now()));
}

#[test]
fn fresh_card_is_idle() {
    let app = app_with(Flags {
        lang: Some("en-US".to_string()),
        ..Flags::default()
    });
    assert_eq!(app.state().phase(), Phase::Idle);
    assert!(app.confetti().is_none());
    assert_eq!(app.title(), "Happy Birthday!");
}

#[test]
fn lighting_and_popping_everything_releases_confetti() {
    let mut app = app_with(Flags::default());

    for index in 0..usize::from(TOTAL_CANDLES) {
        click(&mut app, card::Message::LightCandle(index));
    }
    assert!(app.confetti().is_none());

    for index in 0..usize::from(TOTAL_BALLOONS) {
        click(&mut app, card::Message::PopBalloon(index));
    }

    assert!(app.state().is_complete());
    assert!(app.state().show_confetti());
    let field = app.confetti().expect("confetti released");
    assert_eq!(field.active_count(), 500);
}

#[test]
fn out_of_order_clicks_are_ignored() {
    let mut app = app_with(Flags::default());
    click(&mut app, card::Message::LightCandle(3));
    click(&mut app, card::Message::PopBalloon(1));
    assert_eq!(app.state().candles().count(), 0);
    assert_eq!(app.state().balloons().count(), 0);
    assert_eq!(app.state().phase(), Phase::Idle);
}

#[test]
fn celebrate_lights_remaining_candles_on_ticks() {
    let mut app = app_with(Flags::default());
    click(&mut app, card::Message::LightCandle(0));
    click(&mut app, card::Message::Celebrate);

    assert!(app.state().is_celebrating());
    assert!(app.state().autoplay().is_running());
    assert!(app.confetti().is_some());

    for _ in 1..TOTAL_CANDLES {
        tick(&mut app);
    }
    assert!(app.state().candles().is_full());
    assert!(!app.state().autoplay().is_running());

    // Late ticks after the interval is released change nothing.
    tick(&mut app);
    assert_eq!(app.state().candles().count(), TOTAL_CANDLES);
    assert_eq!(app.state().balloons().count(), 0);
}

#[test]
fn pressing_celebrate_twice_keeps_one_autoplay() {
    let mut app = app_with(Flags::default());
    click(&mut app, card::Message::Celebrate);
    tick(&mut app);
    click(&mut app, card::Message::Celebrate);
    assert_eq!(app.state().candles().count(), 1);
    tick(&mut app);
    assert_eq!(app.state().candles().count(), 2);
}

#[test]
fn window_events_update_viewport_and_confetti() {
    let mut app = app_with(Flags::default());
    let _ = app.update(Message::WindowOpened(Size::new(800.0, 600.0)));
    assert_eq!(app.viewport().size(), ViewportSize::new(800, 600));

    click(&mut app, card::Message::Celebrate);
    let _ = app.update(Message::WindowResized(Size::new(1024.0, 768.0)));
    assert_eq!(app.viewport().size(), ViewportSize::new(1024, 768));
    let field = app.confetti().expect("confetti released");
    assert_eq!(field.params().size, ViewportSize::new(1024, 768));
}

#[test]
fn close_request_tears_everything_down() {
    let mut app = app_with(Flags::default());
    click(&mut app, card::Message::Celebrate);
    assert!(app.state().autoplay().is_running());

    let _ = app.update(Message::WindowCloseRequested(window::Id::unique()));

    assert!(!app.state().autoplay().is_running());
    assert!(!app.viewport().is_attached());
    assert!(app.confetti().is_none());

    let candles = app.state().candles().count();
    tick(&mut app);
    let _ = app.update(Message::WindowResized(Size::new(10.0, 10.0)));
    assert_eq!(app.state().candles().count(), candles);
    assert_ne!(app.viewport().size(), ViewportSize::new(10, 10));
}

#[test]
fn cli_name_overrides_config_recipient() {
    let app = app_with(Flags {
        name: Some("Grace".to_string()),
        ..Flags::default()
    });
    assert_eq!(app.greeting().recipient, "Grace");
}

#[test]
fn greeting_and_language_come_from_settings_file() {
    let dir = tempdir().expect("failed to create temp dir");
    fs::write(
        dir.path().join("settings.toml"),
        r#"
[general]
language = "fr"

[greeting]
recipient = "Camille"
age = 1
day = 1
month = 5
"#,
    )
    .expect("failed to write settings");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let app = App::with_config(&Flags::default(), &loaded, warning);
    assert_eq!(app.i18n.current_locale().to_string(), "fr");
    assert_eq!(app.greeting().recipient, "Camille");
    assert_eq!(app.greeting().title(&app.i18n), "Joyeux 1er anniversaire !");
    assert_eq!(app.greeting().date_line(&app.i18n), "1er mai");
}

#[test]
fn cli_language_wins_over_settings_file() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("settings.toml");
    fs::write(&path, "[general]\nlanguage = \"fr\"\n").expect("failed to write settings");

    let loaded = config::load_from_path(&path).expect("failed to load settings");
    let i18n = I18n::new(Some("en-US".to_string()), &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn broken_settings_file_falls_back_with_warning() {
    let dir = tempdir().expect("failed to create temp dir");
    fs::write(dir.path().join("settings.toml"), "[greeting\nage = ").expect("failed to write");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_WARNING));
}

fn active_subscriptions(app: &App) -> usize {
    into_recipes(app.subscription()).len()
}

#[test]
fn subscriptions_follow_the_celebration_lifecycle() {
    let mut app = app_with(Flags::default());
    // Resize and close listener only.
    assert_eq!(active_subscriptions(&app), 1);

    click(&mut app, card::Message::Celebrate);
    // Listener, 500 ms interval and confetti frames.
    assert_eq!(active_subscriptions(&app), 3);

    for _ in 0..TOTAL_CANDLES {
        tick(&mut app);
    }
    assert!(app.state().candles().is_full());
    assert!(app.confetti().is_some_and(|field| !field.is_finished()));
    assert_eq!(active_subscriptions(&app), 2);

    let _ = app.update(Message::WindowCloseRequested(window::Id::unique()));
    assert_eq!(active_subscriptions(&app), 0);
}

#[test]
fn close_before_autoplay_ends_releases_the_interval() {
    let mut app = app_with(Flags::default());
    click(&mut app, card::Message::Celebrate);
    tick(&mut app);
    assert!(app.state().autoplay().is_running());

    let _ = app.update(Message::WindowCloseRequested(window::Id::unique()));
    assert_eq!(active_subscriptions(&app), 0);
}

