//! End-to-end flow over a file-backed store: theme switches, style
//! switches, and the logo view reacting to settings and tint changes.

use std::cell::RefCell;
use std::rc::Rc;

use theme_manager::logo::{LogoDisplay, LogoView};
use theme_manager::overlay::{DayNightService, NightMode, OverlayService, RemoteError, UserId};
use theme_manager::settings::{
    self, STATUS_BAR_LOGO, STATUS_BAR_LOGO_POSITION, STATUS_BAR_LOGO_STYLE, SettingsStore,
};
use theme_manager::styles::{StyleCategory, stock_style, update_style};
use theme_manager::themes::{THEME_CHOCO_X, THEME_SOLARIZED_DARK, ThemeSelector};
use theme_manager::tint::{Color, Rect, TintBroadcast, TintEvent};

#[derive(Default)]
struct RecordingOverlays {
    calls: RefCell<Vec<(String, bool)>>,
}

impl OverlayService for RecordingOverlays {
    fn set_enabled(&self, package: &str, enabled: bool, _user: UserId) -> Result<(), RemoteError> {
        self.calls.borrow_mut().push((package.to_string(), enabled));
        Ok(())
    }
}

#[derive(Default)]
struct RecordingDayNight {
    modes: RefCell<Vec<NightMode>>,
}

impl DayNightService for RecordingDayNight {
    fn set_night_mode(&self, mode: NightMode) {
        self.modes.borrow_mut().push(mode);
    }
}

#[test]
fn theme_switch_round_trips_through_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let overlays = Rc::new(RecordingOverlays::default());
    let day_night = Rc::new(RecordingDayNight::default());

    {
        let store = Rc::new(SettingsStore::open(&path));
        store.put_int(settings::SYSTEM_THEME_STYLE, THEME_SOLARIZED_DARK);

        let selector = ThemeSelector::new(
            overlays.clone(),
            day_night.clone(),
            store,
            UserId::SYSTEM,
        );
        selector.apply(THEME_CHOCO_X);
    }

    assert_eq!(
        *overlays.calls.borrow(),
        vec![
            ("com.android.theme.solarizeddark.system".to_string(), false),
            ("com.android.theme.solarizeddark.systemui".to_string(), false),
            ("com.android.theme.chocox.system".to_string(), true),
            ("com.android.theme.chocox.systemui".to_string(), true),
        ]
    );
    assert_eq!(*day_night.modes.borrow(), vec![NightMode::Dark]);

    // The selection survives a process restart.
    let reopened = SettingsStore::open(&path);
    assert_eq!(
        reopened.int(settings::SYSTEM_THEME_STYLE, 0),
        THEME_CHOCO_X
    );
}

#[test]
fn style_switch_and_reset_use_the_same_catalog() {
    let overlays = RecordingOverlays::default();

    update_style(&overlays, StyleCategory::QsTileIcon, UserId::SYSTEM, 2);
    stock_style(&overlays, StyleCategory::QsTileIcon, UserId::SYSTEM);

    let calls = overlays.calls.borrow();
    assert_eq!(
        calls[0],
        ("com.android.systemui.qstile.dualtonecircletrim".to_string(), true)
    );
    assert_eq!(calls.len(), 1 + StyleCategory::QsTileIcon.catalog().len());
    assert!(calls[1..].iter().all(|(_, enabled)| !enabled));
}

#[test]
fn logo_follows_settings_and_tint_across_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = Rc::new(SettingsStore::open(dir.path().join("settings.json")));
    let broadcast = TintBroadcast::new();

    let mut view = LogoView::new(store.clone(), Rect::new(400, 0, 24, 24));
    assert_eq!(view.display(), LogoDisplay::Hidden);
    view.attach(&broadcast);

    store.put_int(STATUS_BAR_LOGO, 1);
    store.put_int(STATUS_BAR_LOGO_POSITION, 2);
    store.put_int(STATUS_BAR_LOGO_STYLE, 2);
    view.process_events();
    assert_eq!(
        view.display(),
        LogoDisplay::Shown {
            drawable: "ic_apple_logo",
            tint: Color::WHITE,
        }
    );

    broadcast.send(TintEvent {
        area: Some(Rect::new(300, 0, 300, 24)),
        intensity: 1.0,
        tint: Color(0xff12_1212),
    });
    view.process_events();
    assert_eq!(
        view.display(),
        LogoDisplay::Shown {
            drawable: "ic_apple_logo",
            tint: Color(0xff12_1212),
        }
    );

    store.put_int(STATUS_BAR_LOGO_POSITION, 0);
    view.process_events();
    assert_eq!(view.display(), LogoDisplay::Hidden);
}
