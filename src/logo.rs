//! Status-bar logo widget state.

use std::rc::Rc;

use log::warn;
use thiserror::Error;

use crate::settings::{
    STATUS_BAR_LOGO, STATUS_BAR_LOGO_POSITION, STATUS_BAR_LOGO_STYLE, SettingsStore, SettingsWatch,
};
use crate::tint::{Color, Rect, TintBroadcast, TintWatch, resolve_tint};

/// Drawable catalog, selected by the persisted style index.
pub const LOGO_STYLES: [&str; 50] = [
    "ic_tenx_logo",
    "ic_android_logo",
    "ic_apple_logo",
    "ic_beats",
    "ic_biohazard",
    "ic_blackberry",
    "ic_blogger",
    "ic_bomb",
    "ic_brain",
    "ic_cake",
    "ic_cannabis",
    "ic_death_star",
    "ic_emoticon",
    "ic_emoticon_cool",
    "ic_emoticon_dead",
    "ic_emoticon_devil",
    "ic_emoticon_happy",
    "ic_emoticon_neutral",
    "ic_emoticon_poop",
    "ic_emoticon_sad",
    "ic_emoticon_tongue",
    "ic_fire",
    "ic_flask",
    "ic_gender_female",
    "ic_gender_male",
    "ic_gender_male_female",
    "ic_ghost",
    "ic_google",
    "ic_guitar_acoustic",
    "ic_guitar_electric",
    "ic_heart",
    "ic_human_female",
    "ic_human_male",
    "ic_human_male_female",
    "ic_incognito",
    "ic_ios_logo",
    "ic_linux",
    "ic_lock",
    "ic_music",
    "ic_ninja",
    "ic_pac_man",
    "ic_peace",
    "ic_robot",
    "ic_skull",
    "ic_smoking",
    "ic_wallet",
    "ic_windows",
    "ic_xbox",
    "ic_xbox_controller",
    "ic_yin_yang",
];

/// Lookup failure against the fixed logo catalog.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("logo style index {index} is outside the catalog (0..{len})")]
    OutOfRange { index: i32, len: usize },
}

/// Drawable name for a persisted style index, bounds-checked.
pub fn logo_drawable(index: i32) -> Result<&'static str, CatalogError> {
    usize::try_from(index)
        .ok()
        .and_then(|i| LOGO_STYLES.get(i))
        .copied()
        .ok_or(CatalogError::OutOfRange {
            index,
            len: LOGO_STYLES.len(),
        })
}

/// Logo placement decoded from the position setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogoPosition {
    #[default]
    Off,
    Left,
    Right,
}

impl LogoPosition {
    /// Decode the persisted value; anything out of range is `Off`.
    pub fn from_setting(value: i32) -> Self {
        match value {
            1 => LogoPosition::Left,
            2 => LogoPosition::Right,
            _ => LogoPosition::Off,
        }
    }
}

/// Derived display state, recomputed wholesale on every change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogoDisplay {
    /// No image, element hidden.
    #[default]
    Hidden,
    /// Tinted drawable to show.
    Shown {
        drawable: &'static str,
        tint: Color,
    },
}

/// Status-bar logo element: watches the three logo settings for its own
/// lifetime, takes tint events while attached, and exposes the derived
/// [`LogoDisplay`] for the host to render.
pub struct LogoView {
    settings: Rc<SettingsStore>,
    watch: SettingsWatch,
    tint_watch: Option<TintWatch>,
    bounds: Rect,
    enabled: bool,
    position: LogoPosition,
    style_index: i32,
    tint_color: Color,
    display: LogoDisplay,
}

impl LogoView {
    /// Create the view and read the current settings. The settings watch
    /// lives as long as the view itself, not the attach/detach cycle.
    pub fn new(settings: Rc<SettingsStore>, bounds: Rect) -> Self {
        let watch = settings.subscribe(&[
            STATUS_BAR_LOGO,
            STATUS_BAR_LOGO_POSITION,
            STATUS_BAR_LOGO_STYLE,
        ]);
        let mut view = Self {
            settings,
            watch,
            tint_watch: None,
            bounds,
            enabled: false,
            position: LogoPosition::Off,
            style_index: 0,
            tint_color: Color::WHITE,
            display: LogoDisplay::Hidden,
        };
        view.read_settings();
        view
    }

    /// Register for tint events and refresh. Attaching twice is a no-op.
    pub fn attach(&mut self, broadcast: &TintBroadcast) {
        if self.tint_watch.is_some() {
            return;
        }
        self.tint_watch = Some(broadcast.subscribe());
        self.read_settings();
    }

    /// Stop receiving tint events. The settings watch stays active.
    pub fn detach(&mut self) {
        self.tint_watch = None;
    }

    pub fn is_attached(&self) -> bool {
        self.tint_watch.is_some()
    }

    /// Current derived display state.
    pub fn display(&self) -> LogoDisplay {
        self.display
    }

    /// Reactor step: drain pending setting changes and tint events.
    ///
    /// A setting change re-reads all three settings fresh. A tint change
    /// updates the stored color but only refreshes the element right away
    /// when a right-positioned logo is showing; the left variant picks the
    /// color up on its next settings-driven refresh.
    pub fn process_events(&mut self) {
        let mut settings_changed = false;
        while self.watch.try_next().is_some() {
            settings_changed = true;
        }
        if settings_changed {
            self.read_settings();
        }

        let mut tint_changed = false;
        if let Some(tint_watch) = &self.tint_watch {
            while let Some(event) = tint_watch.try_next() {
                self.tint_color = resolve_tint(&event, self.bounds);
                tint_changed = true;
            }
        }
        if tint_changed && self.enabled && self.position == LogoPosition::Right {
            self.recompute();
        }
    }

    fn read_settings(&mut self) {
        self.enabled = self.settings.int(STATUS_BAR_LOGO, 0) == 1;
        self.position =
            LogoPosition::from_setting(self.settings.int(STATUS_BAR_LOGO_POSITION, 0));
        self.style_index = self.settings.int(STATUS_BAR_LOGO_STYLE, 0);
        self.recompute();
    }

    fn recompute(&mut self) {
        if !self.enabled || self.position == LogoPosition::Off {
            self.display = LogoDisplay::Hidden;
            return;
        }
        match logo_drawable(self.style_index) {
            Ok(drawable) => {
                self.display = LogoDisplay::Shown {
                    drawable,
                    tint: self.tint_color,
                };
            }
            Err(err) => {
                warn!("cannot resolve logo style: {err}");
                self.display = LogoDisplay::Hidden;
            }
        }
    }
}
