//! Theme catalog and overlay theme selection.

use std::rc::Rc;

use log::{debug, warn};

use crate::overlay::{DayNightService, NightMode, OverlayService, UserId};
use crate::settings::{SYSTEM_THEME_STYLE, SettingsStore};

pub const THEME_LIGHT: i32 = 1;
pub const THEME_DARK: i32 = 2;
pub const THEME_SOLARIZED_DARK: i32 = 3;
pub const THEME_BAKED_GREEN: i32 = 4;
pub const THEME_CHOCO_X: i32 = 5;
pub const THEME_PITCH_BLACK: i32 = 6;
pub const THEME_DARK_GREY: i32 = 7;
pub const THEME_MATERIAL_OCEAN: i32 = 8;

/// Overlay pair backing one theme: framework scope plus system-UI scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackagePair {
    pub system: &'static str,
    pub system_ui: &'static str,
}

impl PackagePair {
    /// Both packages in toggle order.
    pub fn packages(&self) -> [&'static str; 2] {
        [self.system, self.system_ui]
    }
}

const SOLARIZED_DARK: PackagePair = PackagePair {
    system: "com.android.theme.solarizeddark.system",
    system_ui: "com.android.theme.solarizeddark.systemui",
};

const BAKED_GREEN: PackagePair = PackagePair {
    system: "com.android.theme.bakedgreen.system",
    system_ui: "com.android.theme.bakedgreen.systemui",
};

const CHOCO_X: PackagePair = PackagePair {
    system: "com.android.theme.chocox.system",
    system_ui: "com.android.theme.chocox.systemui",
};

const PITCH_BLACK: PackagePair = PackagePair {
    system: "com.android.theme.pitchblack.system",
    system_ui: "com.android.theme.pitchblack.systemui",
};

const DARK_GREY: PackagePair = PackagePair {
    system: "com.android.theme.darkgrey.system",
    system_ui: "com.android.theme.darkgrey.systemui",
};

const MATERIAL_OCEAN: PackagePair = PackagePair {
    system: "com.android.theme.materialocean.system",
    system_ui: "com.android.theme.materialocean.systemui",
};

/// Overlay pair for a theme id.
///
/// `None` for the light/dark base themes (they switch day/night mode
/// instead of overlays) and for unknown ids.
pub fn resolve_packages(theme: i32) -> Option<&'static PackagePair> {
    match theme {
        THEME_SOLARIZED_DARK => Some(&SOLARIZED_DARK),
        THEME_BAKED_GREEN => Some(&BAKED_GREEN),
        THEME_CHOCO_X => Some(&CHOCO_X),
        THEME_PITCH_BLACK => Some(&PITCH_BLACK),
        THEME_DARK_GREY => Some(&DARK_GREY),
        THEME_MATERIAL_OCEAN => Some(&MATERIAL_OCEAN),
        _ => None,
    }
}

/// Ordered side effects for one theme change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePlan {
    /// Previous theme's packages, disabled first.
    pub disable: Vec<&'static str>,
    /// Day/night mode set between the disables and the enables.
    pub night_mode: NightMode,
    /// New theme's packages, enabled after the mode switch.
    pub enable: Vec<&'static str>,
    /// Theme id persisted once the toggles have been issued.
    pub persist: i32,
}

/// Pure decision step: what has to happen to go from `current` to
/// `desired`. `None` when the selection is unchanged.
pub fn plan_transition(current: i32, desired: i32) -> Option<ThemePlan> {
    if desired == current {
        return None;
    }
    let disable = resolve_packages(current)
        .map(|pair| pair.packages().to_vec())
        .unwrap_or_default();
    let enable = resolve_packages(desired)
        .map(|pair| pair.packages().to_vec())
        .unwrap_or_default();
    let night_mode = if desired == THEME_LIGHT {
        NightMode::Light
    } else {
        NightMode::Dark
    };
    Some(ThemePlan {
        disable,
        night_mode,
        enable,
        persist: desired,
    })
}

/// Applies theme selections against the platform services and persists
/// the choice. All I/O lives here; the decision itself is
/// [`plan_transition`].
pub struct ThemeSelector {
    overlays: Rc<dyn OverlayService>,
    day_night: Rc<dyn DayNightService>,
    settings: Rc<SettingsStore>,
    user: UserId,
}

impl ThemeSelector {
    pub fn new(
        overlays: Rc<dyn OverlayService>,
        day_night: Rc<dyn DayNightService>,
        settings: Rc<SettingsStore>,
        user: UserId,
    ) -> Self {
        Self {
            overlays,
            day_night,
            settings,
            user,
        }
    }

    /// Switch to `theme`: disable the previous overlay pair, set
    /// day/night mode, enable the new pair, persist the id. A repeated
    /// selection is a no-op.
    pub fn apply(&self, theme: i32) {
        let current = self.settings.int(SYSTEM_THEME_STYLE, 0);
        let Some(plan) = plan_transition(current, theme) else {
            return;
        };
        set_enabled(self.overlays.as_ref(), &plan.disable, false, self.user);
        self.day_night.set_night_mode(plan.night_mode);
        set_enabled(self.overlays.as_ref(), &plan.enable, true, self.user);
        self.settings.put_int(SYSTEM_THEME_STYLE, plan.persist);
        debug!("switched theme {current} -> {theme}");
    }
}

/// Toggle each package in a possibly-empty list. Individual failures are
/// logged and skipped; the remaining packages are still toggled.
pub fn set_enabled(service: &dyn OverlayService, packages: &[&str], enabled: bool, user: UserId) {
    for package in packages {
        if let Err(err) = service.set_enabled(package, enabled, user) {
            warn!("cannot toggle {package}: {err}");
        }
    }
}
