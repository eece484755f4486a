//! Style switches for QS tile icons, switch controls, and corner radii.

use log::warn;

use crate::overlay::{OverlayService, UserId};
use crate::settings::{QS_TILE_ICON_STYLE, SWITCH_STYLE, UI_RADIUS_STYLE};

const QS_TILE_ICON_STYLES: &[&str] = &[
    "com.android.systemui.qstile.default",
    "com.android.systemui.qstile.circletrim",
    "com.android.systemui.qstile.dualtonecircletrim",
    "com.android.systemui.qstile.squircletrim",
    "com.android.systemui.qstile.wavey",
    "com.android.systemui.qstile.pokesign",
    "com.android.systemui.qstile.ninja",
    "com.android.systemui.qstile.dottedcircle",
    "com.android.systemui.qstile.attemptmountain",
    "com.android.systemui.qstile.squaremedo",
    "com.android.systemui.qstile.inkdrop",
    "com.android.systemui.qstile.cookie",
    "com.android.systemui.qstile.circleoutline",
];

const SWITCH_STYLES: &[&str] = &[
    "com.android.system.switch.oneplus",
    "com.android.system.switch.stock",
    "com.android.system.switch.md2",
    "com.android.system.switch.telegram",
    "com.android.system.switch.negative",
    "com.android.system.switch.retro",
];

const UI_RADIUS_STYLES: &[&str] = &[
    "com.android.theme.uiradius.default",
    "com.android.theme.uiradius.rounded",
    "com.android.theme.uiradius.extrarounded",
    "com.android.theme.uiradius.sharp",
    "com.android.theme.uiradius.teardrop",
];

/// One independently themable category of overlay styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleCategory {
    QsTileIcon,
    SwitchControl,
    UiRadius,
}

impl StyleCategory {
    pub const ALL: [StyleCategory; 3] = [
        StyleCategory::QsTileIcon,
        StyleCategory::SwitchControl,
        StyleCategory::UiRadius,
    ];

    /// Ordered overlay catalog; the persisted index selects a position.
    pub fn catalog(&self) -> &'static [&'static str] {
        match self {
            StyleCategory::QsTileIcon => QS_TILE_ICON_STYLES,
            StyleCategory::SwitchControl => SWITCH_STYLES,
            StyleCategory::UiRadius => UI_RADIUS_STYLES,
        }
    }

    /// Index that means "stock, no overlay". Switch controls reserve
    /// slot 1; the other categories use 0.
    pub fn stock_index(&self) -> i32 {
        match self {
            StyleCategory::SwitchControl => 1,
            _ => 0,
        }
    }

    /// Settings key holding the persisted index for this category.
    pub fn setting_key(&self) -> &'static str {
        match self {
            StyleCategory::QsTileIcon => QS_TILE_ICON_STYLE,
            StyleCategory::SwitchControl => SWITCH_STYLE,
            StyleCategory::UiRadius => UI_RADIUS_STYLE,
        }
    }
}

/// Apply a category's persisted index: the stock index disables the whole
/// catalog, any other index enables exactly that entry.
///
/// Enabling a new index leaves a previously enabled different entry
/// untouched; only the stock index clears the category. An out-of-range
/// index is logged and ignored.
pub fn update_style(
    service: &dyn OverlayService,
    category: StyleCategory,
    user: UserId,
    index: i32,
) {
    if index == category.stock_index() {
        stock_style(service, category, user);
        return;
    }
    let Some(package) = usize::try_from(index)
        .ok()
        .and_then(|i| category.catalog().get(i))
    else {
        warn!("style index {index} out of range for {category:?}");
        return;
    };
    if let Err(err) = service.set_enabled(package, true, user) {
        warn!("cannot toggle {package}: {err}");
    }
}

/// Return a category to stock by disabling every catalog entry,
/// regardless of which one was enabled. Failures are logged and skipped.
pub fn stock_style(service: &dyn OverlayService, category: StyleCategory, user: UserId) {
    for package in category.catalog() {
        if let Err(err) = service.set_enabled(package, false, user) {
            warn!("cannot toggle {package}: {err}");
        }
    }
}
