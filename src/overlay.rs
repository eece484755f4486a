//! Seams onto the platform services that mutate visual state.

use thiserror::Error;

/// Failure of a synchronous remote call into the overlay service.
///
/// The only error kind this crate deals in: callers log it and move on,
/// never abort, never retry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("overlay service call failed: {reason}")]
pub struct RemoteError {
    reason: String,
}

impl RemoteError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Platform user an overlay toggle acts on behalf of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub i32);

impl UserId {
    /// The system user, the default actor for global appearance changes.
    pub const SYSTEM: UserId = UserId(0);
}

/// Platform-wide light/dark appearance, distinct from overlay themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NightMode {
    Light,
    Dark,
}

/// Overlay-management service: enables or disables resource-replacement
/// bundles without touching the base packages.
pub trait OverlayService {
    fn set_enabled(&self, package: &str, enabled: bool, user: UserId) -> Result<(), RemoteError>;
}

/// Day/night mode switch for the base light and dark themes.
pub trait DayNightService {
    fn set_night_mode(&self, mode: NightMode);
}
