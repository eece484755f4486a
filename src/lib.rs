//! OS-customization glue: overlay theme selection and status-bar logo state.
//!
//! The crate toggles pre-packaged overlay bundles (themes, QS tile icon
//! styles, switch styles, corner radii) from persisted user settings and
//! derives the display state of a status-bar logo element. The platform
//! services that actually flip overlays and day/night mode sit behind the
//! traits in [`overlay`]; settings live in the JSON-backed store in
//! [`settings`]. Everything runs on the single thread that drains the
//! change channels.

pub mod logo;
pub mod overlay;
pub mod settings;
pub mod styles;
pub mod themes;
pub mod tint;
