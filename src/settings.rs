//! Persisted integer settings and change subscription.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use log::warn;
use serde::{Deserialize, Serialize};

/// File name used under the per-user config directory.
const SETTINGS_FILE: &str = "settings.json";

/// Currently selected overlay theme id.
pub const SYSTEM_THEME_STYLE: &str = "system_theme_style";
/// Whether the status-bar logo is shown (0 or 1).
pub const STATUS_BAR_LOGO: &str = "status_bar_logo";
/// Logo placement: 0 off, 1 left, 2 right.
pub const STATUS_BAR_LOGO_POSITION: &str = "status_bar_logo_position";
/// Index into the logo drawable catalog.
pub const STATUS_BAR_LOGO_STYLE: &str = "status_bar_logo_style";
/// Index into the QS tile icon style catalog.
pub const QS_TILE_ICON_STYLE: &str = "qs_tile_icon_style";
/// Index into the switch control style catalog.
pub const SWITCH_STYLE: &str = "switch_style";
/// Index into the UI corner-radius style catalog.
pub const UI_RADIUS_STYLE: &str = "ui_radius_style";

/// On-disk image of the store: a flat name -> value map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
struct StoredValues(BTreeMap<String, i32>);

/// Notification that a watched setting was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingChange {
    /// Key that was written.
    pub key: String,
}

struct Watcher {
    keys: Vec<String>,
    tx: Sender<SettingChange>,
}

/// Receiving end of a settings subscription.
///
/// Dropping the watch ends the subscription; the store prunes the dead
/// sender on the next write to a watched key.
#[derive(Debug)]
pub struct SettingsWatch {
    rx: Receiver<SettingChange>,
}

impl SettingsWatch {
    /// Next pending change, if any. Never blocks.
    pub fn try_next(&self) -> Option<SettingChange> {
        self.rx.try_recv().ok()
    }
}

/// Integer settings backed by a JSON file, with per-key change watches.
///
/// All access goes through `&self`; the store is meant to be shared via
/// `Rc` on the single thread that drives the components.
pub struct SettingsStore {
    path: Option<PathBuf>,
    values: RefCell<StoredValues>,
    watchers: RefCell<Vec<Watcher>>,
}

impl SettingsStore {
    /// Open a store at an explicit path, starting empty when the file is
    /// missing or unreadable.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
            Err(_) => StoredValues::default(),
        };
        Self {
            path: Some(path),
            values: RefCell::new(values),
            watchers: RefCell::new(Vec::new()),
        }
    }

    /// Open the per-user store, creating the config directory if needed.
    pub fn open_default() -> Result<Self> {
        Ok(Self::open(settings_path()?))
    }

    /// Volatile store with no backing file.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            values: RefCell::new(StoredValues::default()),
            watchers: RefCell::new(Vec::new()),
        }
    }

    /// Read a setting, falling back to `default` when unset.
    pub fn int(&self, key: &str, default: i32) -> i32 {
        self.values.borrow().0.get(key).copied().unwrap_or(default)
    }

    /// Write a setting, persist the store, and notify watchers of `key`.
    ///
    /// Persistence is best-effort: a failed save is logged and the
    /// in-memory value still changes.
    pub fn put_int(&self, key: &str, value: i32) {
        self.values.borrow_mut().0.insert(key.to_string(), value);
        if let Err(err) = self.save() {
            warn!("failed to persist settings: {err:#}");
        }
        self.notify(key);
    }

    /// Watch the named keys; every write to one of them produces a
    /// `SettingChange` on the returned watch.
    pub fn subscribe(&self, keys: &[&str]) -> SettingsWatch {
        let (tx, rx) = mpsc::channel();
        self.watchers.borrow_mut().push(Watcher {
            keys: keys.iter().map(|key| (*key).to_string()).collect(),
            tx,
        });
        SettingsWatch { rx }
    }

    fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let contents = serde_json::to_string_pretty(&*self.values.borrow())?;
        fs::write(path, contents)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }

    fn notify(&self, key: &str) {
        // Drop watchers whose receiver has gone away.
        self.watchers.borrow_mut().retain(|watcher| {
            if !watcher.keys.iter().any(|watched| watched == key) {
                return true;
            }
            watcher
                .tx
                .send(SettingChange {
                    key: key.to_string(),
                })
                .is_ok()
        });
    }
}

/// Build the settings path and ensure the directory exists.
fn settings_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("dev", "theme_manager", "theme_manager")
        .ok_or_else(|| anyhow!("cannot determine config directory"))?;
    let config_dir = proj_dirs.config_dir();
    fs::create_dir_all(config_dir)?;
    Ok(config_dir.join(SETTINGS_FILE))
}
