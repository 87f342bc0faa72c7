mod types;
pub use types::{FromPrefValue, PrefType, PrefValue};

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use serde_json::Value;

use crate::errors::PrefsError;

use types::mismatch;

/// Keys owned by the session connection settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefKey {
    SessionIsRemote,
    SessionRemoteHost,
    SessionRemotePort,
    SessionRemoteAuth,
    SessionRemoteUsername,
    SessionRemotePassword,
}

impl PrefKey {
    pub const ALL: [PrefKey; 6] = [
        PrefKey::SessionIsRemote,
        PrefKey::SessionRemoteHost,
        PrefKey::SessionRemotePort,
        PrefKey::SessionRemoteAuth,
        PrefKey::SessionRemoteUsername,
        PrefKey::SessionRemotePassword,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrefKey::SessionIsRemote => "session-is-remote",
            PrefKey::SessionRemoteHost => "session-remote-host",
            PrefKey::SessionRemotePort => "session-remote-port",
            PrefKey::SessionRemoteAuth => "session-remote-auth",
            PrefKey::SessionRemoteUsername => "session-remote-username",
            PrefKey::SessionRemotePassword => "session-remote-password",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }

    pub fn pref_type(&self) -> PrefType {
        match self {
            PrefKey::SessionIsRemote | PrefKey::SessionRemoteAuth => PrefType::Bool,
            PrefKey::SessionRemotePort => PrefType::Int,
            PrefKey::SessionRemoteHost
            | PrefKey::SessionRemoteUsername
            | PrefKey::SessionRemotePassword => PrefType::Str,
        }
    }

    pub fn default_value(&self) -> PrefValue {
        match self {
            PrefKey::SessionIsRemote | PrefKey::SessionRemoteAuth => PrefValue::Bool(false),
            PrefKey::SessionRemoteHost => PrefValue::from("localhost"),
            PrefKey::SessionRemotePort => PrefValue::Int(9091),
            PrefKey::SessionRemoteUsername | PrefKey::SessionRemotePassword => {
                PrefValue::from("")
            }
        }
    }
}

/// Flat key/value preference store backed by a JSON file.
///
/// Known keys are always present and always hold a value of their declared
/// type. Entries this store does not know about are kept as-is and written
/// back on save.
#[derive(Debug, Clone)]
pub struct Prefs {
    values: IndexMap<PrefKey, PrefValue>,
    foreign: IndexMap<String, Value>,
    path: Option<PathBuf>,
    dirty: bool,
}

impl Default for Prefs {
    fn default() -> Self {
        Self::new()
    }
}

impl Prefs {
    pub fn new() -> Self {
        Self {
            values: PrefKey::ALL
                .into_iter()
                .map(|key| (key, key.default_value()))
                .collect(),
            foreign: IndexMap::new(),
            path: None,
            dirty: false,
        }
    }

    /// Loads preferences from `path`. A missing file yields the defaults,
    /// and the path is remembered for the next `save`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PrefsError> {
        let path = path.as_ref();
        let mut prefs = Self::new();
        prefs.path = Some(path.to_path_buf());

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No preference file at {}, using defaults", path.display());
                return Ok(prefs);
            }
            Err(e) => return Err(PrefsError::Io(e)),
        };

        let entries: IndexMap<String, Value> = serde_json::from_str(&content)?;
        for (name, raw) in entries {
            let Some(key) = PrefKey::from_name(&name) else {
                prefs.foreign.insert(name, raw);
                continue;
            };

            match PrefValue::from_json(&raw) {
                Some(value) if value.pref_type() == key.pref_type() => {
                    prefs.values.insert(key, value);
                }
                _ => {
                    log::warn!(
                        "Ignoring preference '{}' = {}: expected {}",
                        name,
                        raw,
                        key.pref_type()
                    );
                }
            }
        }

        log::debug!("Loaded preferences from {}", path.display());
        Ok(prefs)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn get<T: FromPrefValue>(&self, key: PrefKey) -> Result<T, PrefsError> {
        let value = self
            .values
            .get(&key)
            .cloned()
            .unwrap_or_else(|| key.default_value());
        T::from_pref_value(&value)
            .ok_or_else(|| mismatch(key.as_str(), T::TYPE, value.pref_type()))
    }

    /// Stores `value` under `key`. Returns `true` when the stored value
    /// changed. A value of the wrong type leaves the store untouched.
    pub fn set(&mut self, key: PrefKey, value: impl Into<PrefValue>) -> Result<bool, PrefsError> {
        let value = value.into();
        if value.pref_type() != key.pref_type() {
            return Err(mismatch(key.as_str(), key.pref_type(), value.pref_type()));
        }

        let changed = self.values.get(&key) != Some(&value);
        if changed {
            if key == PrefKey::SessionRemotePassword {
                log::debug!("Preference '{}' changed", key.as_str());
            } else {
                log::debug!("Preference '{}' set to {:?}", key.as_str(), value);
            }
            self.values.insert(key, value);
            self.dirty = true;
        }
        Ok(changed)
    }

    /// Untyped lookup by wire name, covering keys this store does not model.
    pub fn get_raw(&self, name: &str) -> Option<Value> {
        match PrefKey::from_name(name) {
            Some(key) => self.values.get(&key).and_then(|v| serde_json::to_value(v).ok()),
            None => self.foreign.get(name).cloned(),
        }
    }

    pub fn save(&mut self) -> Result<(), PrefsError> {
        match self.path.clone() {
            Some(path) => self.save_to(path),
            None => Err(PrefsError::Io(std::io::Error::new(
                ErrorKind::NotFound,
                "preference store has no backing file",
            ))),
        }
    }

    /// Writes the store as pretty JSON through a temporary sibling file.
    pub fn save_to(&mut self, path: impl AsRef<Path>) -> Result<(), PrefsError> {
        let path = path.as_ref();
        let mut document: IndexMap<&str, Value> = IndexMap::new();
        for (key, value) in &self.values {
            document.insert(key.as_str(), serde_json::to_value(value)?);
        }
        for (name, value) in &self.foreign {
            document.insert(name.as_str(), value.clone());
        }

        let content = serde_json::to_string_pretty(&document)?;
        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        if let Err(e) = fs::write(&tmp, content).and_then(|_| fs::rename(&tmp, path)) {
            if let Err(cleanup) = fs::remove_file(&tmp) {
                log::warn!("Error removing {}: {}", tmp.display(), cleanup);
            }
            return Err(PrefsError::Io(e));
        }

        log::info!("Saved preferences to {}", path.display());
        self.path = Some(path.to_path_buf());
        self.dirty = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn new_store_holds_defaults() {
        let prefs = Prefs::new();
        assert!(!prefs.get::<bool>(PrefKey::SessionIsRemote).unwrap());
        assert_eq!(prefs.get::<String>(PrefKey::SessionRemoteHost).unwrap(), "localhost");
        assert_eq!(prefs.get::<i64>(PrefKey::SessionRemotePort).unwrap(), 9091);
        assert!(!prefs.is_dirty());
    }

    #[test]
    fn get_with_wrong_type_fails() {
        let prefs = Prefs::new();
        let err = prefs.get::<i64>(PrefKey::SessionRemoteHost).unwrap_err();
        assert!(matches!(
            err,
            PrefsError::TypeMismatch { expected: PrefType::Int, found: PrefType::Str, .. }
        ));
    }

    #[test]
    fn set_rejects_wrong_type_and_keeps_value() {
        let mut prefs = Prefs::new();
        assert!(prefs.set(PrefKey::SessionRemotePort, "9092").is_err());
        assert_eq!(prefs.get::<i64>(PrefKey::SessionRemotePort).unwrap(), 9091);
        assert!(!prefs.is_dirty());
    }

    #[test]
    fn set_reports_changes() {
        let mut prefs = Prefs::new();
        assert!(!prefs.set(PrefKey::SessionRemotePort, 9091_i64).unwrap());
        assert!(prefs.set(PrefKey::SessionRemotePort, 51413_i64).unwrap());
        assert!(prefs.is_dirty());
    }

    #[test]
    fn missing_file_loads_defaults_and_remembers_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        let prefs = Prefs::load(&path).unwrap();
        assert_eq!(prefs.path(), Some(path.as_path()));
        assert_eq!(prefs.get::<i64>(PrefKey::SessionRemotePort).unwrap(), 9091);
    }

    #[test]
    fn load_discards_mistyped_known_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(
            &path,
            json!({
                "session-remote-port": "not a number",
                "session-remote-host": "seedbox.lan",
                "session-is-remote": true
            })
            .to_string(),
        )
        .unwrap();

        let prefs = Prefs::load(&path).unwrap();
        assert_eq!(prefs.get::<i64>(PrefKey::SessionRemotePort).unwrap(), 9091);
        assert_eq!(prefs.get::<String>(PrefKey::SessionRemoteHost).unwrap(), "seedbox.lan");
        assert!(prefs.get::<bool>(PrefKey::SessionIsRemote).unwrap());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(Prefs::load(&path), Err(PrefsError::Json(_))));
    }

    #[test]
    fn save_preserves_foreign_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(
            &path,
            json!({
                "download-dir": "/srv/torrents",
                "filter-trackers": ["a", "b"],
                "session-remote-auth": false
            })
            .to_string(),
        )
        .unwrap();

        let mut prefs = Prefs::load(&path).unwrap();
        prefs.set(PrefKey::SessionRemoteAuth, true).unwrap();
        prefs.save().unwrap();
        assert!(!prefs.is_dirty());

        let reloaded = Prefs::load(&path).unwrap();
        assert!(reloaded.get::<bool>(PrefKey::SessionRemoteAuth).unwrap());
        assert_eq!(reloaded.get_raw("download-dir"), Some(json!("/srv/torrents")));
        assert_eq!(reloaded.get_raw("filter-trackers"), Some(json!(["a", "b"])));
    }

    #[test]
    fn save_keeps_insertion_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"{"zeta": 1, "alpha": 2}"#).unwrap();

        let mut prefs = Prefs::load(&path).unwrap();
        prefs.save().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let position = |name: &str| content.find(name).unwrap();
        assert!(position("session-is-remote") < position("session-remote-password"));
        assert!(position("session-remote-password") < position("zeta"));
        assert!(position("zeta") < position("alpha"));
    }

    #[test]
    fn failed_save_removes_temporary_file() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("prefs.json");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("occupied"), "").unwrap();

        let mut prefs = Prefs::new();
        prefs.set(PrefKey::SessionIsRemote, true).unwrap();
        assert!(matches!(prefs.save_to(&target), Err(PrefsError::Io(_))));
        assert!(!dir.path().join("prefs.json.tmp").exists());
        assert!(prefs.is_dirty());
    }

    #[test]
    fn save_without_path_fails() {
        let mut prefs = Prefs::new();
        assert!(matches!(prefs.save(), Err(PrefsError::Io(_))));
    }
}
