//! Usage: Persisted settings file (the single inactivity-timeout key).
//!
//! The timeout is stored as a base-10 integer string under
//! `inactivity_timeout_minutes` in `settings.json`. Anything that cannot be
//! read back as a non-negative integer — a missing or unreadable file,
//! malformed JSON, a missing key, garbage text — reads as *absent*, never as
//! an error; the screen then falls back to its built-in default.

use crate::app_paths;
use crate::screen::bridge::SettingsStorePort;
use crate::shared::fs;
use std::path::PathBuf;

pub(crate) const TIMEOUT_KEY: &str = "inactivity_timeout_minutes";
const SETTINGS_FILE_NAME: &str = "settings.json";

pub(crate) struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub(crate) fn for_app(app: &tauri::AppHandle) -> Result<Self, String> {
        Ok(Self {
            path: app_paths::app_data_dir(app)?.join(SETTINGS_FILE_NAME),
        })
    }

    #[cfg(test)]
    pub(crate) fn at(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_document(&self) -> Option<serde_json::Map<String, serde_json::Value>> {
        let content = match fs::read_optional_string(&self.path) {
            Ok(Some(content)) => content,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!("settings file unreadable, treated as absent: {err}");
                return None;
            }
        };

        match serde_json::from_str::<serde_json::Value>(&content) {
            Ok(serde_json::Value::Object(map)) => Some(map),
            Ok(_) => {
                tracing::warn!("settings file is not a JSON object, treated as absent");
                None
            }
            Err(err) => {
                tracing::warn!("settings file malformed, treated as absent: {err}");
                None
            }
        }
    }
}

impl SettingsStorePort for SettingsStore {
    fn read_timeout(&self) -> Option<u32> {
        self.read_document()?
            .get(TIMEOUT_KEY)
            .and_then(parse_timeout_value)
    }

    /// Unconditional overwrite of the timeout key. Unrelated keys already in
    /// the file are preserved; storage failures propagate to the caller.
    fn write_timeout(&self, minutes: u32) -> Result<(), String> {
        let mut doc = self.read_document().unwrap_or_default();
        doc.insert(
            TIMEOUT_KEY.to_string(),
            serde_json::Value::String(minutes.to_string()),
        );

        let content = serde_json::to_vec_pretty(&serde_json::Value::Object(doc))
            .map_err(|e| format!("failed to serialize settings: {e}"))?;
        fs::write_file_atomic(&self.path, &content)
    }
}

fn parse_timeout_value(value: &serde_json::Value) -> Option<u32> {
    match value {
        serde_json::Value::String(text) => text.trim().parse::<u32>().ok(),
        // Older builds wrote the value as a bare number.
        serde_json::Value::Number(number) => {
            number.as_u64().and_then(|v| u32::try_from(v).ok())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::fs::testutil::unique_tmp_dir;

    fn store_in(dir: &std::path::Path) -> SettingsStore {
        SettingsStore::at(dir.join(SETTINGS_FILE_NAME))
    }

    #[test]
    fn missing_file_reads_as_absent() {
        let dir = unique_tmp_dir();
        assert_eq!(store_in(&dir).read_timeout(), None);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn write_then_read_round_trips_as_a_string_key() {
        let dir = unique_tmp_dir();
        let store = store_in(&dir);

        store.write_timeout(17).expect("write");
        assert_eq!(store.read_timeout(), Some(17));

        let raw = std::fs::read_to_string(dir.join(SETTINGS_FILE_NAME)).expect("read raw");
        let doc: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
        assert_eq!(
            doc.get(TIMEOUT_KEY),
            Some(&serde_json::Value::String("17".to_string()))
        );
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn garbage_value_reads_as_absent() {
        let dir = unique_tmp_dir();
        let store = store_in(&dir);

        for raw in [
            r#"{"inactivity_timeout_minutes":"abc"}"#,
            r#"{"inactivity_timeout_minutes":"-3"}"#,
            r#"{"inactivity_timeout_minutes":""}"#,
            r#"{"inactivity_timeout_minutes":4.5}"#,
            r#"{"inactivity_timeout_minutes":null}"#,
        ] {
            std::fs::write(dir.join(SETTINGS_FILE_NAME), raw).expect("seed file");
            assert_eq!(store.read_timeout(), None, "raw: {raw}");
        }
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn malformed_file_reads_as_absent() {
        let dir = unique_tmp_dir();
        let store = store_in(&dir);

        std::fs::write(dir.join(SETTINGS_FILE_NAME), "abc").expect("seed file");
        assert_eq!(store.read_timeout(), None);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn numeric_value_from_older_builds_still_reads() {
        let dir = unique_tmp_dir();
        let store = store_in(&dir);

        std::fs::write(
            dir.join(SETTINGS_FILE_NAME),
            r#"{"inactivity_timeout_minutes":42}"#,
        )
        .expect("seed file");
        assert_eq!(store.read_timeout(), Some(42));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn write_preserves_unrelated_keys() {
        let dir = unique_tmp_dir();
        let store = store_in(&dir);

        std::fs::write(dir.join(SETTINGS_FILE_NAME), r#"{"theme":"dark"}"#).expect("seed file");
        store.write_timeout(8).expect("write");

        let raw = std::fs::read_to_string(dir.join(SETTINGS_FILE_NAME)).expect("read raw");
        let doc: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
        assert_eq!(doc.get("theme").and_then(|v| v.as_str()), Some("dark"));
        assert_eq!(store.read_timeout(), Some(8));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn write_failure_propagates() {
        let dir = unique_tmp_dir();
        // A directory where the file should be makes the final rename fail.
        std::fs::create_dir_all(dir.join(SETTINGS_FILE_NAME)).expect("block path");

        let result = store_in(&dir).write_timeout(5);

        assert!(result.is_err());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
