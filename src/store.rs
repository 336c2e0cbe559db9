//! JSON-file persistence for the last completed workout.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::WorkoutState;

pub const STATE_FILE_NAME: &str = "workout_state.json";

/// Reads and writes [`WorkoutState`] at a single fixed path.
///
/// No locking: one process is expected to own the file at a time.
#[derive(Clone, Debug)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StateStore { path: path.into() }
    }

    pub fn beside_executable() -> Result<Self> {
        let exe = std::env::current_exe().context("Failed to locate the running executable")?;
        Ok(Self::new(exe.with_file_name(STATE_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the state, defaulting when the file does not exist yet.
    ///
    /// A file that exists but does not parse is an error; it is never
    /// silently replaced by the default.
    pub fn load(&self) -> Result<WorkoutState> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(WorkoutState::default()),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", self.path.display()))
            }
        };
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse {}", self.path.display()))
    }

    pub fn save(&self, state: &WorkoutState) -> Result<()> {
        let mut json = serde_json::to_string_pretty(state)?;
        json.push('\n');
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }

    pub fn set_last_workout(&self, last_workout: &str) -> Result<()> {
        let mut state = self.load()?;
        state.last_workout = last_workout.into();
        self.save(&state)?;
        log::info!("Recorded '{}' as last workout in {}", last_workout, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, StateStore) {
        let dir = TempDir::new().unwrap();
        let store = StateStore::new(dir.path().join(STATE_FILE_NAME));
        (dir, store)
    }

    #[test]
    fn missing_file_loads_default() {
        let (_dir, store) = temp_store();
        assert_eq!(store.load().unwrap().last_workout_name(), "Cardio");
        assert!(!store.path().exists());
    }

    #[test]
    fn save_then_load_keeps_last_workout() {
        let (_dir, store) = temp_store();
        let state = WorkoutState::new("Shoulders and abs");
        store.save(&state).unwrap();
        assert_eq!(store.load().unwrap(), state);
    }

    #[test]
    fn saved_file_is_pretty_printed_with_trailing_newline() {
        let (_dir, store) = temp_store();
        store.set_last_workout("Cardio").unwrap();
        let contents = fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents, "{\n  \"last_workout\": \"Cardio\"\n}\n");
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), "{ not json").unwrap();
        let err = store.load().unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn set_last_accepts_any_name_and_keeps_extra_keys() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), r#"{"last_workout": "Cardio", "gym": "downtown"}"#).unwrap();

        store.set_last_workout("Yoga").unwrap();

        let state = store.load().unwrap();
        assert_eq!(state.last_workout_name(), "Yoga");
        assert_eq!(state.extra["gym"], "downtown");
    }

    #[test]
    fn directory_in_place_of_file_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let store = StateStore::new(dir.path());
        let err = store.load().unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn non_string_last_workout_is_kept_on_save() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), r#"{"last_workout": 5, "gym": "downtown"}"#).unwrap();

        let state = store.load().unwrap();
        assert_eq!(state.last_workout, serde_json::Value::from(5));
        store.save(&state).unwrap();

        let contents = fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents, "{\n  \"last_workout\": 5,\n  \"gym\": \"downtown\"\n}\n");
    }
}
