//models.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::routines::CYCLE;

/// Persisted record behind `workout_state.json`.
///
/// `last_workout` stays a raw JSON value so a hand-edited `null` or number
/// loads (and saves back) instead of failing the whole file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkoutState {
    #[serde(default = "default_last_workout")]
    pub last_workout: Value,
    /// Keys this program does not know about, written back untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_last_workout() -> Value {
    Value::from(CYCLE[CYCLE.len() - 1])
}

impl WorkoutState {
    pub fn new(last_workout: &str) -> Self {
        WorkoutState {
            last_workout: Value::from(last_workout),
            extra: Map::new(),
        }
    }

    /// Empty when the stored value is not a string.
    pub fn last_workout_name(&self) -> &str {
        self.last_workout.as_str().unwrap_or_default()
    }
}

impl Default for WorkoutState {
    fn default() -> Self {
        WorkoutState {
            last_workout: default_last_workout(),
            extra: Map::new(),
        }
    }
}
