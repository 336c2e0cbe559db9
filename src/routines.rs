use anyhow::Result;
use chrono::{Local, NaiveDate};

use crate::store::StateStore;

pub const CYCLE: [&str; 5] = [
    "Legs and abs",
    "Chest and triceps",
    "Back and biceps",
    "Shoulders and abs",
    "Cardio",
];

pub const DEFAULT_ICON: &str = "⭐";

/// Returns the workout that follows `last_workout` in the cycle.
///
/// Anything outside the cycle (empty, misspelled, hand-edited) restarts the
/// rotation at the first entry.
pub fn next_workout(last_workout: &str) -> &'static str {
    match CYCLE.iter().position(|w| *w == last_workout) {
        Some(index) => CYCLE[(index + 1) % CYCLE.len()],
        None => CYCLE[0],
    }
}

pub fn workout_icon(name: &str) -> &'static str {
    match name {
        "Legs and abs" => "🦵",
        "Chest and triceps" => "💪",
        "Back and biceps" => "🏋",
        "Shoulders and abs" => "🤸",
        "Cardio" => "🏃",
        _ => DEFAULT_ICON,
    }
}

/// e.g. "Thursday, March 07, 2024"
pub fn date_label(date: NaiveDate) -> String {
    date.format("%A, %B %d, %Y").to_string()
}

pub fn render_text_on(store: &StateStore, date: NaiveDate) -> Result<(String, String)> {
    let state = store.load()?;
    let planned = next_workout(state.last_workout_name());
    Ok((date_label(date), planned.to_string()))
}

pub fn render_text(store: &StateStore) -> Result<(String, String)> {
    render_text_on(store, Local::now().date_naive())
}
