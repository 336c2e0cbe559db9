//! Rotating workout schedule for an always-on display.

pub mod cli;
pub mod display;
pub mod models;
pub mod routines;
pub mod store;
