//! Fitness Tracker Library
//!
//! In-memory state core for workouts, nutrition, body progress and coaching
//! recommendations. This library exposes the modules for use in the binary
//! and in tests.

pub mod actions;
pub mod catalog;
pub mod clock;
pub mod coach;
pub mod config;
pub mod seed;
pub mod state;
pub mod stores;
pub mod summary;
