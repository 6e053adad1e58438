//! PhiloSphere: a terminal explorer for history's philosophers.
//!
//! The list of philosophers and every biography are generated on demand by
//! the Gemini API under a fixed JSON schema. Nothing is stored.

pub mod cli;
pub mod config;
pub mod content;
pub mod logging;
pub mod model;
pub mod ui;
