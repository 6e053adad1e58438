//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

pub mod mock_gemini;

use async_trait::async_trait;
use philosphere::config::{Config, ServiceConfig};
use philosphere::content::{ContentFetchError, ContentSource};
use philosphere::model::{DetailFields, PhilosopherDetail, PhilosopherSummary};
use philosphere::ui::app::{App, UiCommand};
use std::path::PathBuf;
use tempfile::TempDir;
use tokio::sync::mpsc;

pub const IMAGE_BASE_URL: &str = "https://picsum.photos";

// -- Fixtures ------------------------------------------------------------------

pub fn summary(id: &str, name: &str) -> PhilosopherSummary {
    PhilosopherSummary {
        id: id.to_string(),
        name: name.to_string(),
        tagline: format!("The thought of {}", name),
        era: "Ancient Greece".to_string(),
        school: "Classical".to_string(),
    }
}

pub fn socrates() -> PhilosopherSummary {
    PhilosopherSummary {
        id: "1".to_string(),
        name: "Socrates".to_string(),
        tagline: "Know thyself".to_string(),
        era: "Ancient Greece".to_string(),
        school: "Classical".to_string(),
    }
}

pub fn plato() -> PhilosopherSummary {
    summary("2", "Plato")
}

pub fn philosophers(count: usize) -> Vec<PhilosopherSummary> {
    (1..=count)
        .map(|i| summary(&i.to_string(), &format!("Thinker {}", i)))
        .collect()
}

pub fn detail_fields() -> DetailFields {
    DetailFields {
        bio: "Born in Athens.\nExecuted in 399 BC.".to_string(),
        famous_works: vec!["Apology".to_string()],
        quotes: vec!["The unexamined life is not worth living.".to_string()],
        core_ideas: vec!["Socratic method".to_string()],
    }
}

pub fn detail_for(summary: PhilosopherSummary) -> PhilosopherDetail {
    PhilosopherDetail::merge(summary, detail_fields())
}

// -- App helpers ---------------------------------------------------------------

/// App wired to a command channel the test can read.
pub fn make_app() -> (App, mpsc::Receiver<UiCommand>) {
    let (tx, rx) = mpsc::channel(16);
    let mut app = App::new(IMAGE_BASE_URL);
    app.set_command_sender(tx);
    app.on_resize(80, 40);
    (app, rx)
}

/// Next command the app sent, if any.
pub fn next_command(rx: &mut mpsc::Receiver<UiCommand>) -> Option<UiCommand> {
    rx.try_recv().ok()
}

// -- Content sources -----------------------------------------------------------

/// Content source with fixed answers. `None` fails with an empty response.
pub struct StaticSource {
    pub list: Option<Vec<PhilosopherSummary>>,
    pub fields: Option<DetailFields>,
}

#[async_trait]
impl ContentSource for StaticSource {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn fetch_summary_list(&self) -> Result<Vec<PhilosopherSummary>, ContentFetchError> {
        self.list.clone().ok_or(ContentFetchError::EmptyResponse)
    }

    async fn fetch_detail(
        &self,
        summary: &PhilosopherSummary,
    ) -> Result<PhilosopherDetail, ContentFetchError> {
        let fields = self.fields.clone().ok_or(ContentFetchError::EmptyResponse)?;
        Ok(PhilosopherDetail::merge(summary.clone(), fields))
    }
}

// -- Config helpers ------------------------------------------------------------

/// Service config pointing at `base_url` with a fixed test key.
pub fn service_config(base_url: &str) -> ServiceConfig {
    ServiceConfig {
        base_url: base_url.to_string(),
        model: "gemini-test".to_string(),
        api_key: Some("test-key".to_string()),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    }
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn default_config() -> Config {
    Config::default()
}
