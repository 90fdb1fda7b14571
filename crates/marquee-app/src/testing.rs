//! Test doubles for sessions.

use std::sync::Mutex;

use async_trait::async_trait;
use marquee_models::{ImageConfig, MovieSummary};
use marquee_tmdb::{TmdbError, TmdbResult};
use serde_json::json;

use crate::adapter::RowView;
use crate::source::MovieSource;
use crate::surface::{DisplaySurface, Notifier};

pub fn sample_config() -> ImageConfig {
    ImageConfig::new(
        "https://image.tmdb.org/t/p/",
        vec!["w92".into(), "w185".into(), "w342".into()],
        vec!["w300".into(), "w780".into()],
    )
    .unwrap()
}

/// API-shaped movie entry with poster and backdrop paths derived from the title.
pub fn movie_json(title: &str) -> serde_json::Value {
    json!({
        "title": title,
        "overview": format!("About {title}"),
        "poster_path": format!("/{title}.jpg"),
        "backdrop_path": format!("/{title}-backdrop.jpg"),
    })
}

pub enum ConfigOutcome {
    Ok(ImageConfig),
    NetworkDown,
    MissingSizes,
}

/// Source answering from fixed data and recording call order.
pub struct FakeSource {
    config: ConfigOutcome,
    movies: Vec<serde_json::Value>,
    calls: Mutex<Vec<&'static str>>,
}

impl FakeSource {
    pub fn new(config: ConfigOutcome, movies: Vec<serde_json::Value>) -> Self {
        Self {
            config,
            movies,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn now_playing_calls(&self) -> usize {
        self.calls().iter().filter(|c| **c == "now_playing").count()
    }
}

#[async_trait]
impl MovieSource for FakeSource {
    async fn configuration(&self) -> TmdbResult<ImageConfig> {
        self.calls.lock().unwrap().push("configuration");
        match &self.config {
            ConfigOutcome::Ok(config) => Ok(config.clone()),
            ConfigOutcome::NetworkDown => Err(TmdbError::api(503, "Service Unavailable")),
            ConfigOutcome::MissingSizes => {
                let source = serde_json::from_value::<Vec<String>>(json!(null)).unwrap_err();
                Err(TmdbError::Parse {
                    path: "images.poster_sizes".to_string(),
                    source,
                })
            }
        }
    }

    async fn now_playing(&self) -> TmdbResult<Vec<serde_json::Value>> {
        self.calls.lock().unwrap().push("now_playing");
        Ok(self.movies.clone())
    }
}

#[derive(Default)]
pub struct RecordingSurface {
    pub inserted: Vec<(usize, String)>,
    pub renders: Vec<Vec<RowView>>,
}

impl DisplaySurface for RecordingSurface {
    fn item_inserted(&mut self, index: usize, movie: &MovieSummary) {
        self.inserted.push((index, movie.title.clone()));
    }

    fn render(&mut self, rows: &[RowView]) {
        self.renders.push(rows.to_vec());
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
