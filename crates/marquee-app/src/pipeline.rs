//! Session sequencing: configuration, then movies, then render.

use marquee_models::{ImageConfig, MovieSummary, Orientation};
use tracing::{info_span, Instrument};

use crate::adapter::{open_detail, DetailView, RowView};
use crate::config::AppSettings;
use crate::error::AppError;
use crate::fetcher::MovieFeed;
use crate::logging::report_failure;
use crate::resolver::resolve_configuration;
use crate::source::MovieSource;
use crate::surface::{DisplaySurface, Notifier};

/// State a session ended in.
///
/// A failed session keeps whatever it loaded before the failure.
#[derive(Debug)]
pub struct Session {
    feed: Option<MovieFeed>,
    orientation: Orientation,
    failure: Option<AppError>,
}

impl Session {
    /// Image configuration, if it resolved.
    pub fn config(&self) -> Option<&ImageConfig> {
        self.feed.as_ref().map(MovieFeed::config)
    }

    /// Movies loaded so far.
    pub fn movies(&self) -> &[MovieSummary] {
        self.feed
            .as_ref()
            .map(|feed| feed.movies().as_slice())
            .unwrap_or_default()
    }

    pub fn failure(&self) -> Option<&AppError> {
        self.failure.as_ref()
    }

    pub fn is_complete(&self) -> bool {
        self.feed.is_some() && self.failure.is_none()
    }

    /// Rows for the loaded movies; empty before the configuration resolved.
    pub fn rows(&self) -> Vec<RowView> {
        self.feed
            .as_ref()
            .map(|feed| feed.rows(self.orientation))
            .unwrap_or_default()
    }

    /// Detail view for the row at `position`.
    pub fn open_detail(&self, position: usize) -> Option<DetailView> {
        self.feed
            .as_ref()
            .and_then(|feed| open_detail(feed.movies(), position))
    }
}

/// Run one session.
///
/// The now-playing list is requested exactly once, and only after the
/// configuration resolved. Failures are reported through
/// [`report_failure`] and end the session without retry.
pub async fn run_session<S, D, N>(
    source: &S,
    surface: &mut D,
    notifier: &N,
    settings: &AppSettings,
) -> Session
where
    S: MovieSource + ?Sized,
    D: DisplaySurface + ?Sized,
    N: Notifier + ?Sized,
{
    let span = info_span!("session", orientation = %settings.orientation);
    async move {
        let config = match resolve_configuration(source).await {
            Ok(config) => config,
            Err(e) => {
                report_failure(&e, settings.alert_user, notifier);
                return Session {
                    feed: None,
                    orientation: settings.orientation,
                    failure: Some(e),
                };
            }
        };

        let mut feed = MovieFeed::new(config);
        let failure = feed.fetch_now_playing(source, surface).await.err();
        if let Some(e) = &failure {
            report_failure(e, settings.alert_user, notifier);
        }

        let session = Session {
            feed: Some(feed),
            orientation: settings.orientation,
            failure,
        };
        surface.render(&session.rows());
        session
    }
    .instrument(span)
    .await
}
