//! Tracing setup and failure reporting.

use std::error::Error;

use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::AppError;
use crate::surface::Notifier;

/// Install the global tracing subscriber.
///
/// JSON output when `LOG_FORMAT=json`, coloured text otherwise. Both go to
/// stderr; stdout carries the rendered rows. Filtering follows `RUST_LOG`
/// with `marquee=info` added.
pub fn init_tracing() {
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let mut env_filter = EnvFilter::from_default_env();
    for directive in ["marquee=info", "marquee_app=info", "marquee_tmdb=info"] {
        if let Ok(directive) = directive.parse() {
            env_filter = env_filter.add_directive(directive);
        }
    }

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .with(env_filter)
            .init();
    }
}

/// Render an error and its `source()` chain as `outer: cause: root`.
///
/// A cause already included in the text so far is skipped.
pub fn error_chain(err: &(dyn Error + 'static)) -> String {
    let mut chain = err.to_string();
    let mut cause = err.source();
    while let Some(inner) = cause {
        let message = inner.to_string();
        if !chain.contains(&message) {
            chain.push_str(": ");
            chain.push_str(&message);
        }
        cause = inner.source();
    }
    chain
}

/// Log a session failure and, if asked, tell the user.
pub fn report_failure<N>(err: &AppError, alert_user: bool, notifier: &N)
where
    N: Notifier + ?Sized,
{
    error!(stage = %err.stage(), error = %error_chain(err), "{}", err.message());

    if alert_user {
        notifier.notify(err.message());
    }
}
