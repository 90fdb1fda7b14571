//! Now-playing session for the Marquee client.
//!
//! A session resolves the image configuration, then fetches the now-playing
//! list, then renders it. The list is only ever fetched after the
//! configuration resolved, so every row can build its image URL.

pub mod adapter;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod logging;
pub mod pipeline;
pub mod resolver;
pub mod source;
pub mod surface;

#[cfg(test)]
pub(crate) mod testing;

pub use adapter::{bind_row, bind_rows, open_detail, DetailView, RowView};
pub use config::AppSettings;
pub use error::{AppError, AppResult, Stage};
pub use fetcher::MovieFeed;
pub use logging::{error_chain, init_tracing, report_failure};
pub use pipeline::{run_session, Session};
pub use resolver::resolve_configuration;
pub use source::MovieSource;
pub use surface::{DisplaySurface, Notifier, StderrNotifier, TerminalSurface};
