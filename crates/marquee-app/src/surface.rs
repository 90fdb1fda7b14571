//! Display surface and user notification seams.

use std::io::Write;

use marquee_models::{ImageSource, MovieSummary};
use tracing::{debug, warn};

use crate::adapter::RowView;

/// Where the movie list is shown.
pub trait DisplaySurface {
    /// A movie was appended to the list at `index`.
    fn item_inserted(&mut self, index: usize, movie: &MovieSummary);

    /// Draw the bound rows.
    fn render(&mut self, rows: &[RowView]);
}

/// Transient, dismissible message to the user.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Plain-text surface writing rows to any writer.
pub struct TerminalSurface<W: Write> {
    out: W,
    inserted: usize,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out, inserted: 0 }
    }

    /// Number of insertion notifications received.
    pub fn inserted(&self) -> usize {
        self.inserted
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_row(&mut self, row: &RowView) -> std::io::Result<()> {
        writeln!(self.out, "{:>3}. {}", row.position, row.title)?;
        if !row.overview.is_empty() {
            writeln!(self.out, "     {}", row.overview)?;
        }
        match &row.image {
            ImageSource::Remote { url, .. } => writeln!(self.out, "     image: {}", url),
            ImageSource::Placeholder(placeholder) => {
                writeln!(self.out, "     image: [{}]", placeholder.asset_name())
            }
        }
    }
}

impl<W: Write> DisplaySurface for TerminalSurface<W> {
    fn item_inserted(&mut self, index: usize, movie: &MovieSummary) {
        self.inserted += 1;
        debug!(index, title = %movie.title, "Row inserted");
    }

    fn render(&mut self, rows: &[RowView]) {
        let result = rows
            .iter()
            .try_for_each(|row| self.write_row(row))
            .and_then(|_| self.out.flush());
        if let Err(e) = result {
            warn!("Failed to write rows: {}", e);
        }
    }
}

/// Notifier printing to standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str) {
        eprintln!("! {}", message);
    }
}
