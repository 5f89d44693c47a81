use crate::color::TraceColors;
use crate::data::model::{RunLogs, Series};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. Built once from a loaded run.
pub struct AppState {
    pub run: RunLogs,
    pub colors: TraceColors,
}

impl AppState {
    pub fn new(run: RunLogs) -> Self {
        let colors = TraceColors::new(run.energy.n_columns(), run.victories.n_columns());
        Self { run, colors }
    }

    /// One-line description of a series for the status bar.
    pub fn series_status(series: &Series) -> String {
        match series.summary() {
            Some(summary) => format!("{}: {} points, {summary}", series.name, series.len()),
            None => format!("{}: no points", series.name),
        }
    }

    /// Status line shown in the top bar.
    pub fn status_line(&self) -> String {
        format!(
            "run {}  |  {}  |  {}",
            self.run.index,
            Self::series_status(&self.run.energy),
            Self::series_status(&self.run.victories)
        )
    }
}
