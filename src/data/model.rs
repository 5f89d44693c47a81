use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// LogLayout – where the run files live
// ---------------------------------------------------------------------------

/// Name of the file holding the run index.
pub const INDEX_FILE: &str = "log_index";

/// Resolves the index file and the per-run series files inside one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLayout {
    pub dir: PathBuf,
}

impl LogLayout {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn index_path(&self) -> PathBuf {
        self.dir.join(INDEX_FILE)
    }

    /// `energy_avg_{index}.log`
    pub fn energy_path(&self, index: i64) -> PathBuf {
        self.dir.join(format!("energy_avg_{index}.log"))
    }

    /// `victories_{index}.log`
    pub fn victories_path(&self, index: i64) -> PathBuf {
        self.dir.join(format!("victories_{index}.log"))
    }
}

impl Default for LogLayout {
    fn default() -> Self {
        Self::new(".")
    }
}

// ---------------------------------------------------------------------------
// Series – one log file with its first record dropped
// ---------------------------------------------------------------------------

/// One metric over the run's time axis.
///
/// Stored column-major: `columns[c][t]` is column `c` at position `t`.
/// Every column has the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub columns: Vec<Vec<f64>>,
}

/// Quick numbers for the status bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub last: f64,
}

impl Series {
    pub fn new(name: impl Into<String>, columns: Vec<Vec<f64>>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }

    /// Build from row records (as read from the file).
    pub fn from_records(name: impl Into<String>, records: &[Vec<f64>]) -> Self {
        let n_columns = records.first().map_or(0, Vec::len);
        let columns = (0..n_columns)
            .map(|c| {
                records
                    .iter()
                    .map(|row| row.get(c).copied().unwrap_or(f64::NAN))
                    .collect()
            })
            .collect();
        Self::new(name, columns)
    }

    /// Number of points per trace.
    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// `[position, value]` pairs for one column, positions starting at 0.
    pub fn points(&self, column: usize) -> Vec<[f64; 2]> {
        self.columns
            .get(column)
            .map(|values| {
                values
                    .iter()
                    .enumerate()
                    .map(|(t, &v)| [t as f64, v])
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Min and max over every finite value of every column.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.columns
            .iter()
            .flatten()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Summary of the finite values of the first column.
    pub fn summary(&self) -> Option<SeriesSummary> {
        let values: Vec<f64> = self
            .columns
            .first()?
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .collect();
        let last = *values.last()?;
        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        Some(SeriesSummary {
            min,
            max,
            mean,
            last,
        })
    }
}

impl fmt::Display for SeriesSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "last {:.4}, mean {:.4}, range [{:.4}, {:.4}]",
            self.last, self.mean, self.min, self.max
        )
    }
}

// ---------------------------------------------------------------------------
// RunLogs – everything loaded for one run
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct RunLogs {
    /// Value read from `log_index`.
    pub index: i64,
    pub energy: Series,
    pub victories: Series,
}
