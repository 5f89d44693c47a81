use std::num::{ParseFloatError, ParseIntError};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{LogLayout, RunLogs, Series};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Everything that can go wrong while reading a run. Each variant names the file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: no index value found", .path.display())]
    EmptyIndex { path: PathBuf },

    #[error("{}: expected a single integer, found '{content}'", .path.display())]
    Index {
        path: PathBuf,
        content: String,
        #[source]
        source: Option<ParseIntError>,
    },

    #[error("{}:{line}: '{token}' is not a number", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        token: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("{}:{line}: expected {expected} columns, found {found}", .path.display())]
    Ragged {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, LoadError>;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the index, then both series named after it.
///
/// Stops at the first failure, so a missing `log_index` is reported before
/// any series file is touched.
pub fn load_run(layout: &LogLayout) -> Result<RunLogs> {
    let index = read_index(&layout.index_path())?;
    let energy = read_series("energy", &layout.energy_path(index))?;
    let victories = read_series("victories", &layout.victories_path(index))?;

    log::info!(
        "Loaded run {index}: {} energy points, {} victory points",
        energy.len(),
        victories.len()
    );

    Ok(RunLogs {
        index,
        energy,
        victories,
    })
}

/// Read the single integer stored in an index file.
pub fn read_index(path: &Path) -> Result<i64> {
    let text = read_text(path)?;
    let tokens: Vec<&str> = text.lines().flat_map(tokens).collect();

    match tokens.as_slice() {
        [] => Err(LoadError::EmptyIndex {
            path: path.to_path_buf(),
        }),
        [tok] => tok.parse::<i64>().map_err(|e| LoadError::Index {
            path: path.to_path_buf(),
            content: tok.to_string(),
            source: Some(e),
        }),
        many => Err(LoadError::Index {
            path: path.to_path_buf(),
            content: many.join(" "),
            source: None,
        }),
    }
}

/// Read a series file and drop its first record.
///
/// A file holding a single multi-column row is read as one flat trace, so
/// its first value is the one dropped.
pub fn read_series(name: &str, path: &Path) -> Result<Series> {
    let records = read_records(path)?;
    match records.as_slice() {
        [row] if row.len() > 1 => Ok(Series::new(name, vec![row[1..].to_vec()])),
        _ => {
            let kept = records.get(1..).unwrap_or_default();
            Ok(Series::from_records(name, kept))
        }
    }
}

/// Parse every record of a whitespace-separated numeric text file.
///
/// One record per line. Blank lines and `#` comments are skipped. All
/// records must have the column count of the first one.
pub fn read_records(path: &Path) -> Result<Vec<Vec<f64>>> {
    let text = read_text(path)?;
    let mut records: Vec<Vec<f64>> = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        let line_no = line_no + 1;
        let row = tokens(line)
            .map(|tok| {
                tok.parse::<f64>().map_err(|e| LoadError::Parse {
                    path: path.to_path_buf(),
                    line: line_no,
                    token: tok.to_string(),
                    source: e,
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        if row.is_empty() {
            continue;
        }
        if let Some(first) = records.first() {
            if first.len() != row.len() {
                return Err(LoadError::Ragged {
                    path: path.to_path_buf(),
                    line: line_no,
                    expected: first.len(),
                    found: row.len(),
                });
            }
        }
        records.push(row);
    }

    Ok(records)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_text(path: &Path) -> Result<String> {
    log::debug!("Reading {}", path.display());
    std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Whitespace-separated tokens of a line, ignoring anything after `#`.
fn tokens(line: &str) -> impl Iterator<Item = &str> {
    let data = line.split('#').next().unwrap_or("");
    data.split_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn run_dir(index: &str, energy: &str, victories: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        write(&dir, "log_index", index);
        write(&dir, "energy_avg_7.log", energy);
        write(&dir, "victories_7.log", victories);
        dir
    }

    #[test]
    fn index_reads_single_integer() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "log_index", "7\n");
        assert_eq!(read_index(&path).unwrap(), 7);
    }

    #[test]
    fn index_rejects_empty_and_non_numeric() {
        let dir = TempDir::new().unwrap();

        let empty = write(&dir, "empty", "\n\n");
        assert!(matches!(read_index(&empty), Err(LoadError::EmptyIndex { .. })));

        let word = write(&dir, "word", "seven\n");
        assert!(matches!(
            read_index(&word),
            Err(LoadError::Index { source: Some(_), .. })
        ));

        let float = write(&dir, "float", "7.5\n");
        assert!(matches!(read_index(&float), Err(LoadError::Index { .. })));

        let two = write(&dir, "two", "7 8\n");
        assert!(matches!(
            read_index(&two),
            Err(LoadError::Index { source: None, .. })
        ));
    }

    #[test]
    fn series_drops_first_record() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "energy_avg_7.log", "0.0\n1.0\n2.0\n3.0\n");
        let series = read_series("energy", &path).unwrap();
        assert_eq!(series.columns, vec![vec![1.0, 2.0, 3.0]]);
        assert_eq!(series.points(0), vec![[0.0, 1.0], [1.0, 2.0], [2.0, 3.0]]);
    }

    #[test]
    fn point_count_is_line_count_minus_one() {
        let dir = TempDir::new().unwrap();
        let lines: Vec<String> = (0..25).map(|i| format!("{}", i * 3)).collect();
        let path = write(&dir, "victories_1.log", &(lines.join("\n") + "\n"));
        let series = read_series("victories", &path).unwrap();
        assert_eq!(series.len(), 24);
        assert_eq!(series.columns[0][0], 3.0);
    }

    #[test]
    fn series_with_only_header_or_nothing_is_empty() {
        let dir = TempDir::new().unwrap();
        let header_only = write(&dir, "h.log", "42\n");
        assert!(read_series("e", &header_only).unwrap().is_empty());
        let nothing = write(&dir, "n.log", "");
        assert!(read_series("e", &nothing).unwrap().is_empty());
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "e.log", "# header\n0\n\n1.5  # warm\n  2.5\n");
        let series = read_series("e", &path).unwrap();
        assert_eq!(series.columns, vec![vec![1.5, 2.5]]);
    }

    #[test]
    fn multi_column_rows_become_columns() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "e.log", "0 0\n1 10\n2 20\n");
        let series = read_series("e", &path).unwrap();
        assert_eq!(series.n_columns(), 2);
        assert_eq!(series.columns[1], vec![10.0, 20.0]);
    }

    #[test]
    fn single_wide_row_is_one_flat_trace() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "e.log", "0 1.5 2.5 3.5\n");
        let series = read_series("e", &path).unwrap();
        assert_eq!(series.columns, vec![vec![1.5, 2.5, 3.5]]);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "e.log", "0 0\n1\n");
        match read_records(&path) {
            Err(LoadError::Ragged {
                line,
                expected,
                found,
                ..
            }) => assert_eq!((line, expected, found), (2, 2, 1)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn load_run_uses_index_for_file_names() {
        let dir = run_dir("7\n", "0\n1.5\n2.5\n", "0\n3\n4\n5\n");
        let run = load_run(&LogLayout::new(dir.path())).unwrap();
        assert_eq!(run.index, 7);
        assert_eq!(run.energy.columns, vec![vec![1.5, 2.5]]);
        assert_eq!(run.victories.columns, vec![vec![3.0, 4.0, 5.0]]);
    }

    #[test]
    fn missing_index_fails_before_series() {
        let dir = TempDir::new().unwrap();
        let layout = LogLayout::new(dir.path());
        match load_run(&layout) {
            Err(LoadError::Io { path, .. }) => assert_eq!(path, layout.index_path()),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn missing_series_names_the_expected_file() {
        let dir = TempDir::new().unwrap();
        write(&dir, "log_index", "3");
        write(&dir, "energy_avg_3.log", "0\n1\n");
        let layout = LogLayout::new(dir.path());
        match load_run(&layout) {
            Err(LoadError::Io { path, .. }) => assert_eq!(path, layout.victories_path(3)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn malformed_token_names_the_file() {
        let dir = run_dir("7", "0\n1.0\nabc\n", "0\n1\n");
        let err = load_run(&LogLayout::new(dir.path())).unwrap_err();
        let msg = err.to_string();
        assert!(matches!(err, LoadError::Parse { line: 3, .. }));
        assert!(msg.contains("energy_avg_7.log"), "{msg}");
        assert!(msg.contains("abc"), "{msg}");

        let dir = run_dir("7", "0\n1.0\n", "0\n1\nx2\n");
        let msg = load_run(&LogLayout::new(dir.path())).unwrap_err().to_string();
        assert!(msg.contains("victories_7.log"), "{msg}");
    }

    #[test]
    fn repeated_loads_are_identical() {
        let dir = run_dir("7", "0\n0.25\n-1e3\n", "0\n11\n12\n");
        let layout = LogLayout::new(dir.path());
        assert_eq!(load_run(&layout).unwrap(), load_run(&layout).unwrap());
    }
}
