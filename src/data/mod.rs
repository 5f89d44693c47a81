/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///   log_index ──► index ──┬──► energy_avg_{index}.log ─┐
///                         └──► victories_{index}.log ──┤
///                                                      ▼
///                                   ┌──────────┐   drop first record
///                                   │  loader   │   per file
///                                   └──────────┘
///                                        │
///                                        ▼
///                                   ┌──────────┐
///                                   │ RunLogs   │  index + two Series
///                                   └──────────┘
/// ```

pub mod loader;
pub mod model;
