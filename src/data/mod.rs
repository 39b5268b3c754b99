/// Data layer: row types, sheet loading, and paired-zero filtering.
///
/// Architecture:
/// ```text
///  harvest/*.csv  (sorted)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  rows → per-file sums → SeriesPair
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  drop weeks where both crops are 0.0
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
