/// Data layer: core types, loading, filtering and the two reductions.
///
/// Architecture:
/// ```text
///  .xlsx / .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐      ┌─────────┐
///   │  loader   │ ◄─── │  cache   │  load once, reload on mtime change
///   └──────────┘      └─────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ SalesDataset  │  Vec<Record>, option sets, year bounds
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  FilterSelection → filtered indices
///   └──────────┘
///        │
///        ├──────────────┐
///        ▼              ▼
///   ┌───────────┐  ┌──────────┐
///   │ aggregate  │  │ compare   │  last 12 vs previous 12 months
///   └───────────┘  └──────────┘
/// ```

pub mod aggregate;
pub mod cache;
pub mod compare;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
