/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet / URL
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse source → PlayerDataset  (fetch: cached HTTP)
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ PlayerDataset │  Vec<PlayerRecord>, distinct-value indices
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply selection → visible indices + highlight labels
///   └──────────┘
/// ```

pub mod fetch;
pub mod filter;
pub mod loader;
pub mod model;
