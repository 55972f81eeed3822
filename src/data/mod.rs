/// Data layer: core types, loading, and derivation.
///
/// Architecture:
/// ```text
///  .json / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → WineDataset
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ WineDataset  │  Vec<Record>, column index
///   └─────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  derive   │  attach Gamma = (Ash * Hue) / Magnesium
///   └──────────┘
/// ```

pub mod derive;
pub mod loader;
pub mod model;
