pub mod batch;
pub mod inspect;
pub mod oklch_export;
pub mod palette_store;

pub use batch::{BatchClassifier, BatchReport};
pub use inspect::{describe_hex, score_hexes, ColorReport, ScoreReport};
pub use oklch_export::{export_palettes, OklchExport};
pub use palette_store::{load_palettes, save_json, save_records};
