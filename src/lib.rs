#![warn(clippy::all, rust_2018_idioms)]

mod app;
mod config;
mod dataset;
mod error;
mod explorer;
mod sample;
mod summary;
mod utils;
pub use app::App;
pub use config::{ExplorerConfig, FEATURE_NAMES};
pub use dataset::{Dataset, TARGET_COLUMN};
pub use error::{Error, Result};
pub use explorer::{Explorer, Selection};
pub use summary::{describe, ColumnSummary, STAT_NAMES};
pub use utils::{RenderedTable, TableView};
