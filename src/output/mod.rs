pub mod dataset;
pub mod formatter;

pub use dataset::{read_csv, write_csv, BodySummary, DatasetRow, UnifiedDataset};
pub use formatter::{format_metric, format_summary_table, should_use_colors};
