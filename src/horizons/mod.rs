pub mod client;
pub mod parse;
pub mod types;

pub use client::HorizonsClient;
pub use parse::parse_vector_table;
pub use types::{BodyTable, StateSample};
