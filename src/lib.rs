pub mod config;
pub mod error;
pub mod horizons;
pub mod output;
pub mod pipeline;
pub mod scoring;
pub mod serve;
