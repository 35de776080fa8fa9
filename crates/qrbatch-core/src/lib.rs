pub mod config;
pub mod logging;

pub mod batch;
pub mod checksum;
pub mod label;
pub mod payload;
pub mod pipeline;
pub mod records;
pub mod schema;
pub mod symbol;
pub mod template;

pub use pipeline::{BatchError, Pipeline};
