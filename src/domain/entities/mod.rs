//! Domain Entities
//!
//! - `Asset` - one input file with its logical name and accessor identifier
//! - `Toc` - ordered table of contents for one job
//! - `Job` - complete description of one generation task

mod asset;
mod job;
mod toc;

pub use asset::Asset;
pub use job::{InputConfig, Job, JobOptions, DEFAULT_OUTPUT_NAME, DEFAULT_PACKAGE};
pub use toc::Toc;
