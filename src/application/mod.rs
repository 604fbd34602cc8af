//! Application Layer
//!
//! The generation pipeline:
//!
//! - `collect` - walk one input root into an ordered asset list
//! - `discover` - match asset and code trees into jobs
//! - `generate` - run a single job (validate, collect, emit, format)
//! - `batch` - run many jobs on a bounded worker pool

pub mod batch;
pub mod collect;
pub mod discover;
pub mod generate;

pub use batch::{run_batch, worker_count};
pub use collect::collect;
pub use discover::{discover, find_pairings, WorkspaceLayout};
pub use generate::{build_toc, generate, validate};
