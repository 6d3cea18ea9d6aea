pub mod fill_job;

pub use fill_job::{FillJob, FillSummary};
