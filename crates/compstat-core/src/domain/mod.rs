pub mod job;
pub mod job_status;

pub use job::CompressJob;
pub use job_status::JobStatus;
