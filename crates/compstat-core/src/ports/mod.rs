pub mod job_source;
pub mod probe;
pub mod report;

pub use job_source::JobSource;
pub use probe::{OutputProbe, ProbeError};
pub use report::ReportSink;
