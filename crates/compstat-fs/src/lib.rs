pub mod probe;

pub use probe::{FsError, FsProbe, file_size};
