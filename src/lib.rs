//! Narrow seams over HTTP, process execution, the filesystem and the
//! environment, each with a real implementation and a configurable mock.

pub mod system;
pub mod testing;


// Re-export commonly used items
pub use system::{
    CommandError, CommandRunner, DirReader, EnvReader, FileInfo, HttpClient, HttpError,
    HttpGetter, HttpResponse, MockCommandRunner, MockDirReader, MockEnvReader, MockHttpClient,
    RealCommandRunner, RealDirReader, RealEnvReader,
};
pub use testing::{FailureRecorder, TestReporter};
